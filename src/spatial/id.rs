use super::SpaceId;
use crate::error::SpatialError;

/// Hands out space identifiers for one building.
///
/// Identifiers are never reused: the watermark only grows, including after
/// spaces are deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdGenerator {
    last: u32,
}

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh identifier greater than every identifier seen so far.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::IdsExhausted`] once `u32::MAX` has been used.
    pub fn next_id(&mut self) -> Result<SpaceId, SpatialError> {
        self.last = self
            .last
            .checked_add(1)
            .ok_or(SpatialError::IdsExhausted { last: self.last() })?;
        Ok(SpaceId(self.last))
    }

    /// Number of identifiers that can still be handed out.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        u32::MAX - self.last
    }

    /// Raises the watermark so `id` is never handed out again.
    pub fn observe(&mut self, id: SpaceId) {
        self.last = self.last.max(id.0);
    }

    /// Returns the largest identifier seen or handed out.
    #[must_use]
    pub fn last(&self) -> SpaceId {
        SpaceId(self.last)
    }
}
