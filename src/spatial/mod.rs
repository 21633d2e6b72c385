pub mod id;
mod io;
pub mod space;

pub use id::IdGenerator;
pub use space::{Space, SpaceId, DEFAULT_SPACE_TYPE};

use std::fmt;

use crate::error::{Result, SpatialError};

/// A free-form (MS) spatial design: a set of axis-aligned space boxes.
///
/// The building owns its spaces and the generator that assigns their
/// identifiers. Cloning performs a deep copy.
#[derive(Debug, Clone, Default)]
pub struct MsBuilding {
    spaces: Vec<Space>,
    ids: IdGenerator,
}

impl MsBuilding {
    /// Creates an empty building.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a building from a list of spaces.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::DuplicateSpaceId`] if two spaces share an id.
    pub fn from_spaces<I>(spaces: I) -> Result<Self>
    where
        I: IntoIterator<Item = Space>,
    {
        let mut building = Self::new();
        for space in spaces {
            building.insert(space)?;
        }
        Ok(building)
    }

    /// Returns the spaces in insertion order.
    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub(crate) fn spaces_mut(&mut self) -> &mut [Space] {
        &mut self.spaces
    }

    /// Returns the space with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::SpaceNotFound`] if no space has that id.
    pub fn space(&self, id: SpaceId) -> Result<&Space> {
        self.spaces
            .iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| SpatialError::SpaceNotFound(format!("id {id}")).into())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Sum of the volumes of all spaces.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.spaces.iter().map(Space::volume).sum()
    }

    /// Largest identifier used in this building so far, deleted spaces included.
    #[must_use]
    pub fn last_space_id(&self) -> SpaceId {
        self.ids.last()
    }

    /// Allocates a fresh identifier from the building's generator.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::IdsExhausted`] once `u32::MAX` has been used.
    pub fn next_space_id(&mut self) -> Result<SpaceId> {
        Ok(self.ids.next_id()?)
    }

    /// Number of identifiers the building can still hand out.
    #[must_use]
    pub fn remaining_space_ids(&self) -> u32 {
        self.ids.remaining()
    }

    /// Appends a copy of `space`.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::DuplicateSpaceId`] if the id is already in use.
    pub fn add_space(&mut self, space: &Space) -> Result<()> {
        self.insert(space.clone())
    }

    fn insert(&mut self, space: Space) -> Result<()> {
        if self.spaces.iter().any(|s| s.id() == space.id()) {
            return Err(SpatialError::DuplicateSpaceId(space.id()).into());
        }
        self.ids.observe(space.id());
        self.spaces.push(space);
        Ok(())
    }

    /// Removes the stored space that is value-equal to `space`.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::SpaceNotFound`] if no stored space matches.
    pub fn delete_space(&mut self, space: &Space) -> Result<Space> {
        let index = self
            .spaces
            .iter()
            .position(|s| s == space)
            .ok_or_else(|| SpatialError::SpaceNotFound(space.to_string()))?;
        Ok(self.spaces.remove(index))
    }

    /// Removes the space with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::SpaceNotFound`] if no space has that id.
    pub fn delete_space_by_id(&mut self, id: SpaceId) -> Result<Space> {
        let index = self
            .spaces
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| SpatialError::SpaceNotFound(format!("id {id}")))?;
        Ok(self.spaces.remove(index))
    }
}

/// Multiset equality, independent of space order.
///
/// Matching is greedy: each space on the left takes the first equal space
/// found scanning the right-hand pool from the back. Among exact duplicates
/// the pairing is arbitrary.
impl PartialEq for MsBuilding {
    fn eq(&self, other: &Self) -> bool {
        if self.spaces.len() != other.spaces.len() {
            return false;
        }
        let mut pool: Vec<&Space> = other.spaces.iter().rev().collect();
        for space in &self.spaces {
            match pool.iter().rposition(|candidate| *candidate == space) {
                Some(index) => {
                    pool.remove(index);
                }
                None => return false,
            }
        }
        true
    }
}

impl fmt::Display for MsBuilding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, space) in self.spaces.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{space}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ArchistructError;
    use crate::math::{Point3, Vector3};

    fn space(id: u32, origin: [f64; 3], extent: [f64; 3]) -> Space {
        Space::new(
            SpaceId(id),
            Point3::new(origin[0], origin[1], origin[2]),
            Vector3::new(extent[0], extent[1], extent[2]),
        )
    }

    fn three_spaces() -> Vec<Space> {
        vec![
            space(1, [0.0, 0.0, 0.0], [2.0, 2.0, 2.0]),
            space(2, [2.0, 0.0, 0.0], [2.0, 2.0, 2.0]),
            space(3, [0.0, 0.0, 2.0], [4.0, 2.0, 2.0]),
        ]
    }

    #[test]
    fn add_space_rejects_duplicate_id() {
        let mut building = MsBuilding::new();
        building.add_space(&space(1, [0.0; 3], [1.0; 3])).unwrap();
        let err = building
            .add_space(&space(1, [5.0; 3], [1.0; 3]))
            .unwrap_err();
        assert!(matches!(
            err,
            ArchistructError::Spatial(SpatialError::DuplicateSpaceId(SpaceId(1)))
        ));
        assert_eq!(building.len(), 1);
    }

    #[test]
    fn delete_space_by_value() {
        let mut building = MsBuilding::from_spaces(three_spaces()).unwrap();
        let removed = building
            .delete_space(&space(2, [2.0, 0.0, 0.0], [2.0, 2.0, 2.0]))
            .unwrap();
        assert_eq!(removed.id(), SpaceId(2));
        assert_eq!(building.len(), 2);
        assert!(building.space(SpaceId(2)).is_err());
    }

    #[test]
    fn delete_missing_space_fails() {
        let mut building = MsBuilding::from_spaces(three_spaces()).unwrap();
        let err = building
            .delete_space(&space(2, [9.0, 0.0, 0.0], [2.0, 2.0, 2.0]))
            .unwrap_err();
        assert!(matches!(
            err,
            ArchistructError::Spatial(SpatialError::SpaceNotFound(_))
        ));
        assert!(building.delete_space_by_id(SpaceId(42)).is_err());
    }

    #[test]
    fn ids_stay_monotonic_after_delete() {
        let mut building = MsBuilding::from_spaces(three_spaces()).unwrap();
        building.delete_space_by_id(SpaceId(3)).unwrap();
        assert_eq!(building.last_space_id(), SpaceId(3));
        assert_eq!(building.next_space_id().unwrap(), SpaceId(4));
    }

    #[test]
    fn volume_sums_spaces() {
        let building = MsBuilding::from_spaces(three_spaces()).unwrap();
        assert!((building.volume() - 32.0).abs() < 1e-9);
    }

    // ── equality ──

    #[test]
    fn equality_ignores_order() {
        let a = MsBuilding::from_spaces(three_spaces()).unwrap();
        let mut reversed = three_spaces();
        reversed.reverse();
        let b = MsBuilding::from_spaces(reversed).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn equality_detects_changed_extent() {
        let a = MsBuilding::from_spaces(three_spaces()).unwrap();
        let mut changed = three_spaces();
        changed[1] = space(2, [2.0, 0.0, 0.0], [2.0, 3.0, 2.0]);
        let b = MsBuilding::from_spaces(changed).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn equality_requires_same_count() {
        let a = MsBuilding::from_spaces(three_spaces()).unwrap();
        let b = MsBuilding::from_spaces(three_spaces().into_iter().take(2)).unwrap();
        assert_ne!(a, b);
        assert_ne!(b, a);
    }

    #[test]
    fn display_has_no_trailing_newline() {
        let building = MsBuilding::from_spaces(three_spaces()).unwrap();
        let text = building.to_string();
        assert_eq!(text.lines().count(), 3);
        assert!(!text.ends_with('\n'));
        assert!(text.starts_with("R,1,2,2,2,0,0,0,A"));
    }
}
