//! Rule resolution: turns a conformal model and a table of structural type
//! settings into a structural design model.

pub mod rules;
mod settings;
mod volume;

pub use settings::{SdSettings, DEFAULT_MESH_SIZE};

use std::path::Path;

use crate::conformal::ConformalModel;
use crate::error::Result;
use crate::spatial::MsBuilding;
use crate::structural::SdModel;

/// Switches for a grammar run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrammarOptions {
    /// Look up rectangles by surface type pair instead of space type pair.
    pub use_surface_types: bool,
    /// Accepted and ignored.
    pub reserved: [bool; 2],
}

/// A grammar bound to one conformal model.
#[derive(Debug, Clone)]
pub struct Grammar {
    model: ConformalModel,
}

impl Grammar {
    #[must_use]
    pub fn new(model: ConformalModel) -> Self {
        Self { model }
    }

    /// Decomposes `building` and binds the result.
    ///
    /// # Errors
    ///
    /// Returns an error for a building without spaces.
    pub fn from_building(building: &MsBuilding) -> Result<Self> {
        Ok(Self::new(ConformalModel::from_building(building)?))
    }

    #[must_use]
    pub fn model(&self) -> &ConformalModel {
        &self.model
    }

    /// Reads the settings file at `path` and runs the volume grammar.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`](crate::error::SettingsError) if the file
    /// cannot be loaded, and the errors of [`Grammar::run`] otherwise.
    pub fn sd_grammar(&self, path: impl AsRef<Path>, options: &GrammarOptions) -> Result<SdModel> {
        let settings = SdSettings::from_file(path)?;
        self.run(&settings, options)
    }
}
