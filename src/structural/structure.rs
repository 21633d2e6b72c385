use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Discriminator of a structural property bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureType {
    /// No structural assignment.
    #[default]
    None,
    Truss,
    Beam,
    FlatShell,
    QuadHexa,
}

impl StructureType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Truss => "truss",
            Self::Beam => "beam",
            Self::FlatShell => "flat_shell",
            Self::QuadHexa => "quad_hexa",
        }
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed bundle of structural properties (`E`, `poisson`, `thickness`, ...).
///
/// The grammar treats the properties as opaque; only the type is inspected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Structure {
    #[serde(rename = "type")]
    kind: StructureType,
    #[serde(flatten)]
    properties: BTreeMap<String, f64>,
}

impl Structure {
    #[must_use]
    pub fn new(kind: StructureType) -> Self {
        Self {
            kind,
            properties: BTreeMap::new(),
        }
    }

    /// The `none` structure.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: f64) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    #[must_use]
    pub fn kind(&self) -> StructureType {
        self.kind
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.kind == StructureType::None
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<f64> {
        self.properties.get(name).copied()
    }

    #[must_use]
    pub fn properties(&self) -> &BTreeMap<String, f64> {
        &self.properties
    }
}
