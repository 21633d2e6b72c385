use serde::Deserialize;

use super::Structure;

/// A load attached to loaded rectangles.
///
/// Loads are passed through the grammar unchanged; distributing them over
/// the structure is the mesher's job.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Load {
    /// Load case name, e.g. `live_load`.
    pub case: String,
    /// Magnitude per unit area.
    pub magnitude: f64,
    /// Axis along which the load acts.
    pub axis: usize,
}

/// Virtual panel used to carry loads into the structure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoadPanel {
    pub structure: Structure,
}
