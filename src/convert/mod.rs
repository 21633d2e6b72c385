//! Explicit conversions between the spatial (MS) and the grid (SC) model.
//!
//! `from_grid` is lossy for rows that are not box-shaped: such a space comes
//! back as the box between its lowest and highest occupied linear cell.

mod from_grid;
mod to_grid;

pub use from_grid::from_grid;
pub use to_grid::to_grid;

use crate::error::{ConversionError, Result};
use crate::math::{sort_dedup, AXES};
use crate::spatial::MsBuilding;

/// Sorted, deduplicated coordinates of every box boundary, per axis.
///
/// # Errors
///
/// Returns [`ConversionError::EmptyModel`] for a building without spaces.
pub(crate) fn grid_lines(building: &MsBuilding) -> Result<[Vec<f64>; AXES]> {
    if building.is_empty() {
        return Err(ConversionError::EmptyModel.into());
    }
    let mut lines: [Vec<f64>; AXES] = Default::default();
    for space in building.spaces() {
        let origin = space.origin();
        let far = space.far_corner();
        for (axis, values) in lines.iter_mut().enumerate() {
            values.push(origin[axis]);
            values.push(far[axis]);
        }
    }
    for values in &mut lines {
        sort_dedup(values);
    }
    Ok(lines)
}
