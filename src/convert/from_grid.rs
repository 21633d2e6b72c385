use tracing::{debug, warn};

use crate::discrete::ScBuilding;
use crate::error::{ConversionError, Result};
use crate::math::{Point3, Vector3, AXES};
use crate::spatial::{MsBuilding, Space};

/// Absolute grid-line coordinates per axis.
///
/// The lowest occupied cell index on each axis maps to coordinate zero;
/// lines below it stay at zero.
fn grid_coordinates(sc: &ScBuilding, origin: [usize; AXES]) -> [Vec<f64>; AXES] {
    std::array::from_fn(|axis| {
        let widths = sc.widths(axis);
        let mut coords = vec![0.0; widths.len() + 1];
        for j in origin[axis] + 1..coords.len() {
            coords[j] = coords[j - 1] + widths[j - 1];
        }
        coords
    })
}

/// Rebuilds a spatial building from a voxel grid.
///
/// Each space becomes the box spanned by its lowest and highest occupied
/// linear cell, with coordinates rounded to whole units. This is exact for
/// box-shaped rows; other rows may gain or lose cells and are reported
/// with a warning. Space types are not stored in the grid, so the rebuilt spaces
/// carry the default type.
///
/// # Errors
///
/// Returns [`ConversionError::EmptyModel`] for a grid without rows and
/// [`ConversionError::EmptyMask`] for a row without occupied cells.
pub fn from_grid(sc: &ScBuilding) -> Result<MsBuilding> {
    if sc.rows().is_empty() {
        return Err(ConversionError::EmptyModel.into());
    }

    let mut origin = sc.sizes();
    for row in sc.rows() {
        if row.occupied_span().is_none() {
            return Err(ConversionError::EmptyMask { space: row.id() }.into());
        }
        for cell in row.cells().iter_ones() {
            let idx = sc.cell_indices(cell);
            for axis in 0..AXES {
                origin[axis] = origin[axis].min(idx[axis]);
            }
        }
    }
    let coords = grid_coordinates(sc, origin);

    let mut building = MsBuilding::new();
    for row in sc.rows() {
        let (first, last) = row
            .occupied_span()
            .ok_or(ConversionError::EmptyMask { space: row.id() })?;
        if !row.is_box_shaped(sc) {
            warn!(
                space = %row.id(),
                "grid row is not box-shaped; approximating it by the box between its first and last occupied cell"
            );
        }

        let lo = sc.cell_indices(first);
        let hi = sc.cell_indices(last);
        let location = Point3::new(
            coords[0][lo[0]].round(),
            coords[1][lo[1]].round(),
            coords[2][lo[2]].round(),
        );
        let extent = Vector3::new(
            (coords[0][hi[0] + 1] - location.x).round(),
            (coords[1][hi[1] + 1] - location.y).round(),
            (coords[2][hi[2] + 1] - location.z).round(),
        );
        building.add_space(&Space::new(row.id(), location, extent))?;
    }

    debug!(spaces = building.len(), "converted grid to spatial design");
    Ok(building)
}
