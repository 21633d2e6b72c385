use bitvec::vec::BitVec;
use tracing::debug;

use super::grid_lines;
use crate::discrete::{ScBuilding, ScRow};
use crate::error::Result;
use crate::math::{Point3, AXES, TOLERANCE};
use crate::spatial::{MsBuilding, Space};

/// Half-open containment that absorbs the tolerance used to merge grid lines.
fn lower_corner_inside(corner: &Point3, space: &Space) -> bool {
    let origin = space.origin();
    let far = space.far_corner();
    (0..AXES).all(|k| corner[k] > origin[k] - TOLERANCE && corner[k] < far[k] - TOLERANCE)
}

/// Voxelizes a spatial building.
///
/// Every box boundary becomes a grid line, so the grid is the coarsest one
/// on which all spaces are exact unions of cells. A cell belongs to a space
/// when its lower corner lies inside the space's half-open box.
/// Coordinates closer than [`TOLERANCE`] share one grid line.
///
/// # Errors
///
/// Returns [`ConversionError::EmptyModel`](crate::error::ConversionError::EmptyModel)
/// for a building without spaces.
pub fn to_grid(building: &MsBuilding) -> Result<ScBuilding> {
    let lines = grid_lines(building)?;
    let widths: [Vec<f64>; AXES] =
        std::array::from_fn(|axis| lines[axis].windows(2).map(|w| w[1] - w[0]).collect());
    let mut sc = ScBuilding::new(widths);
    let cell_count = sc.cell_count();

    for space in building.spaces() {
        let mut cells = BitVec::repeat(false, cell_count);
        for cell in 0..cell_count {
            let idx = sc.cell_indices(cell);
            let corner = Point3::new(lines[0][idx[0]], lines[1][idx[1]], lines[2][idx[2]]);
            if lower_corner_inside(&corner, space) {
                cells.set(cell, true);
            }
        }
        sc.add_row(ScRow::new(space.id(), cells))?;
    }

    debug!(
        spaces = building.len(),
        cells = cell_count,
        sizes = ?sc.sizes(),
        "converted spatial design to grid"
    );
    Ok(sc)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::spatial::{Space, SpaceId};

    #[test]
    fn two_stacked_boxes_share_the_grid() {
        let ms = MsBuilding::from_spaces([
            Space::new(SpaceId(1), Point3::new(0.0, 0.0, 0.0), Vector3::new(4.0, 2.0, 3.0)),
            Space::new(SpaceId(2), Point3::new(0.0, 0.0, 3.0), Vector3::new(2.0, 2.0, 3.0)),
        ])
        .unwrap();
        let sc = to_grid(&ms).unwrap();

        assert_eq!(sc.widths(0), &[2.0, 2.0]);
        assert_eq!(sc.widths(1), &[2.0]);
        assert_eq!(sc.widths(2), &[3.0, 3.0]);

        let lower = sc.row(SpaceId(1)).unwrap();
        assert_eq!(lower.cells().count_ones(), 2);
        assert!(lower.is_occupied(sc.linear_index([0, 0, 0])));
        assert!(lower.is_occupied(sc.linear_index([1, 0, 0])));

        let upper = sc.row(SpaceId(2)).unwrap();
        assert_eq!(upper.cells().count_ones(), 1);
        assert!(upper.is_occupied(sc.linear_index([0, 0, 1])));
        assert!(upper.is_box_shaped(&sc));
    }

    #[test]
    fn zero_extent_space_occupies_nothing() {
        let ms = MsBuilding::from_spaces([
            Space::new(SpaceId(1), Point3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0)),
            Space::new(SpaceId(2), Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 1.0)),
        ])
        .unwrap();
        let sc = to_grid(&ms).unwrap();
        assert_eq!(sc.cell_count(), 1);
        assert!(sc.row(SpaceId(2)).unwrap().occupied_span().is_none());
    }
}
