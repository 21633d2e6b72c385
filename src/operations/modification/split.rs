use tracing::debug;

use crate::error::{Result, SpatialError};
use crate::math::{check_axes, Point3, AXES};
use crate::spatial::{MsBuilding, SpaceId};

/// Splits one space into a grid of smaller spaces.
///
/// Each named axis is divided into `divisor` segments of width
/// `floor(extent / divisor)`; the last segment absorbs the remainder.
/// Axes that are not named stay in one piece. The children replace the
/// parent and receive fresh identifiers.
pub struct SplitSpace {
    space: SpaceId,
    splits: Vec<(usize, u32)>,
}

impl SplitSpace {
    /// Creates a new `SplitSpace` operation from `(axis, divisor)` pairs.
    #[must_use]
    pub fn new(space: SpaceId, splits: &[(usize, u32)]) -> Self {
        Self {
            space,
            splits: splits.to_vec(),
        }
    }

    /// Executes the split and returns the ids of the new spaces.
    ///
    /// Children are ordered with x outermost and z innermost.
    ///
    /// # Errors
    ///
    /// Returns an error if the space does not exist, an axis is invalid or
    /// repeated, a divisor is below two, or the building has fewer fresh
    /// ids left than the split creates children. The building is unchanged
    /// on error.
    pub fn execute(&self, building: &mut MsBuilding) -> Result<Vec<SpaceId>> {
        let parent = building.space(self.space)?.clone();
        check_axes("split", self.splits.iter().map(|&(axis, _)| axis))?;
        if let Some(&(_, divisor)) = self.splits.iter().find(|&&(_, divisor)| divisor < 2) {
            return Err(SpatialError::InvalidDivisor {
                space: self.space,
                divisor,
            }
            .into());
        }
        let children_count: u128 = self.splits.iter().map(|&(_, d)| u128::from(d)).product();
        if children_count > u128::from(building.remaining_space_ids()) {
            return Err(SpatialError::IdsExhausted {
                last: building.last_space_id(),
            }
            .into());
        }

        let origin = parent.origin();
        let far = parent.far_corner();
        let mut lines: [Vec<f64>; AXES] =
            std::array::from_fn(|axis| vec![origin[axis], far[axis]]);
        for &(axis, divisor) in &self.splits {
            let delta = ((far[axis] - origin[axis]) / f64::from(divisor)).floor();
            let mut axis_lines = vec![origin[axis]];
            axis_lines.extend((1..divisor).map(|k| origin[axis] + f64::from(k) * delta));
            axis_lines.push(far[axis]);
            lines[axis] = axis_lines;
        }

        let mut children = Vec::new();
        for x in lines[0].windows(2) {
            for y in lines[1].windows(2) {
                for z in lines[2].windows(2) {
                    let mut child = parent.clone();
                    child.set_id(building.next_space_id()?);
                    child.set_corners(Point3::new(x[0], y[0], z[0]), Point3::new(x[1], y[1], z[1]));
                    children.push(child);
                }
            }
        }

        building.delete_space_by_id(self.space)?;
        let mut ids = Vec::with_capacity(children.len());
        for child in &children {
            building.add_space(child)?;
            ids.push(child.id());
        }
        debug!(parent = %self.space, children = ids.len(), "split space");
        Ok(ids)
    }
}
