use crate::error::{Result, SpatialError};
use crate::math::{check_axes, round_to};
use crate::spatial::MsBuilding;

/// Snaps the corners of every space onto a grid along selected axes.
pub struct SnapOn {
    grid_sizes: Vec<(usize, f64)>,
}

impl SnapOn {
    /// Creates a new `SnapOn` operation from `(axis, grid size)` pairs.
    #[must_use]
    pub fn new(grid_sizes: &[(usize, f64)]) -> Self {
        Self {
            grid_sizes: grid_sizes.to_vec(),
        }
    }

    /// Rounds origin and far corner of each space to the nearest multiple of
    /// the axis grid size.
    ///
    /// # Errors
    ///
    /// Returns an error if an axis is invalid or repeated, or a grid size is
    /// not a positive finite number.
    pub fn execute(&self, building: &mut MsBuilding) -> Result<()> {
        check_axes("snap-on", self.grid_sizes.iter().map(|&(axis, _)| axis))?;
        if let Some(&(axis, size)) = self
            .grid_sizes
            .iter()
            .find(|(_, size)| !size.is_finite() || *size <= 0.0)
        {
            return Err(SpatialError::InvalidGridSize { axis, size }.into());
        }

        for space in building.spaces_mut() {
            let mut origin = *space.origin();
            let mut far = space.far_corner();
            for &(axis, size) in &self.grid_sizes {
                origin[axis] = round_to(origin[axis], size);
                far[axis] = round_to(far[axis], size);
            }
            space.set_corners(origin, far);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::ArchistructError;
    use crate::math::{Point3, Vector3};
    use crate::spatial::{Space, SpaceId};

    fn building() -> MsBuilding {
        MsBuilding::from_spaces([Space::new(
            SpaceId(1),
            Point3::new(13.0, 4.0, 1.0),
            Vector3::new(25.0, 9.0, 2.0),
        )])
        .unwrap()
    }

    #[test]
    fn snaps_to_nearest_multiple() {
        let mut b = building();
        SnapOn::new(&[(0, 10.0), (1, 5.0)]).execute(&mut b).unwrap();
        let s = b.space(SpaceId(1)).unwrap();
        // x: 13 -> 10, 38 -> 40
        assert_relative_eq!(s.origin().x, 10.0);
        assert_relative_eq!(s.far_corner().x, 40.0);
        // y: 4 -> 5, 13 -> 15
        assert_relative_eq!(s.origin().y, 5.0);
        assert_relative_eq!(s.far_corner().y, 15.0);
        // z untouched
        assert_relative_eq!(s.origin().z, 1.0);
        assert_relative_eq!(s.extent().z, 2.0);
    }

    #[test]
    fn snapping_is_idempotent() {
        let mut once = building();
        let op = SnapOn::new(&[(0, 10.0), (2, 3.0)]);
        op.execute(&mut once).unwrap();
        let mut twice = once.clone();
        op.execute(&mut twice).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn rejects_invalid_grid_size() {
        let mut b = building();
        assert!(matches!(
            SnapOn::new(&[(1, 0.0)]).execute(&mut b),
            Err(ArchistructError::Spatial(SpatialError::InvalidGridSize { axis: 1, .. }))
        ));
        assert!(matches!(
            SnapOn::new(&[(1, 5.0), (1, 5.0)]).execute(&mut b),
            Err(ArchistructError::Spatial(SpatialError::DuplicateAxis { axis: 1, .. }))
        ));
    }
}
