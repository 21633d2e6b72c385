use crate::error::{Result, SpatialError};
use crate::math::check_axes;
use crate::spatial::MsBuilding;

/// Scales every space of a building along selected axes.
///
/// Both corners of each box are multiplied by the axis factor, so the
/// building is scaled about the global origin rather than about each
/// space's centroid.
pub struct Scale {
    factors: Vec<(usize, f64)>,
}

impl Scale {
    /// Creates a new `Scale` operation from `(axis, factor)` pairs.
    #[must_use]
    pub fn new(factors: &[(usize, f64)]) -> Self {
        Self {
            factors: factors.to_vec(),
        }
    }

    /// Executes the scaling, modifying the building in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if an axis is not 0, 1 or 2, or appears twice, or a
    /// factor is not a positive finite number. Nothing is modified in that
    /// case.
    pub fn execute(&self, building: &mut MsBuilding) -> Result<()> {
        check_axes("scale", self.factors.iter().map(|&(axis, _)| axis))?;
        if let Some(&(axis, factor)) = self
            .factors
            .iter()
            .find(|(_, factor)| !factor.is_finite() || *factor <= 0.0)
        {
            return Err(SpatialError::InvalidScaleFactor { axis, factor }.into());
        }

        for space in building.spaces_mut() {
            let mut origin = *space.origin();
            let mut far = space.far_corner();
            for &(axis, factor) in &self.factors {
                origin[axis] *= factor;
                far[axis] *= factor;
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
        MsBuilding::from_spaces([
            Space::new(SpaceId(1), Point3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 2.0, 3.0)),
            Space::new(SpaceId(2), Point3::new(2.0, 1.0, 0.0), Vector3::new(2.0, 2.0, 3.0)),
        ])
        .unwrap()
    }

    #[test]
    fn scales_about_global_origin() {
        let mut b = building();
        Scale::new(&[(0, 2.0), (1, 0.5)]).execute(&mut b).unwrap();
        let s = b.space(SpaceId(2)).unwrap();
        assert_relative_eq!(s.origin().x, 4.0);
        assert_relative_eq!(s.extent().x, 4.0);
        assert_relative_eq!(s.origin().y, 0.5);
        assert_relative_eq!(s.extent().y, 1.0);
        assert_relative_eq!(s.extent().z, 3.0);
    }

    #[test]
    fn volume_scales_with_product_of_factors() {
        let mut b = building();
        let before = b.volume();
        Scale::new(&[(0, 2.0), (2, 3.0)]).execute(&mut b).unwrap();
        assert_relative_eq!(b.volume(), before * 6.0);
    }

    #[test]
    fn rejects_unknown_and_repeated_axes() {
        let mut b = building();
        assert!(matches!(
            Scale::new(&[(3, 2.0)]).execute(&mut b),
            Err(ArchistructError::Spatial(SpatialError::InvalidAxis { axis: 3, .. }))
        ));
        assert!(matches!(
            Scale::new(&[(0, 2.0), (0, 3.0)]).execute(&mut b),
            Err(ArchistructError::Spatial(SpatialError::DuplicateAxis { axis: 0, .. }))
        ));
        assert_eq!(b, building());
    }

    #[test]
    fn rejects_non_positive_and_non_finite_factors() {
        for factor in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
            let mut b = building();
            assert!(matches!(
                Scale::new(&[(1, 2.0), (0, factor)]).execute(&mut b),
                Err(ArchistructError::Spatial(SpatialError::InvalidScaleFactor { axis: 0, .. }))
            ));
            assert_eq!(b, building());
        }
    }
}
