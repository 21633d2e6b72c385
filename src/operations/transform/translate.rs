use crate::math::{Vector3, AXES};
use crate::spatial::MsBuilding;

/// Translates every space of a building by a displacement vector.
pub struct Translate {
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector3) -> Self {
        Self { displacement }
    }

    /// Executes the translation, modifying the building in-place.
    pub fn execute(&self, building: &mut MsBuilding) {
        for space in building.spaces_mut() {
            space.translate(&self.displacement);
        }
    }
}

/// Moves a building down so its lowest space starts at `z = 0`.
///
/// Buildings whose lowest space already starts at or below zero are left
/// alone.
pub struct SetZZero;

impl SetZZero {
    /// Executes the translation, modifying the building in-place.
    pub fn execute(&self, building: &mut MsBuilding) {
        let min_z = building
            .spaces()
            .iter()
            .map(|s| s.origin()[AXES - 1])
            .fold(f64::INFINITY, f64::min);
        if !min_z.is_finite() || min_z <= 0.0 {
            return;
        }
        Translate::new(Vector3::new(0.0, 0.0, -min_z)).execute(building);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Point3;
    use crate::spatial::{Space, SpaceId};

    fn building(z0: f64, z1: f64) -> MsBuilding {
        MsBuilding::from_spaces([
            Space::new(SpaceId(1), Point3::new(0.0, 0.0, z0), Vector3::new(1.0, 1.0, 1.0)),
            Space::new(SpaceId(2), Point3::new(1.0, 0.0, z1), Vector3::new(1.0, 1.0, 1.0)),
        ])
        .unwrap()
    }

    #[test]
    fn translate_moves_all_spaces() {
        let mut b = building(0.0, 1.0);
        Translate::new(Vector3::new(1.0, -2.0, 0.5)).execute(&mut b);
        let s = b.space(SpaceId(2)).unwrap();
        assert_relative_eq!(s.origin().x, 2.0);
        assert_relative_eq!(s.origin().y, -2.0);
        assert_relative_eq!(s.origin().z, 1.5);
        assert_relative_eq!(s.extent().z, 1.0);
    }

    #[test]
    fn set_z_zero_lowers_floating_building() {
        let mut b = building(5.0, 3.0);
        SetZZero.execute(&mut b);
        assert_relative_eq!(b.space(SpaceId(1)).unwrap().origin().z, 2.0);
        assert_relative_eq!(b.space(SpaceId(2)).unwrap().origin().z, 0.0);
    }

    #[test]
    fn set_z_zero_keeps_grounded_or_sunken_building() {
        let mut b = building(-1.0, 3.0);
        SetZZero.execute(&mut b);
        assert_relative_eq!(b.space(SpaceId(1)).unwrap().origin().z, -1.0);

        let mut empty = MsBuilding::new();
        SetZZero.execute(&mut empty);
        assert!(empty.is_empty());
    }
}
