use crate::math::Point3;
use crate::spatial::SpaceId;

slotmap::new_key_type! {
    /// Unique identifier for a cuboid in the conformal model.
    pub struct CuboidId;
}

/// The volume of one space.
#[derive(Debug, Clone)]
pub struct CuboidData {
    /// The space this cuboid fills.
    pub space: SpaceId,
    /// Type tag of that space.
    pub space_type: String,
    /// Lower corner.
    pub min: Point3,
    /// Upper corner.
    pub max: Point3,
    /// `true` if the cuboid takes part in volumetric structure.
    pub in_space: bool,
}

impl CuboidData {
    /// The eight box corners, lower face first.
    #[must_use]
    pub fn corners(&self) -> [Point3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(b.x, b.y, b.z),
            Point3::new(a.x, b.y, b.z),
        ]
    }
}
