use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the conformal model.
    pub struct VertexId;
}

/// A grid point used by at least one line.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 3D position of the vertex.
    pub point: Point3,
    /// `true` if the point is a corner of at least one space box.
    pub is_space_corner: bool,
}

impl VertexData {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(point: Point3, is_space_corner: bool) -> Self {
        Self {
            point,
            is_space_corner,
        }
    }
}
