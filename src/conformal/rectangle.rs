use super::line::LineId;
use super::vertex::VertexId;
use crate::spatial::SpaceId;

slotmap::new_key_type! {
    /// Unique identifier for a rectangle in the conformal model.
    pub struct RectangleId;
}

/// Type tag used for the outside of the building in type pairs.
pub const EXTERIOR_TYPE: &str = "E";

/// A planar grid face between two cells.
///
/// Side 0 lies on the negative side of the face normal, side 1 on the
/// positive side. A side is `None` when it is outside the building.
#[derive(Debug, Clone)]
pub struct RectangleData {
    /// Corner vertices in boundary order.
    pub corners: [VertexId; 4],
    /// Bounding lines; line `i` joins corner `i` and corner `(i + 1) % 4`.
    pub lines: [LineId; 4],
    /// Axis of the face normal (2 for floors).
    pub normal_axis: usize,
    /// Spaces on either side.
    pub spaces: [Option<SpaceId>; 2],
    /// Space types on either side, [`EXTERIOR_TYPE`] outside.
    pub space_types: (String, String),
    /// Surface types on either side, [`EXTERIOR_TYPE`] outside.
    pub surface_types: (String, String),
}

impl RectangleData {
    /// Horizontal faces are floors.
    #[must_use]
    pub fn is_floor(&self) -> bool {
        self.normal_axis == 2
    }

    /// Vertical faces are walls.
    #[must_use]
    pub fn is_wall(&self) -> bool {
        self.normal_axis != 2
    }

    /// `false` for faces inside a single space.
    #[must_use]
    pub fn is_space_separating(&self) -> bool {
        self.spaces[0] != self.spaces[1]
    }
}
