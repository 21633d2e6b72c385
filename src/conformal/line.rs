use super::rectangle::RectangleId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a line in the conformal model.
    pub struct LineId;
}

/// An axis-aligned grid edge.
///
/// A line may bound several rectangles; the back-references are filled in
/// while the rectangles are created.
#[derive(Debug, Clone)]
pub struct LineData {
    /// Lower end of the line.
    pub start: VertexId,
    /// Upper end of the line.
    pub end: VertexId,
    /// Rectangles bounded by this line.
    pub rectangles: Vec<RectangleId>,
}

impl LineData {
    #[must_use]
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self {
            start,
            end,
            rectangles: Vec::new(),
        }
    }
}
