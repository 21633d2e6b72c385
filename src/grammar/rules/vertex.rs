use crate::conformal::VertexData;
use crate::math::Point3;
use crate::structural::SdModel;

#[derive(Debug, Clone)]
pub struct VertexRule {
    point: Point3,
}

impl VertexRule {
    #[must_use]
    pub fn new(vertex: &VertexData) -> Self {
        Self {
            point: vertex.point,
        }
    }

    pub fn apply(&self, sd: &mut SdModel) {
        sd.add_point(self.point);
    }
}
