use crate::conformal::CuboidData;
use crate::math::Point3;
use crate::structural::{Component, ComponentKind, SdModel, Structure};

#[derive(Debug, Clone)]
pub struct CuboidRule {
    corners: [Point3; 8],
    structure: Structure,
}

impl CuboidRule {
    #[must_use]
    pub fn new(cuboid: &CuboidData) -> Self {
        Self {
            corners: cuboid.corners(),
            structure: Structure::none(),
        }
    }

    pub fn assign_structure(&mut self, structure: Structure) {
        self.structure = structure;
    }

    #[must_use]
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Adds the eight corner nodes and a cuboid component, if structured.
    pub fn apply(&self, sd: &mut SdModel) {
        if self.structure.is_none() {
            return;
        }
        let nodes = self.corners.iter().map(|&p| sd.add_point(p)).collect();
        sd.add_component(Component::new(
            ComponentKind::Cuboid,
            self.structure.clone(),
            nodes,
        ));
    }
}
