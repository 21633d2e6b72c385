use crate::conformal::{ConformalModel, LineData};
use crate::error::ConformalError;
use crate::math::Point3;
use crate::structural::{Component, ComponentKind, SdModel, Structure, StructureType};

#[derive(Debug, Clone)]
pub struct LineRule {
    ends: [Point3; 2],
    structure: Structure,
}

impl LineRule {
    /// # Errors
    ///
    /// Returns an error if an end vertex of the line is not in `model`.
    pub fn new(model: &ConformalModel, line: &LineData) -> Result<Self, ConformalError> {
        Ok(Self {
            ends: [model.vertex(line.start)?.point, model.vertex(line.end)?.point],
            structure: Structure::none(),
        })
    }

    /// Picks a structure from the structures of the adjacent rectangles.
    ///
    /// Beams win over trusses; any other candidate leaves the line without
    /// structure.
    pub fn assign_structure(&mut self, candidates: &[Structure]) {
        let pick = |kind| candidates.iter().find(|s| s.kind() == kind);
        if let Some(s) = pick(StructureType::Beam).or_else(|| pick(StructureType::Truss)) {
            self.structure = s.clone();
        }
    }

    #[must_use]
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn apply(&self, sd: &mut SdModel) {
        if self.structure.is_none() {
            return;
        }
        let nodes = self.ends.iter().map(|&p| sd.add_point(p)).collect();
        sd.add_component(Component::new(
            ComponentKind::Line,
            self.structure.clone(),
            nodes,
        ));
    }
}
