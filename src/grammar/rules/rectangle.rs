use crate::conformal::{ConformalModel, RectangleData};
use crate::error::ConformalError;
use crate::math::Point3;
use crate::structural::{Component, ComponentKind, Load, LoadPanel, SdModel, Structure};

#[derive(Debug, Clone)]
pub struct RectangleRule {
    corners: [Point3; 4],
    structure: Structure,
    load_panel: Option<LoadPanel>,
    loads: Vec<Load>,
}

impl RectangleRule {
    /// # Errors
    ///
    /// Returns an error if a corner vertex of the rectangle is not in `model`.
    pub fn new(model: &ConformalModel, rectangle: &RectangleData) -> Result<Self, ConformalError> {
        let mut corners = [Point3::origin(); 4];
        for (corner, &id) in corners.iter_mut().zip(&rectangle.corners) {
            *corner = model.vertex(id)?.point;
        }
        Ok(Self {
            corners,
            structure: Structure::none(),
            load_panel: None,
            loads: Vec::new(),
        })
    }

    pub fn assign_structure(&mut self, structure: Structure) {
        self.structure = structure;
    }

    pub fn assign_load_panel(&mut self, panel: LoadPanel) {
        self.load_panel = Some(panel);
    }

    pub fn add_loads(&mut self, loads: &[Load]) {
        self.loads.extend_from_slice(loads);
    }

    #[must_use]
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Adds the four corner nodes and a rectangle component carrying the
    /// loads, if structured.
    pub fn apply(&self, sd: &mut SdModel) {
        if self.structure.is_none() {
            return;
        }
        let nodes = self.corners.iter().map(|&p| sd.add_point(p)).collect();
        let mut component = Component::new(ComponentKind::Rectangle, self.structure.clone(), nodes);
        component.loads.clone_from(&self.loads);
        component.load_panel.clone_from(&self.load_panel);
        sd.add_component(component);
    }
}
