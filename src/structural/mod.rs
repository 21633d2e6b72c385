//! Structural design (SD) model produced by a grammar run.

mod load;
mod structure;

pub use load::{Load, LoadPanel};
pub use structure::{Structure, StructureType};

use std::collections::HashMap;

use crate::math::{Point3, AXES, TOLERANCE};

/// Topological dimension of a structural component's source primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Line,
    Rectangle,
    Cuboid,
}

/// One structural element of the design.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub kind: ComponentKind,
    pub structure: Structure,
    /// Indices into [`SdModel::points`].
    pub nodes: Vec<usize>,
    /// Loads acting on the component (rectangles only).
    pub loads: Vec<Load>,
    /// Load panel used to distribute `loads` (rectangles only).
    pub load_panel: Option<LoadPanel>,
}

impl Component {
    #[must_use]
    pub fn new(kind: ComponentKind, structure: Structure, nodes: Vec<usize>) -> Self {
        Self {
            kind,
            structure,
            nodes,
            loads: Vec::new(),
            load_panel: None,
        }
    }
}

/// Structural design model: node points, components and a mesh size.
///
/// Points are deduplicated, so adding the same coordinate twice returns the
/// existing index.
#[derive(Debug, Clone, Default)]
pub struct SdModel {
    points: Vec<Point3>,
    point_index: HashMap<[i64; AXES], usize>,
    components: Vec<Component>,
    mesh_size: usize,
}

#[allow(clippy::cast_possible_truncation)]
fn quantize(point: &Point3) -> [i64; AXES] {
    std::array::from_fn(|k| (point[k] / TOLERANCE).round() as i64)
}

impl SdModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node point, or returns the index of an existing coincident one.
    pub fn add_point(&mut self, point: Point3) -> usize {
        let key = quantize(&point);
        if let Some(&index) = self.point_index.get(&key) {
            return index;
        }
        self.points.push(point);
        self.point_index.insert(key, self.points.len() - 1);
        self.points.len() - 1
    }

    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn set_mesh_size(&mut self, mesh_size: usize) {
        self.mesh_size = mesh_size;
    }

    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Components of one kind.
    pub fn components_of(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.kind == kind)
    }

    #[must_use]
    pub fn mesh_size(&self) -> usize {
        self.mesh_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_points_share_an_index() {
        let mut sd = SdModel::new();
        let a = sd.add_point(Point3::new(0.0, 0.0, 3000.0));
        let b = sd.add_point(Point3::new(1.0, 0.0, 0.0));
        let c = sd.add_point(Point3::new(1e-9, 0.0, 3000.0));
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(sd.points().len(), 2);
    }

    #[test]
    fn components_filter_by_kind() {
        let mut sd = SdModel::new();
        sd.add_component(Component::new(
            ComponentKind::Line,
            Structure::new(StructureType::Beam),
            vec![0, 1],
        ));
        sd.add_component(Component::new(
            ComponentKind::Cuboid,
            Structure::new(StructureType::QuadHexa),
            (0..8).collect(),
        ));
        sd.set_mesh_size(4);
        assert_eq!(sd.components_of(ComponentKind::Line).count(), 1);
        assert_eq!(sd.components_of(ComponentKind::Rectangle).count(), 0);
        assert_eq!(sd.mesh_size(), 4);
    }

    #[test]
    fn structure_accessors() {
        let s = Structure::new(StructureType::FlatShell)
            .with_property("thickness", 150.0)
            .with_property("E", 3e4);
        assert!(!s.is_none());
        assert_eq!(s.property("thickness"), Some(150.0));
        assert_eq!(s.property("width"), None);
        assert_eq!(s.kind().to_string(), "flat_shell");
        assert!(Structure::none().is_none());
    }
}
