//! Conformal decomposition of a spatial design into cuboids, rectangles,
//! lines and vertices: the primitives a grammar assigns structure to.

pub mod cuboid;
mod decompose;
pub mod line;
pub mod rectangle;
pub mod vertex;

pub use cuboid::{CuboidData, CuboidId};
pub use line::{LineData, LineId};
pub use rectangle::{RectangleData, RectangleId, EXTERIOR_TYPE};
pub use vertex::{VertexData, VertexId};

use crate::error::ConformalError;
use slotmap::SlotMap;

/// Central arena that owns all conformal primitives.
///
/// Primitives reference each other via typed IDs (generational indices).
/// Iteration follows insertion order, which keeps grammar runs
/// deterministic.
#[derive(Debug, Default, Clone)]
pub struct ConformalModel {
    cuboids: SlotMap<CuboidId, CuboidData>,
    rectangles: SlotMap<RectangleId, RectangleData>,
    lines: SlotMap<LineId, LineData>,
    vertices: SlotMap<VertexId, VertexData>,
}

impl ConformalModel {
    /// Creates a new, empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Cuboids ---

    /// Inserts a cuboid and returns its ID.
    pub fn add_cuboid(&mut self, data: CuboidData) -> CuboidId {
        self.cuboids.insert(data)
    }

    /// Returns a reference to the cuboid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn cuboid(&self, id: CuboidId) -> Result<&CuboidData, ConformalError> {
        self.cuboids
            .get(id)
            .ok_or_else(|| ConformalError::EntityNotFound("cuboid".into()))
    }

    pub fn cuboids(&self) -> impl Iterator<Item = (CuboidId, &CuboidData)> {
        self.cuboids.iter()
    }

    // --- Rectangles ---

    /// Inserts a rectangle, registers it with its lines and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the rectangle's lines is not in the model.
    pub fn add_rectangle(&mut self, data: RectangleData) -> Result<RectangleId, ConformalError> {
        for &line in &data.lines {
            self.line(line)?;
        }
        let lines = data.lines;
        let id = self.rectangles.insert(data);
        for line in lines {
            self.line_mut(line)?.rectangles.push(id);
        }
        Ok(id)
    }

    /// Returns a reference to the rectangle data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn rectangle(&self, id: RectangleId) -> Result<&RectangleData, ConformalError> {
        self.rectangles
            .get(id)
            .ok_or_else(|| ConformalError::EntityNotFound("rectangle".into()))
    }

    pub fn rectangles(&self) -> impl Iterator<Item = (RectangleId, &RectangleData)> {
        self.rectangles.iter()
    }

    // --- Lines ---

    /// Inserts a line and returns its ID.
    pub fn add_line(&mut self, data: LineData) -> LineId {
        self.lines.insert(data)
    }

    /// Returns a reference to the line data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn line(&self, id: LineId) -> Result<&LineData, ConformalError> {
        self.lines
            .get(id)
            .ok_or_else(|| ConformalError::EntityNotFound("line".into()))
    }

    fn line_mut(&mut self, id: LineId) -> Result<&mut LineData, ConformalError> {
        self.lines
            .get_mut(id)
            .ok_or_else(|| ConformalError::EntityNotFound("line".into()))
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineId, &LineData)> {
        self.lines.iter()
    }

    // --- Vertices ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, ConformalError> {
        self.vertices
            .get(id)
            .ok_or_else(|| ConformalError::EntityNotFound("vertex".into()))
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData)> {
        self.vertices.iter()
    }

    /// Number of cuboids, rectangles, lines and vertices.
    #[must_use]
    pub fn counts(&self) -> [usize; 4] {
        [
            self.cuboids.len(),
            self.rectangles.len(),
            self.lines.len(),
            self.vertices.len(),
        ]
    }
}
