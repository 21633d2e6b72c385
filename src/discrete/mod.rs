//! Discretized (SC) representation of a building: a rectilinear grid with
//! non-uniform cell widths and one occupancy bitmask per space.

mod row;

pub use row::ScRow;

use crate::error::{ConversionError, Result};
use crate::math::AXES;
use crate::spatial::SpaceId;

/// A voxel-grid building model.
///
/// `widths[axis]` holds the cell widths along that axis (w, d, h). Cells are
/// numbered linearly as `(w · D + d) · H + h`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScBuilding {
    widths: [Vec<f64>; AXES],
    rows: Vec<ScRow>,
}

impl ScBuilding {
    /// Creates a grid without any space rows.
    #[must_use]
    pub fn new(widths: [Vec<f64>; AXES]) -> Self {
        Self {
            widths,
            rows: Vec::new(),
        }
    }

    /// Creates a grid and validates its rows.
    ///
    /// # Errors
    ///
    /// Returns an error if a row's mask length differs from the cell count
    /// or two rows share a space id.
    pub fn from_parts(widths: [Vec<f64>; AXES], rows: Vec<ScRow>) -> Result<Self> {
        let mut building = Self::new(widths);
        for row in rows {
            building.add_row(row)?;
        }
        Ok(building)
    }

    /// Appends the occupancy row of one space.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::MaskLength`] or
    /// [`ConversionError::DuplicateSpaceId`].
    pub fn add_row(&mut self, row: ScRow) -> Result<()> {
        let expected = self.cell_count();
        if row.cells().len() != expected {
            return Err(ConversionError::MaskLength {
                space: row.id(),
                expected,
                found: row.cells().len(),
            }
            .into());
        }
        if self.rows.iter().any(|r| r.id() == row.id()) {
            return Err(ConversionError::DuplicateSpaceId(row.id()).into());
        }
        self.rows.push(row);
        Ok(())
    }

    /// Cell widths along `axis` (0 = w, 1 = d, 2 = h).
    #[must_use]
    pub fn widths(&self, axis: usize) -> &[f64] {
        &self.widths[axis]
    }

    /// Number of cells along each axis.
    #[must_use]
    pub fn sizes(&self) -> [usize; AXES] {
        std::array::from_fn(|axis| self.widths[axis].len())
    }

    #[must_use]
    pub fn w_size(&self) -> usize {
        self.widths[0].len()
    }

    #[must_use]
    pub fn d_size(&self) -> usize {
        self.widths[1].len()
    }

    #[must_use]
    pub fn h_size(&self) -> usize {
        self.widths[2].len()
    }

    /// Total number of cells, the length of every row's bitmask.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.sizes().iter().product()
    }

    #[must_use]
    pub fn rows(&self) -> &[ScRow] {
        &self.rows
    }

    /// Returns the row of the given space, if any.
    #[must_use]
    pub fn row(&self, id: SpaceId) -> Option<&ScRow> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Splits a linear cell index into `[w, d, h]` indices.
    #[must_use]
    pub fn cell_indices(&self, linear: usize) -> [usize; AXES] {
        let [_, d, h] = self.sizes();
        [linear / (d * h), (linear / h) % d, linear % h]
    }

    /// Joins `[w, d, h]` indices into a linear cell index.
    #[must_use]
    pub fn linear_index(&self, indices: [usize; AXES]) -> usize {
        let [_, d, h] = self.sizes();
        (indices[0] * d + indices[1]) * h + indices[2]
    }

    /// Sum of the volumes of all occupied cells over all rows.
    #[must_use]
    pub fn occupied_volume(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|row| row.cells().iter_ones())
            .map(|cell| {
                let idx = self.cell_indices(cell);
                (0..AXES).map(|axis| self.widths[axis][idx[axis]]).product::<f64>()
            })
            .sum()
    }
}
