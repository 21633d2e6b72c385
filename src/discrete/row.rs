use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;

use super::ScBuilding;
use crate::math::AXES;
use crate::spatial::SpaceId;

/// Occupancy of one space: its id plus one bit per grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScRow {
    id: SpaceId,
    cells: BitVec,
}

impl ScRow {
    #[must_use]
    pub fn new(id: SpaceId, cells: BitVec) -> Self {
        Self { id, cells }
    }

    #[must_use]
    pub fn id(&self) -> SpaceId {
        self.id
    }

    #[must_use]
    pub fn cells(&self) -> &BitSlice {
        &self.cells
    }

    #[must_use]
    pub fn is_occupied(&self, cell: usize) -> bool {
        self.cells.get(cell).is_some_and(|bit| *bit)
    }

    /// Lowest and highest occupied linear cell index.
    #[must_use]
    pub fn occupied_span(&self) -> Option<(usize, usize)> {
        Some((self.cells.first_one()?, self.cells.last_one()?))
    }

    /// Returns `true` if the occupied cells form one full rectangular block.
    ///
    /// Rows that are not box-shaped come back from
    /// [`from_grid`](crate::convert::from_grid) as the box between their first
    /// and last occupied linear cell, which may leave other occupied cells
    /// out.
    #[must_use]
    pub fn is_box_shaped(&self, grid: &ScBuilding) -> bool {
        let mut min = [usize::MAX; AXES];
        let mut max = [0; AXES];
        let mut count = 0;
        for cell in self.cells.iter_ones() {
            let idx = grid.cell_indices(cell);
            for axis in 0..AXES {
                min[axis] = min[axis].min(idx[axis]);
                max[axis] = max[axis].max(idx[axis]);
            }
            count += 1;
        }
        count > 0 && (0..AXES).map(|axis| max[axis] - min[axis] + 1).product::<usize>() == count
    }
}
