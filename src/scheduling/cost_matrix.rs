//! Cost matrix construction.
//!
//! Rows are candidates, columns are seats. A cell is either an allowed cost
//! derived from the candidate's preference, or forbidden when the candidate
//! and the seat belong to different slots.

use serde::{Deserialize, Serialize};

use crate::models::SlotUnit;

use super::Candidate;

/// One cell of the cost matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "cost")]
pub enum CostCell {
    /// The pairing is valid and costs this much.
    Allowed(u32),
    /// The pairing must never become an assignment.
    Forbidden,
}

impl CostCell {
    /// Returns the cost of an allowed cell.
    pub fn cost(self) -> Option<u32> {
        match self {
            CostCell::Allowed(cost) => Some(cost),
            CostCell::Forbidden => None,
        }
    }

    /// Returns true for allowed cells.
    pub fn is_allowed(self) -> bool {
        matches!(self, CostCell::Allowed(_))
    }
}

/// A dense, row-major rectangular matrix of [`CostCell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<CostCell>,
}

impl CostMatrix {
    /// Builds a matrix by evaluating `cell(row, col)` for every position.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_engine::scheduling::{CostCell, CostMatrix};
    ///
    /// let matrix = CostMatrix::from_fn(2, 3, |r, c| {
    ///     if r == c { CostCell::Allowed(1) } else { CostCell::Forbidden }
    /// });
    /// assert_eq!(matrix.get(1, 1), CostCell::Allowed(1));
    /// assert_eq!(matrix.get(1, 2), CostCell::Forbidden);
    /// assert_eq!(matrix.allowed_cells(), 2);
    /// ```
    pub fn from_fn(rows: usize, cols: usize, mut cell: impl FnMut(usize, usize) -> CostCell) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(cell(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> CostCell {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of bounds");
        self.cells[row * self.cols + col]
    }

    /// Number of allowed cells.
    pub fn allowed_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_allowed()).count()
    }

    /// The largest allowed cost, or zero when every cell is forbidden.
    pub fn max_allowed_cost(&self) -> u32 {
        self.cells
            .iter()
            .filter_map(|cell| cell.cost())
            .max()
            .unwrap_or(0)
    }
}

/// Builds the candidate × seat cost matrix.
///
/// A cell is `Allowed(4 - preference)` when the candidate's slot is the
/// seat's slot, otherwise `Forbidden`. Higher preference means lower cost.
pub fn build_cost_matrix(candidates: &[Candidate], units: &[SlotUnit]) -> CostMatrix {
    CostMatrix::from_fn(candidates.len(), units.len(), |row, col| {
        let candidate = &candidates[row];
        if candidate.slot == units[col].slot {
            CostCell::Allowed(candidate.preference.cost())
        } else {
            CostCell::Forbidden
        }
    })
}
