use serde::{Deserialize, Serialize};

use super::types::Cell;
use crate::common::ConfigError;

pub const FREE: u8 = 0;
pub const BLOCKED: u8 = 1;

/// Immutable occupancy map, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from rows of `0` (free) / `1` (blocked).
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self, ConfigError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ConfigError::RaggedRow {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value != FREE && value != BLOCKED {
                    return Err(ConfigError::InvalidCell { row: r, col: c, value });
                }
                cells.push(value);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// All-free grid of the given shape.
    pub fn open(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        Self::new(vec![vec![FREE; cols]; rows])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let row = usize::try_from(cell.row).ok()?;
        let col = usize::try_from(cell.col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    /// Raw occupancy value, `None` outside the grid.
    pub fn value(&self, cell: Cell) -> Option<u8> {
        self.index(cell).map(|i| self.cells[i])
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        matches!(self.value(cell), Some(v) if v != FREE)
    }

    /// In bounds and free.
    pub fn is_valid(&self, cell: Cell) -> bool {
        self.value(cell) == Some(FREE)
    }

    pub fn free_cell_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == FREE).count()
    }

    /// Rows as they were given to `new`.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells.chunks(self.cols).map(<[u8]>::to_vec).collect()
    }
}
