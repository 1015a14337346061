// --- File: grid.rs ---
use crate::constants::{DEAD_GLYPH, LIVE_GLYPH};
use crate::error::{LifeError, LifeResult};
use std::{fmt, str::FromStr};

// Offsets of the 8 neighbors around a cell (the cell itself excluded).
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }

    fn glyph(self) -> char {
        match self {
            CellState::Dead => DEAD_GLYPH,
            CellState::Alive => LIVE_GLYPH,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

/// Fixed-size rectangular board of cells, stored row-major.
///
/// Dimensions are set at construction and never change; every cell always
/// holds a defined state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// All-dead grid. Fails with [`LifeError::InvalidDimension`] if either side is zero.
    pub fn new(rows: usize, cols: usize) -> LifeResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Dead; rows * cols],
        })
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_index(&self, row: usize, col: usize) -> LifeResult<usize> {
        if self.contains(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> LifeResult<CellState> {
        let index = self.checked_index(row, col)?;
        Ok(self.cells[index])
    }

    /// Sets one cell. A rejected coordinate leaves the grid untouched.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> LifeResult<()> {
        let index = self.checked_index(row, col)?;
        self.cells[index] = state;
        Ok(())
    }

    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of every live cell, in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(index, _)| (index / cols, index % cols))
    }

    /// Live neighbors of `(row, col)` using 8-connectivity without wrapping.
    pub fn live_neighbors(&self, row: usize, col: usize) -> LifeResult<u8> {
        self.checked_index(row, col)?;
        Ok(self.count_live_neighbors(row, col))
    }

    // Caller guarantees (row, col) is in bounds. Off-grid neighbor positions
    // are skipped before any indexing, so edges see 5 and corners see 3.
    pub(crate) fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if self.contains(r, c) && self.cells[self.index(r, c)].is_alive() {
                count += 1;
            }
        }
        count
    }

    #[inline]
    pub(crate) fn cell_at(&self, row: usize, col: usize) -> CellState {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub(crate) fn set_at(&mut self, row: usize, col: usize, state: CellState) {
        let index = self.index(row, col);
        self.cells[index] = state;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the text form written by `Display`: one line per row, `#` alive,
/// `.` dead. Blank lines and surrounding whitespace are ignored.
impl FromStr for Grid {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<CellState>> = Vec::new();
        for (line_index, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::with_capacity(line.len());
            for (column, glyph) in line.chars().enumerate() {
                let state = match glyph {
                    LIVE_GLYPH => CellState::Alive,
                    DEAD_GLYPH => CellState::Dead,
                    _ => {
                        return Err(LifeError::InvalidGlyph {
                            line: line_index + 1,
                            column: column + 1,
                            glyph,
                        });
                    }
                };
                row.push(state);
            }
            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(LifeError::RaggedPattern {
                        line: line_index + 1,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        let cols = rows.first().map_or(0, Vec::len);
        let mut grid = Grid::new(rows.len(), cols)?;
        grid.cells = rows.into_iter().flatten().collect();
        Ok(grid)
    }
}
