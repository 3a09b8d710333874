//! 2D grid for the world.

use life_core::{Cell, Error, Result, SeedData};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-size grid of cells whose outermost ring is held dead by stepping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeedData", into = "SeedData")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::Validation(format!(
                "grid dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Create a grid by copying rectangular 0/1 seed data.
    ///
    /// The border is copied as given; see [`Grid::has_dead_border`].
    pub fn from_seed<R: AsRef<[u8]>>(seed: &[R]) -> Result<Self> {
        let rows = seed.len();
        let cols = seed.first().map(|row| row.as_ref().len()).unwrap_or(0);
        let mut grid = Self::new(rows, cols)?;

        for (row, values) in seed.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(Error::Validation(format!(
                    "seed is not rectangular: row {} has {} columns, expected {}",
                    row,
                    values.len(),
                    cols
                )));
            }

            for (col, &value) in values.iter().enumerate() {
                let index = grid.index(row, col);
                grid.cells[index] = Cell::try_from(value).map_err(|_| {
                    Error::Validation(format!(
                        "seed value {} at ({}, {}) is not 0 or 1",
                        value, row, col
                    ))
                })?;
            }
        }

        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at position (bounds checked)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    /// Count live cells in the 3x3 block around an interior cell, excluding the cell itself.
    ///
    /// # Panics
    ///
    /// Panics in all builds when `(row, col)` lies on the border or outside the grid.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        assert!(
            self.is_interior(row, col),
            "live_neighbors called on non-interior cell ({}, {})",
            row,
            col
        );

        let mut total = 0;
        for r in row - 1..=row + 1 {
            let start = self.index(r, col - 1);
            total += self.cells[start..start + 3]
                .iter()
                .map(Cell::value)
                .sum::<u8>();
        }

        total - self.cells[self.index(row, col)].value()
    }

    /// Compute the next generation.
    ///
    /// Interior cells follow B3/S23 against this snapshot; every border cell of
    /// the result is dead regardless of its previous value.
    pub fn next_generation(&self) -> Grid {
        let mut next = Grid {
            rows: self.rows,
            cols: self.cols,
            cells: vec![Cell::Dead; self.cells.len()],
        };

        // Grids narrower than 3 in either direction have no interior
        for row in 1..self.rows.saturating_sub(1) {
            for col in 1..self.cols.saturating_sub(1) {
                let current = self.cells[self.index(row, col)];
                let index = next.index(row, col);
                next.cells[index] = current.next_state(self.live_neighbors(row, col));
            }
        }

        next
    }

    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.rows || col + 1 == self.cols
    }

    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && !self.is_border(row, col)
    }

    /// Whether every border cell is dead
    pub fn has_dead_border(&self) -> bool {
        self.iter()
            .filter(|&(row, col, _)| self.is_border(row, col))
            .all(|(_, _, cell)| !cell.is_alive())
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterator over rows as cell slices
    pub fn row_iter(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// Iterator over all cells with positions
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / self.cols, i % self.cols, cell))
    }

    /// Export as 0/1 rows
    pub fn to_seed(&self) -> SeedData {
        self.row_iter()
            .map(|row| row.iter().map(Cell::value).collect())
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

impl TryFrom<SeedData> for Grid {
    type Error = Error;

    fn try_from(seed: SeedData) -> Result<Self> {
        Self::from_seed(&seed)
    }
}

impl From<Grid> for SeedData {
    fn from(grid: Grid) -> Self {
        grid.to_seed()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_iter() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
