//! Core type definitions for the engine.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw seed data: rows of 0/1 values.
pub type SeedData = Vec<Vec<u8>>;

/// State of a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(&self) -> bool {
        *self == Cell::Alive
    }

    /// Integral value used when summing a neighborhood
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Apply the birth/survival rule (B3/S23)
    pub fn next_state(self, live_neighbors: u8) -> Cell {
        match (self, live_neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            other => Err(Error::Validation(format!(
                "cell value must be 0 or 1, got {}",
                other
            ))),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.value()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Dead => write!(f, "."),
            Cell::Alive => write!(f, "#"),
        }
    }
}
