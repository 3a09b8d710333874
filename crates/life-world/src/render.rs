//! Text rendering of grids to any writer.

use crate::grid::Grid;
use life_core::{Cell, Result};
use std::io::Write;

const SEPARATOR: &str = "--------";

/// Write `description:`, one line per row with a `|`-delimited cell per column, then a separator
pub fn render_grid<W: Write + ?Sized>(grid: &Grid, description: &str, out: &mut W) -> Result<()> {
    writeln!(out, "{}:", description)?;

    for row in grid.row_iter() {
        for cell in row {
            out.write_all(cell_symbol(*cell).as_bytes())?;
        }
        writeln!(out, "|")?;
    }

    writeln!(out, "{}", SEPARATOR)?;
    Ok(())
}

fn cell_symbol(cell: Cell) -> &'static str {
    match cell {
        Cell::Dead => "| ",
        Cell::Alive => "|X",
    }
}
