//! Grid engine for Conway's Game of Life.
//!
//! A fixed-size grid keeps a permanently dead border so every interior
//! neighborhood lookup stays in bounds. Each generation is a fresh snapshot.

pub mod grid;
pub mod patterns;
pub mod render;
pub mod seed;
pub mod simulation;

pub use grid::Grid;
pub use patterns::Pattern;
pub use render::render_grid;
pub use simulation::Simulation;
