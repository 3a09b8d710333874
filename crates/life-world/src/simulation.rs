//! Simulation driver stepping a grid through generations.

use crate::grid::Grid;
use tracing::{debug, info, instrument, trace};

pub struct Simulation {
    grid: Grid,
    generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Advance one generation and return the new snapshot
    pub fn step(&mut self) -> &Grid {
        self.grid = self.grid.next_generation();
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.grid.population(),
            "Stepped grid"
        );

        &self.grid
    }

    /// Advance `generations` times, returning every produced snapshot in order.
    ///
    /// The history grows as steps are taken; nothing is reserved up front.
    #[instrument(skip(self), fields(rows = self.grid.rows(), cols = self.grid.cols()))]
    pub fn run(&mut self, generations: u64) -> Vec<Grid> {
        debug!("Running {} generations from {}", generations, self.generation);

        let mut history = Vec::new();
        for _ in 0..generations {
            history.push(self.step().clone());
        }

        info!(
            generation = self.generation,
            population = self.grid.population(),
            "Run complete"
        );

        history
    }

    /// Smallest period within `max_period` steps after which the current grid
    /// reappears (1 for a still life). Does not advance the simulation.
    pub fn detect_period(&self, max_period: u64) -> Option<u64> {
        let mut probe = self.grid.next_generation();

        for period in 1..=max_period {
            if probe == self.grid {
                return Some(period);
            }
            probe = probe.next_generation();
        }

        None
    }
}
