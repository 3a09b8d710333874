//! Well-known demonstration patterns.

use life_core::SeedData;

pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub seed: SeedData,
}

/// 2x2 still life
pub fn block() -> SeedData {
    vec![
        vec![0, 0, 0, 0],
        vec![0, 1, 1, 0],
        vec![0, 1, 1, 0],
        vec![0, 0, 0, 0],
    ]
}

/// Vertical blinker, period 2
pub fn blinker() -> SeedData {
    vec![
        vec![0, 0, 0, 0, 0],
        vec![0, 0, 1, 0, 0],
        vec![0, 0, 1, 0, 0],
        vec![0, 0, 1, 0, 0],
        vec![0, 0, 0, 0, 0],
    ]
}

/// Toad, period 2
pub fn toad() -> SeedData {
    vec![
        vec![0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0],
        vec![0, 0, 1, 1, 1, 0],
        vec![0, 1, 1, 1, 0, 0],
        vec![0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0],
    ]
}

pub fn demo_patterns() -> Vec<Pattern> {
    vec![
        Pattern {
            name: "block",
            description: "still life block pattern",
            seed: block(),
        },
        Pattern {
            name: "blinker",
            description: "oscillator blink pattern",
            seed: blinker(),
        },
        Pattern {
            name: "toad",
            description: "oscillator toad pattern",
            seed: toad(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;

    #[test]
    fn test_demo_patterns_are_valid() {
        for pattern in demo_patterns() {
            let grid = Grid::from_seed(&pattern.seed).unwrap();
            assert!(grid.has_dead_border(), "{} has a live border", pattern.name);
            assert!(grid.population() > 0);
        }
    }
}
