//! Demo runner: seeds, steps and renders the demonstration patterns.

mod telemetry;

use anyhow::{bail, Context, Result};
use life_core::DemoConfig;
use life_world::{patterns, render_grid, seed, Grid, Pattern, Simulation};
use rand::Rng;
use std::io::{self, BufWriter, Write};
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    // Load configuration
    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::from_json_file(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => DemoConfig::default(),
    };
    config.validate()?;

    info!("Starting Game of Life demo");
    match config.rng_seed {
        Some(seed) => info!("RNG seed: {}", seed),
        None => info!("RNG seeded from entropy"),
    }

    let mut rng = seed::seeded_rng(config.rng_seed);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    run_demo(&config, &mut rng, &mut out)?;
    out.flush()?;

    info!("Demo finished");
    Ok(())
}

/// Render every demonstration pattern followed by its stepped generations
fn run_demo<R: Rng, W: Write>(config: &DemoConfig, rng: &mut R, out: &mut W) -> Result<()> {
    let random = Pattern {
        name: "random",
        description: "random pattern",
        seed: seed::generate_seed_from_config(&config.random, rng)?,
    };

    for pattern in std::iter::once(random).chain(patterns::demo_patterns()) {
        let grid = Grid::from_seed(&pattern.seed)
            .with_context(|| format!("invalid seed for {} pattern", pattern.name))?;

        if !grid.has_dead_border() {
            if config.require_dead_border {
                bail!("{} pattern has live cells on its border", pattern.name);
            }
            warn!("{} pattern has live cells on its border; they will be cleared", pattern.name);
        }

        render_grid(&grid, &capitalize(pattern.description), out)?;

        let mut sim = Simulation::new(grid);
        let still_life = sim.detect_period(1) == Some(1);
        for (i, next) in sim.run(config.generations).iter().enumerate() {
            let label = if config.generations == 1 && still_life {
                format!("Next generation of {} (unchanged)", pattern.description)
            } else if config.generations == 1 {
                format!("Next generation of {}", pattern.description)
            } else {
                format!("Generation {} of {}", i + 1, pattern.description)
            };
            render_grid(next, &label, out)?;
        }

        debug!(
            pattern = pattern.name,
            period = ?sim.detect_period(4),
            "Rendered pattern"
        );
    }

    Ok(())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(config: &DemoConfig) -> Result<String> {
        let mut rng = seed::seeded_rng(Some(42));
        let mut out = Vec::new();
        run_demo(config, &mut rng, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("random pattern"), "Random pattern");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_demo_renders_all_patterns() {
        let output = render(&DemoConfig::default()).unwrap();

        for label in [
            "Random pattern:",
            "Next generation of random pattern",
            "Still life block pattern:",
            "Next generation of still life block pattern (unchanged):",
            "Oscillator blink pattern:",
            "Next generation of oscillator blink pattern:",
            "Oscillator toad pattern:",
            "Next generation of oscillator toad pattern:",
        ] {
            assert!(output.contains(label), "missing {}", label);
        }
        assert_eq!(output.matches("--------").count(), 8);
        assert!(!output.contains("oscillator toad pattern (unchanged)"));
    }

    #[test]
    fn test_demo_is_deterministic() {
        let config = DemoConfig {
            rng_seed: Some(42),
            ..Default::default()
        };
        assert_eq!(render(&config).unwrap(), render(&config).unwrap());
    }

    #[test]
    fn test_demo_multiple_generations() {
        let config = DemoConfig {
            generations: 3,
            ..Default::default()
        };
        let output = render(&config).unwrap();
        assert!(output.contains("Generation 3 of oscillator toad pattern:"));
        assert_eq!(output.matches("--------").count(), 4 * 4);
    }
}
