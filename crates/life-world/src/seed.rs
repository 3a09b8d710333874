//! Random seed generation with an injected RNG.

use life_core::{Result, SeedConfig, SeedData};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Build the RNG used for seeding: fixed when a seed is given, entropy otherwise
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Generate `rows x cols` seed data with a random interior and a dead border.
///
/// Each interior cell is alive when a uniform draw falls below `alive_probability`.
pub fn generate_seed<R: Rng>(
    rows: usize,
    cols: usize,
    alive_probability: f64,
    rng: &mut R,
) -> SeedData {
    let mut data = vec![vec![0u8; cols]; rows];

    for row in 1..rows.saturating_sub(1) {
        for col in 1..cols.saturating_sub(1) {
            let roll = rng.gen::<f64>();
            if roll < alive_probability {
                data[row][col] = 1;
            }
        }
    }

    data
}

/// Validate the config and generate seed data from it
pub fn generate_seed_from_config<R: Rng>(
    config: &SeedConfig,
    rng: &mut R,
) -> Result<SeedData> {
    config.validate()?;

    let data = generate_seed(config.rows, config.cols, config.alive_probability, rng);
    debug!(
        rows = config.rows,
        cols = config.cols,
        live = data.iter().flatten().filter(|&&v| v == 1).count(),
        "Generated random seed"
    );

    Ok(data)
}
