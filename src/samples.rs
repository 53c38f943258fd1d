//! Seeded latent sample generation for the generator input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub count: usize,
    pub latent_dim: usize,
    pub seed: u64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: 10,
            latent_dim: 2,
            seed: 42,
        }
    }
}

/// Generate `count` standard-normal latent vectors of `latent_dim` elements.
///
/// The rng is seeded so testbench inputs are reproducible across runs.
pub fn generate(config: &SampleConfig) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.count)
        .map(|_| {
            (0..config.latent_dim)
                .map(|_| standard_normal(&mut rng))
                .collect()
        })
        .collect()
}

/// Box-Muller draw from N(0, 1).
fn standard_normal(rng: &mut StdRng) -> f64 {
    let u1 = rng.random::<f64>().max(f64::MIN_POSITIVE);
    let u2 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}
