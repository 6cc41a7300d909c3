//! Monte Carlo estimation of intermediacy.

use crate::graph::Graph;
use crate::sample::TrialScratch;
use crate::{IntermediacyError, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Parameters for one estimation run.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntermediacyConfig {
    /// Independent retention probability applied to every edge.
    pub probability: f64,
    /// Number of Monte Carlo trials.
    pub samples: usize,
    /// Seed for the deterministic trial streams.
    pub seed: u64,
}

impl Default for IntermediacyConfig {
    fn default() -> Self {
        Self { probability: 0.5, samples: 100_000, seed: 42 }
    }
}

/// Estimated probability, per node, of lying on a surviving `source` →
/// `target` path when each edge is kept with `config.probability`.
///
/// Runs `config.samples` independent trials and returns per-node hit rates
/// in `[0, 1]`. Trial `s` draws from its own ChaCha8 stream seeded from
/// `(config.seed, s)`, so for a fixed config the result does not depend on
/// how trials are scheduled: it is identical across thread counts and
/// between the `parallel` and sequential builds.
///
/// At `probability = 1.0` every trial degenerates to the deterministic
/// intermediate-node membership; at `probability = 0.0` no trial retains an
/// edge and every estimate is zero unless `source == target`.
///
/// Fails with a configuration error when `probability` is outside `[0, 1]`
/// or `samples` is zero. Panics if `source` or `target` is out of range.
pub fn intermediacy(
    graph: &Graph,
    source: usize,
    target: usize,
    config: IntermediacyConfig,
) -> Result<Vec<f64>> {
    if !(0.0..=1.0).contains(&config.probability) {
        return Err(IntermediacyError::Config(format!(
            "edge retention probability must lie in [0, 1], got {}",
            config.probability
        )));
    }
    if config.samples == 0 {
        return Err(IntermediacyError::Config("sample count must be positive".into()));
    }
    assert!(
        source < graph.n() && target < graph.n(),
        "source/target out of range for {} nodes",
        graph.n()
    );

    let hits = run_trials(graph, source, target, config);
    Ok(hits.into_iter().map(|h| h as f64 / config.samples as f64).collect())
}

/// Standard error of an estimate produced by [`intermediacy`],
/// `sqrt(phi * (1 - phi) / samples)`.
pub fn standard_error(phi: f64, samples: usize) -> f64 {
    (phi * (1.0 - phi) / samples as f64).sqrt()
}

#[cfg(not(feature = "parallel"))]
fn run_trials(graph: &Graph, source: usize, target: usize, config: IntermediacyConfig) -> Vec<u64> {
    let mut scratch = TrialScratch::new(graph.n());
    let mut hits = vec![0u64; graph.n()];
    for trial in 0..config.samples {
        let mut rng = ChaCha8Rng::seed_from_u64(mix64(config.seed ^ (trial as u64)));
        scratch.run(graph, source, target, config.probability, &mut rng);
        for node in scratch.hit_nodes() {
            hits[node] += 1;
        }
    }
    hits
}

/// The merge is an elementwise sum of per-worker hit counts; the result is
/// independent of how rayon partitions the trial range.
#[cfg(feature = "parallel")]
fn run_trials(graph: &Graph, source: usize, target: usize, config: IntermediacyConfig) -> Vec<u64> {
    use rayon::prelude::*;

    (0..config.samples)
        .into_par_iter()
        .fold(
            || (TrialScratch::new(graph.n()), vec![0u64; graph.n()]),
            |(mut scratch, mut hits), trial| {
                let mut rng = ChaCha8Rng::seed_from_u64(mix64(config.seed ^ (trial as u64)));
                scratch.run(graph, source, target, config.probability, &mut rng);
                for node in scratch.hit_nodes() {
                    hits[node] += 1;
                }
                (scratch, hits)
            },
        )
        .map(|(_, hits)| hits)
        .reduce(
            || vec![0u64; graph.n()],
            |mut total, hits| {
                for (t, h) in total.iter_mut().zip(hits) {
                    *t += h;
                }
                total
            },
        )
}

fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^= x >> 31;
    x
}
