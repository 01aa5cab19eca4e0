//! Random metrics snapshots for the analytics demo.

use rand::Rng;
use serde::Serialize;

/// One dashboard's worth of simulated metrics.
///
/// Fields are sampled independently; no correlation is enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSnapshot {
    pub visitors: u32,
    pub conversion_rate: f64,
    pub revenue: u32,
    pub bounce_rate: f64,
}

/// Sample a fresh snapshot. Every call resamples every field.
pub fn generate() -> AnalyticsSnapshot {
    let mut rng = rand::rng();
    AnalyticsSnapshot {
        visitors: rng.random_range(10_000..60_000),
        conversion_rate: round_to(rng.random_range(2.0..7.0), 100.0),
        revenue: rng.random_range(20_000..120_000),
        bounce_rate: round_to(rng.random_range(40.0..70.0), 10.0),
    }
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}
