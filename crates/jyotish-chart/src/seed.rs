//! Sine-hash pseudo-random draws keyed by birth timestamp

use chrono::{DateTime, Utc};

/// Milliseconds since the epoch of the birth instant.
///
/// Draws are `frac(sin(seed + index) * 10000)`. Not a statistical PRNG; it
/// only has to reproduce the same chart for the same birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartSeed(i64);

impl ChartSeed {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }

    pub fn millis(self) -> i64 {
        self.0
    }

    /// Draw in `[0, 1)` for `index`
    pub fn random(self, index: u32) -> f64 {
        let x = (self.0 as f64 + index as f64).sin() * 10000.0;
        x - x.floor()
    }

    /// `floor(random(index) * n)`, clamped to `n - 1`
    pub fn pick(self, index: u32, n: usize) -> usize {
        let i = (self.random(index) * n as f64).floor() as usize;
        i.min(n.saturating_sub(1))
    }
}

impl From<DateTime<Utc>> for ChartSeed {
    fn from(at: DateTime<Utc>) -> Self {
        Self::from_timestamp(at)
    }
}
