//! Chart state container: app-owned, crate-provided update logic.

use super::{ChartSample, CHART_CAPACITY};
use chrono::{DateTime, Duration, SubsecRound, Utc};
use rand::Rng;
use std::collections::VecDeque;

/// Fixed-length rolling window of chart samples, oldest first.
///
/// Once built, the window always holds exactly `capacity` samples. Sample
/// times are whole seconds and strictly increasing, and so are their labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    samples: VecDeque<ChartSample>,
    capacity: usize,
}

impl ChartSeries {
    /// Seed a full window: one sample per hour, the last one at `now`.
    pub fn initialize<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Self {
        Self::with_capacity(CHART_CAPACITY, now, rng)
    }

    pub fn with_capacity<R: Rng + ?Sized>(capacity: usize, now: DateTime<Utc>, rng: &mut R) -> Self {
        let capacity = capacity.max(1);
        let now = now.trunc_subsecs(0);
        let mut samples = VecDeque::with_capacity(capacity);
        for hours_ago in (0..capacity as i64).rev() {
            samples.push_back(ChartSample::synthetic(now - Duration::hours(hours_ago), rng));
        }
        Self { samples, capacity }
    }

    /// Append a sample stamped at `now` and evict the oldest.
    ///
    /// The clock reading is truncated to whole seconds; one that is not after
    /// the newest sample is bumped to one second past it.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: DateTime<Utc>, rng: &mut R) -> &ChartSample {
        let now = now.trunc_subsecs(0);
        let stamp = match self.samples.back() {
            Some(last) if now <= last.time => last.time + Duration::seconds(1),
            _ => now,
        };
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(ChartSample::synthetic(stamp, rng));
        // Non-empty: a sample was just pushed.
        &self.samples[self.samples.len() - 1]
    }

    pub fn samples(&self) -> &VecDeque<ChartSample> {
        &self.samples
    }

    /// Owned copy for consumers.
    pub fn snapshot(&self) -> Vec<ChartSample> {
        self.samples.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<&ChartSample> {
        self.samples.back()
    }

    /// Lowest and highest price in the window.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.samples.iter().fold(None, |acc, s| match acc {
            None => Some((s.price, s.price)),
            Some((lo, hi)) => Some((lo.min(s.price), hi.max(s.price))),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
