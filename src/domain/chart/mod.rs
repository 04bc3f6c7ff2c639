//! Chart domain: synthetic price/volume series for the live chart.

pub mod state;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use state::ChartSeries;

/// Samples kept in the rolling window (one day of hourly points).
pub const CHART_CAPACITY: usize = 24;

/// Centre of the synthetic price walk.
pub const BASE_PRICE: f64 = 2700.0;

/// Maximum distance from [`BASE_PRICE`] in either direction.
pub const PRICE_NOISE: f64 = 100.0;

/// Upper bound (exclusive) of the synthetic volume.
pub const MAX_VOLUME: f64 = 1_000_000.0;

/// Sortable axis label: lexicographic order matches time order.
const TIME_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single chart point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSample {
    pub time: DateTime<Utc>,
    /// `YYYY-MM-DD HH:MM:SS` label for the x axis.
    pub time_label: String,
    pub price: f64,
    pub volume: f64,
}

impl ChartSample {
    /// A random sample stamped at `time`.
    pub fn synthetic<R: Rng + ?Sized>(time: DateTime<Utc>, rng: &mut R) -> Self {
        Self {
            time,
            time_label: time.format(TIME_LABEL_FORMAT).to_string(),
            price: BASE_PRICE + rng.gen_range(-PRICE_NOISE..PRICE_NOISE),
            volume: rng.gen_range(0.0..MAX_VOLUME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::seeded_rng;
    use chrono::TimeZone;

    #[test]
    fn test_synthetic_sample_bounds_and_label() {
        let mut rng = seeded_rng(1);
        let t = Utc.with_ymd_and_hms(2026, 10, 19, 9, 5, 0).unwrap();
        for _ in 0..200 {
            let s = ChartSample::synthetic(t, &mut rng);
            assert!(s.price >= BASE_PRICE - PRICE_NOISE && s.price < BASE_PRICE + PRICE_NOISE);
            assert!(s.volume >= 0.0 && s.volume < MAX_VOLUME);
            assert_eq!(s.time_label, "2026-10-19 09:05:00");
        }
    }
}
