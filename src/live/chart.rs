//! Live chart feed: a [`ChartSeries`] advanced on a fixed clock.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::domain::chart::{ChartSample, ChartSeries, CHART_CAPACITY};
use crate::shared::{entropy_rng, seeded_rng, SimRng};

#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Time between appended samples.
    pub period: Duration,
    pub capacity: usize,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_secs(60),
            capacity: CHART_CAPACITY,
            seed: None,
        }
    }
}

/// Owns the chart window in a background task and publishes a copy of it
/// after every tick.
pub struct ChartFeed {
    samples_rx: watch::Receiver<Vec<ChartSample>>,
    task_handle: Option<JoinHandle<()>>,
}

impl ChartFeed {
    /// Build the initial window and start ticking. Must be called inside a
    /// tokio runtime.
    pub fn start(config: ChartConfig) -> Self {
        let mut rng = config.seed.map(seeded_rng).unwrap_or_else(entropy_rng);
        let series = ChartSeries::with_capacity(config.capacity, Utc::now(), &mut rng);
        let (samples_tx, samples_rx) = watch::channel(series.snapshot());

        let handle = tokio::spawn(run_chart(series, rng, config.period, samples_tx));

        Self {
            samples_rx,
            task_handle: Some(handle),
        }
    }

    pub fn snapshot(&self) -> Vec<ChartSample> {
        self.samples_rx.borrow().clone()
    }

    pub fn latest(&self) -> Option<ChartSample> {
        self.samples_rx.borrow().last().cloned()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<ChartSample>> {
        self.samples_rx.clone()
    }

    pub async fn shutdown(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
            let _ = handle.await;
        }
    }
}

impl Drop for ChartFeed {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}

async fn run_chart(
    mut series: ChartSeries,
    mut rng: SimRng,
    period: Duration,
    samples_tx: watch::Sender<Vec<ChartSample>>,
) {
    // The initial window already covers "now"; the first append is one period out.
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let sample = series.tick(Utc::now(), &mut rng);
        tracing::debug!(price = sample.price, time = %sample.time_label, "Chart tick");
        samples_tx.send_replace(series.snapshot());
    }
}
