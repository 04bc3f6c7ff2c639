//! Interval poller for one upstream resource.
//!
//! A background tokio task owns the resource state. It fetches immediately,
//! then once per interval, and publishes every change through a `watch`
//! channel. Fetches are never retried early or backed off: a failure keeps the
//! previous value and the next tick tries again.

use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures_util::stream::{FuturesUnordered, Stream};
use futures_util::StreamExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::shared::ResourceKind;

/// Latest known state of a polled resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Refreshable<T> {
    /// Last successfully fetched value. `None` until the first success.
    pub value: Option<T>,
    /// True while at least one fetch of this resource is in flight.
    pub is_loading: bool,
    /// Message of the most recent failure; cleared by the next success.
    pub last_error: Option<String>,
    /// When `value` was last replaced.
    pub updated_at: Option<DateTime<Utc>>,
    /// When the last fetch outcome, success or failure, was applied.
    pub checked_at: Option<DateTime<Utc>>,
}

impl<T> Default for Refreshable<T> {
    fn default() -> Self {
        Self {
            value: None,
            is_loading: false,
            last_error: None,
            updated_at: None,
            checked_at: None,
        }
    }
}

impl<T: Clone> Refreshable<T> {
    fn loading(&self) -> Self {
        Self {
            is_loading: true,
            ..self.clone()
        }
    }

    fn succeeded(&self, value: T, still_loading: bool) -> Self {
        let now = Utc::now();
        Self {
            value: Some(value),
            is_loading: still_loading,
            last_error: None,
            updated_at: Some(now),
            checked_at: Some(now),
        }
    }

    fn failed(&self, error: String, still_loading: bool) -> Self {
        Self {
            is_loading: still_loading,
            last_error: Some(error),
            checked_at: Some(Utc::now()),
            ..self.clone()
        }
    }
}

/// Handle to a running poller. Dropping it stops polling.
pub struct ResourcePoller<T> {
    kind: ResourceKind,
    interval: Duration,
    state_rx: watch::Receiver<Refreshable<T>>,
    task_handle: Option<JoinHandle<()>>,
}

impl<T> ResourcePoller<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Spawn the poller task. Must be called inside a tokio runtime.
    ///
    /// `fetch` is invoked once immediately and then on every interval tick,
    /// whether or not earlier fetches have finished. Results are applied in
    /// completion order.
    pub fn spawn<F, Fut, E>(kind: ResourceKind, interval: Duration, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        let (state_tx, state_rx) = watch::channel(Refreshable::default());
        let handle = tokio::spawn(run_poller(kind, interval, fetch, state_tx));
        tracing::debug!(resource = %kind, interval_ms = interval.as_millis() as u64, "Poller started");

        Self {
            kind,
            interval,
            state_rx,
            task_handle: Some(handle),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> Refreshable<T> {
        self.state_rx.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state_rx.borrow().is_loading
    }

    /// Change notifications. Drop the receiver to unsubscribe.
    pub fn subscribe(&self) -> watch::Receiver<Refreshable<T>> {
        self.state_rx.clone()
    }

    /// Stream of states, one per published change. Ends when the poller stops.
    pub fn updates(&self) -> Pin<Box<dyn Stream<Item = Refreshable<T>> + Send>> {
        let mut rx = self.state_rx.clone();
        Box::pin(async_stream::stream! {
            while rx.changed().await.is_ok() {
                let state = rx.borrow_and_update().clone();
                yield state;
            }
        })
    }

    /// Stop polling and wait for the task to wind down. In-flight fetches are
    /// dropped and their results discarded.
    pub async fn shutdown(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
            let _ = handle.await;
            tracing::debug!(resource = %self.kind, "Poller stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for ResourcePoller<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}

// ─── Background task ─────────────────────────────────────────────────────────

async fn run_poller<T, F, Fut, E>(
    kind: ResourceKind,
    period: Duration,
    fetch: F,
    state_tx: watch::Sender<Refreshable<T>>,
) where
    T: Clone,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    // First tick completes immediately.
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut in_flight = FuturesUnordered::new();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                in_flight.push(fetch());
                let next = state_tx.borrow().loading();
                state_tx.send_replace(next);
            }
            Some(result) = in_flight.next(), if !in_flight.is_empty() => {
                let still_loading = !in_flight.is_empty();
                let next = match result {
                    Ok(value) => state_tx.borrow().succeeded(value, still_loading),
                    Err(e) => {
                        let error = e.to_string();
                        tracing::warn!(resource = %kind, error = %error, "Fetch failed, keeping previous value");
                        state_tx.borrow().failed(error, still_loading)
                    }
                };
                state_tx.send_replace(next);
            }
        }
    }
}
