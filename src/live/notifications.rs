//! Live notification feed: the alert simulator plus user commands.
//!
//! A background task owns the [`NotificationCenter`]. It runs an emission
//! check on every tick and applies commands sent from the handle, publishing
//! a fresh [`NotificationsSnapshot`] after each change.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use uuid::Uuid;

use crate::domain::notification::{
    Notification, NotificationCenter, EMISSION_PROBABILITY, NOTIFICATION_CAPACITY,
};
use crate::shared::{entropy_rng, seeded_rng, SimRng};

#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// Time between emission checks.
    pub period: Duration,
    /// Chance in `[0, 1]` that a check emits.
    pub probability: f64,
    pub capacity: usize,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_secs(10),
            probability: EMISSION_PROBABILITY,
            capacity: NOTIFICATION_CAPACITY,
            seed: None,
        }
    }
}

/// Read-only view of the notification center.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationsSnapshot {
    /// Newest first.
    pub items: Vec<Notification>,
    pub unread: usize,
}

impl NotificationsSnapshot {
    fn of(center: &NotificationCenter) -> Self {
        Self {
            items: center.snapshot(),
            unread: center.unread_count(),
        }
    }
}

// ─── Commands from public API to background task ─────────────────────────────

enum Command {
    MarkRead(Uuid),
    MarkAllRead,
    ClearAll,
}

/// Handle to the running simulator. Dropping it stops the simulator.
pub struct NotificationFeed {
    cmd_tx: mpsc::Sender<Command>,
    snapshot_rx: watch::Receiver<NotificationsSnapshot>,
    task_handle: Option<JoinHandle<()>>,
}

impl NotificationFeed {
    /// Start with an empty center. Must be called inside a tokio runtime.
    pub fn start(config: NotificationConfig) -> Self {
        let rng = config.seed.map(seeded_rng).unwrap_or_else(entropy_rng);
        let center = NotificationCenter::new(config.capacity, config.probability);
        let (cmd_tx, cmd_rx) = mpsc::channel(64);
        let (snapshot_tx, snapshot_rx) = watch::channel(NotificationsSnapshot::default());

        let state = TaskState {
            center,
            rng,
            period: config.period,
            cmd_rx,
            snapshot_tx,
        };
        let handle = tokio::spawn(run_task(state));

        Self {
            cmd_tx,
            snapshot_rx,
            task_handle: Some(handle),
        }
    }

    /// Mark one notification read. Unknown ids are ignored.
    pub async fn mark_read(&self, id: Uuid) {
        self.send(Command::MarkRead(id)).await;
    }

    pub async fn mark_all_read(&self) {
        self.send(Command::MarkAllRead).await;
    }

    pub async fn clear_all(&self) {
        self.send(Command::ClearAll).await;
    }

    pub fn snapshot(&self) -> NotificationsSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    pub fn unread_count(&self) -> usize {
        self.snapshot_rx.borrow().unread
    }

    pub fn subscribe(&self) -> watch::Receiver<NotificationsSnapshot> {
        self.snapshot_rx.clone()
    }

    pub async fn shutdown(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
            let _ = handle.await;
        }
    }

    async fn send(&self, cmd: Command) {
        if self.cmd_tx.send(cmd).await.is_err() {
            tracing::debug!("Notification feed stopped, command dropped");
        }
    }
}

impl Drop for NotificationFeed {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}

// ─── Background task ─────────────────────────────────────────────────────────

struct TaskState {
    center: NotificationCenter,
    rng: SimRng,
    period: Duration,
    cmd_rx: mpsc::Receiver<Command>,
    snapshot_tx: watch::Sender<NotificationsSnapshot>,
}

impl TaskState {
    fn publish(&self) {
        self.snapshot_tx
            .send_replace(NotificationsSnapshot::of(&self.center));
    }

    fn apply(&mut self, cmd: Command) {
        let changed = match cmd {
            Command::MarkRead(id) => self.center.mark_read(id),
            Command::MarkAllRead => {
                self.center.mark_all_read();
                true
            }
            Command::ClearAll => {
                self.center.clear_all();
                true
            }
        };
        if changed {
            self.publish();
        }
    }
}

async fn run_task(mut state: TaskState) {
    let mut ticker = tokio::time::interval_at(Instant::now() + state.period, state.period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let emitted = state
                    .center
                    .emission_check(Utc::now(), &mut state.rng)
                    .map(|n| (n.kind, n.title.clone()));
                if let Some((kind, title)) = emitted {
                    tracing::info!(%kind, %title, "Notification emitted");
                    state.publish();
                }
            }
            cmd = state.cmd_rx.recv() => match cmd {
                Some(cmd) => state.apply(cmd),
                // Handle dropped.
                None => break,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always_emit() -> NotificationConfig {
        NotificationConfig {
            probability: 1.0,
            seed: Some(42),
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_starts_empty() {
        let feed = NotificationFeed::start(NotificationConfig::default());
        assert_eq!(feed.snapshot(), NotificationsSnapshot::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_emits_on_each_tick_newest_first() {
        let feed = NotificationFeed::start(always_emit());
        let mut rx = feed.subscribe();
        let snap = rx.wait_for(|s| s.items.len() == 3).await.unwrap().clone();
        assert_eq!(snap.unread, 3);
        assert!(snap.items[0].created_at >= snap.items[2].created_at);
    }

    #[tokio::test(start_paused = true)]
    async fn test_never_emits_at_zero_probability() {
        let feed = NotificationFeed::start(NotificationConfig {
            probability: 0.0,
            seed: Some(1),
            ..Default::default()
        });
        tokio::time::sleep(Duration::from_secs(600)).await;
        assert!(feed.snapshot().items.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_capped_at_capacity() {
        let feed = NotificationFeed::start(NotificationConfig {
            capacity: 5,
            ..always_emit()
        });
        tokio::time::sleep(Duration::from_secs(10 * 12)).await;
        let snap = feed.snapshot();
        assert_eq!(snap.items.len(), 5);
        assert_eq!(snap.unread, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_commands() {
        let feed = NotificationFeed::start(always_emit());
        let mut rx = feed.subscribe();
        let snap = rx.wait_for(|s| s.items.len() == 2).await.unwrap().clone();

        feed.mark_read(snap.items[1].id).await;
        let after = rx.wait_for(|s| s.unread == 1).await.unwrap().clone();
        assert!(after.items.iter().find(|n| n.id == snap.items[1].id).unwrap().read);

        feed.mark_read(Uuid::new_v4()).await;
        feed.mark_all_read().await;
        rx.wait_for(|s| s.unread == 0).await.unwrap();

        feed.clear_all().await;
        let cleared = rx.wait_for(|s| s.items.is_empty()).await.unwrap().clone();
        assert_eq!(cleared.unread, 0);
    }
}
