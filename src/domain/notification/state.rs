//! Notification state container: app-owned, crate-provided update logic.

use super::{Notification, CATALOG, EMISSION_PROBABILITY, NOTIFICATION_CAPACITY};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::VecDeque;
use uuid::Uuid;

/// Capped, newest-first list of notifications with read tracking.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationCenter {
    items: VecDeque<Notification>,
    capacity: usize,
    emission_probability: f64,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NOTIFICATION_CAPACITY, EMISSION_PROBABILITY)
    }
}

impl NotificationCenter {
    pub fn new(capacity: usize, emission_probability: f64) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
            emission_probability: emission_probability.clamp(0.0, 1.0),
        }
    }

    /// One simulator step: with the configured probability, pick a template
    /// uniformly and prepend it. Returns the new notification, if any.
    pub fn emission_check<R: Rng + ?Sized>(
        &mut self,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Option<&Notification> {
        let draw: f64 = rng.gen();
        if draw < 1.0 - self.emission_probability {
            return None;
        }
        let template = &CATALOG[rng.gen_range(0..CATALOG.len())];
        self.push(Notification::from_template(template, now));
        self.items.front()
    }

    /// Prepend a notification, dropping the oldest beyond capacity.
    pub fn push(&mut self, notification: Notification) {
        self.items.push_front(notification);
        self.items.truncate(self.capacity);
    }

    /// Mark one notification read. Returns `false` if the id is unknown.
    pub fn mark_read(&mut self, id: Uuid) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in self.items.iter_mut() {
            n.read = true;
        }
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn get(&self, id: Uuid) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn notifications(&self) -> &VecDeque<Notification> {
        &self.items
    }

    /// Owned copy, newest first.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.items.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.front()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
