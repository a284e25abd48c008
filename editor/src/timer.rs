//! Cancelable single-shot delayed task.
//!
//! The task is cooperative: nothing runs on another thread. The host either
//! polls with the current time ([`DelayedTask::poll`]) or arms its own
//! event-loop timer for [`DelayedTask::deadline`] and reports back with the
//! handle it was given ([`DelayedTask::fire`]). Scheduling again while a task
//! is pending supersedes it, so at most one firing is ever outstanding and a
//! stale handle never fires.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::time::{Duration, Instant};

/// Identifies one scheduling of a [`DelayedTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    handle: TaskHandle,
    deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct DelayedTask {
    delay: Duration,
    pending: Option<Pending>,
    generation: u64,
}

impl DelayedTask {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None, generation: 0 }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start (or restart) the countdown from `now`.
    pub fn schedule(&mut self, now: Instant) -> TaskHandle {
        self.generation += 1;
        let handle = TaskHandle(self.generation);
        self.pending = Some(Pending { handle, deadline: now + self.delay });
        handle
    }

    /// Drop the pending firing, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending task is due.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Fire the pending task if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<TaskHandle> {
        let pending = self.pending?;
        if now < pending.deadline {
            return None;
        }
        self.pending = None;
        Some(pending.handle)
    }

    /// Fire the task identified by `handle`. Returns false for superseded or
    /// already-fired handles.
    pub fn fire(&mut self, handle: TaskHandle) -> bool {
        match self.pending {
            Some(p) if p.handle == handle => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
