//! Checkpoint
//!
//! A named, toggleable marker recording which threads have passed it.
//!
//! The enabled flag and the visited set are independent: recording never
//! consults the flag. Callers that want gating go through [`Checkpoint::pass_with`]
//! with a [`PassPolicy`] such as [`WhenEnabled`](crate::policy::WhenEnabled).

use super::types::{CheckpointSnapshot, ThreadSnapshot};
use crate::config::CheckpointConfig;
use crate::policy::PassPolicy;
use indexmap::IndexSet;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Identifier recorded for the calling thread.
///
/// The thread's name when it has one, otherwise the `Debug` form of its
/// `ThreadId` (e.g. `ThreadId(7)`).
pub fn current_thread_id() -> String {
    let thread = std::thread::current();
    match thread.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", thread.id()),
    }
}

#[derive(Debug, Default)]
struct Visits {
    threads: IndexSet<String>,
    total_passes: u64,
}

/// A named point in a concurrent program that records passing threads
#[derive(Debug)]
pub struct Checkpoint {
    name: String,
    enabled: AtomicBool,
    visits: Mutex<Visits>,
}

impl Checkpoint {
    /// Create a disabled checkpoint with no recorded threads
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: AtomicBool::new(false),
            visits: Mutex::new(Visits::default()),
        }
    }

    /// Set the initial enabled flag
    pub fn with_enabled(self, enabled: bool) -> Self {
        self.enabled.store(enabled, Ordering::Release);
        self
    }

    /// Build a checkpoint from its definition
    pub fn from_config(config: &CheckpointConfig) -> Self {
        Self::new(config.name.clone()).with_enabled(config.enabled)
    }

    /// Checkpoint name, fixed at construction
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Toggle the enabled flag. Last write wins.
    pub fn set_enabled(&self, enabled: bool) {
        let previous = self.enabled.swap(enabled, Ordering::AcqRel);
        if previous != enabled {
            debug!(checkpoint = %self.name, enabled, "Checkpoint toggled");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Threads recorded since creation or the last clear, in first-arrival order.
    ///
    /// The returned snapshot is not affected by later recording.
    pub fn pass_over_threads(&self) -> ThreadSnapshot {
        let visits = self.visits.lock();
        ThreadSnapshot::from(visits.threads.iter().cloned().collect::<Vec<_>>())
    }

    /// Record the calling thread. Returns `true` if it was not recorded yet.
    pub fn record_pass(&self) -> bool {
        self.record_pass_as(current_thread_id())
    }

    /// Record passage under an explicit identifier.
    /// Returns `true` if the identifier was not recorded yet.
    pub fn record_pass_as(&self, thread_id: impl Into<String>) -> bool {
        let thread_id = thread_id.into();
        let newly_added = {
            let mut visits = self.visits.lock();
            visits.total_passes += 1;
            if visits.threads.contains(&thread_id) {
                false
            } else {
                visits.threads.insert(thread_id.clone());
                true
            }
        };

        if newly_added {
            debug!(checkpoint = %self.name, thread = %thread_id, "Thread passed checkpoint");
        }
        newly_added
    }

    /// Record the calling thread if `policy` allows it.
    /// Returns whether passage was recorded.
    pub fn pass_with<P: PassPolicy + ?Sized>(&self, policy: &P) -> bool {
        if !policy.should_record(self) {
            return false;
        }
        self.record_pass();
        true
    }

    pub fn has_passed(&self, thread_id: &str) -> bool {
        self.visits.lock().threads.contains(thread_id)
    }

    /// Number of distinct recorded threads
    pub fn visited_count(&self) -> usize {
        self.visits.lock().threads.len()
    }

    /// Number of recording calls since the last clear, repeats included
    pub fn total_passes(&self) -> u64 {
        self.visits.lock().total_passes
    }

    /// Drop all recorded threads. The enabled flag is left as is.
    ///
    /// Best effort with respect to concurrent recorders: a thread recording
    /// while the clear runs may or may not survive it.
    pub fn clear(&self) {
        let dropped = {
            let mut visits = self.visits.lock();
            let dropped = visits.threads.len();
            visits.threads.clear();
            visits.total_passes = 0;
            dropped
        };
        info!(checkpoint = %self.name, dropped, "Checkpoint cleared");
    }

    /// Consistent view of the checkpoint for monitoring
    pub fn snapshot(&self) -> CheckpointSnapshot {
        let (threads, total_passes) = {
            let visits = self.visits.lock();
            (
                ThreadSnapshot::from(visits.threads.iter().cloned().collect::<Vec<_>>()),
                visits.total_passes,
            )
        };
        CheckpointSnapshot {
            name: self.name.clone(),
            enabled: self.is_enabled(),
            threads,
            total_passes,
        }
    }
}
