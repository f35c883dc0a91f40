//! Debounce gate
//!
//! Holds at most one pending lookup per field kind. Submitting again for the
//! same kind replaces the pending lookup and restarts its quiet interval;
//! other kinds are unaffected. The gate never sleeps: the caller passes the
//! current `Instant` in and collects whatever has come due.

use std::time::{Duration, Instant};

use crate::field::{FieldKind, FieldMap};

/// Arguments of a lookup waiting for its quiet interval to pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub kind: FieldKind,
    pub query: String,
    pub limit: usize,
}

#[derive(Debug, Clone)]
struct Scheduled {
    lookup: PendingLookup,
    due: Instant,
}

#[derive(Debug, Clone)]
pub struct DebounceGate {
    quiet: Duration,
    pending: FieldMap<Option<Scheduled>>,
}

impl DebounceGate {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: FieldMap::default(),
        }
    }

    pub fn quiet_interval(&self) -> Duration {
        self.quiet
    }

    /// Record a keystroke, replacing any pending lookup for `kind`
    pub fn submit(&mut self, kind: FieldKind, query: &str, limit: usize, now: Instant) {
        self.pending[kind] = Some(Scheduled {
            lookup: PendingLookup {
                kind,
                query: query.to_string(),
                limit,
            },
            due: now + self.quiet,
        });
    }

    /// Drop the pending lookup for `kind`; returns whether one existed
    pub fn cancel(&mut self, kind: FieldKind) -> bool {
        self.pending[kind].take().is_some()
    }

    pub fn is_pending(&self, kind: FieldKind) -> bool {
        self.pending[kind].is_some()
    }

    /// Earliest instant at which `take_due` will return something
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
            .iter()
            .filter_map(|(_, scheduled)| scheduled.as_ref().map(|s| s.due))
            .min()
    }

    /// Remove and return every lookup whose quiet interval has elapsed
    pub fn take_due(&mut self, now: Instant) -> Vec<PendingLookup> {
        let mut due = Vec::new();
        for (_, slot) in self.pending.iter_mut() {
            if slot.as_ref().is_some_and(|s| s.due <= now)
                && let Some(scheduled) = slot.take()
            {
                due.push(scheduled.lookup);
            }
        }
        due
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
