//! Deferred dimension recompute queue
//!
//! Panel toggles trigger a CSS-driven transition; recomputing the plot
//! width before it settles reads a stale container size, so the recompute
//! is deferred by a short fixed delay. The queue keeps at most one pending
//! recompute per instance (last scheduled wins) and an instance's removal
//! cancels its entry, so an in-flight recompute for a removed instance is
//! a harmless no-op. Single-threaded: the host event loop drives
//! `drain_due`.

use geostress_shared::PlotDimensions;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct PendingRecompute {
    due: Instant,
    dims: PlotDimensions,
}

/// Timer wheel for deferred per-instance dimension recomputes.
#[derive(Default)]
pub struct RecomputeQueue {
    pending: HashMap<String, PendingRecompute>,
}

impl RecomputeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a recompute for an instance. A second schedule before the
    /// first fires replaces it; only the last one runs.
    pub fn schedule(&mut self, instance_id: &str, dims: PlotDimensions, delay: Duration) {
        let entry = PendingRecompute {
            due: Instant::now() + delay,
            dims,
        };
        if self.pending.insert(instance_id.to_string(), entry).is_some() {
            log::debug!("replacing pending recompute for instance {instance_id}");
        }
    }

    /// Drop any pending recompute for an instance (called on removal).
    pub fn cancel(&mut self, instance_id: &str) {
        self.pending.remove(instance_id);
    }

    /// Pop every recompute whose timer has fired, ordered by due time.
    pub fn drain_due(&mut self, now: Instant) -> Vec<(String, PlotDimensions)> {
        let due_ids: Vec<String> = self
            .pending
            .iter()
            .filter(|(_, entry)| entry.due <= now)
            .map(|(id, _)| id.clone())
            .collect();

        let mut fired: Vec<(Instant, String, PlotDimensions)> = due_ids
            .into_iter()
            .filter_map(|id| self.pending.remove(&id).map(|e| (e.due, id, e.dims)))
            .collect();
        fired.sort_by_key(|(due, _, _)| *due);
        fired.into_iter().map(|(_, id, dims)| (id, dims)).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
