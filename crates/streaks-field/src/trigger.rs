//! Debounced layout invalidation.

use log::debug;
use streaks_core::{RebuildPolicy, Viewport};

/// One-shot timer that restarts on every signal.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window_ms: u64,
    deadline_ms: Option<u64>,
}

impl Debouncer {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            deadline_ms: None,
        }
    }

    /// Cancel any pending deadline and arm a new one at `now_ms + window`.
    pub fn signal(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.window_ms));
    }

    /// Drop the pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Returns true once when the deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

/// Decides when a resize burst should rebuild the layout.
#[derive(Debug, Clone)]
pub struct RebuildTrigger {
    debouncer: Debouncer,
    policy: RebuildPolicy,
    pending: Option<Viewport>,
    last_built: Option<Viewport>,
}

impl RebuildTrigger {
    pub fn new(window_ms: u64, policy: RebuildPolicy) -> Self {
        Self {
            debouncer: Debouncer::new(window_ms),
            policy,
            pending: None,
            last_built: None,
        }
    }

    /// Record a size change. Supersedes any earlier pending one.
    pub fn invalidate(&mut self, viewport: Viewport, now_ms: u64) {
        self.pending = Some(viewport);
        self.debouncer.signal(now_ms);
    }

    /// Viewport to rebuild for, once the burst has been quiet for the window.
    pub fn poll(&mut self, now_ms: u64) -> Option<Viewport> {
        if !self.debouncer.poll(now_ms) {
            return None;
        }
        let viewport = self.pending.take()?;
        if self.should_rebuild(viewport) {
            Some(viewport)
        } else {
            debug!(
                "event=rebuild_skipped width={} height={} reason=width_unchanged",
                viewport.width, viewport.height
            );
            None
        }
    }

    /// Record that a layout was built for `viewport`.
    pub fn mark_built(&mut self, viewport: Viewport) {
        self.last_built = Some(viewport);
    }

    fn should_rebuild(&self, viewport: Viewport) -> bool {
        let Some(last) = self.last_built else {
            return true;
        };
        match self.policy {
            RebuildPolicy::Always => true,
            RebuildPolicy::WidthChange => last.width != viewport.width,
        }
    }
}
