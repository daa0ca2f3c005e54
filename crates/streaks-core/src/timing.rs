//! Animation and rebuild timing.

use serde::{Deserialize, Serialize};

/// Timing of the flip animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Length of one flip transition in milliseconds.
    pub transition_ms: u64,
    /// Shortest extra pause after a transition.
    pub min_pause_ms: u64,
    /// Longest extra pause after a transition (exclusive).
    pub max_pause_ms: u64,
}

impl Timing {
    /// Pause range with the bounds put in order.
    pub fn pause_range_ms(&self) -> (u64, u64) {
        if self.min_pause_ms <= self.max_pause_ms {
            (self.min_pause_ms, self.max_pause_ms)
        } else {
            (self.max_pause_ms, self.min_pause_ms)
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            transition_ms: 1500,
            min_pause_ms: 1500,
            max_pause_ms: 3500,
        }
    }
}

/// When a quiet resize burst leads to a layout rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RebuildPolicy {
    /// Rebuild after every burst.
    Always,
    /// Rebuild only when the width differs from the last build.
    #[default]
    WidthChange,
}
