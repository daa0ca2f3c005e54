//! Grid constants for streak placement.

use serde::{Deserialize, Serialize};

/// Spacing and scatter of the streak grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Horizontal distance between grid points.
    pub cell_width: f32,
    /// Vertical distance between grid points.
    pub cell_height: f32,
    /// Upper bound of the random offset added on each axis. Zero disables it.
    pub jitter: f32,
    /// Space reserved on every viewport edge before counting cells.
    pub margin: f32,
    /// Fixed offset added to every y coordinate.
    pub vertical_bias: f32,
}

impl GridSpec {
    pub const fn new(cell_width: f32, cell_height: f32, jitter: f32, margin: f32) -> Self {
        Self {
            cell_width,
            cell_height,
            jitter,
            margin,
            vertical_bias: 0.0,
        }
    }

    pub const fn with_vertical_bias(mut self, bias: f32) -> Self {
        self.vertical_bias = bias;
        self
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        // Terminal cells are roughly twice as tall as wide.
        Self::new(9.0, 4.0, 2.0, 1.0)
    }
}
