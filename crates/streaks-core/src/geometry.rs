//! Viewport and rectangle types in terminal cell coordinates.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// Size of the drawable area, read fresh on every layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<Rect> for Viewport {
    fn from(area: Rect) -> Self {
        Self::new(area.width as f32, area.height as f32)
    }
}

/// Amount to move each edge of a rectangle outward.
///
/// Negative values move the edge inward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    /// No adjustment on any edge.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Same inset on every edge.
    pub const fn uniform(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // Glyphs are one cell wide, so keep a column of air beside the card border.
        Self {
            left: 2.0,
            top: 1.0,
            right: 2.0,
            bottom: 1.0,
        }
    }
}

/// Axis-aligned rectangle given by its edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds covering the whole viewport.
    pub const fn of_viewport(viewport: Viewport) -> Self {
        Self::new(0.0, 0.0, viewport.width, viewport.height)
    }

    /// Grow each edge outward by the matching inset.
    pub fn expand(self, insets: Insets) -> Self {
        Self {
            left: self.left - insets.left,
            top: self.top - insets.top,
            right: self.right + insets.right,
            bottom: self.bottom + insets.bottom,
        }
    }

    /// Strict containment on both axes. Points on an edge are outside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > self.left && x < self.right && y > self.top && y < self.bottom
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.right() as f32,
            rect.bottom() as f32,
        )
    }
}
