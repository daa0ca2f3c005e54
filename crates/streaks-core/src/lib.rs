//! Core types shared by the streaks crates.

mod geometry;
mod grid;
mod theme;
mod timing;

pub use geometry::{Bounds, Insets, Viewport};
pub use grid::GridSpec;
pub use theme::ColorTheme;
pub use timing::{RebuildPolicy, Timing};
