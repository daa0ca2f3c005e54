//! Decorative streak field for the streaks backdrop.
//!
//! The field is a centered grid of rotating glyphs that keeps clear of a
//! content rectangle. [`GridLayout`] rebuilds the set of placed streaks
//! whenever the layout is invalidated, [`Scheduler`] flips one random streak
//! by half a turn at randomized intervals, and [`RebuildTrigger`] debounces
//! resize bursts before a rebuild. [`FieldState`] draws the set into a frame.

mod chars;
mod color;
mod element;
mod layout;
mod scheduler;
mod state;
mod trigger;

pub use color::{hsl_to_rgb, rotation_to_color};
pub use element::{ElementId, ElementSet, PlacedElement};
pub use layout::{GridLayout, LayoutSummary, place};
pub use scheduler::Scheduler;
pub use state::FieldState;
pub use trigger::{Debouncer, RebuildTrigger};
