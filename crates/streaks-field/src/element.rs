//! Placed streaks and the shared handle to the current set.

use std::sync::{Arc, RwLock};

/// Handle to one streak in one generation of the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId {
    pub generation: u64,
    pub index: usize,
}

/// A single streak placed on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedElement {
    pub id: ElementId,
    pub x: f32,
    pub y: f32,
    /// Current rotation in degrees. Grows without wrapping.
    pub rotation: f32,
    /// Rotation before the most recent flip.
    pub previous_rotation: f32,
    /// Elapsed time in milliseconds when the most recent flip started.
    pub turned_at_ms: Option<u64>,
}

impl PlacedElement {
    pub fn new(id: ElementId, x: f32, y: f32, rotation: f32) -> Self {
        Self {
            id,
            x,
            y,
            rotation,
            previous_rotation: rotation,
            turned_at_ms: None,
        }
    }

    /// Add `delta` degrees to the rotation, remembering where it started.
    pub fn turn(&mut self, delta: f32, now_ms: u64) {
        self.previous_rotation = self.rotation;
        self.rotation += delta;
        self.turned_at_ms = Some(now_ms);
    }

    /// Rotation to draw at `now_ms`, easing across a flip of `transition_ms`.
    pub fn displayed_rotation(&self, now_ms: u64, transition_ms: u64) -> f32 {
        let Some(start) = self.turned_at_ms else {
            return self.rotation;
        };
        if transition_ms == 0 {
            return self.rotation;
        }
        let progress = now_ms.saturating_sub(start) as f32 / transition_ms as f32;
        if progress >= 1.0 {
            return self.rotation;
        }
        let eased = ease_in_out(progress);
        self.previous_rotation + (self.rotation - self.previous_rotation) * eased
    }
}

/// Cubic ease-in-out over `t` in [0, 1].
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Default)]
struct Inner {
    generation: u64,
    elements: Vec<PlacedElement>,
}

/// Shared, swappable set of placed streaks.
///
/// Clones share the same set. Whole-set replacement happens under one write
/// lock, so readers never observe a partially built set.
#[derive(Debug, Clone, Default)]
pub struct ElementSet {
    inner: Arc<RwLock<Inner>>,
}

impl ElementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation the next [`replace`](Self::replace) will install.
    pub fn next_generation(&self) -> u64 {
        self.inner.read().map(|inner| inner.generation + 1).unwrap_or(1)
    }

    /// Current generation. Zero until the first replacement.
    pub fn generation(&self) -> u64 {
        self.inner.read().map(|inner| inner.generation).unwrap_or(0)
    }

    /// Discard the current set and install `elements` as `generation`.
    pub fn replace(&self, generation: u64, elements: Vec<PlacedElement>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.generation = generation;
            inner.elements = elements;
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.elements.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handle of the element at `index` in the current generation.
    pub fn id_at(&self, index: usize) -> Option<ElementId> {
        let inner = self.inner.read().ok()?;
        inner.elements.get(index).map(|element| element.id)
    }

    /// Apply `f` to the element behind `id`.
    ///
    /// Returns `None` if the handle belongs to a discarded generation.
    pub fn update<T>(&self, id: ElementId, f: impl FnOnce(&mut PlacedElement) -> T) -> Option<T> {
        let mut inner = self.inner.write().ok()?;
        if inner.generation != id.generation {
            return None;
        }
        inner.elements.get_mut(id.index).map(f)
    }

    /// Copy of the current set.
    pub fn snapshot(&self) -> Vec<PlacedElement> {
        self.inner
            .read()
            .map(|inner| inner.elements.clone())
            .unwrap_or_default()
    }

    /// Run `f` over the current set without copying it.
    pub fn with_elements<T>(&self, f: impl FnOnce(&[PlacedElement]) -> T) -> T {
        match self.inner.read() {
            Ok(inner) => f(&inner.elements),
            Err(_) => f(&[]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(generation: u64, index: usize, rotation: f32) -> PlacedElement {
        PlacedElement::new(ElementId { generation, index }, index as f32, 0.0, rotation)
    }

    #[test]
    fn test_replace_bumps_generation() {
        let set = ElementSet::new();
        assert_eq!(set.generation(), 0);
        assert!(set.is_empty());
        assert_eq!(set.next_generation(), 1);

        set.replace(1, vec![element(1, 0, 10.0), element(1, 1, 20.0)]);
        assert_eq!(set.generation(), 1);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.next_generation(), 2);
    }

    #[test]
    fn test_stale_id_is_ignored() {
        let set = ElementSet::new();
        set.replace(1, vec![element(1, 0, 10.0)]);
        let old = set.id_at(0).unwrap();

        set.replace(2, vec![element(2, 0, 50.0)]);
        assert_eq!(set.update(old, |e| e.turn(180.0, 0)), None);
        assert_eq!(set.snapshot()[0].rotation, 50.0);
    }

    #[test]
    fn test_clones_share_the_set() {
        let set = ElementSet::new();
        let reader = set.clone();
        set.replace(1, vec![element(1, 0, 0.0)]);
        assert_eq!(reader.len(), 1);

        let id = reader.id_at(0).unwrap();
        reader.update(id, |e| e.turn(180.0, 5));
        assert_eq!(set.snapshot()[0].rotation, 180.0);
    }

    #[test]
    fn test_turn_accumulates_without_wrapping() {
        let mut e = element(1, 0, 300.0);
        e.turn(180.0, 0);
        e.turn(180.0, 10);
        assert_eq!(e.rotation, 660.0);
        assert_eq!(e.previous_rotation, 480.0);
        assert_eq!(e.turned_at_ms, Some(10));
    }

    #[test]
    fn test_displayed_rotation_eases_between_endpoints() {
        let mut e = element(1, 0, 90.0);
        assert_eq!(e.displayed_rotation(0, 1000), 90.0);

        e.turn(180.0, 1000);
        assert_eq!(e.displayed_rotation(1000, 1000), 90.0);
        assert_eq!(e.displayed_rotation(1500, 1000), 180.0);
        assert_eq!(e.displayed_rotation(2000, 1000), 270.0);
        assert_eq!(e.displayed_rotation(9000, 1000), 270.0);
        assert_eq!(e.displayed_rotation(1200, 0), 270.0);
    }
}
