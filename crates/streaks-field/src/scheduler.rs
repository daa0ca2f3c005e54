//! Flip scheduler: turns one random streak by half a turn, forever.

use log::trace;
use rand::Rng;
use streaks_core::Timing;

use crate::element::{ElementId, ElementSet};

/// Degrees added to a streak on every flip.
pub const FLIP_DEGREES: f32 = 180.0;

/// Self-rescheduling flip timer driven by the event loop.
///
/// The scheduler never stops. Each cycle flips at most one streak, then
/// waits for the transition duration plus a random pause.
#[derive(Debug)]
pub struct Scheduler<R> {
    elements: ElementSet,
    timing: Timing,
    rng: R,
    /// Elapsed time of the next cycle. `None` until the first poll.
    next_fire_ms: Option<u64>,
}

impl<R: Rng> Scheduler<R> {
    pub fn new(elements: ElementSet, timing: Timing, rng: R) -> Self {
        Self {
            elements,
            timing,
            rng,
            next_fire_ms: None,
        }
    }

    /// Elapsed time at which the next cycle is due.
    pub fn next_fire_ms(&self) -> Option<u64> {
        self.next_fire_ms
    }

    /// Run the cycle that is due at `now_ms`, if any.
    ///
    /// The first poll fires immediately. The next deadline is measured from
    /// `now_ms`, so a late poll delays the following cycle instead of
    /// bunching them up. Returns the streak that flipped.
    pub fn poll(&mut self, now_ms: u64) -> Option<ElementId> {
        if self.next_fire_ms.is_some_and(|due| due > now_ms) {
            return None;
        }
        let (flipped, delay_ms) = self.tick(now_ms);
        self.next_fire_ms = Some(now_ms.saturating_add(delay_ms.max(1)));
        flipped
    }

    /// Run one cycle at `now_ms`: flip a random streak and draw the next delay.
    ///
    /// An empty set is a no-op cycle that still yields a delay.
    pub fn tick(&mut self, now_ms: u64) -> (Option<ElementId>, u64) {
        let flipped = self.flip_random(now_ms);
        let delay_ms = self.next_delay_ms();
        trace!(
            "event=flip_tick at_ms={} flipped={:?} next_in_ms={}",
            now_ms, flipped, delay_ms
        );
        (flipped, delay_ms)
    }

    fn flip_random(&mut self, now_ms: u64) -> Option<ElementId> {
        let len = self.elements.len();
        if len == 0 {
            return None;
        }
        let index = self.rng.gen_range(0..len);
        // The set may have been swapped since `len` was read.
        let id = self.elements.id_at(index)?;
        self.elements
            .update(id, |element| element.turn(FLIP_DEGREES, now_ms))
            .map(|()| id)
    }

    fn next_delay_ms(&mut self) -> u64 {
        let (min, max) = self.timing.pause_range_ms();
        let pause = if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        };
        self.timing.transition_ms.saturating_add(pause)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::element::PlacedElement;

    fn elements(generation: u64, count: usize) -> Vec<PlacedElement> {
        (0..count)
            .map(|index| {
                let id = ElementId { generation, index };
                PlacedElement::new(id, index as f32, 0.0, index as f32 * 10.0)
            })
            .collect()
    }

    fn filled_set(count: usize) -> ElementSet {
        let set = ElementSet::new();
        set.replace(1, elements(1, count));
        set
    }

    fn scheduler(set: &ElementSet, seed: u64) -> Scheduler<StdRng> {
        Scheduler::new(set.clone(), Timing::default(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_tick_flips_exactly_one_by_half_turn() {
        let set = filled_set(12);
        let mut sched = scheduler(&set, 3);

        for step in 0..50 {
            let before = set.snapshot();
            let (id, _) = sched.tick(step * 100);
            let after = set.snapshot();
            let id = id.unwrap();

            let changed: Vec<_> = before
                .iter()
                .zip(&after)
                .filter(|(b, a)| b.rotation != a.rotation)
                .collect();
            assert_eq!(changed.len(), 1);
            let (b, a) = changed[0];
            assert_eq!(a.id, id);
            assert_eq!(a.rotation - b.rotation, 180.0);
        }
    }

    #[test]
    fn test_untouched_streaks_keep_rotation() {
        let set = filled_set(5);
        let mut sched = scheduler(&set, 11);
        let mut flips = [0u32; 5];
        for step in 0..40 {
            if let (Some(id), _) = sched.tick(step) {
                flips[id.index] += 1;
            }
        }

        for (element, count) in set.snapshot().iter().zip(flips) {
            let start = element.id.index as f32 * 10.0;
            assert_eq!(element.rotation, start + 180.0 * count as f32);
        }
        assert_eq!(flips.iter().sum::<u32>(), 40);
    }

    #[test]
    fn test_delay_is_transition_plus_pause() {
        let set = filled_set(3);
        let mut sched = scheduler(&set, 1);
        for step in 0..100 {
            let (_, delay) = sched.tick(step);
            assert!((3000..5000).contains(&delay), "delay={delay}");
        }
    }

    #[test]
    fn test_fixed_pause_when_range_is_empty() {
        let set = filled_set(1);
        let timing = Timing {
            transition_ms: 200,
            min_pause_ms: 50,
            max_pause_ms: 50,
        };
        let mut sched = Scheduler::new(set, timing, StdRng::seed_from_u64(0));
        assert_eq!(sched.tick(0).1, 250);
    }

    #[test]
    fn test_huge_timing_saturates() {
        let set = filled_set(2);
        let timing = Timing {
            transition_ms: u64::MAX - 10,
            min_pause_ms: 100,
            max_pause_ms: 200,
        };
        let mut sched = Scheduler::new(set, timing, StdRng::seed_from_u64(0));

        assert!(sched.poll(5).is_some());
        assert_eq!(sched.next_fire_ms(), Some(u64::MAX));
        assert_eq!(sched.tick(5).1, u64::MAX);
        assert_eq!(sched.poll(1_000_000), None);
    }

    #[test]
    fn test_empty_set_still_reschedules() {
        let set = ElementSet::new();
        let mut sched = scheduler(&set, 2);

        assert_eq!(sched.poll(0), None);
        let next = sched.next_fire_ms().unwrap();
        assert!(next >= 3000);

        assert_eq!(sched.poll(next), None);
        assert!(sched.next_fire_ms().unwrap() > next);
    }

    #[test]
    fn test_first_poll_fires_immediately() {
        let set = filled_set(4);
        let mut sched = scheduler(&set, 8);
        assert!(sched.poll(0).is_some());
        assert_eq!(sched.poll(1), None);
    }

    #[test]
    fn test_late_poll_reschedules_from_now() {
        let set = filled_set(4);
        let timing = Timing {
            transition_ms: 100,
            min_pause_ms: 0,
            max_pause_ms: 0,
        };
        let mut sched = Scheduler::new(set, timing, StdRng::seed_from_u64(4));

        assert!(sched.poll(0).is_some());
        assert_eq!(sched.next_fire_ms(), Some(100));
        assert!(sched.poll(550).is_some());
        assert_eq!(sched.next_fire_ms(), Some(650));
        assert_eq!(sched.poll(600), None);
    }

    #[test]
    fn test_picks_up_replaced_set() {
        let set = filled_set(2);
        let mut sched = scheduler(&set, 6);
        sched.tick(0);

        set.replace(2, Vec::new());
        assert_eq!(sched.tick(1).0, None);

        set.replace(3, elements(3, 3));
        let (id, _) = sched.tick(2);
        assert_eq!(id.map(|id| id.generation), Some(3));
    }
}
