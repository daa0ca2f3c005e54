//! Glyphs used to draw streaks.

/// Arrows ordered clockwise on screen, starting at 0° (pointing right).
pub const STREAK_ARROWS: [char; 8] = ['→', '↘', '↓', '↙', '←', '↖', '↑', '↗'];

/// Arrow closest to `degrees`, for any unbounded angle.
pub fn arrow_for(degrees: f32) -> char {
    let sector = 360.0 / STREAK_ARROWS.len() as f32;
    let normalized = degrees.rem_euclid(360.0);
    let index = ((normalized + sector / 2.0) / sector).floor() as usize % STREAK_ARROWS.len();
    STREAK_ARROWS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_for_cardinal_angles() {
        assert_eq!(arrow_for(0.0), '→');
        assert_eq!(arrow_for(90.0), '↓');
        assert_eq!(arrow_for(180.0), '←');
        assert_eq!(arrow_for(270.0), '↑');
        assert_eq!(arrow_for(359.0), '→');
    }

    #[test]
    fn test_arrow_for_unbounded_angles() {
        assert_eq!(arrow_for(720.0 + 45.0), '↘');
        assert_eq!(arrow_for(-90.0), '↑');
        assert_eq!(arrow_for(10.0 + 180.0 * 7.0), arrow_for(190.0));
    }

    #[test]
    fn test_half_turn_reverses_arrow() {
        for (i, &arrow) in STREAK_ARROWS.iter().enumerate() {
            let angle = i as f32 * 45.0;
            let opposite = STREAK_ARROWS[(i + 4) % 8];
            assert_eq!(arrow_for(angle), arrow);
            assert_eq!(arrow_for(angle + 180.0), opposite);
        }
    }
}
