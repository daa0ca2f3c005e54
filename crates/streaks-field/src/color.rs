//! Color utility functions for streaks.

use ratatui::style::Color;
use streaks_core::ColorTheme;

/// Map a rotation to a color near the theme hue.
///
/// The hue swings up to 40° either side of the theme hue with the angle.
/// Streaks in the middle of a flip are drawn brighter.
pub fn rotation_to_color(degrees: f32, theme: ColorTheme, turning: bool) -> Color {
    let swing = degrees.to_radians().sin() * 40.0;
    let hue = (theme.hue() + swing).rem_euclid(360.0);
    let lightness = if turning { 0.65 } else { 0.35 };

    hsl_to_rgb(hue, theme.saturation(), lightness)
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_grey_and_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.5), Color::Rgb(127, 127, 127));
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Color::Rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Color::Rgb(0, 255, 0));
    }

    #[test]
    fn test_turning_streaks_are_brighter() {
        let brightness = |c: Color| match c {
            Color::Rgb(r, g, b) => r as u32 + g as u32 + b as u32,
            _ => 0,
        };
        let idle = rotation_to_color(30.0, ColorTheme::Cyan, false);
        let turning = rotation_to_color(30.0, ColorTheme::Cyan, true);
        assert!(brightness(turning) > brightness(idle));
    }
}
