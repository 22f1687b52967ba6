//! Colour helpers shared by the backdrop and the page.

use ratatui::style::Color;

/// The page's fixed palette.
pub struct Palette;

impl Palette {
    /// Near-black page background.
    pub const BACKDROP: (u8, u8, u8) = (10, 10, 10);
    /// Gold accent.
    pub const GOLD: Color = Color::Rgb(201, 162, 39);
    /// Body text.
    pub const FOREGROUND: Color = Color::Rgb(235, 230, 220);
    /// Secondary text.
    pub const MUTED: Color = Color::Rgb(140, 136, 128);
    /// Panel borders and rules.
    pub const BORDER: Color = Color::Rgb(60, 56, 48);
}

/// An RGB colour with a straight (non-premultiplied) alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Composite this colour over an opaque background.
    pub fn over(self, background: (u8, u8, u8)) -> Color {
        let (r, g, b) = blend((self.r, self.g, self.b), background, self.a);
        Color::Rgb(r, g, b)
    }
}

/// Linear blend of `fg` over `bg` with weight `alpha` (clamped to 0.0-1.0).
pub fn blend(fg: (u8, u8, u8), bg: (u8, u8, u8), alpha: f32) -> (u8, u8, u8) {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * alpha).round() as u8;
    (mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
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
    fn test_blend_extremes() {
        assert_eq!(blend((200, 100, 50), (0, 0, 0), 1.0), (200, 100, 50));
        assert_eq!(blend((200, 100, 50), (10, 10, 10), 0.0), (10, 10, 10));
        assert_eq!(blend((200, 200, 200), (0, 0, 0), 0.5), (100, 100, 100));
        // Out-of-range alpha is clamped
        assert_eq!(blend((200, 100, 50), (0, 0, 0), 3.0), (200, 100, 50));
    }

    #[test]
    fn test_rgba_over_backdrop() {
        let gold = Rgba::new(201, 162, 39, 1.0);
        assert_eq!(gold.over(Palette::BACKDROP), Color::Rgb(201, 162, 39));
        let clear = Rgba::new(201, 162, 39, 0.0);
        assert_eq!(clear.over(Palette::BACKDROP), Color::Rgb(10, 10, 10));
    }

    #[test]
    fn test_hsl_gray() {
        assert_eq!(hsl_to_rgb(43.0, 0.0, 0.5), Color::Rgb(127, 127, 127));
    }
}
