//! Accent color helpers for the backdrop.
//!
//! Terminal cells carry no alpha channel, so translucency against the dark
//! backdrop is approximated by scaling the accent channels toward black.
//! The two fixed-alpha colors used every frame are precomputed.

use ratatui::style::Color;

/// Accent RGB channels (emerald).
const ACCENT: (u8, u8, u8) = (16, 185, 129);

/// Grid stroke color: accent at 0.1 alpha.
pub const GRID_COLOR: Color = Color::Rgb(1, 18, 12);

/// Particle glow color: accent at 0.5 alpha.
pub const GLOW_COLOR: Color = Color::Rgb(8, 92, 64);

/// Accent scaled by `alpha`, clamped to `[0, 1]`.
pub fn accent(alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    Color::Rgb(
        (ACCENT.0 as f32 * a) as u8,
        (ACCENT.1 as f32 * a) as u8,
        (ACCENT.2 as f32 * a) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_full_and_clamped() {
        assert_eq!(accent(1.0), Color::Rgb(16, 185, 129));
        assert_eq!(accent(2.0), Color::Rgb(16, 185, 129));
        assert_eq!(accent(-0.5), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_precomputed_colors_match_formula() {
        assert_eq!(accent(0.1), GRID_COLOR);
        assert_eq!(accent(0.5), GLOW_COLOR);
    }
}
