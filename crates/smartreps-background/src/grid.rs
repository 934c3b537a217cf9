//! Rippling grid overlay (stateless).
//!
//! The grid is a pure function of elapsed time and surface size: vertical
//! lines sway horizontally on a sine curve, horizontal lines sway
//! vertically on a cosine curve, and nothing carries over between frames.

/// Distance between neighbouring grid lines, in pixels.
pub const GRID_SPACING: f32 = 50.0;

/// Peak sway offset, in pixels.
const SWAY_AMPLITUDE: f32 = 10.0;

/// Sway rate in radians per millisecond.
const SWAY_RATE: f32 = 0.0001;

/// Phase shift per pixel of line anchor position.
const SWAY_PHASE: f32 = 0.01;

/// Horizontal offset of the vertical grid line anchored at `x`.
pub fn vertical_line_sway(elapsed_ms: u64, x: f32) -> f32 {
    (elapsed_ms as f32 * SWAY_RATE + x * SWAY_PHASE).sin() * SWAY_AMPLITUDE
}

/// Vertical offset of the horizontal grid line anchored at `y`.
pub fn horizontal_line_sway(elapsed_ms: u64, y: f32) -> f32 {
    (elapsed_ms as f32 * SWAY_RATE + y * SWAY_PHASE).cos() * SWAY_AMPLITUDE
}

/// Anchor positions of the grid lines covering `0..extent`.
pub fn line_anchors(extent: f32) -> impl Iterator<Item = f32> {
    (0..)
        .map(|i| i as f32 * GRID_SPACING)
        .take_while(move |anchor| *anchor < extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sway_bounded_by_amplitude() {
        for ms in (0..100_000).step_by(137) {
            for anchor in [0.0, 50.0, 350.0, 750.0] {
                assert!(vertical_line_sway(ms, anchor).abs() <= SWAY_AMPLITUDE);
                assert!(horizontal_line_sway(ms, anchor).abs() <= SWAY_AMPLITUDE);
            }
        }
    }

    #[test]
    fn test_sway_deterministic_for_fixed_time() {
        assert_eq!(vertical_line_sway(5000, 100.0), vertical_line_sway(5000, 100.0));
        assert_eq!(horizontal_line_sway(5000, 100.0), horizontal_line_sway(5000, 100.0));
    }

    #[test]
    fn test_sway_at_time_zero_anchor_zero() {
        // sin(0) = 0, cos(0) = 1.
        assert_eq!(vertical_line_sway(0, 0.0), 0.0);
        assert_eq!(horizontal_line_sway(0, 0.0), SWAY_AMPLITUDE);
    }

    #[test]
    fn test_line_anchors_cover_surface() {
        let anchors: Vec<f32> = line_anchors(800.0).collect();
        assert_eq!(anchors.len(), 16);
        assert_eq!(anchors.first(), Some(&0.0));
        assert_eq!(anchors.last(), Some(&750.0));

        assert_eq!(line_anchors(0.0).count(), 0);
        // The line at the exact extent is not drawn, matching `anchor < extent`.
        assert_eq!(line_anchors(50.0).count(), 1);
    }
}
