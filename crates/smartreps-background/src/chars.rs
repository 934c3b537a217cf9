//! Glyph constants for the backdrop.

/// Particle body glyphs, from smallest size band to largest.
pub const PARTICLE_CHARS: &[char] = &['∙', '•', '●'];

/// Glyph for the glow halo around a particle.
pub const GLOW_CHAR: char = '·';

/// Glyph for vertical grid strokes.
pub const GRID_VERTICAL: char = '│';

/// Glyph for horizontal grid strokes.
pub const GRID_HORIZONTAL: char = '─';

/// Glyph where a horizontal stroke crosses a vertical one.
pub const GRID_CROSSING: char = '┼';
