//! Backdrop lifecycle and frame rasterization.

use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::chars::{GLOW_CHAR, GRID_CROSSING, GRID_HORIZONTAL, GRID_VERTICAL, PARTICLE_CHARS};
use crate::color::{self, GLOW_COLOR, GRID_COLOR};
use crate::grid;
use crate::particles::ParticleField;

/// Horizontal pixels represented by one terminal cell.
const CELL_PX_W: f32 = 10.0;

/// Vertical pixels represented by one terminal cell.
const CELL_PX_H: f32 = 20.0;

/// Radius of the glow halo around a particle, in pixels.
const GLOW_RADIUS: f32 = 20.0;

/// One rasterized cell: a glyph and its color, or empty.
type CellPaint = Option<(char, Color)>;

/// The animated dashboard backdrop.
///
/// Owns the particle collection for its mounted lifetime. While unmounted
/// (never mounted, the surface was unavailable at startup, or after
/// [`Backdrop::unmount`]) every render is a silent no-op.
#[derive(Debug, Default)]
pub struct Backdrop {
    field: Option<ParticleField>,
}

impl Backdrop {
    /// Create an unmounted backdrop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin animating: create the particle field sized to the surface.
    ///
    /// `width` and `height` are the surface size in cells.
    pub fn mount(&mut self, width: u16, height: u16) {
        self.field = Some(ParticleField::new(
            f32::from(width) * CELL_PX_W,
            f32::from(height) * CELL_PX_H,
        ));
    }

    /// Begin animating with an explicit seed. Same seed, same frames.
    pub fn mount_with_seed(&mut self, width: u16, height: u16, seed: u64) {
        self.field = Some(ParticleField::with_seed(
            f32::from(width) * CELL_PX_W,
            f32::from(height) * CELL_PX_H,
            seed,
        ));
    }

    /// Stop animating and discard the particle collection.
    pub fn unmount(&mut self) {
        self.field = None;
    }

    /// Whether the backdrop currently owns a particle field.
    pub fn is_mounted(&self) -> bool {
        self.field.is_some()
    }

    /// Advance one frame and paint it across the whole frame area.
    ///
    /// Surface dimensions are read from `frame` here, at the point of use,
    /// so a resize between frames is picked up immediately. The particle
    /// field itself is never recreated on resize; wraparound pulls strays
    /// back inside the new bounds on this very update.
    pub fn render(&mut self, frame: &mut Frame, elapsed_ms: u64) {
        let Some(field) = &mut self.field else {
            return;
        };

        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }
        let surface_w = f32::from(area.width) * CELL_PX_W;
        let surface_h = f32::from(area.height) * CELL_PX_H;

        field.update(surface_w, surface_h, elapsed_ms);

        // Painter's order: grid strokes first, particles over them.
        let mut cells: Vec<Vec<CellPaint>> =
            vec![vec![None; area.width as usize]; area.height as usize];
        paint_grid(&mut cells, surface_w, surface_h, elapsed_ms);
        paint_particles(&mut cells, field);

        let lines: Vec<Line> = cells
            .iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| match cell {
                        Some((glyph, fg)) => {
                            Span::styled(glyph.to_string(), Style::new().fg(*fg))
                        }
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Stroke the swaying grid lines into the cell buffer.
fn paint_grid(cells: &mut [Vec<CellPaint>], surface_w: f32, surface_h: f32, elapsed_ms: u64) {
    let rows = cells.len();
    let cols = cells[0].len();

    for anchor in grid::line_anchors(surface_w) {
        let x = anchor + grid::vertical_line_sway(elapsed_ms, anchor);
        let col = (x / CELL_PX_W).round();
        if col < 0.0 || col >= cols as f32 {
            continue;
        }
        let col = col as usize;
        for row in cells.iter_mut() {
            row[col] = Some((GRID_VERTICAL, GRID_COLOR));
        }
    }

    for anchor in grid::line_anchors(surface_h) {
        let y = anchor + grid::horizontal_line_sway(elapsed_ms, anchor);
        let row = (y / CELL_PX_H).round();
        if row < 0.0 || row >= rows as f32 {
            continue;
        }
        for cell in &mut cells[row as usize] {
            // Horizontal strokes paint over vertical ones; mark crossings.
            *cell = match cell {
                Some((GRID_VERTICAL, _)) => Some((GRID_CROSSING, GRID_COLOR)),
                _ => Some((GRID_HORIZONTAL, GRID_COLOR)),
            };
        }
    }
}

/// Paint each particle as a glowing dot, in collection order.
fn paint_particles(cells: &mut [Vec<CellPaint>], field: &ParticleField) {
    let rows = cells.len();
    let cols = cells[0].len();

    // The halo never reaches further than the blur radius in either axis.
    let halo_cols = (GLOW_RADIUS / CELL_PX_W).ceil() as i32;
    let halo_rows = (GLOW_RADIUS / CELL_PX_H).ceil() as i32;

    for p in field.particles() {
        let col = ((p.x / CELL_PX_W) as usize).min(cols - 1);
        let row = ((p.y / CELL_PX_H) as usize).min(rows - 1);

        // Soft glow: cells within the blur radius of the centre. The halo
        // is recomputed per particle, so it cannot leak onto later draws.
        for dy in -halo_rows..=halo_rows {
            for dx in -halo_cols..=halo_cols {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (cx, cy) = (col as i32 + dx, row as i32 + dy);
                if cx < 0 || cy < 0 || cx >= cols as i32 || cy >= rows as i32 {
                    continue;
                }
                let (px, py) = (dx as f32 * CELL_PX_W, dy as f32 * CELL_PX_H);
                if px * px + py * py > GLOW_RADIUS * GLOW_RADIUS {
                    continue;
                }
                cells[cy as usize][cx as usize] = Some((GLOW_CHAR, GLOW_COLOR));
            }
        }

        // Body glyph by size band, brightness from the current pulse.
        let band = (p.size as usize).saturating_sub(1).min(PARTICLE_CHARS.len() - 1);
        cells[row][col] = Some((PARTICLE_CHARS[band], color::accent(p.opacity)));
    }
}
