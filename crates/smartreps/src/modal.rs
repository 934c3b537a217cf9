//! Generic modal overlay.
//!
//! The caller owns the open flag (an `Option` of whatever panel is
//! active) and closes the modal on Esc; this module only draws a centered
//! panel over cleared cells with the supplied content.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use smartreps_core::theme;

/// Draw a modal panel with `title` and `body` centered in the frame.
pub fn render(frame: &mut Frame, title: &str, body: &[Line<'_>]) {
    // Body height plus borders and a line of padding above and below.
    let height = (body.len() as u16).saturating_add(4);
    let area = centered_rect(frame.area(), 56, height);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(theme::ACCENT))
        .title(format!(" {title} "))
        .title_style(Style::new().fg(theme::ACCENT_BRIGHT))
        .title_bottom(Line::from(" Esc close ").right_aligned())
        .style(Style::new().bg(ratatui::style::Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body_area = Rect {
        y: inner.y.saturating_add(1),
        height: inner.height.saturating_sub(1),
        ..inner
    };
    let paragraph = Paragraph::new(body.to_vec())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, body_area);
}

/// A `width`-by-`height` rect centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 56, 10);
        assert_eq!(rect, Rect::new(22, 15, 56, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 8);
        let rect = centered_rect(area, 56, 10);
        assert_eq!(rect, Rect::new(0, 0, 30, 8));
    }

    #[test]
    fn test_centered_rect_respects_offset_area() {
        let area = Rect::new(10, 5, 40, 20);
        let rect = centered_rect(area, 20, 10);
        assert_eq!(rect, Rect::new(20, 10, 20, 10));
    }
}
