//! Fallback screens.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::ui::layout::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use crate::ui::theme;

/// Shown when the terminal is below the minimum usable size.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled("Terminal too small", Style::default().fg(theme::COLOR_HEADER)),
        Line::styled(
            format!(
                "Resize to at least {}x{}",
                MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT
            ),
            Style::default().fg(theme::COLOR_DIM),
        ),
    ];
    let y = area.y + area.height.saturating_sub(2) / 2;
    let target = Rect::new(area.x, y, area.width, 2.min(area.height));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}
