//! Traffic sources breakdown widget.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::TrafficSource;
use crate::ui::theme;
use crate::ui::widgets::{meter_spans, truncate_label};

/// Columns reserved for the source name.
const NAME_WIDTH: usize = 16;

pub fn render(frame: &mut Frame, area: Rect, sources: &[TrafficSource]) {
    let block = Block::default()
        .title("Traffic Sources")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width < NAME_WIDTH as u16 + 10 {
        return;
    }

    // name | meter | right-aligned percentage
    let meter_width = inner.width.saturating_sub(NAME_WIDTH as u16 + 10);

    let mut lines = Vec::new();
    for (index, source) in sources.iter().enumerate() {
        let color = theme::SERIES_COLORS[index % theme::SERIES_COLORS.len()];
        let mut spans = vec![
            Span::styled("\u{25cf} ", Style::default().fg(color)),
            Span::styled(
                format!(
                    "{:<width$}",
                    truncate_label(&source.source, NAME_WIDTH - 2),
                    width = NAME_WIDTH - 2
                ),
                Style::default().fg(theme::COLOR_HEADER),
            ),
        ];
        spans.extend(meter_spans(source.percentage / 100.0, meter_width, color));
        spans.push(Span::styled(
            format!("{:>7.1}%", source.percentage),
            Style::default().fg(theme::COLOR_DIM),
        ));
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
