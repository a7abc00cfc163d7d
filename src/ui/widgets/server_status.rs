//! Server status widget: one health meter per metric.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::ServerMetric;
use crate::ui::theme;
use crate::ui::widgets::meter_spans;

pub fn render(frame: &mut Frame, area: Rect, metrics: &[ServerMetric]) {
    let block = Block::default()
        .title("Server Status")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width < 12 {
        return;
    }

    let mut lines = Vec::new();
    for metric in metrics {
        let color = theme::health_color(metric.status);
        let value = format!("{:.0}{}", metric.value, metric.unit);
        let pad = inner
            .width
            .saturating_sub((metric.name.len() + value.len() + 3) as u16) as usize;
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", metric.status.glyph()), Style::default().fg(color)),
            Span::styled(metric.name.clone(), Style::default().fg(theme::COLOR_HEADER)),
            Span::raw(" ".repeat(pad.max(1))),
            Span::styled(value, Style::default().fg(color)),
        ]));
        // Meters read as fractions of 100 regardless of unit
        lines.push(Line::from(meter_spans(
            metric.value / 100.0,
            inner.width,
            color,
        )));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
