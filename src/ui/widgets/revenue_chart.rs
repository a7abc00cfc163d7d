//! Revenue bar chart widget.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use crate::format::format_number;
use crate::models::groupers::chart_max;
use crate::models::ChartDataPoint;
use crate::ui::theme;

pub fn render(frame: &mut Frame, area: Rect, points: &[ChartDataPoint]) {
    let block = Block::default()
        .title("Revenue")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 3 || points.is_empty() {
        return;
    }

    // Spread the bars across the available width, one column gap between
    let count = points.len() as u16;
    let bar_width = (inner.width.saturating_sub(count - 1) / count).clamp(1, 9);

    let bars: Vec<Bar> = points
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.value.max(0.0) as u64)
                .label(Line::from(point.name.clone()))
                .text_value(format_number(point.value))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::COLOR_CHART))
        .value_style(Style::default().fg(theme::COLOR_HEADER))
        .label_style(Style::default().fg(theme::COLOR_DIM))
        .max(chart_max(points) as u64);

    frame.render_widget(chart, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn points() -> Vec<ChartDataPoint> {
        ["Jan", "Feb", "Mar"]
            .iter()
            .zip([4000.0, 3000.0, 5000.0])
            .map(|(name, value)| ChartDataPoint {
                name: name.to_string(),
                value,
            })
            .collect()
    }

    #[test]
    fn test_chart_renders_labels() {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &points()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Revenue"));
        assert!(text.contains("Jan"));
        assert!(text.contains("Mar"));
    }

    #[test]
    fn test_empty_series_renders_frame_only() {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &[]))
            .unwrap();
    }
}
