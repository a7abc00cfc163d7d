//! Device breakdown widget.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::format::format_number;
use crate::models::DeviceStats;
use crate::ui::theme;
use crate::ui::widgets::meter_spans;

const NAME_WIDTH: usize = 10;

pub fn render(frame: &mut Frame, area: Rect, devices: &[DeviceStats]) {
    let block = Block::default()
        .title("Device Breakdown")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width < NAME_WIDTH as u16 + 16 {
        return;
    }

    let meter_width = inner.width.saturating_sub(NAME_WIDTH as u16 + 16);

    let mut lines = Vec::new();
    for (index, device) in devices.iter().enumerate() {
        let color = theme::SERIES_COLORS[index % theme::SERIES_COLORS.len()];
        let mut spans = vec![Span::styled(
            format!("{:<width$}", device.device, width = NAME_WIDTH),
            Style::default().fg(theme::COLOR_HEADER),
        )];
        spans.extend(meter_spans(device.percentage / 100.0, meter_width, color));
        spans.push(Span::styled(
            format!("{:>8}", format_number(device.users as f64)),
            Style::default().fg(theme::COLOR_HEADER),
        ));
        spans.push(Span::styled(
            format!("{:>7.1}%", device.percentage),
            Style::default().fg(theme::COLOR_DIM),
        ));
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_device_rows_show_abbreviated_users() {
        let devices = vec![DeviceStats {
            device: "Desktop".to_string(),
            users: 5234,
            percentage: 52.3,
        }];
        let backend = TestBackend::new(50, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &devices))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Desktop"));
        assert!(text.contains("5.2K"));
        assert!(text.contains("52.3%"));
    }
}
