//! Dashboard widgets.
//!
//! Each widget is a pure render function over borrowed display records:
//! data in, cells out. Widgets never mutate state; anything clickable is
//! registered by the page that places the widget.

pub mod activity;
pub mod calendar;
pub mod content_table;
pub mod devices;
pub mod revenue_chart;
pub mod server_status;
pub mod stats_card;
pub mod task_board;
pub mod traffic;

use ratatui::style::{Color, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

/// Truncate a label to a display width, appending an ellipsis.
pub fn truncate_label(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let budget = max_width.saturating_sub(1);
    for ch in s.chars() {
        let next = format!("{}{}", out, ch);
        if next.width() > budget {
            break;
        }
        out = next;
    }
    format!("{}\u{2026}", out)
}

/// A proportional horizontal meter: filled cells in `color`, the rest dim.
pub fn meter_spans(ratio: f64, total_width: u16, color: Color) -> Vec<Span<'static>> {
    let total = total_width as usize;
    let filled = ((ratio.clamp(0.0, 1.0) * total as f64).round() as usize).min(total);
    vec![
        Span::styled("\u{2588}".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "\u{2591}".repeat(total - filled),
            Style::default().fg(theme::COLOR_DIM),
        ),
    ]
}
