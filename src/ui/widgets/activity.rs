//! Recent activity feed widget.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::format::format_relative_time;
use crate::models::{ActivityItem, ActivityKind};
use crate::ui::theme;

fn kind_glyph(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Create => "+",
        ActivityKind::Update => "\u{270e}",
        ActivityKind::Delete => "\u{2717}",
        ActivityKind::Login => "\u{2192}",
    }
}

pub fn render(frame: &mut Frame, area: Rect, activities: &[ActivityItem], now: &DateTime<Utc>) {
    let block = Block::default()
        .title("Recent Activity")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let mut lines = Vec::new();
    for activity in activities {
        lines.push(Line::from(vec![
            Span::styled(
                format!("({}) ", kind_glyph(activity.kind)),
                Style::default().fg(theme::activity_color(activity.kind)),
            ),
            Span::styled(
                activity.user.clone(),
                Style::default()
                    .fg(theme::COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(activity.action.clone(), Style::default().fg(theme::COLOR_DIM)),
        ]));
        lines.push(Line::styled(
            format!("    {}", format_relative_time(&activity.timestamp, now)),
            Style::default().fg(theme::COLOR_DIM),
        ));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
