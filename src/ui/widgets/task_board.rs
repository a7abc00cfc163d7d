//! Kanban-style task board widget.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::format::format_relative_time;
use crate::models::groupers::{group_tasks_by_status, initials, TaskColumns};
use crate::models::Task;
use crate::ui::theme;
use crate::ui::widgets::truncate_label;

/// Rows one task card occupies inside a column.
const CARD_ROWS: usize = 3;

pub fn render(frame: &mut Frame, area: Rect, tasks: &[Task], now: &DateTime<Utc>) {
    let block = Block::default()
        .title("Task Board")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 3 || inner.width < 30 {
        return;
    }

    let columns = group_tasks_by_status(tasks);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    for (chunk, status) in chunks.iter().zip(TaskColumns::ORDER) {
        render_column(frame, *chunk, status.label(), columns.column(status), now);
    }
}

fn render_column(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    tasks: &[&Task],
    now: &DateTime<Utc>,
) {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines = vec![
        Line::styled(
            format!("{} ({})", label, tasks.len()),
            Style::default()
                .fg(theme::COLOR_DIM)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];

    let visible = (area.height.saturating_sub(2) as usize) / CARD_ROWS;
    for task in tasks.iter().take(visible) {
        lines.push(Line::styled(
            truncate_label(&task.title, width),
            Style::default().fg(theme::COLOR_HEADER),
        ));

        let mut meta = vec![Span::styled(
            task.priority.label(),
            Style::default().fg(theme::priority_color(task.priority)),
        )];
        if let Some(assignee) = &task.assignee {
            meta.push(Span::styled(
                format!("  {} {}", initials(assignee), assignee),
                Style::default().fg(theme::COLOR_DIM),
            ));
        }
        lines.push(Line::from(meta));

        let detail = match &task.due_date {
            Some(due) => format!("due {}", format_relative_time(due, now)),
            None => truncate_label(&task.description, width),
        };
        lines.push(Line::styled(
            detail,
            Style::default().fg(theme::COLOR_DIM),
        ));
    }

    let hidden = tasks.len().saturating_sub(visible);
    if hidden > 0 {
        lines.push(Line::styled(
            format!("+{} more", hidden),
            Style::default().fg(theme::COLOR_DIM),
        ));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
