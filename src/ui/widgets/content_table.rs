//! Recent content table widget.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::format::{format_date, format_number, DEFAULT_DATE_PATTERN};
use crate::models::ContentItem;
use crate::ui::theme;

pub fn render(frame: &mut Frame, area: Rect, content: &[ContentItem]) {
    let block = Block::default()
        .title("Recent Content")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER));

    let header = Row::new(["Title", "Status", "Author", "Views", "Updated"])
        .style(
            Style::default()
                .fg(theme::COLOR_DIM)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows = content.iter().map(|item| {
        Row::new(vec![
            Cell::from(item.title.clone()).style(Style::default().fg(theme::COLOR_HEADER)),
            Cell::from(item.status.label())
                .style(Style::default().fg(theme::content_status_color(item.status))),
            Cell::from(item.author.clone()).style(Style::default().fg(theme::COLOR_DIM)),
            Cell::from(format_number(item.views as f64))
                .style(Style::default().fg(theme::COLOR_DIM)),
            Cell::from(format_date(&item.updated_at, DEFAULT_DATE_PATTERN))
                .style(Style::default().fg(theme::COLOR_DIM)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(15),
            Constraint::Length(6),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(block);

    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentStatus;
    use chrono::TimeZone;
    use chrono::Utc;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_table_formats_views_and_dates() {
        let content = vec![ContentItem {
            id: "1".to_string(),
            title: "Getting Started with Pulse".to_string(),
            status: ContentStatus::Published,
            author: "John Doe".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap(),
            views: 1234,
        }];
        let backend = TestBackend::new(80, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &content))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Getting Started with Pulse"));
        assert!(text.contains("published"));
        assert!(text.contains("1.2K"));
        assert!(text.contains("Jan 20, 2024"));
    }
}
