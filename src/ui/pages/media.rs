//! Media library page: a responsive grid of file tiles.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{render_heading, BandPlacer, PageContext};
use crate::app::AdminPage;
use crate::format::{format_bytes, format_date, DEFAULT_DATE_PATTERN};
use crate::models::MediaFile;
use crate::ui::theme;
use crate::ui::widgets::truncate_label;

const TILE_ROWS: u16 = 5;

pub fn render(frame: &mut Frame, placer: &mut BandPlacer, ctx: &PageContext) {
    render_heading(frame, placer, AdminPage::Media);
    placer.gap();

    let columns = match ctx.layout.stat_columns() {
        1 => 1,
        2 => 2,
        _ => 3,
    } as usize;

    for row in ctx.data.media.chunks(columns) {
        if let Some(rect) = placer.place(TILE_ROWS) {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(rect);
            for (cell, file) in cells.iter().zip(row) {
                render_tile(frame, *cell, file);
            }
        }
        placer.gap();
    }
}

fn render_tile(frame: &mut Frame, area: ratatui::layout::Rect, file: &MediaFile) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let width = inner.width as usize;
    let lines = vec![
        Line::styled(
            truncate_label(&file.name, width),
            Style::default().fg(theme::COLOR_HEADER),
        ),
        Line::styled(
            format_bytes(file.size_bytes),
            Style::default().fg(theme::COLOR_DIM),
        ),
        Line::styled(
            format_date(&file.uploaded_at, DEFAULT_DATE_PATTERN),
            Style::default().fg(theme::COLOR_DIM),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
