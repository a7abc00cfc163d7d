//! Settings page: a grid of preference sections.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{render_heading, BandPlacer, PageContext};
use crate::app::AdminPage;
use crate::ui::theme;

const SECTION_ROWS: u16 = 6;

struct Section {
    title: &'static str,
    description: &'static str,
    action: &'static str,
}

const SECTIONS: [Section; 4] = [
    Section {
        title: "Appearance",
        description: "Customize the look and feel of your dashboard",
        action: "Configure",
    },
    Section {
        title: "Notifications",
        description: "Manage notification preferences and alerts",
        action: "Manage",
    },
    Section {
        title: "Security",
        description: "Update password and security settings",
        action: "Update",
    },
    Section {
        title: "Localization",
        description: "Set language and regional preferences",
        action: "Change",
    },
];

pub fn render(frame: &mut Frame, placer: &mut BandPlacer, ctx: &PageContext) {
    render_heading(frame, placer, AdminPage::Settings);
    placer.gap();

    let columns = if ctx.layout.is_narrow() { 1 } else { 2 };
    for row in SECTIONS.chunks(columns) {
        if let Some(rect) = placer.place(SECTION_ROWS) {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(rect);
            for (cell, section) in cells.iter().zip(row) {
                render_section(frame, *cell, section);
            }
        }
        placer.gap();
    }
}

fn render_section(frame: &mut Frame, area: Rect, section: &Section) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let lines = vec![
        Line::styled(
            section.title,
            Style::default()
                .fg(theme::COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(section.description, Style::default().fg(theme::COLOR_DIM)),
        Line::default(),
        Line::styled(
            format!("[ {} ]", section.action),
            Style::default().fg(theme::COLOR_ACCENT),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
