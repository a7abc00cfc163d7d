//! User management page.

use ratatui::{
    layout::Constraint,
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use super::{render_heading, BandPlacer, PageContext};
use crate::app::AdminPage;
use crate::format::format_relative_time;
use crate::models::groupers::initials;
use crate::ui::theme;

pub fn render(frame: &mut Frame, placer: &mut BandPlacer, ctx: &PageContext) {
    render_heading(frame, placer, AdminPage::Users);
    placer.gap();

    let rows_needed = ctx.data.users.len() as u16 + 4;
    let Some(rect) = placer.place(rows_needed) else {
        return;
    };

    let block = Block::default()
        .title("All Users")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER));

    let header = Row::new(["Name", "Email", "Role", "Status", "Last Login"])
        .style(
            Style::default()
                .fg(theme::COLOR_DIM)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows = ctx.data.users.iter().map(|user| {
        let status = if user.active { "active" } else { "inactive" };
        let status_color = if user.active {
            theme::COLOR_POSITIVE
        } else {
            theme::COLOR_DIM
        };
        Row::new(vec![
            Cell::from(format!("{} {}", initials(&user.name), user.name))
                .style(Style::default().fg(theme::COLOR_HEADER)),
            Cell::from(user.email.clone()).style(Style::default().fg(theme::COLOR_DIM)),
            Cell::from(user.role.label())
                .style(Style::default().fg(theme::role_color(user.role))),
            Cell::from(status).style(Style::default().fg(status_color)),
            Cell::from(format_relative_time(&user.last_login, &ctx.now))
                .style(Style::default().fg(theme::COLOR_DIM)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(20),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(block);

    frame.render_widget(table, rect);
}
