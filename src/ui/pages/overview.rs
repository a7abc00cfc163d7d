//! The main dashboard page: every widget at a glance.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use super::{render_heading, BandPlacer, PageContext};
use crate::app::AdminPage;
use crate::ui::widgets::{
    activity, calendar, content_table, devices, revenue_chart, server_status, stats_card,
    task_board, traffic,
};

const CHART_ROWS: u16 = 12;
const FEED_ROWS: u16 = 12;
const TABLE_ROWS: u16 = 9;
const BOARD_ROWS: u16 = 14;
const EVENTS_ROWS: u16 = 5;

pub fn render(frame: &mut Frame, placer: &mut BandPlacer, ctx: &PageContext) {
    render_heading(frame, placer, AdminPage::Overview);
    placer.gap();

    render_stat_grid(frame, placer, ctx);
    placer.gap();

    // Charts row: revenue beside traffic, stacked when narrow
    if ctx.layout.is_narrow() {
        if let Some(rect) = placer.place(CHART_ROWS) {
            revenue_chart::render(frame, rect, &ctx.data.revenue);
        }
        placer.gap();
        if let Some(rect) = placer.place(CHART_ROWS) {
            traffic::render(frame, rect, &ctx.data.traffic_sources);
        }
    } else if let Some(rect) = placer.place(CHART_ROWS) {
        let halves = split_row(rect, 50);
        revenue_chart::render(frame, halves[0], &ctx.data.revenue);
        traffic::render(frame, halves[1], &ctx.data.traffic_sources);
    }
    placer.gap();

    // Activity feed beside the device breakdown
    if ctx.layout.is_narrow() {
        if let Some(rect) = placer.place(FEED_ROWS) {
            activity::render(frame, rect, &ctx.data.activities, &ctx.now);
        }
        placer.gap();
        if let Some(rect) = placer.place(FEED_ROWS) {
            devices::render(frame, rect, &ctx.data.device_stats);
        }
    } else if let Some(rect) = placer.place(FEED_ROWS) {
        let halves = split_row(rect, 60);
        activity::render(frame, halves[0], &ctx.data.activities, &ctx.now);
        devices::render(frame, halves[1], &ctx.data.device_stats);
    }
    placer.gap();

    if let Some(rect) = placer.place(TABLE_ROWS) {
        content_table::render(frame, rect, &ctx.data.content);
    }
    placer.gap();

    // Server health beside the task board
    if ctx.layout.is_narrow() {
        if let Some(rect) = placer.place(BOARD_ROWS) {
            server_status::render(frame, rect, &ctx.data.server_metrics);
        }
        placer.gap();
        if let Some(rect) = placer.place(BOARD_ROWS) {
            task_board::render(frame, rect, &ctx.data.tasks, &ctx.now);
        }
    } else if let Some(rect) = placer.place(BOARD_ROWS) {
        let halves = split_row(rect, 35);
        server_status::render(frame, halves[0], &ctx.data.server_metrics);
        task_board::render(frame, halves[1], &ctx.data.tasks, &ctx.now);
    }
    placer.gap();

    if let Some(rect) = placer.place(EVENTS_ROWS) {
        calendar::render(frame, rect, &ctx.data.calendar_events, &ctx.now);
    }
}

/// Lay the stat cards out in the responsive grid.
fn render_stat_grid(frame: &mut Frame, placer: &mut BandPlacer, ctx: &PageContext) {
    let columns = ctx.layout.stat_columns() as usize;
    for row in ctx.data.stats.chunks(columns) {
        if let Some(rect) = placer.place(stats_card::CARD_HEIGHT) {
            let constraints =
                vec![Constraint::Ratio(1, columns as u32); columns];
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(rect);
            for (cell, stat) in cells.iter().zip(row) {
                stats_card::render(frame, *cell, stat);
            }
        }
    }
}

/// Split a band horizontally at a left-hand percentage.
fn split_row(rect: Rect, left_percent: u16) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent),
        ])
        .split(rect);
    [chunks[0], chunks[1]]
}
