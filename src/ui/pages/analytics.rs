//! Analytics page: traffic performance charts and their headline stats.

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use super::{render_heading, BandPlacer, PageContext};
use crate::app::AdminPage;
use crate::models::{StatCard, Trend};
use crate::ui::widgets::{devices, revenue_chart, stats_card, traffic};

const CHART_ROWS: u16 = 12;

/// Page-local headline stats; analytics numbers are not part of the
/// shared dataset.
fn analytics_stats() -> Vec<StatCard> {
    let stat = |id: &str, label: &str, value: &str, change: f64, trend| StatCard {
        id: id.to_string(),
        label: label.to_string(),
        value: value.to_string(),
        change,
        trend,
    };
    vec![
        stat("1", "Page Views", "124.5K", 15.3, Trend::Up),
        stat("2", "Bounce Rate", "42.3%", -5.2, Trend::Down),
        stat("3", "Avg Session", "3m 24s", 8.1, Trend::Up),
        stat("4", "New Visitors", "8,432", 12.7, Trend::Up),
    ]
}

pub fn render(frame: &mut Frame, placer: &mut BandPlacer, ctx: &PageContext) {
    render_heading(frame, placer, AdminPage::Analytics);
    placer.gap();

    let stats = analytics_stats();
    let columns = ctx.layout.stat_columns() as usize;
    for row in stats.chunks(columns) {
        if let Some(rect) = placer.place(stats_card::CARD_HEIGHT) {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(rect);
            for (cell, stat) in cells.iter().zip(row) {
                stats_card::render(frame, *cell, stat);
            }
        }
    }
    placer.gap();

    if ctx.layout.is_narrow() {
        if let Some(rect) = placer.place(CHART_ROWS) {
            revenue_chart::render(frame, rect, &ctx.data.revenue);
        }
        placer.gap();
        if let Some(rect) = placer.place(CHART_ROWS) {
            traffic::render(frame, rect, &ctx.data.traffic_sources);
        }
    } else if let Some(rect) = placer.place(CHART_ROWS) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rect);
        revenue_chart::render(frame, halves[0], &ctx.data.revenue);
        traffic::render(frame, halves[1], &ctx.data.traffic_sources);
    }
    placer.gap();

    if let Some(rect) = placer.place(CHART_ROWS) {
        devices::render(frame, rect, &ctx.data.device_stats);
    }
}
