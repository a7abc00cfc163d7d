//! Content management page.

use ratatui::Frame;

use super::{render_heading, BandPlacer, PageContext};
use crate::app::AdminPage;
use crate::ui::widgets::content_table;

pub fn render(frame: &mut Frame, placer: &mut BandPlacer, ctx: &PageContext) {
    render_heading(frame, placer, AdminPage::Content);
    placer.gap();

    // Header row plus margin plus one row per item, inside borders
    let rows = ctx.data.content.len() as u16 + 4;
    if let Some(rect) = placer.place(rows) {
        content_table::render(frame, rect, &ctx.data.content);
    }
}
