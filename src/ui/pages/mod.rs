//! Admin pages.
//!
//! Pages compose widgets into a vertically scrolled virtual column. The
//! [`BandPlacer`] walks that column top to bottom: each band asks for a
//! height and receives the on-screen rect it is visible through, or
//! nothing when it is scrolled out. After placement the page writes the
//! total content height back into its scroll state.

pub mod analytics;
pub mod content;
pub mod media;
pub mod overview;
pub mod settings;
pub mod users;

use chrono::{DateTime, Utc};
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::{AdminPage, App};
use crate::data::Dataset;
use crate::ui::layout::LayoutContext;

/// Data and environment a page renders from.
pub struct PageContext<'a> {
    pub data: &'a Dataset,
    pub layout: LayoutContext,
    pub now: DateTime<Utc>,
}

/// Render the active admin page into the content area and record its
/// scroll extents.
pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let ctx = PageContext {
        data: &app.data,
        layout: app.layout,
        now: Utc::now(),
    };
    let mut placer = BandPlacer::new(area, app.admin_scroll.offset());

    match app.page {
        AdminPage::Overview => overview::render(frame, &mut placer, &ctx),
        AdminPage::Content => content::render(frame, &mut placer, &ctx),
        AdminPage::Media => media::render(frame, &mut placer, &ctx),
        AdminPage::Analytics => analytics::render(frame, &mut placer, &ctx),
        AdminPage::Users => users::render(frame, &mut placer, &ctx),
        AdminPage::Settings => settings::render(frame, &mut placer, &ctx),
    }

    app.admin_scroll.set_extents(placer.total_rows(), area.height);
}

/// Standard page heading band: bold title over a dim subtitle.
fn render_heading(frame: &mut Frame, placer: &mut BandPlacer, page: AdminPage) {
    use ratatui::style::{Modifier, Style};
    use ratatui::text::Line;
    use ratatui::widgets::Paragraph;

    use crate::ui::theme;

    if let Some(rect) = placer.place(3) {
        let lines = vec![
            Line::styled(
                page.title(),
                Style::default()
                    .fg(theme::COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(page.subtitle(), Style::default().fg(theme::COLOR_DIM)),
        ];
        frame.render_widget(Paragraph::new(lines), rect);
    }
}

/// Walks a virtual column of stacked bands through a scrolled viewport.
#[derive(Debug)]
pub struct BandPlacer {
    area: Rect,
    offset: u16,
    cursor: u16,
}

impl BandPlacer {
    pub fn new(area: Rect, offset: u16) -> Self {
        Self {
            area,
            offset,
            cursor: 0,
        }
    }

    /// Claim `height` virtual rows. Returns the on-screen rect the band
    /// is visible through, or None when it is entirely scrolled out.
    ///
    /// A band crossing the viewport edge gets the visible part only;
    /// widgets already cope with short rects.
    pub fn place(&mut self, height: u16) -> Option<Rect> {
        let start = self.cursor;
        let end = start.saturating_add(height);
        self.cursor = end;

        let view_start = self.offset;
        let view_end = self.offset.saturating_add(self.area.height);

        let visible_start = start.max(view_start);
        let visible_end = end.min(view_end);
        if visible_start >= visible_end {
            return None;
        }

        Some(Rect::new(
            self.area.x,
            self.area.y + (visible_start - view_start),
            self.area.width,
            visible_end - visible_start,
        ))
    }

    /// Claim a one-row gap between bands.
    pub fn gap(&mut self) {
        self.cursor = self.cursor.saturating_add(1);
    }

    /// Virtual range of the band that `place` would assign next, without
    /// claiming it. Used for visibility observation.
    pub fn peek_range(&self, height: u16) -> (u16, u16) {
        (self.cursor, self.cursor.saturating_add(height))
    }

    /// Currently visible virtual row range.
    pub fn view_range(&self) -> (u16, u16) {
        (self.offset, self.offset.saturating_add(self.area.height))
    }

    /// Total virtual rows claimed so far.
    pub fn total_rows(&self) -> u16 {
        self.cursor
    }

    /// Width of the column being laid out.
    pub fn width(&self) -> u16 {
        self.area.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscrolled_band_maps_to_top() {
        let mut placer = BandPlacer::new(Rect::new(0, 5, 80, 20), 0);
        let rect = placer.place(6).unwrap();
        assert_eq!(rect, Rect::new(0, 5, 80, 6));
    }

    #[test]
    fn test_band_below_viewport_is_skipped() {
        let mut placer = BandPlacer::new(Rect::new(0, 0, 80, 20), 0);
        placer.place(18);
        placer.place(10).unwrap(); // partially visible
        assert!(placer.place(8).is_none());
        assert_eq!(placer.total_rows(), 36);
    }

    #[test]
    fn test_scrolled_band_is_clipped_at_the_top() {
        let mut placer = BandPlacer::new(Rect::new(0, 0, 80, 20), 4);
        // Band occupies virtual rows 0..10; rows 4..10 remain visible
        let rect = placer.place(10).unwrap();
        assert_eq!(rect, Rect::new(0, 0, 80, 6));
    }

    #[test]
    fn test_band_above_viewport_is_skipped() {
        let mut placer = BandPlacer::new(Rect::new(0, 0, 80, 20), 30);
        assert!(placer.place(10).is_none());
        let rect = placer.place(30).unwrap();
        // Virtual rows 30..40 of the 10..40 band land at the top
        assert_eq!(rect, Rect::new(0, 0, 80, 10));
    }

    #[test]
    fn test_total_counts_gaps() {
        let mut placer = BandPlacer::new(Rect::new(0, 0, 80, 20), 0);
        placer.place(5);
        placer.gap();
        placer.place(5);
        assert_eq!(placer.total_rows(), 11);
    }

    #[test]
    fn test_peek_does_not_claim() {
        let placer = BandPlacer::new(Rect::new(0, 0, 80, 20), 0);
        assert_eq!(placer.peek_range(7), (0, 7));
        assert_eq!(placer.total_rows(), 0);
    }
}
