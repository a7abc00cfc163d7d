//! UI rendering for the Pulse dashboard
//!
//! Renders one of two screens into the frame:
//! - Launch: scrolling marketing column behind a progress bar
//! - Admin: sidebar + header shell around a scrolled widget page
//!
//! Rendering is a function of `App` state; the only writes back into the
//! app are layout-derived (scroll extents, the call-to-action rect and
//! the reveal observation), all of which depend on sizes known only
//! during layout. Hit areas are re-registered from scratch every frame.

pub mod header;
pub mod interaction;
pub mod launch;
pub mod layout;
pub mod pages;
pub mod sidebar;
pub mod states;
pub mod theme;
pub mod widgets;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::{App, Screen};
use layout::{is_terminal_too_small, LayoutContext};

/// Render the full UI for the current frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.layout = LayoutContext::from_rect(area);

    // The registry lives in App but is rebuilt per frame; moving it out
    // keeps the borrow checker out of render signatures
    let mut registry = std::mem::take(&mut app.registry);
    registry.begin_frame();

    if is_terminal_too_small(area.width, area.height) {
        states::render_too_small(frame, area);
    } else {
        match app.screen {
            Screen::Launch => launch::render(frame, area, app, &mut registry),
            Screen::Admin => render_admin(frame, area, app, &mut registry),
        }
    }

    app.registry = registry;
}

/// Admin shell: optional docked sidebar, header, page content. On narrow
/// terminals an open sidebar overlays the content as a drawer instead of
/// claiming a column.
fn render_admin(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    registry: &mut interaction::HitAreaRegistry,
) {
    let docked = app.sidebar.is_open() && !app.layout.sidebar_overlays();
    let sidebar_width = if docked { app.layout.sidebar_width() } else { 0 };

    let main = Rect::new(
        area.x + sidebar_width,
        area.y,
        area.width - sidebar_width,
        area.height,
    );

    let header_rect = Rect::new(main.x, main.y, main.width, header::HEADER_HEIGHT);
    let content = Rect::new(
        main.x,
        main.y + header::HEADER_HEIGHT,
        main.width,
        main.height.saturating_sub(header::HEADER_HEIGHT),
    );

    header::render(frame, header_rect, app.page, registry);
    pages::render(frame, content, app);

    if docked {
        let rect = Rect::new(area.x, area.y, sidebar_width, area.height);
        sidebar::render(frame, rect, app.page, false, registry);
    } else if app.sidebar.is_open() {
        // Drawer over the content; registered last, so it wins hit tests
        let rect = Rect::new(area.x, area.y, app.layout.sidebar_width(), area.height);
        sidebar::render(frame, rect, app.page, true, registry);
    }
}
