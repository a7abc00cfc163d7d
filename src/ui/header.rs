//! Admin header bar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AdminPage;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme;

/// Rows the header occupies.
pub const HEADER_HEIGHT: u16 = 2;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    page: AdminPage,
    registry: &mut HitAreaRegistry,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // Menu toggle, page title, a search placeholder and the bell
    let toggle_rect = Rect::new(inner.x, inner.y, 3, 1);
    registry.register(toggle_rect, ClickAction::ToggleSidebar);

    use unicode_width::UnicodeWidthStr;

    let search = "\u{2315} Search...";
    let bell = "\u{25c9} ";
    // 1 toggle glyph + 2 + label + 4 + search, bell right-aligned
    let used = 1 + 2 + page.label().width() + 4 + search.width() + bell.width();
    let pad = (inner.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled("\u{2630}", Style::default().fg(theme::COLOR_DIM)),
        Span::raw("  "),
        Span::styled(
            page.label(),
            Style::default()
                .fg(theme::COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(search, Style::default().fg(theme::COLOR_DIM)),
        Span::raw(" ".repeat(pad)),
        Span::styled(bell, Style::default().fg(theme::COLOR_WARNING)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}
