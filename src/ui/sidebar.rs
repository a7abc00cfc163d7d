//! Admin navigation sidebar.
//!
//! Docked as a left column on wide terminals, overlaid as a drawer on
//! narrow ones. Every entry registers a hit area; the active page is
//! highlighted.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::AdminPage;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    current_page: AdminPage,
    overlay: bool,
    registry: &mut HitAreaRegistry,
) {
    if overlay {
        // Drawer mode paints over page content
        frame.render_widget(Clear, area);
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 4 {
        return;
    }

    // Brand row; in drawer mode it doubles as the close control
    let brand = Line::from(vec![
        Span::styled(
            " PULSE ",
            Style::default()
                .fg(theme::COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("CMS", Style::default().fg(theme::COLOR_ACCENT)),
        Span::raw(if overlay { "  \u{2715}" } else { "" }),
    ]);
    frame.render_widget(
        Paragraph::new(brand),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );
    // Drawer mode: the brand row closes the drawer. Docked: it leads
    // back to the launch screen, like a logo link home.
    registry.register(
        Rect::new(inner.x, inner.y, inner.width, 1),
        if overlay {
            ClickAction::ToggleSidebar
        } else {
            ClickAction::BackToLaunch
        },
    );

    // Navigation entries
    for (index, page) in AdminPage::ALL.iter().enumerate() {
        let y = inner.y + 2 + index as u16;
        if y >= inner.y + inner.height.saturating_sub(2) {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);

        let active = *page == current_page;
        let style = if active {
            Style::default()
                .fg(theme::COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else if registry.pointer_over(row) {
            Style::default().fg(theme::COLOR_HEADER)
        } else {
            Style::default().fg(theme::COLOR_DIM)
        };
        let marker = if active { "\u{258c}" } else { " " };
        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(theme::COLOR_ACCENT)),
            Span::styled(format!("{} {}", page.glyph(), page.label()), style),
        ]);
        frame.render_widget(Paragraph::new(line), row);
        registry.register(row, ClickAction::Navigate(*page));
    }

    // Signed-in user footer
    let footer_y = inner.y + inner.height - 2;
    let footer = vec![
        Line::from(vec![
            Span::styled("JD ", Style::default().fg(theme::COLOR_ACCENT)),
            Span::styled("John Doe", Style::default().fg(theme::COLOR_HEADER)),
        ]),
        Line::styled("admin@cms.com", Style::default().fg(theme::COLOR_DIM)),
    ];
    frame.render_widget(
        Paragraph::new(footer),
        Rect::new(inner.x, footer_y, inner.width, 2),
    );
}
