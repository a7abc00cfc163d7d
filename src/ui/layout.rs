//! Responsive layout system
//!
//! `LayoutContext` encapsulates terminal dimensions and provides the
//! proportional sizing decisions the shell makes: when the sidebar is a
//! reserved column versus an overlay, how many stat cards fit per row,
//! and whether the terminal is usable at all. It is rebuilt from resize
//! events and read everywhere, so render code never touches raw
//! dimensions.

use ratatui::layout::Rect;

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
    /// Medium terminal height (< 40 rows)
    pub const MD_HEIGHT: u16 = 40;
}

/// Hard floor below which the UI refuses to lay itself out.
pub const MIN_TERMINAL_WIDTH: u16 = 40;
pub const MIN_TERMINAL_HEIGHT: u16 = 10;

/// Reserved sidebar column width on desktop-sized terminals.
pub const SIDEBAR_WIDTH: u16 = 24;

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// Extra small (< 60 cols / < 16 rows)
    ExtraSmall,
    /// Small (< 80 cols / < 24 rows)
    Small,
    /// Medium (< 120 cols / < 40 rows)
    Medium,
    /// Large (>= 120 cols / >= 40 rows)
    Large,
}

/// Check whether the terminal is below the minimum usable size.
pub fn is_terminal_too_small(width: u16, height: u16) -> bool {
    width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT
}

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    /// Create a new layout context with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Create a layout context from a Rect.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            width: rect.width,
            height: rect.height,
        }
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate a height as a percentage of terminal height, minimum 1.
    pub fn percent_height(&self, percentage: u16) -> u16 {
        ((self.height as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Proportional width clamped to bounds.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Width category against the breakpoints.
    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Height category against the breakpoints.
    pub fn height_category(&self) -> SizeCategory {
        if self.height < breakpoints::XS_HEIGHT {
            SizeCategory::ExtraSmall
        } else if self.height < breakpoints::SM_HEIGHT {
            SizeCategory::Small
        } else if self.height < breakpoints::MD_HEIGHT {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Check if the terminal is narrow (< 80 columns). This is the
    /// terminal's equivalent of a mobile breakpoint.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Check if the terminal is short (< 24 rows).
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Check if the terminal is compact (narrow or short).
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    /// On narrow terminals the sidebar overlays the content instead of
    /// reserving a column, mirroring a mobile drawer.
    pub fn sidebar_overlays(&self) -> bool {
        self.is_narrow()
    }

    /// Columns reserved for the sidebar when it is open and docked.
    pub fn sidebar_width(&self) -> u16 {
        SIDEBAR_WIDTH.min(self.width / 2)
    }

    /// How many stat cards fit side by side.
    pub fn stat_columns(&self) -> u16 {
        match self.width_category() {
            SizeCategory::ExtraSmall => 1,
            SizeCategory::Small | SizeCategory::Medium => 2,
            SizeCategory::Large => 4,
        }
    }

    /// Available content width after accounting for borders.
    pub fn content_width(&self, border_width: u16) -> u16 {
        self.width.saturating_sub(border_width)
    }

    /// Available content height after accounting for header and chrome.
    pub fn content_height(&self, chrome_height: u16) -> u16 {
        self.height.saturating_sub(chrome_height)
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initializes_from_real_dimensions() {
        let ctx = LayoutContext::from_rect(Rect::new(0, 0, 100, 30));
        assert_eq!(ctx.width, 100);
        assert_eq!(ctx.height, 30);
    }

    #[test]
    fn test_percent_calculations() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(ctx.percent_height(25), 10);
        // Tiny results clamp to at least one cell
        assert_eq!(LayoutContext::new(3, 3).percent_width(10), 1);
    }

    #[test]
    fn test_size_categories() {
        assert_eq!(
            LayoutContext::new(40, 40).width_category(),
            SizeCategory::ExtraSmall
        );
        assert_eq!(
            LayoutContext::new(79, 40).width_category(),
            SizeCategory::Small
        );
        assert_eq!(
            LayoutContext::new(119, 40).width_category(),
            SizeCategory::Medium
        );
        assert_eq!(
            LayoutContext::new(160, 40).width_category(),
            SizeCategory::Large
        );
    }

    #[test]
    fn test_narrow_terminals_overlay_the_sidebar() {
        assert!(LayoutContext::new(60, 24).sidebar_overlays());
        assert!(!LayoutContext::new(100, 24).sidebar_overlays());
    }

    #[test]
    fn test_sidebar_width_never_dominates() {
        assert_eq!(LayoutContext::new(120, 40).sidebar_width(), SIDEBAR_WIDTH);
        assert_eq!(LayoutContext::new(40, 40).sidebar_width(), 20);
    }

    #[test]
    fn test_stat_columns_by_category() {
        assert_eq!(LayoutContext::new(50, 40).stat_columns(), 1);
        assert_eq!(LayoutContext::new(100, 40).stat_columns(), 2);
        assert_eq!(LayoutContext::new(140, 40).stat_columns(), 4);
    }

    #[test]
    fn test_minimum_size_check() {
        assert!(is_terminal_too_small(39, 24));
        assert!(is_terminal_too_small(80, 9));
        assert!(!is_terminal_too_small(40, 10));
    }
}
