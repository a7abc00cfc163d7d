// Integration tests for responsive layout behavior
// Tests layouts at various terminal sizes:
// - 50x20 (phone-like)
// - 80x24 (standard terminal)
// - 120x40 (wide terminal)
// - 200x50 (ultra-wide)
// - 40x10 (minimum size boundary)

use pulse::ui::layout::{
    breakpoints, is_terminal_too_small, LayoutContext, SizeCategory, MIN_TERMINAL_HEIGHT,
    MIN_TERMINAL_WIDTH, SIDEBAR_WIDTH,
};

// =============================================================================
// Phone-like (50x20)
// =============================================================================

mod phone_size {
    use super::*;

    fn ctx() -> LayoutContext {
        LayoutContext::new(50, 20)
    }

    #[test]
    fn test_categories() {
        assert_eq!(ctx().width_category(), SizeCategory::ExtraSmall);
        assert_eq!(ctx().height_category(), SizeCategory::Small);
    }

    #[test]
    fn test_state_flags() {
        let layout = ctx();
        assert!(layout.is_narrow(), "50 columns should be narrow");
        assert!(layout.is_short(), "20 rows should be short");
        assert!(layout.is_compact());
    }

    #[test]
    fn test_sidebar_becomes_a_drawer() {
        assert!(ctx().sidebar_overlays());
    }

    #[test]
    fn test_single_stat_column() {
        assert_eq!(ctx().stat_columns(), 1);
    }
}

// =============================================================================
// Standard terminal (80x24)
// =============================================================================

mod standard_size {
    use super::*;

    fn ctx() -> LayoutContext {
        LayoutContext::new(80, 24)
    }

    #[test]
    fn test_categories() {
        assert_eq!(ctx().width_category(), SizeCategory::Medium);
        assert_eq!(ctx().height_category(), SizeCategory::Medium);
    }

    #[test]
    fn test_not_narrow_at_exactly_80() {
        let layout = ctx();
        assert!(!layout.is_narrow(), "80 columns is the desktop boundary");
        assert!(!layout.sidebar_overlays());
    }

    #[test]
    fn test_docked_sidebar_width() {
        assert_eq!(ctx().sidebar_width(), SIDEBAR_WIDTH);
    }

    #[test]
    fn test_two_stat_columns() {
        assert_eq!(ctx().stat_columns(), 2);
    }
}

// =============================================================================
// Wide terminal (120x40)
// =============================================================================

mod wide_size {
    use super::*;

    fn ctx() -> LayoutContext {
        LayoutContext::new(120, 40)
    }

    #[test]
    fn test_categories() {
        assert_eq!(ctx().width_category(), SizeCategory::Large);
        assert_eq!(ctx().height_category(), SizeCategory::Large);
    }

    #[test]
    fn test_four_stat_columns() {
        assert_eq!(ctx().stat_columns(), 4);
    }

    #[test]
    fn test_percent_widths() {
        let layout = ctx();
        assert_eq!(layout.percent_width(50), 60);
        assert_eq!(layout.bounded_width(50, 10, 40), 40);
    }
}

// =============================================================================
// Ultra-wide terminal (200x50)
// =============================================================================

mod ultra_wide_size {
    use super::*;

    #[test]
    fn test_sidebar_stays_capped() {
        let layout = LayoutContext::new(200, 50);
        assert_eq!(layout.sidebar_width(), SIDEBAR_WIDTH);
        assert!(!layout.sidebar_overlays());
    }
}

// =============================================================================
// Minimum size boundary (40x10)
// =============================================================================

mod minimum_size {
    use super::*;

    #[test]
    fn test_exactly_minimum_is_usable() {
        assert!(!is_terminal_too_small(MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT));
    }

    #[test]
    fn test_below_minimum_is_rejected() {
        assert!(is_terminal_too_small(MIN_TERMINAL_WIDTH - 1, 24));
        assert!(is_terminal_too_small(80, MIN_TERMINAL_HEIGHT - 1));
    }
}

// =============================================================================
// Breakpoint constants
// =============================================================================

#[test]
fn test_breakpoints_are_ordered() {
    assert!(breakpoints::XS_WIDTH < breakpoints::SM_WIDTH);
    assert!(breakpoints::SM_WIDTH < breakpoints::MD_WIDTH);
    assert!(breakpoints::XS_HEIGHT < breakpoints::SM_HEIGHT);
    assert!(breakpoints::SM_HEIGHT < breakpoints::MD_HEIGHT);
}

#[test]
fn test_default_context_is_standard_terminal() {
    let layout = LayoutContext::default();
    assert_eq!(layout.width, 80);
    assert_eq!(layout.height, 24);
}
