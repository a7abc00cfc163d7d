//! Application state and logic for the TUI.
//!
//! The [`App`] struct owns everything that changes at runtime: which
//! screen and page are shown, the shared sidebar flag, per-screen scroll
//! state, and the animation state machines. All mutation happens on the
//! UI thread from the main loop, between frames.

mod navigation;
mod types;

pub use types::{AdminPage, Screen};

use ratatui::layout::Rect;

use crate::config::Config;
use crate::data::Dataset;
use crate::motion::{CountUp, Magnetic, Reveal};
use crate::state::{Scroll, Sidebar};
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::layout::LayoutContext;

/// Count-up duration for the launch screen stats, in wall-clock millis.
const STAT_COUNT_MS: u64 = 2000;

/// How much of the stats band must be on screen before the count starts.
const STATS_REVEAL_THRESHOLD: f64 = 0.5;

/// Animated headline numbers on the launch screen.
#[derive(Debug, Clone)]
pub struct LaunchStats {
    /// Registered users, counts to 50K
    pub users: CountUp,
    /// Uptime percentage, counts to 99.9
    pub uptime: CountUp,
    /// Page load seconds, counts to 1.5
    pub load_time: CountUp,
}

impl LaunchStats {
    fn new(tick_ms: u64) -> Self {
        Self {
            users: CountUp::with_duration_ms(0.0, 50_000.0, STAT_COUNT_MS, tick_ms),
            uptime: CountUp::with_duration_ms(0.0, 99.9, STAT_COUNT_MS, tick_ms),
            load_time: CountUp::with_duration_ms(0.0, 1.5, STAT_COUNT_MS, tick_ms),
        }
    }

    /// Advance all counters. Returns true if any value changed.
    fn update(&mut self, trigger: bool, tick: u64) -> bool {
        let a = self.users.update(trigger, tick);
        let b = self.uptime.update(trigger, tick);
        let c = self.load_time.update(trigger, tick);
        a || b || c
    }

    fn is_running(&self) -> bool {
        self.users.is_running() || self.uptime.is_running() || self.load_time.is_running()
    }
}

/// Main application state
pub struct App {
    /// Current screen being displayed
    pub screen: Screen,
    /// Active admin page
    pub page: AdminPage,
    /// Shared sidebar visibility, read by the nav panel and the layout
    pub sidebar: Sidebar,
    /// Scroll state for the launch screen
    pub launch_scroll: Scroll,
    /// Scroll state for the admin content area
    pub admin_scroll: Scroll,
    /// Terminal dimensions for responsive layout
    pub layout: LayoutContext,
    /// Clickable regions registered by the last render pass
    pub registry: HitAreaRegistry,
    /// Pointer-following state for the launch call-to-action
    pub magnetic: Magnetic,
    /// Where the call-to-action was drawn last frame, for mouse routing
    pub cta_rect: Option<Rect>,
    /// Animated launch screen stats
    pub stats: LaunchStats,
    /// Fires the stat counters when the stats band scrolls into view
    pub stats_reveal: Reveal,
    /// Widget data
    pub data: Dataset,
    /// Runtime configuration
    pub config: Config,
    /// Animation tick counter
    pub tick_count: u64,
    /// Flag to redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Flag to exit the main loop
    pub should_quit: bool,
}

impl App {
    /// Create the application state.
    pub fn new(config: Config, data: Dataset) -> Self {
        let stats = LaunchStats::new(config.tick_ms);
        Self {
            screen: config.start_screen,
            page: AdminPage::Overview,
            sidebar: Sidebar::new(),
            launch_scroll: Scroll::new(),
            admin_scroll: Scroll::new(),
            layout: LayoutContext::default(),
            registry: HitAreaRegistry::new(),
            magnetic: Magnetic::new(),
            cta_rect: None,
            stats,
            stats_reveal: Reveal::new(STATS_REVEAL_THRESHOLD, true),
            data,
            config,
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Demo-data application, used by tests.
    pub fn new_demo() -> Self {
        Self::new(Config::default(), crate::data::demo())
    }

    /// Advance one animation tick.
    pub fn tick(&mut self) {
        self.tick_count += 1;

        if self.screen != Screen::Launch {
            return;
        }

        let dt = self.config.tick_ms as f64 / 1000.0;
        let counters_changed = self
            .stats
            .update(self.stats_reveal.is_visible(), self.tick_count);
        let magnetic_active = self.magnetic.step(dt);

        if counters_changed || magnetic_active {
            self.mark_dirty();
        }
    }

    /// Whether anything is animating and needs continuous redraws.
    pub fn has_active_motion(&self) -> bool {
        self.screen == Screen::Launch
            && (self.stats.is_running() || !self.magnetic.is_at_rest())
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Exit the main loop at the next opportunity.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Record new terminal dimensions from a resize event.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.layout = LayoutContext::new(width, height);
        self.mark_dirty();
        tracing::debug!(width, height, "terminal resized");
    }

    /// Scroll state for whatever screen is active.
    pub fn active_scroll_mut(&mut self) -> &mut Scroll {
        match self.screen {
            Screen::Launch => &mut self.launch_scroll,
            Screen::Admin => &mut self.admin_scroll,
        }
    }

    /// Route a pointer position to the magnetic call-to-action.
    ///
    /// Returns true when the pointer changed the motion target.
    pub fn pointer_moved(&mut self, column: u16, row: u16) -> bool {
        if self.screen != Screen::Launch {
            return false;
        }
        let Some(rect) = self.cta_rect else {
            return false;
        };
        self.magnetic.pointer_at(column, row, rect);
        !self.magnetic.is_at_rest()
    }
}
