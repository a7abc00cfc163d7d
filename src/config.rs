//! Runtime configuration.
//!
//! Built from defaults, overridden by environment variables, then by CLI
//! flags. Use the builder methods to customize behavior in tests.

use std::path::PathBuf;

use crate::app::Screen;

/// Configuration for the running application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Animation tick interval in milliseconds (default: 16, ~60fps)
    pub tick_ms: u64,
    /// Screen shown at startup
    pub start_screen: Screen,
    /// Capture mouse events (default: true)
    pub mouse_enabled: bool,
    /// Optional JSON dataset replacing the built-in demo data
    pub data_path: Option<PathBuf>,
    /// Optional trace log file; unset means no logging at all
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            start_screen: Screen::Launch,
            mouse_enabled: true,
            data_path: None,
            log_path: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `PULSE_*` environment variable overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("PULSE_TICK_MS") {
            if let Ok(ms) = raw.parse::<u64>() {
                config.tick_ms = ms.clamp(4, 1000);
            }
        }
        if let Ok(raw) = std::env::var("PULSE_SCREEN") {
            match raw.as_str() {
                "admin" => config.start_screen = Screen::Admin,
                "landing" => config.start_screen = Screen::Launch,
                _ => {}
            }
        }
        if std::env::var("PULSE_NO_MOUSE").is_ok() {
            config.mouse_enabled = false;
        }
        if let Ok(path) = std::env::var("PULSE_DATA") {
            config.data_path = Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var("PULSE_LOG") {
            config.log_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Set the animation tick interval.
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Set the startup screen.
    pub fn with_start_screen(mut self, screen: Screen) -> Self {
        self.start_screen = screen;
        self
    }

    /// Enable or disable mouse capture.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }
}
