//! Pointer-following offset for the launch screen call-to-action.
//!
//! While the mouse moves inside the button's rect, the button leans
//! toward the pointer by a damped fraction of the pointer's distance from
//! the button center; when the pointer leaves, it glides back to rest.

use ratatui::layout::Rect;

use super::spring::Spring;

/// Fraction of the raw pointer displacement the button travels.
const DAMPING_FACTOR: f64 = 0.25;

/// Terminal cells are roughly twice as tall as wide; vertical travel is
/// halved so the lean looks symmetric on screen.
const ROW_ASPECT: f64 = 0.5;

/// Smoothed pointer-following displacement in cells.
#[derive(Debug, Clone)]
pub struct Magnetic {
    spring_x: Spring,
    spring_y: Spring,
}

impl Default for Magnetic {
    fn default() -> Self {
        Self::new()
    }
}

impl Magnetic {
    pub fn new() -> Self {
        Self {
            spring_x: Spring::snappy(0.0),
            spring_y: Spring::snappy(0.0),
        }
    }

    /// Feed a pointer position. Inside `bounds` the target offset tracks
    /// the pointer; outside it resets to the origin.
    pub fn pointer_at(&mut self, column: u16, row: u16, bounds: Rect) {
        if contains(bounds, column, row) {
            let center_x = bounds.x as f64 + bounds.width as f64 / 2.0;
            let center_y = bounds.y as f64 + bounds.height as f64 / 2.0;
            self.spring_x
                .set_target((column as f64 - center_x) * DAMPING_FACTOR);
            self.spring_y
                .set_target((row as f64 - center_y) * DAMPING_FACTOR * ROW_ASPECT);
        } else {
            self.pointer_left();
        }
    }

    /// Pointer left the tracked region; glide back to the origin.
    pub fn pointer_left(&mut self) {
        self.spring_x.set_target(0.0);
        self.spring_y.set_target(0.0);
    }

    /// Advance the smoothing springs by `dt` seconds.
    ///
    /// Returns true while the offset is still changing.
    pub fn step(&mut self, dt: f64) -> bool {
        self.spring_x.step(dt);
        self.spring_y.step(dt);
        !self.is_at_rest()
    }

    /// Current displacement, quantized to whole cells.
    pub fn offset(&self) -> (i16, i16) {
        (
            self.spring_x.position().round() as i16,
            self.spring_y.position().round() as i16,
        )
    }

    pub fn is_at_rest(&self) -> bool {
        self.spring_x.is_at_rest() && self.spring_y.is_at_rest()
    }

    /// Drop all motion, e.g. when the owning screen is left.
    pub fn reset(&mut self) {
        self.spring_x.snap_to(0.0);
        self.spring_y.snap_to(0.0);
    }

    /// Shift a rect by the current offset, clamped to stay inside
    /// `within`.
    pub fn displace(&self, rect: Rect, within: Rect) -> Rect {
        let (dx, dy) = self.offset();
        let max_x = (within.right().saturating_sub(rect.width)).max(within.x);
        let max_y = (within.bottom().saturating_sub(rect.height)).max(within.y);
        let x = (rect.x as i32 + dx as i32).clamp(within.x as i32, max_x as i32);
        let y = (rect.y as i32 + dy as i32).clamp(within.y as i32, max_y as i32);
        Rect::new(x as u16, y as u16, rect.width, rect.height)
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
