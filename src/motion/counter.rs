//! Count-up animation for headline numbers.
//!
//! Drives a value from a start to a target over a fixed number of ticks,
//! gated by a level trigger (typically "the stats section is on screen").

/// State machine: Idle until the trigger's false-to-true edge, Running
/// while interpolating, Settled once the duration has elapsed.
///
/// The trigger is a level signal. Repeated `true` observations while a
/// run is in flight are no-ops; only an edge seen while not running
/// starts a run, so a settled counter restarts after the trigger drops
/// and rises again.
#[derive(Debug, Clone)]
pub struct CountUp {
    start_value: f64,
    target: f64,
    duration_ticks: u64,
    /// Tick at which the current run started, None while idle
    started_at: Option<u64>,
    value: f64,
    settled: bool,
    prev_trigger: bool,
}

impl CountUp {
    /// Create a counter that animates over `duration_ticks` ticks.
    pub fn new(start_value: f64, target: f64, duration_ticks: u64) -> Self {
        Self {
            start_value,
            target,
            duration_ticks: duration_ticks.max(1),
            started_at: None,
            value: start_value,
            settled: false,
            prev_trigger: false,
        }
    }

    /// Create a counter from a wall-clock duration and the tick interval.
    pub fn with_duration_ms(start_value: f64, target: f64, duration_ms: u64, tick_ms: u64) -> Self {
        let ticks = duration_ms / tick_ms.max(1);
        Self::new(start_value, target, ticks.max(1))
    }

    /// Current animated value.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && !self.settled
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advance the state machine one observation.
    ///
    /// Returns true when the displayed value changed (a redraw is needed).
    pub fn update(&mut self, trigger: bool, tick: u64) -> bool {
        let rising_edge = trigger && !self.prev_trigger;
        self.prev_trigger = trigger;

        if rising_edge && !self.is_running() {
            self.started_at = Some(tick);
            self.settled = false;
        }

        let Some(started) = self.started_at else {
            // Idle: hold the start value
            return false;
        };
        if self.settled {
            return false;
        }

        let elapsed = tick.saturating_sub(started);
        let new_value = if elapsed >= self.duration_ticks {
            self.settled = true;
            self.target
        } else {
            let t = elapsed as f64 / self.duration_ticks as f64;
            self.start_value + (self.target - self.start_value) * t
        };

        let changed = (new_value - self.value).abs() > f64::EPSILON;
        self.value = new_value;
        changed
    }

    /// Return to the idle state, e.g. when the owning screen is left.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.value = self.start_value;
        self.settled = false;
        self.prev_trigger = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_holds_start_value() {
        let mut counter = CountUp::new(0.0, 100.0, 10);
        for tick in 0..50 {
            counter.update(false, tick);
            assert_eq!(counter.value(), 0.0);
        }
        assert!(!counter.is_running());
    }

    #[test]
    fn test_run_is_monotonic_and_settles_at_target() {
        let mut counter = CountUp::new(0.0, 100.0, 10);
        counter.update(true, 0);

        let mut previous = counter.value();
        for tick in 1..=10 {
            counter.update(true, tick);
            assert!(
                counter.value() >= previous,
                "value regressed at tick {}",
                tick
            );
            previous = counter.value();
        }
        assert_eq!(counter.value(), 100.0);
        assert!(counter.is_settled());

        // Later ticks change nothing
        assert!(!counter.update(true, 20));
        assert_eq!(counter.value(), 100.0);
    }

    #[test]
    fn test_repeated_true_signals_are_no_ops() {
        let mut counter = CountUp::new(0.0, 100.0, 10);
        counter.update(true, 0);
        counter.update(true, 5);
        let mid = counter.value();

        // The level signal stays high; the run must not restart
        counter.update(true, 6);
        assert!(counter.value() >= mid, "re-trigger caused a discontinuity");
    }

    #[test]
    fn test_retrigger_after_settle_restarts() {
        let mut counter = CountUp::new(0.0, 100.0, 10);
        counter.update(true, 0);
        counter.update(true, 10);
        assert!(counter.is_settled());

        // Trigger drops, then rises again
        counter.update(false, 11);
        counter.update(true, 12);
        assert!(counter.is_running());
        counter.update(true, 17);
        assert!(counter.value() < 100.0);
        counter.update(true, 22);
        assert_eq!(counter.value(), 100.0);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut counter = CountUp::new(5.0, 50.0, 10);
        counter.update(true, 0);
        counter.update(true, 4);
        counter.reset();
        assert_eq!(counter.value(), 5.0);
        assert!(!counter.is_running());
        assert!(!counter.is_settled());
    }

    #[test]
    fn test_tick_wraparound_does_not_panic() {
        let mut counter = CountUp::new(0.0, 10.0, 10);
        counter.update(true, 100);
        // An earlier tick than the start clamps to zero elapsed
        counter.update(true, 50);
        assert_eq!(counter.value(), 0.0);
    }

    #[test]
    fn test_duration_from_millis() {
        let counter = CountUp::with_duration_ms(0.0, 100.0, 2000, 16);
        assert_eq!(counter.duration_ticks, 125);

        // Degenerate tick rates still yield a runnable counter
        let counter = CountUp::with_duration_ms(0.0, 100.0, 5, 16);
        assert_eq!(counter.duration_ticks, 1);
    }
}
