//! Tick-driven animation primitives.
//!
//! Everything here advances only when the owning screen feeds it ticks
//! from the main loop; there are no timers or background tasks, so state
//! can never update after its view is gone.

mod counter;
mod magnetic;
mod reveal;
mod spring;

pub use counter::CountUp;
pub use magnetic::Magnetic;
pub use reveal::Reveal;
pub use spring::Spring;
