//! Frame timing

use std::time::Instant;

/// Measures time between frames
pub trait FrameClock {
    /// Seconds since the previous lap (or since construction, for the first lap)
    fn lap(&mut self) -> f32;
}

/// Wall clock
#[derive(Debug, Clone)]
pub struct SystemClock {
    previous: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            previous: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn lap(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.previous).as_secs_f32();
        self.previous = now;
        elapsed
    }
}

/// Constant frame time, for headless runs and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    pub dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

impl FrameClock for FixedClock {
    fn lap(&mut self) -> f32 {
        self.dt
    }
}
