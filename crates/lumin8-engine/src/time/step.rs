use std::time::Duration;

/// Fixed-rate step accumulator.
///
/// Converts variable frame deltas into a whole number of fixed-period steps,
/// carrying the remainder forward so the long-run rate stays exact. The
/// upstream [`FrameClock`](super::FrameClock) clamp bounds how many steps a
/// single frame can produce.
#[derive(Debug, Clone)]
pub struct FixedStep {
    period: Duration,
    accumulated: Duration,
}

impl FixedStep {
    /// Creates an accumulator stepping `hz` times per second.
    pub fn new(hz: u32) -> Self {
        debug_assert!(hz > 0);
        Self {
            period: Duration::from_secs(1) / hz.max(1),
            accumulated: Duration::ZERO,
        }
    }

    /// Adds `dt` and returns how many whole steps are now due.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accumulated += dt;

        let mut steps = 0;
        while self.accumulated >= self.period {
            self.accumulated -= self.period;
            steps += 1;
        }
        steps
    }

    /// Discards any accumulated remainder.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
