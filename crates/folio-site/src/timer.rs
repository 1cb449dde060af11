//! Caller-driven timers.
//!
//! Nothing here reads a clock. Owners advance timers with the elapsed time
//! since the previous tick, which keeps every state machine deterministic.

use std::time::Duration;

/// Recurring timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
}

impl Interval {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance the timer and return how many periods completed.
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        let total = self.elapsed.saturating_add(elapsed).as_nanos();
        let period = self.period.as_nanos();
        self.elapsed = Duration::from_nanos(u64::try_from(total % period).unwrap_or(u64::MAX));
        u32::try_from(total / period).unwrap_or(u32::MAX)
    }

    /// Restart the current period.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

/// One-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delay {
    remaining: Duration,
}

impl Delay {
    #[must_use]
    pub fn new(after: Duration) -> Self {
        Self { remaining: after }
    }

    /// Advance the timer. Returns `true` once it has expired.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.remaining.is_zero()
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }
}
