//! Continuous auto-scrolling ribbon with a dwell at each end.

use std::time::Duration;

use tracing::debug;

use crate::timer::Delay;

/// Scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Observable ribbon state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RibbonState {
    Scrolling(Direction),
    /// Parked at a bound until the dwell expires, then moving `next`.
    Waiting { remaining: Duration, next: Direction },
}

/// Ribbon that scrolls by a fixed step per frame and bounces between
/// `0` and `max_offset`.
///
/// Pausing stops movement only. A dwell that is already running keeps
/// counting down while paused.
#[derive(Debug, Clone)]
pub struct ScrollRibbon {
    offset: f64,
    max_offset: f64,
    step: f64,
    dwell: Duration,
    direction: Direction,
    waiting: Option<Delay>,
    paused: bool,
}

impl ScrollRibbon {
    #[must_use]
    pub fn new(step: f64, dwell: Duration) -> Self {
        Self {
            offset: 0.0,
            max_offset: 0.0,
            step,
            dwell,
            direction: Direction::Forward,
            waiting: None,
            paused: false,
        }
    }

    /// Set the scrollable width (content width minus visible width).
    pub fn set_max_offset(&mut self, max_offset: f64) {
        self.max_offset = max_offset.max(0.0);
        self.offset = self.offset.min(self.max_offset);
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pointer entered the ribbon.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Pointer left the ribbon.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    #[must_use]
    pub fn state(&self) -> RibbonState {
        match self.waiting {
            Some(delay) => RibbonState::Waiting {
                remaining: delay.remaining(),
                next: self.direction.flipped(),
            },
            None => RibbonState::Scrolling(self.direction),
        }
    }

    /// One animation frame, `elapsed` after the previous one.
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(delay) = self.waiting.as_mut() {
            if delay.tick(elapsed) {
                self.waiting = None;
                self.direction = self.direction.flipped();
                debug!(direction = ?self.direction, "Ribbon reversing");
            }
            return;
        }
        if self.paused {
            return;
        }

        self.offset = (self.offset + self.step * self.direction.sign()).clamp(0.0, self.max_offset);

        let at_bound = match self.direction {
            Direction::Forward => self.offset >= self.max_offset - 1.0,
            Direction::Backward => self.offset <= 0.0,
        };
        if at_bound {
            self.waiting = Some(Delay::new(self.dwell));
        }
    }
}
