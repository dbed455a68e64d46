//! Wall-clock sources for the refresh driver.

use chrono::{DateTime, Local, TimeDelta};
use tokio::time::Instant;

/// Source of the current local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Wall clock pinned to `anchor` at creation and advanced by tokio's clock.
///
/// Under a paused tokio runtime this follows `tokio::time::advance`, which
/// makes tick timing and reported time line up in tests and replays.
#[derive(Debug, Clone)]
pub struct AnchoredClock {
    anchor: DateTime<Local>,
    started: Instant,
}

impl AnchoredClock {
    pub fn new(anchor: DateTime<Local>) -> Self {
        Self {
            anchor,
            started: Instant::now(),
        }
    }
}

impl Clock for AnchoredClock {
    fn now(&self) -> DateTime<Local> {
        let elapsed = TimeDelta::from_std(self.started.elapsed()).unwrap_or(TimeDelta::MAX);
        self.anchor
            .checked_add_signed(elapsed)
            .unwrap_or(self.anchor)
    }
}
