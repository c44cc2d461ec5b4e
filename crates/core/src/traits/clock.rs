//! Calendar source

use chrono::Datelike;

/// Supplies the current month, 0-indexed (January = 0)
pub trait Clock: Send + Sync + 'static {
    fn current_month(&self) -> u32;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_month(&self) -> u32 {
        chrono::Local::now().month0()
    }
}

/// Clock pinned to one month, for tests and replays
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn current_month(&self) -> u32 {
        self.0 % 12
    }
}
