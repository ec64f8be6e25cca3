//! Wall-clock source shared by the status bar and the `date` command.

use chrono::DateTime;
use chrono::Local;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

pub type ClockBox = Box<dyn Clock>;

/// Reads the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant. Used to make rendering deterministic.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Local>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }
}
