//! Time source and countdown to the target instant.

use crate::settings::TargetInstant;
use chrono::{DateTime, Duration, FixedOffset, Utc};

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;

/// Supplies the current time and the instant to count down to.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
    fn target(&self) -> &TargetInstant;
}

/// Wall clock.
#[derive(Debug, Clone)]
pub struct SystemClock {
    target: TargetInstant,
}

impl SystemClock {
    pub fn new(target: TargetInstant) -> Self {
        Self { target }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn target(&self) -> &TargetInstant {
        &self.target
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: DateTime<Utc>,
    target: TargetInstant,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>, target: TargetInstant) -> Self {
        Self { now, target }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn target(&self) -> &TargetInstant {
        &self.target
    }
}

/// Whole days and whole remaining hours until the target.
///
/// Both parts are floor-divided from the signed remaining seconds, so a
/// passed target yields negative days with non-negative hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
}

impl Countdown {
    pub fn between(now: DateTime<Utc>, target: DateTime<FixedOffset>) -> Self {
        let remaining = target.signed_duration_since(now);
        // num_seconds truncates toward zero; a leftover negative fraction floors down.
        let mut secs = remaining.num_seconds();
        if remaining < Duration::seconds(secs) {
            secs -= 1;
        }
        Self {
            days: secs.div_euclid(SECS_PER_DAY),
            hours: secs.rem_euclid(SECS_PER_DAY) / SECS_PER_HOUR,
        }
    }

    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::between(clock.now(), clock.target().at)
    }

    /// Whether the target instant is already behind us.
    pub fn is_past(&self) -> bool {
        self.days < 0
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} days, {} hours", self.days, self.hours)
    }
}
