//! Compiled-in settings.
//!
//! The program takes no configuration: the feed location and the target
//! instant are fixed at build time.

use chrono::{DateTime, FixedOffset, TimeZone};

/// Location of the forecast feed.
pub const DEFAULT_FEED_URL: &str = "https://forecast-tally.example/api/percent.json";

/// A fixed calendar instant in a named zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetInstant {
    /// Phrase printed after the countdown.
    pub label: String,
    /// IANA name of the zone the instant is defined in.
    pub zone: String,
    /// The instant, carrying the zone's offset on that date.
    pub at: DateTime<FixedOffset>,
}

impl TargetInstant {
    pub fn new(label: impl Into<String>, zone: impl Into<String>, at: DateTime<FixedOffset>) -> Self {
        Self {
            label: label.into(),
            zone: zone.into(),
            at,
        }
    }

    /// Midnight of 2026-11-03 in America/New_York (EST, UTC-05:00).
    pub fn election_day() -> Self {
        let eastern = FixedOffset::west_opt(5 * 3600).expect("Failed to build UTC-05:00 offset");
        let at = eastern
            .with_ymd_and_hms(2026, 11, 3, 0, 0, 0)
            .single()
            .expect("Fixed offset maps every local time");
        Self::new("Election Day", "America/New_York", at)
    }
}

/// Everything a run needs besides the collaborators themselves.
#[derive(Debug, Clone)]
pub struct Settings {
    pub feed_url: String,
    pub target: TargetInstant,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            target: TargetInstant::election_day(),
        }
    }
}
