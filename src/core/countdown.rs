//! Countdown model
//!
//! Holds the remaining time of a countdown slide and the rules that derive it
//! from a [`CountdownConfig`] and decrement it once per tick.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Upper bound for the days figure when counting down to a date
pub const MAX_DAYS: i64 = 99;

const MILLIS_PER_HOUR: f64 = 60.0 * 60.0 * 1000.0;

/// User supplied countdown inputs
///
/// `until` wins over the unit fields when it names a moment in the future.
/// The unit fields are taken as-is otherwise; `hours` is meant to stay below
/// 24 and `minutes`/`seconds` below 60 but nothing enforces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownConfig {
    #[serde(default)]
    pub days: i64,
    #[serde(default)]
    pub hours: i64,
    #[serde(default)]
    pub minutes: i64,
    #[serde(default)]
    pub seconds: i64,
    #[serde(default)]
    pub until: Option<String>,
}

impl CountdownConfig {
    pub fn new(days: i64, hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
            until: None,
        }
    }

    pub fn until(mut self, until: impl Into<String>) -> Self {
        self.until = Some(until.into());
        self
    }

    /// Target instant, if `until` is set and readable.
    ///
    /// Accepts RFC 3339 timestamps as well as offset-less date-times, which
    /// are read in the local time zone.
    pub fn target(&self) -> Option<DateTime<Utc>> {
        let until = self.until.as_deref()?.trim();
        if until.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(until) {
            return Some(dt.with_timezone(&Utc));
        }

        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(until, fmt).ok())
            .and_then(|naive| Local.from_local_datetime(&naive).single())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// What a single tick did to the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second was taken off and time remains
    Counted,
    /// One second was taken off and the countdown is now at zero
    Finished,
    /// Nothing left to count; the timer should be cancelled
    Idle,
}

/// Remaining time of a countdown
///
/// `total_seconds` is authoritative. The unit fields are a decomposition kept
/// for display and are only decremented through the seconds/minutes rollover,
/// so hours may dip below zero when days remain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    total_seconds: i64,
}

impl Countdown {
    pub fn new(days: i64, hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
            total_seconds: days
                .saturating_mul(SECONDS_PER_DAY)
                .saturating_add(hours.saturating_mul(SECONDS_PER_HOUR))
                .saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
                .saturating_add(seconds),
        }
    }

    /// Derive the starting countdown for `config` as seen at `now`.
    pub fn initialize(config: &CountdownConfig, now: DateTime<Utc>) -> Self {
        match config.target() {
            Some(target) if target > now => {
                let millis = (target - now).num_milliseconds() as f64;
                Self::from_hours(millis / MILLIS_PER_HOUR)
            }
            _ => {
                if config.until.as_deref().is_some_and(|s| !s.trim().is_empty()) {
                    log::debug!(
                        "ignoring until={:?}: not a future date-time",
                        config.until
                    );
                }
                Self::new(config.days, config.hours, config.minutes, config.seconds)
            }
        }
    }

    /// Split a duration expressed in (fractional) hours into figures.
    ///
    /// Float rounding can leave the split up to one second short of the
    /// exact duration, e.g. 13 s may come out as 12 s.
    fn from_hours(diff: f64) -> Self {
        let (days, hours) = if diff >= 24.0 {
            let diff_days = diff / 24.0;
            let days = if diff_days >= MAX_DAYS as f64 {
                MAX_DAYS
            } else {
                diff_days.floor() as i64
            };
            (days, (diff_days.fract() * 24.0).floor() as i64)
        } else {
            (0, diff.floor() as i64)
        };

        let minutes = diff.fract() * 60.0;
        let seconds = minutes.fract() * 60.0;

        Self::new(days, hours, minutes.floor() as i64, seconds.floor() as i64)
    }

    pub fn days(&self) -> i64 {
        self.days
    }

    pub fn hours(&self) -> i64 {
        self.hours
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn total_seconds(&self) -> i64 {
        self.total_seconds
    }

    pub fn is_finished(&self) -> bool {
        self.total_seconds <= 0
    }

    /// Take one second off.
    pub fn tick(&mut self) -> TickOutcome {
        if self.total_seconds <= 0 {
            return TickOutcome::Idle;
        }

        self.seconds -= 1;

        if self.minutes >= 0 && self.seconds < 0 {
            self.seconds = 59;
            self.minutes -= 1;
        }

        if self.hours >= 0 && self.minutes < 0 {
            self.minutes = 59;
            self.hours -= 1;
        }

        self.total_seconds -= 1;

        if self.total_seconds == 0 {
            TickOutcome::Finished
        } else {
            TickOutcome::Counted
        }
    }
}
