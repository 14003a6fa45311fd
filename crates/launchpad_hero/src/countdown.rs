//! # Countdown Timer
//!
//! Counts down to the launch instant, refreshed once per [`REFRESH_INTERVAL`].
//!
//! ## Rules
//!
//! - Remaining time is rounded UP to the whole second, so zero is only
//!   reported at or after the target
//! - Remaining time never increases, even if the wall clock steps backwards
//! - `Running → Completed` happens once; after that the breakdown stays at zero
//! - A target already in the past completes on the first recompute, the same
//!   way a countdown that runs out during the session does

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// How often the countdown is recomputed.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(1);
/// Label shown once the countdown has completed.
pub const COMPLETED_LABEL: &str = "🎉 Launched!";

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Remaining time split into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownBreakdown {
    /// Whole days.
    pub days: u64,
    /// Hours, 0-23.
    pub hours: u64,
    /// Minutes, 0-59.
    pub minutes: u64,
    /// Seconds, 0-59.
    pub seconds: u64,
}

impl CountdownBreakdown {
    /// Splits a whole number of seconds.
    #[must_use]
    pub const fn from_secs(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total / SECONDS_PER_HOUR) % 24,
            minutes: (total / SECONDS_PER_MINUTE) % 60,
            seconds: total % 60,
        }
    }

    /// Total seconds represented.
    #[must_use]
    pub const fn total_secs(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

/// Formats as `2d 3h 0m 0s`.
impl fmt::Display for CountdownBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {}h {}m {}s", self.days, self.hours, self.minutes, self.seconds)
    }
}

/// Snapshot of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownState {
    /// Instant being counted down to.
    pub target: DateTime<Utc>,
    /// Remaining time, never negative.
    pub breakdown: CountdownBreakdown,
    /// True once the target has been reached. Never reverts.
    pub completed: bool,
}

/// Countdown to a fixed instant.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    /// Launch instant.
    target: DateTime<Utc>,
    /// Remaining whole seconds at the last recompute.
    remaining_secs: Option<u64>,
    /// Completion flag.
    completed: bool,
}

impl CountdownTimer {
    /// Creates a countdown. Nothing is computed until the first [`recompute`](Self::recompute).
    #[must_use]
    pub fn new(target: DateTime<Utc>) -> Self {
        Self {
            target,
            remaining_secs: None,
            completed: false,
        }
    }

    /// Recomputes remaining time against `now`.
    ///
    /// Returns true exactly once: on the recompute that completes the countdown.
    pub fn recompute(&mut self, now: DateTime<Utc>) -> bool {
        if self.completed {
            return false;
        }

        let millis = (self.target - now).num_milliseconds().max(0).unsigned_abs();
        let computed = millis.div_ceil(1000);
        // The wall clock may step backwards; the display must not.
        let remaining = self.remaining_secs.map_or(computed, |prev| prev.min(computed));
        self.remaining_secs = Some(remaining);

        if remaining == 0 {
            self.completed = true;
            return true;
        }
        false
    }

    /// Returns true once the target has been reached.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Remaining time as of the last recompute.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::from_secs(self.remaining_secs.unwrap_or(0))
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> CountdownState {
        CountdownState {
            target: self.target,
            breakdown: CountdownBreakdown::from_secs(self.remaining_secs.unwrap_or(0)),
            completed: self.completed,
        }
    }

    /// Text shown in the badge.
    #[must_use]
    pub fn label(&self) -> String {
        if self.completed {
            COMPLETED_LABEL.to_string()
        } else {
            self.state().breakdown.to_string()
        }
    }
}
