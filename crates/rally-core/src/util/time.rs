//! Time-of-day handling at minute precision.
//!
//! ## Summary
//! Practice times are stored and compared as canonical `HH:MM` values.
//! Looser input (missing leading zero, a seconds component) is normalized
//! before anything else sees it.

use chrono::{NaiveTime, Timelike};

use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Parses a loosely formatted time of day and truncates it to minutes.
///
/// Accepts `H:M`, `HH:MM`, `HH:MM:SS` and `HH:MM:SS.fff`.
///
/// ## Errors
/// Returns `InvalidInput` if the value is not a valid 24-hour time.
pub fn normalize_time(raw: &str) -> CoreResult<NaiveTime> {
    let invalid = || CoreError::InvalidInput(format!("invalid time of day: {raw:?}"));

    let mut parts = raw.trim().splitn(3, ':');
    let hour = parts
        .next()
        .and_then(parse_component)
        .ok_or_else(invalid)?;
    let minute = parts
        .next()
        .and_then(parse_component)
        .ok_or_else(invalid)?;

    if let Some(rest) = parts.next() {
        let seconds = rest.split('.').next().unwrap_or_default();
        if parse_component(seconds).is_none_or(|s| s > 59) {
            tracing::trace!(raw, "rejecting malformed seconds component");
            return Err(invalid());
        }
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

fn parse_component(value: &str) -> Option<u32> {
    if value.is_empty() || value.len() > 2 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Renders a time as zero-padded 24-hour `HH:MM`.
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Drops any seconds or sub-second component.
#[must_use]
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// A half-open `[start, end)` range within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeRange {
    /// ## Summary
    /// Builds a range, requiring `start < end`.
    ///
    /// ## Errors
    /// Returns `ValidationError` if the start is not strictly before the end.
    pub fn new(start: NaiveTime, end: NaiveTime) -> CoreResult<Self> {
        if start >= end {
            return Err(CoreError::ValidationError(format!(
                "start time {} must be before end time {}",
                format_time(start),
                format_time(end)
            )));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    /// Two ranges overlap iff `s1 < e2 && s2 < e1`.
    ///
    /// Back-to-back ranges sharing an endpoint do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", format_time(self.start), format_time(self.end))
    }
}

/// Serde adapter writing `NaiveTime` as `HH:MM` and reading any form
/// [`normalize_time`] accepts.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// ## Summary
    /// Serializes a time as `HH:MM`.
    ///
    /// ## Errors
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    /// ## Summary
    /// Deserializes and normalizes a time string.
    ///
    /// ## Errors
    /// Fails if the string is not a valid time of day.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::normalize_time(&raw).map_err(serde::de::Error::custom)
    }
}
