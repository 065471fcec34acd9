//! Practice scheduling types shared by the expander, detector and coordinator.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rally_core::types::RecurrenceKind;
use rally_core::util::time::{TimeRange, hhmm};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The generating rule for a batch of occurrences.
///
/// Weekday, day-of-month and ordinal are taken from the base date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    #[serde(default, rename = "type")]
    pub kind: RecurrenceKind,
    /// Inclusive upper bound. Required unless `kind` is `none`.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl RecurrenceRule {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            kind: RecurrenceKind::None,
            end_date: None,
        }
    }

    #[must_use]
    pub const fn new(kind: RecurrenceKind, end_date: NaiveDate) -> Self {
        Self {
            kind,
            end_date: Some(end_date),
        }
    }
}

/// Organizer input for creating one practice, possibly repeating.
///
/// Times stay as text here so malformed values surface as field errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePracticeRequest {
    pub event_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub max_participants: i64,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub conditions: Option<String>,
    #[serde(default)]
    pub fee: Option<String>,
    #[serde(default)]
    pub recurrence: RecurrenceRule,
}

/// A validated occurrence waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPracticeOccurrence {
    pub owner_id: String,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub max_participants: u32,
    pub content: Option<String>,
    pub level: Option<String>,
    pub conditions: Option<String>,
    pub fee: Option<String>,
    pub recurrence_group_id: Option<Uuid>,
}

/// One concrete, persisted practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeOccurrence {
    pub id: Uuid,
    pub owner_id: String,
    pub event_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub location: String,
    pub max_participants: u32,
    pub content: Option<String>,
    pub level: Option<String>,
    pub conditions: Option<String>,
    pub fee: Option<String>,
    pub recurrence_group_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl PracticeOccurrence {
    /// Returns the occurrence's time range, or `None` for a row violating `start < end`.
    #[must_use]
    pub fn time_range(&self) -> Option<TimeRange> {
        TimeRange::new(self.start_time, self.end_time).ok()
    }
}

/// An existing occurrence together with the label shown to other organizers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledPractice {
    pub occurrence: PracticeOccurrence,
    /// Owning team name, else organizer name.
    pub label: String,
}

/// An existing practice that collides with a requested slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRecord {
    pub event_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub label: String,
    pub location: String,
}

impl From<&ScheduledPractice> for ConflictRecord {
    fn from(existing: &ScheduledPractice) -> Self {
        Self {
            event_date: existing.occurrence.event_date,
            start_time: existing.occurrence.start_time,
            end_time: existing.occurrence.end_time,
            label: existing.label.clone(),
            location: existing.occurrence.location.clone(),
        }
    }
}
