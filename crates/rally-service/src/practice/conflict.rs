//! Detect time overlaps between requested slots and existing practices.
//!
//! Overlap is half-open: a practice ending at 16:00 does not collide with one
//! starting at 16:00 at the same venue.

use chrono::NaiveDate;
use rally_core::util::time::TimeRange;

use super::types::{ConflictRecord, ScheduledPractice};

/// One requested occurrence: a date and time range at a venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSlot<'a> {
    pub event_date: NaiveDate,
    pub range: TimeRange,
    pub location: &'a str,
}

/// Whether two locations name the same venue.
#[must_use]
pub fn same_venue(a: &str, b: &str) -> bool {
    a.trim() == b.trim()
}

/// Whether a requested slot collides with an existing practice.
#[must_use]
pub fn collides(candidate: &CandidateSlot<'_>, existing: &ScheduledPractice) -> bool {
    let occurrence = &existing.occurrence;
    if occurrence.event_date != candidate.event_date
        || !same_venue(&occurrence.location, candidate.location)
    {
        return false;
    }

    match occurrence.time_range() {
        Some(range) => candidate.range.overlaps(&range),
        None => {
            tracing::warn!(
                practice_id = %occurrence.id,
                start = %occurrence.start_time,
                end = %occurrence.end_time,
                "Ignoring existing practice with an empty time range"
            );
            false
        }
    }
}

/// ## Summary
/// Finds every existing practice that overlaps one of `candidates`.
///
/// Each existing practice is reported once, ordered by date then start time.
/// An empty result means the whole batch may be written.
#[must_use]
pub fn find_conflicts(
    candidates: &[CandidateSlot<'_>],
    existing: &[ScheduledPractice],
) -> Vec<ConflictRecord> {
    let mut hits: Vec<&ScheduledPractice> = existing
        .iter()
        .filter(|scheduled| candidates.iter().any(|c| collides(c, scheduled)))
        .collect();

    hits.sort_by_key(|scheduled| {
        (
            scheduled.occurrence.event_date,
            scheduled.occurrence.start_time,
            scheduled.occurrence.end_time,
        )
    });
    hits.dedup_by_key(|scheduled| scheduled.occurrence.id);

    tracing::debug!(
        candidate_count = candidates.len(),
        existing_count = existing.len(),
        conflict_count = hits.len(),
        "Conflict check complete"
    );

    hits.into_iter().map(ConflictRecord::from).collect()
}
