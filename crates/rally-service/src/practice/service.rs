//! Practice creation: validate, expand, check conflicts, commit.

use chrono::NaiveDate;
use rally_core::util::date::is_past;
use rally_core::util::time::{TimeRange, normalize_time};
use uuid::Uuid;

use super::conflict::{CandidateSlot, find_conflicts};
use super::recurrence::{self, Occurrences};
use super::store::PracticeStore;
use super::types::{CreatePracticeRequest, NewPracticeOccurrence, PracticeOccurrence};
use crate::error::{ServiceError, ServiceResult};

/// Stages of a batch creation. `Committing` and `Aborted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStage {
    Validating,
    Expanding,
    ConflictChecking,
    Committing,
    Aborted,
}

impl BatchStage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::Expanding => "expanding",
            Self::ConflictChecking => "conflict_checking",
            Self::Committing => "committing",
            Self::Aborted => "aborted",
        }
    }
}

impl std::fmt::Display for BatchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request fields after validation, with the rule's dates still pending.
#[derive(Debug)]
struct ValidatedPractice {
    owner_id: String,
    range: TimeRange,
    location: String,
    max_participants: u32,
    content: Option<String>,
    level: Option<String>,
    conditions: Option<String>,
    fee: Option<String>,
    recurring: bool,
    occurrences: Occurrences,
}

impl ValidatedPractice {
    fn rows(&self, dates: &[NaiveDate]) -> Vec<NewPracticeOccurrence> {
        let recurrence_group_id = self.recurring.then(Uuid::now_v7);
        dates
            .iter()
            .map(|&event_date| NewPracticeOccurrence {
                owner_id: self.owner_id.clone(),
                event_date,
                start_time: self.range.start(),
                end_time: self.range.end(),
                location: self.location.clone(),
                max_participants: self.max_participants,
                content: self.content.clone(),
                level: self.level.clone(),
                conditions: self.conditions.clone(),
                fee: self.fee.clone(),
                recurrence_group_id,
            })
            .collect()
    }
}

fn enter(stage: BatchStage) {
    tracing::Span::current().record("stage", stage.as_str());
    tracing::debug!(%stage, "Entering batch stage");
}

fn optional_text(value: Option<&String>) -> Option<String> {
    value
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .map(String::from)
}

fn validate(
    owner_id: Option<&str>,
    request: &CreatePracticeRequest,
    today: NaiveDate,
) -> ServiceResult<ValidatedPractice> {
    let owner_id = owner_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(ServiceError::NotAuthenticated)?;

    let location = request.location.trim();
    if location.is_empty() {
        return Err(ServiceError::validation("location", "a location is required"));
    }

    let start = normalize_time(&request.start_time)
        .map_err(|e| ServiceError::validation("start_time", e.to_string()))?;
    let end = normalize_time(&request.end_time)
        .map_err(|e| ServiceError::validation("end_time", e.to_string()))?;
    let range =
        TimeRange::new(start, end).map_err(|e| ServiceError::validation("end_time", e.to_string()))?;

    if request.max_participants < 1 {
        return Err(ServiceError::validation(
            "max_participants",
            "at least one participant is required",
        ));
    }
    let max_participants = u32::try_from(request.max_participants)
        .map_err(|_err| ServiceError::validation("max_participants", "capacity is too large"))?;

    if is_past(request.event_date, today) {
        return Err(ServiceError::validation(
            "event_date",
            format!("{} is in the past", request.event_date),
        ));
    }

    let occurrences = recurrence::expand(request.event_date, &request.recurrence, today)?;

    Ok(ValidatedPractice {
        owner_id: owner_id.to_string(),
        range,
        location: location.to_string(),
        max_participants,
        content: optional_text(request.content.as_ref()),
        level: optional_text(request.level.as_ref()),
        conditions: optional_text(request.conditions.as_ref()),
        fee: optional_text(request.fee.as_ref()),
        recurring: request.recurrence.kind.is_recurring(),
        occurrences,
    })
}

/// ## Summary
/// Creates a practice and every occurrence of its recurrence rule as one batch.
///
/// Nothing is written unless every occurrence is free of conflicts at its
/// venue. Occurrences of a repeating rule share a fresh recurrence group id.
/// `today` is the deployment's local calendar day.
///
/// ## Side Effects
/// - Reads existing practices at the venue on the expanded dates
/// - Inserts the expanded occurrences in one store call
///
/// ## Errors
/// - `NotAuthenticated` if `owner_id` is missing
/// - `ValidationError` for malformed or out-of-range fields
/// - `RecurrenceConfigError` for an invalid recurrence rule
/// - `Conflict` with every overlapping practice; no rows are written
/// - store errors verbatim; some rows may have been written
#[tracing::instrument(
    skip(store, request),
    fields(
        event_date = %request.event_date,
        location = %request.location,
        recurrence = %request.recurrence.kind,
        stage = tracing::field::Empty,
    )
)]
pub async fn create_practices<S: PracticeStore + ?Sized>(
    store: &S,
    owner_id: Option<&str>,
    request: &CreatePracticeRequest,
    today: NaiveDate,
) -> ServiceResult<Vec<PracticeOccurrence>> {
    enter(BatchStage::Validating);
    let practice = validate(owner_id, request, today).inspect_err(|e| {
        tracing::debug!(error = %e, "Practice request rejected");
    })?;

    enter(BatchStage::Expanding);
    let dates: Vec<NaiveDate> = practice.occurrences.clone().collect();
    tracing::debug!(occurrence_count = dates.len(), "Expanded recurrence rule");

    enter(BatchStage::ConflictChecking);
    let existing = store.find_on_dates(&practice.location, &dates).await?;
    let candidates: Vec<CandidateSlot<'_>> = dates
        .iter()
        .map(|&event_date| CandidateSlot {
            event_date,
            range: practice.range,
            location: &practice.location,
        })
        .collect();
    let conflicts = find_conflicts(&candidates, &existing);

    if !conflicts.is_empty() {
        enter(BatchStage::Aborted);
        tracing::info!(
            conflict_count = conflicts.len(),
            "Practice batch aborted due to schedule conflicts"
        );
        return Err(ServiceError::Conflict(conflicts));
    }

    enter(BatchStage::Committing);
    let rows = practice.rows(&dates);
    let created = store.insert_batch(&rows).await.inspect_err(|e| {
        tracing::error!(error = %e, row_count = rows.len(), "Practice batch insert failed");
    })?;

    tracing::info!(
        created_count = created.len(),
        recurrence_group_id = ?rows.first().and_then(|row| row.recurrence_group_id),
        "Practice batch committed"
    );

    Ok(created)
}
