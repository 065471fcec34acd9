//! Persistence collaborator for practice occurrences.
//!
//! The coordinator only needs two operations from the hosted database: look
//! up practices at a venue on a set of dates, and write a batch. Keeping them
//! behind a trait lets the coordinator run against Postgres or memory.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use chrono::NaiveDate;
use rally_db::db::DbProvider;
use rally_db::db::query::{practice, profile};
use rally_db::model::practice::{NewPractice, Practice};

use super::types::{NewPracticeOccurrence, PracticeOccurrence, ScheduledPractice};
use crate::error::{ServiceError, ServiceResult};

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = ServiceResult<T>> + Send + 'a>>;

pub trait PracticeStore: Send + Sync {
    /// Practices at `location` on any of `dates`, with their display labels.
    fn find_on_dates<'a>(
        &'a self,
        location: &'a str,
        dates: &'a [NaiveDate],
    ) -> StoreFuture<'a, Vec<ScheduledPractice>>;

    /// Writes every row or reports an error. A reported error does not
    /// guarantee that no row was written.
    fn insert_batch<'a>(
        &'a self,
        rows: &'a [NewPracticeOccurrence],
    ) -> StoreFuture<'a, Vec<PracticeOccurrence>>;
}

/// [`PracticeStore`] backed by the hosted Postgres database.
#[derive(Clone)]
pub struct DbPracticeStore {
    provider: Arc<dyn DbProvider + Send + Sync>,
}

impl DbPracticeStore {
    #[must_use]
    pub fn new(provider: Arc<dyn DbProvider + Send + Sync>) -> Self {
        Self { provider }
    }
}

impl PracticeStore for DbPracticeStore {
    fn find_on_dates<'a>(
        &'a self,
        location: &'a str,
        dates: &'a [NaiveDate],
    ) -> StoreFuture<'a, Vec<ScheduledPractice>> {
        Box::pin(async move {
            let mut conn = self.provider.get_connection().await?;

            let rows = practice::by_location_and_dates(&mut conn, location, dates).await?;

            let mut owners: Vec<&str> = rows.iter().map(|row| row.owner_id.as_str()).collect();
            owners.sort_unstable();
            owners.dedup();
            let labels = profile::labels_for_owners(&mut conn, &owners).await?;

            rows.into_iter()
                .map(|row| {
                    let label = labels
                        .get(&row.owner_id)
                        .cloned()
                        .unwrap_or_else(|| row.owner_id.clone());
                    Ok(ScheduledPractice {
                        occurrence: occurrence_from_row(row)?,
                        label,
                    })
                })
                .collect()
        })
    }

    fn insert_batch<'a>(
        &'a self,
        rows: &'a [NewPracticeOccurrence],
    ) -> StoreFuture<'a, Vec<PracticeOccurrence>> {
        Box::pin(async move {
            let new_rows = rows
                .iter()
                .map(new_row)
                .collect::<ServiceResult<Vec<_>>>()?;

            let mut conn = self.provider.get_connection().await?;
            let inserted = practice::insert_batch(&mut conn, &new_rows).await?;

            inserted.into_iter().map(occurrence_from_row).collect()
        })
    }
}

fn new_row(row: &NewPracticeOccurrence) -> ServiceResult<NewPractice<'_>> {
    let max_participants = i32::try_from(row.max_participants).map_err(|_err| {
        ServiceError::validation("max_participants", "capacity is too large")
    })?;

    Ok(NewPractice {
        id: uuid::Uuid::now_v7(),
        owner_id: &row.owner_id,
        event_date: row.event_date,
        start_time: row.start_time,
        end_time: row.end_time,
        location: &row.location,
        max_participants,
        content: row.content.as_deref(),
        level: row.level.as_deref(),
        conditions: row.conditions.as_deref(),
        fee: row.fee.as_deref(),
        recurrence_group_id: row.recurrence_group_id,
    })
}

fn occurrence_from_row(row: Practice) -> ServiceResult<PracticeOccurrence> {
    let max_participants = u32::try_from(row.max_participants).map_err(|_err| {
        ServiceError::StoreError(format!(
            "practice {} has invalid capacity {}",
            row.id, row.max_participants
        ))
    })?;

    Ok(PracticeOccurrence {
        id: row.id,
        owner_id: row.owner_id,
        event_date: row.event_date,
        start_time: row.start_time,
        end_time: row.end_time,
        location: row.location,
        max_participants,
        content: row.content,
        level: row.level,
        conditions: row.conditions,
        fee: row.fee,
        recurrence_group_id: row.recurrence_group_id,
        created_at: row.created_at,
    })
}
