//! In-memory [`PracticeStore`] used by tests and local runs without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use chrono::{NaiveDate, Utc};

use super::conflict::same_venue;
use super::store::{PracticeStore, StoreFuture};
use super::types::{NewPracticeOccurrence, PracticeOccurrence, ScheduledPractice};
use crate::error::{ServiceError, ServiceResult};

#[derive(Debug, Default)]
pub struct InMemoryPracticeStore {
    rows: Mutex<Vec<PracticeOccurrence>>,
    labels: Mutex<HashMap<String, String>>,
    fail_inserts: AtomicBool,
}

impl InMemoryPracticeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label shown for practices owned by `owner_id`.
    pub fn set_label(&self, owner_id: &str, label: &str) {
        lock(&self.labels).insert(owner_id.to_string(), label.to_string());
    }

    /// Makes every following `insert_batch` call fail.
    pub fn fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    /// Stores rows directly, bypassing any validation.
    pub fn seed(&self, rows: &[NewPracticeOccurrence]) {
        lock(&self.rows).extend(rows.iter().map(materialize));
    }

    /// Every stored row, in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<PracticeOccurrence> {
        lock(&self.rows).clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.rows).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find(&self, location: &str, dates: &[NaiveDate]) -> Vec<ScheduledPractice> {
        let labels = lock(&self.labels);
        let mut found: Vec<ScheduledPractice> = lock(&self.rows)
            .iter()
            .filter(|row| {
                same_venue(&row.location, location) && dates.contains(&row.event_date)
            })
            .map(|row| ScheduledPractice {
                occurrence: row.clone(),
                label: labels
                    .get(&row.owner_id)
                    .cloned()
                    .unwrap_or_else(|| row.owner_id.clone()),
            })
            .collect();
        found.sort_by_key(|s| (s.occurrence.event_date, s.occurrence.start_time));
        found
    }

    fn insert(&self, rows: &[NewPracticeOccurrence]) -> ServiceResult<Vec<PracticeOccurrence>> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(ServiceError::StoreError(
                "insert rejected by store".to_string(),
            ));
        }
        let created: Vec<PracticeOccurrence> = rows.iter().map(materialize).collect();
        lock(&self.rows).extend(created.iter().cloned());
        Ok(created)
    }
}

impl PracticeStore for InMemoryPracticeStore {
    fn find_on_dates<'a>(
        &'a self,
        location: &'a str,
        dates: &'a [NaiveDate],
    ) -> StoreFuture<'a, Vec<ScheduledPractice>> {
        Box::pin(async move { Ok(self.find(location, dates)) })
    }

    fn insert_batch<'a>(
        &'a self,
        rows: &'a [NewPracticeOccurrence],
    ) -> StoreFuture<'a, Vec<PracticeOccurrence>> {
        Box::pin(async move { self.insert(rows) })
    }
}

fn materialize(row: &NewPracticeOccurrence) -> PracticeOccurrence {
    PracticeOccurrence {
        id: uuid::Uuid::now_v7(),
        owner_id: row.owner_id.clone(),
        event_date: row.event_date,
        start_time: row.start_time,
        end_time: row.end_time,
        location: row.location.clone(),
        max_participants: row.max_participants,
        content: row.content.clone(),
        level: row.level.clone(),
        conditions: row.conditions.clone(),
        fee: row.fee.clone(),
        recurrence_group_id: row.recurrence_group_id,
        created_at: Utc::now(),
    }
}

/// Locks a mutex and recovers from poisoning.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            mutex.clear_poison();
            poisoned.into_inner()
        }
    }
}
