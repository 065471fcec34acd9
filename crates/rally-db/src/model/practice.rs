//! Models for the practice table.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::db::schema::practice;

/// One persisted practice occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = practice)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Practice {
    pub id: Uuid,
    /// Opaque identity from the hosted identity provider.
    pub owner_id: String,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub max_participants: i32,
    pub content: Option<String>,
    pub level: Option<String>,
    pub conditions: Option<String>,
    pub fee: Option<String>,
    /// Shared by every occurrence generated from one recurrence rule.
    pub recurrence_group_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// New practice occurrence for insertion.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = practice)]
pub struct NewPractice<'a> {
    pub id: Uuid,
    pub owner_id: &'a str,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: &'a str,
    pub max_participants: i32,
    pub content: Option<&'a str>,
    pub level: Option<&'a str>,
    pub conditions: Option<&'a str>,
    pub fee: Option<&'a str>,
    pub recurrence_group_id: Option<Uuid>,
}
