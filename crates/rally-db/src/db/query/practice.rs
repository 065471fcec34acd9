//! Query composition for `practice`.

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::practice;
use crate::model::practice::{NewPractice, Practice};

define_sql_function! {
    /// Postgres `btrim`: strips leading and trailing whitespace.
    fn btrim(value: Text) -> Text;
}

/// ## Summary
/// Loads every practice at `location` that falls on one of `dates`.
///
/// Locations match after trimming surrounding whitespace on both sides.
/// Results are ordered by date then start time.
///
/// ## Errors
/// Returns an error if the database operation fails.
#[tracing::instrument(skip(conn, dates), fields(date_count = dates.len()))]
pub async fn by_location_and_dates(
    conn: &mut DbConnection<'_>,
    location: &str,
    dates: &[NaiveDate],
) -> QueryResult<Vec<Practice>> {
    if dates.is_empty() {
        return Ok(Vec::new());
    }

    practice::table
        .filter(btrim(practice::location).eq(location.trim()))
        .filter(practice::event_date.eq_any(dates))
        .order((practice::event_date.asc(), practice::start_time.asc()))
        .select(Practice::as_select())
        .load(conn)
        .await
}

/// ## Summary
/// Inserts multiple practices with one statement and returns the stored rows.
///
/// ## Errors
/// Returns an error if the database operation fails.
#[tracing::instrument(skip(conn, practices), fields(row_count = practices.len()))]
pub async fn insert_batch(
    conn: &mut DbConnection<'_>,
    practices: &[NewPractice<'_>],
) -> QueryResult<Vec<Practice>> {
    if practices.is_empty() {
        return Ok(Vec::new());
    }

    diesel::insert_into(practice::table)
        .values(practices)
        .returning(Practice::as_returning())
        .get_results(conn)
        .await
}
