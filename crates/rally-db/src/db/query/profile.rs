//! Query composition for `profile`.

use std::collections::HashMap;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::profile;
use crate::model::profile::Profile;

/// ## Summary
/// Resolves display labels for the given owners.
///
/// Owners without a profile row are absent from the map.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn labels_for_owners(
    conn: &mut DbConnection<'_>,
    owner_ids: &[&str],
) -> QueryResult<HashMap<String, String>> {
    if owner_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let profiles: Vec<Profile> = profile::table
        .filter(profile::owner_id.eq_any(owner_ids))
        .select(Profile::as_select())
        .load(conn)
        .await?;

    Ok(profiles
        .into_iter()
        .map(|p| {
            let label = p.label().to_string();
            (p.owner_id, label)
        })
        .collect())
}
