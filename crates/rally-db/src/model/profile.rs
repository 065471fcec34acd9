use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::db::schema::profile;

/// Organizer profile keyed by identity-provider owner id.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = profile)]
#[diesel(primary_key(owner_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Profile {
    pub owner_id: String,
    pub display_name: Option<String>,
    pub team_name: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// ## Summary
    /// Label shown for this organizer: team name, else display name, else the owner id.
    #[must_use]
    pub fn label(&self) -> &str {
        [self.team_name.as_deref(), self.display_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty())
            .unwrap_or(self.owner_id.as_str())
    }
}
