use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::db::schema::comment_like;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Identifiable, Queryable, Selectable)]
#[diesel(table_name = comment_like)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(primary_key(comment_id, owner_id))]
pub struct CommentLike {
    pub comment_id: Uuid,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Insertable)]
#[diesel(table_name = comment_like)]
pub struct NewCommentLike<'a> {
    pub comment_id: Uuid,
    pub owner_id: &'a str,
}
