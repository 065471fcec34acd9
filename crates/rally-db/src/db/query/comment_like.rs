//! Query composition for `comment_like`.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::connection::DbConnection;
use crate::db::schema::comment_like;
use crate::model::comment::NewCommentLike;

/// ## Summary
/// Records a like. Liking twice is a no-op.
///
/// ## Errors
/// Returns an error if the database operation fails, including when the
/// comment does not exist.
pub async fn insert(conn: &mut DbConnection<'_>, comment_id: Uuid, owner_id: &str) -> QueryResult<()> {
    diesel::insert_into(comment_like::table)
        .values(&NewCommentLike {
            comment_id,
            owner_id,
        })
        .on_conflict_do_nothing()
        .execute(conn)
        .await?;
    Ok(())
}

/// ## Summary
/// Removes a like. Removing a missing like is a no-op.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn delete(conn: &mut DbConnection<'_>, comment_id: Uuid, owner_id: &str) -> QueryResult<()> {
    diesel::delete(
        comment_like::table
            .filter(comment_like::comment_id.eq(comment_id))
            .filter(comment_like::owner_id.eq(owner_id)),
    )
    .execute(conn)
    .await?;
    Ok(())
}
