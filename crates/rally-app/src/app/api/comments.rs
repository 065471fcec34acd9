//! Comment like endpoint.

use salvo::http::StatusCode;
use salvo::prelude::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::Serialize;
use uuid::Uuid;

use crate::store_handler::get_like_store_from_depot;
use rally_core::constants::COMMENTS_ROUTE_COMPONENT;
use rally_service::auth::get_owner_from_depot;
use rally_service::comment::{LikeState, LikeToggleOutcome, toggle_like};

/// Resulting like state, with the failure message when the toggle was rolled back.
#[derive(Debug, Serialize)]
struct LikeResponse {
    #[serde(flatten)]
    state: LikeState,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// ## Summary
/// Handles `POST /api/comments/{comment_id}/like`, toggling the caller's like.
///
/// The body is the like state the client currently shows.
///
/// ## Errors
/// Returns 400 for a malformed id or body, 401 for anonymous callers, and
/// 500 with the restored state when the store rejects the change.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn like_comment(req: &mut Request, res: &mut Response, depot: &Depot) {
    let store = match get_like_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get like store");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let owner_id = match get_owner_from_depot(depot) {
        Ok(owner_id) => owner_id.to_string(),
        Err(e) => {
            tracing::debug!(error = %e, "Anonymous like rejected");
            res.status_code(StatusCode::UNAUTHORIZED);
            return;
        }
    };

    let Some(comment_id) = req
        .param::<String>("comment_id")
        .and_then(|raw| Uuid::parse_str(&raw).ok())
    else {
        res.status_code(StatusCode::BAD_REQUEST);
        return;
    };

    let current = match req.parse_json::<LikeState>().await {
        Ok(current) => current,
        Err(e) => {
            tracing::debug!(error = %e, "Failed to parse like state");
            res.status_code(StatusCode::BAD_REQUEST);
            return;
        }
    };

    match toggle_like(store.as_ref(), comment_id, &owner_id, current).await {
        LikeToggleOutcome::Committed(state) => {
            res.render(Json(LikeResponse { state, error: None }));
        }
        LikeToggleOutcome::RolledBack { state, error } => {
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(LikeResponse {
                state,
                error: Some(error.to_string()),
            }));
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(COMMENTS_ROUTE_COMPONENT)
        .push(Router::with_path("{comment_id}/like").post(like_comment))
}
