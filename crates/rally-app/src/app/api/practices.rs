//! Practice creation endpoint.

use salvo::http::StatusCode;
use salvo::prelude::Json;
use salvo::{Depot, Request, Response, Router, handler};

use crate::store_handler::get_practice_store_from_depot;
use rally_core::constants::PRACTICES_ROUTE_COMPONENT;
use rally_service::auth::get_identity_from_depot;
use rally_service::error::ServiceError;
use rally_service::practice::{CreatePracticeRequest, CreatePracticeResponse, create_practices};

/// ## Summary
/// Handles `POST /api/practices`, creating a practice and its repeats.
///
/// ## Side Effects
/// - Inserts every occurrence of the requested rule when none conflict
///
/// ## Errors
/// Returns 400 for invalid input, 401 for anonymous callers, 409 when
/// existing practices overlap, 500 for store failures.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn create_practice(req: &mut Request, res: &mut Response, depot: &Depot) {
    let store = match get_practice_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get practice store");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(CreatePracticeResponse::rejected("Internal server error")));
            return;
        }
    };

    let request = match req.parse_json::<CreatePracticeRequest>().await {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "Failed to parse practice request body");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(CreatePracticeResponse::rejected(format!(
                "Invalid practice request: {e}"
            ))));
            return;
        }
    };

    let owner_id = get_identity_from_depot(depot).owner_id();
    let today = chrono::Local::now().date_naive();

    let result = create_practices(store.as_ref(), owner_id, &request, today).await;

    let status = match &result {
        Ok(_) => StatusCode::CREATED,
        Err(e) => status_for(e),
    };
    res.status_code(status);
    res.render(Json(CreatePracticeResponse::from(result)));
}

fn status_for(error: &ServiceError) -> StatusCode {
    match error {
        ServiceError::ValidationError { .. }
        | ServiceError::RecurrenceConfigError(_)
        | ServiceError::CoreError(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotAuthenticated => StatusCode::UNAUTHORIZED,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::DatabaseError(_)
        | ServiceError::StoreError(_)
        | ServiceError::DieselError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(PRACTICES_ROUTE_COMPONENT).post(create_practice)
}
