use salvo::prelude::Json;
use salvo::{Depot, Router, handler};
use serde_json::json;

use rally_service::auth::{DepotIdentity, get_identity_from_depot};

/// ## Summary
/// Returns the caller's owner id, as resolved by the `AuthMiddleware`.
#[handler]
async fn whoami(depot: &Depot) -> Json<serde_json::Value> {
    match get_identity_from_depot(depot) {
        DepotIdentity::Owner(owner_id) => Json(json!({ "owner_id": owner_id })),
        DepotIdentity::Anonymous => Json(json!({ "status": "anonymous" })),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("whoami").get(whoami)
}
