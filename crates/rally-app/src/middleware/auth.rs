use salvo::Depot;
use tracing::error;

use crate::config::get_config_from_depot;
use rally_service::auth::{DepotIdentity, depot_keys, resolve_identity};

/// ## Summary
/// Identity middleware that resolves the caller and stores it in the depot.
///
/// Anonymous callers continue downstream; handlers that need an owner reject
/// them with 401.
///
/// ## Side Effects
/// Inserts a `DepotIdentity` under `depot_keys::AUTHENTICATED_OWNER`.
///
/// ## Errors
/// Returns an HTTP 500 response if the configuration is missing from the depot.
#[salvo::async_trait]
impl salvo::Handler for AuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Resolving caller identity");

        if req.method() == salvo::http::Method::OPTIONS {
            depot.insert(depot_keys::AUTHENTICATED_OWNER, DepotIdentity::Anonymous);
            return;
        }

        let config = match get_config_from_depot(depot) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(error = ?e, "Failed to get config from depot");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        let identity = resolve_identity(req, &config);
        if let DepotIdentity::Owner(owner_id) = &identity {
            tracing::debug!(%owner_id, "Caller identified");
        }
        depot.insert(depot_keys::AUTHENTICATED_OWNER, identity);
    }
}

/// ## Summary
/// Middleware handler for caller identity.
pub struct AuthMiddleware;
