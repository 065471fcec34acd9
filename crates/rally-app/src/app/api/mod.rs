mod app_specific;
mod comments;
mod practices;

#[cfg(test)]
mod test_support;

use salvo::Router;

use crate::middleware::auth::AuthMiddleware;

// Re-export route constants from core
pub use rally_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, COMMENTS_ROUTE_PREFIX, PRACTICES_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .hoop(AuthMiddleware)
        .push(app_specific::routes())
        .push(practices::routes())
        .push(comments::routes())
}
