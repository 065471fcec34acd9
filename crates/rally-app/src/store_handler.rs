use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use rally_core::error::CoreError;
use rally_service::comment::LikeStore;
use rally_service::practice::PracticeStore;

/// Injects the persistence collaborators used by the request handlers.
#[derive(Clone)]
pub struct StoreHandler {
    pub practices: Arc<dyn PracticeStore>,
    pub likes: Arc<dyn LikeStore>,
}

#[async_trait]
impl salvo::Handler for StoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.practices));
        depot.inject(Arc::clone(&self.likes));
    }
}

/// ## Summary
/// Retrieves the practice store from the depot.
///
/// ## Errors
/// Returns an error if the practice store is not found in the depot.
pub fn get_practice_store_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn PracticeStore>> {
    depot
        .obtain::<Arc<dyn PracticeStore>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Practice store not found in depot").into())
}

/// ## Summary
/// Retrieves the like store from the depot.
///
/// ## Errors
/// Returns an error if the like store is not found in the depot.
pub fn get_like_store_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn LikeStore>> {
    depot
        .obtain::<Arc<dyn LikeStore>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Like store not found in depot").into())
}
