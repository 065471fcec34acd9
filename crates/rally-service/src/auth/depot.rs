//! Depot helpers for the resolved caller identity.

use super::identity::DepotIdentity;
use crate::error::{ServiceError, ServiceResult};

pub mod depot_keys {
    pub const AUTHENTICATED_OWNER: &str = "__authenticated_owner";
}

static ANONYMOUS: DepotIdentity = DepotIdentity::Anonymous;

/// Get the resolved identity from the depot, or `Anonymous` if none was stored.
#[must_use]
pub fn get_identity_from_depot(depot: &salvo::Depot) -> &DepotIdentity {
    depot
        .get::<DepotIdentity>(depot_keys::AUTHENTICATED_OWNER)
        .unwrap_or_else(|_missing| {
            tracing::warn!("Depot missing identity context; treating request as anonymous");
            &ANONYMOUS
        })
}

/// Get the authenticated owner id from the depot.
///
/// ## Errors
///
/// Returns `NotAuthenticated` if the request is anonymous.
pub fn get_owner_from_depot(depot: &salvo::Depot) -> ServiceResult<&str> {
    get_identity_from_depot(depot)
        .owner_id()
        .ok_or(ServiceError::NotAuthenticated)
}
