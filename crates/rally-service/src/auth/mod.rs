//! Caller identity.
//!
//! ## Module Organization
//!
//! - `identity`: Resolving the owner id from configuration or a trusted proxy header
//! - `depot`: Storing and reading the resolved identity in the Salvo depot

pub mod depot;
pub mod identity;

pub use depot::{depot_keys, get_identity_from_depot, get_owner_from_depot};
pub use identity::{DepotIdentity, resolve_identity};
