//! Rally persistence: diesel-async access to the hosted Postgres database.

pub mod db;
pub mod error;
pub mod model;
