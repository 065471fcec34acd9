//! Rally core: configuration, shared types and calendar utilities.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
