//! Rally practice scheduler - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `rally_test::component::` paths.

pub mod component {
    pub use rally_core::{config, constants, types, util};
    pub use rally_service::{auth, comment, error, practice};

    pub mod db {
        pub use rally_db::db::*;
        pub use rally_db::model;
    }

    pub mod app {
        pub use rally_app::app::api::routes;
        pub use rally_app::config::ConfigHandler;
        pub use rally_app::store_handler::StoreHandler;
    }
}
