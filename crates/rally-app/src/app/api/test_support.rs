//! In-memory application wiring for handler tests.

use std::sync::Arc;

use salvo::{Router, Service};

use crate::config::ConfigHandler;
use crate::config::tests::test_settings;
use crate::store_handler::StoreHandler;
use rally_core::config::AuthMethod;
use rally_service::comment::InMemoryLikeStore;
use rally_service::practice::memory::InMemoryPracticeStore;

pub const OWNER: &str = "organizer-1";

pub struct TestApp {
    pub service: Service,
    pub practices: Arc<InMemoryPracticeStore>,
    pub likes: Arc<InMemoryLikeStore>,
}

impl TestApp {
    #[must_use]
    pub fn new(method: AuthMethod) -> Self {
        let practices = Arc::new(InMemoryPracticeStore::new());
        let likes = Arc::new(InMemoryLikeStore::new());

        let router = Router::new()
            .hoop(ConfigHandler {
                settings: test_settings(method),
            })
            .hoop(StoreHandler {
                practices: practices.clone(),
                likes: likes.clone(),
            })
            .push(super::routes());

        Self {
            service: Service::new(router),
            practices,
            likes,
        }
    }
}
