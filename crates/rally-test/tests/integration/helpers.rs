//! Shared fixtures for the integration tests.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use rally_test::component::app::{ConfigHandler, StoreHandler, routes};
use rally_test::component::comment::InMemoryLikeStore;
use rally_test::component::config::{
    AuthConfig, AuthMethod, DatabaseConfig, LoggingConfig, ProxyAuthConfig, ServerConfig,
    Settings,
};
use rally_test::component::practice::memory::InMemoryPracticeStore;
use rally_test::component::practice::{
    CreatePracticeRequest, NewPracticeOccurrence, RecurrenceRule,
};
use salvo::{Router, Service};

pub const GYM: &str = "Gym A";

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

/// An already-booked practice at [`GYM`].
pub fn booked(
    owner: &str,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> NewPracticeOccurrence {
    NewPracticeOccurrence {
        owner_id: owner.to_string(),
        event_date: date,
        start_time: start,
        end_time: end,
        location: GYM.to_string(),
        max_participants: 8,
        content: None,
        level: None,
        conditions: None,
        fee: None,
        recurrence_group_id: None,
    }
}

pub fn request(
    date: NaiveDate,
    start: &str,
    end: &str,
    recurrence: RecurrenceRule,
) -> CreatePracticeRequest {
    CreatePracticeRequest {
        event_date: date,
        start_time: start.to_string(),
        end_time: end.to_string(),
        location: GYM.to_string(),
        max_participants: 16,
        content: Some("Serve practice".to_string()),
        level: None,
        conditions: None,
        fee: Some("500 yen".to_string()),
        recurrence,
    }
}

fn settings() -> Settings {
    Settings {
        database: DatabaseConfig {
            url: "postgres://localhost/rally_test".to_string(),
            max_connections: 1,
            min_idle: None,
            idle_timeout_secs: 60,
            run_migrations: false,
        },
        auth: AuthConfig {
            method: AuthMethod::Proxy,
            proxy: Some(ProxyAuthConfig {
                header: Some("x-rally-user".to_string()),
            }),
            single_user: None,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
            serve_origin: None,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    }
}

/// The full API router over in-memory stores, identified by `x-rally-user`.
pub struct TestServer {
    pub service: Service,
    pub practices: Arc<InMemoryPracticeStore>,
    pub likes: Arc<InMemoryLikeStore>,
}

impl TestServer {
    #[must_use]
    pub fn new() -> Self {
        let practices = Arc::new(InMemoryPracticeStore::new());
        let likes = Arc::new(InMemoryLikeStore::new());

        let router = Router::new()
            .hoop(ConfigHandler {
                settings: settings(),
            })
            .hoop(StoreHandler {
                practices: practices.clone(),
                likes: likes.clone(),
            })
            .push(routes());

        Self {
            service: Service::new(router),
            practices,
            likes,
        }
    }
}
