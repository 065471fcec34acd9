//! HTTP flows through the full API router.

use chrono::{Datelike, Duration, NaiveDate};
use salvo::http::StatusCode;
use salvo::test::{ResponseExt, TestClient};
use serde_json::{Value, json};
use uuid::Uuid;

use super::helpers::{GYM, TestServer};

const PRACTICES: &str = "http://127.0.0.1:5800/api/practices";

/// The last date of the current year, so a weekly rule always has room.
fn year_end() -> NaiveDate {
    let today = chrono::Local::now().date_naive();
    NaiveDate::from_ymd_opt(today.year(), 12, 31).expect("valid date")
}

#[test_log::test(tokio::test)]
async fn resubmitting_a_rejected_batch_is_rejected_again() {
    let server = TestServer::new();
    let date = year_end();
    let body = json!({
        "event_date": date,
        "start_time": "18:00",
        "end_time": "20:00",
        "location": GYM,
        "max_participants": 12,
    });

    let first = TestClient::post(PRACTICES)
        .add_header("x-rally-user", "organizer-1", true)
        .json(&body)
        .send(&server.service)
        .await;
    assert_eq!(first.status_code, Some(StatusCode::CREATED));

    for _ in 0..2 {
        let mut res = TestClient::post(PRACTICES)
            .add_header("x-rally-user", "organizer-2", true)
            .json(&body)
            .send(&server.service)
            .await;
        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        let json: Value = res.take_json().await.expect("json body");
        assert_eq!(json["conflicts"].as_array().map(Vec::len), Some(1));
    }
    assert_eq!(server.practices.len(), 1);
}

#[test_log::test(tokio::test)]
async fn recurrence_past_the_year_is_bad_request() {
    let server = TestServer::new();
    let date = year_end();

    let mut res = TestClient::post(PRACTICES)
        .add_header("x-rally-user", "organizer-1", true)
        .json(&json!({
            "event_date": date,
            "start_time": "18:00",
            "end_time": "20:00",
            "location": GYM,
            "max_participants": 12,
            "recurrence": { "type": "weekly", "end_date": date + Duration::days(14) },
        }))
        .send(&server.service)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    let json: Value = res.take_json().await.expect("json body");
    assert_eq!(json["success"], json!(false));
    assert!(server.practices.is_empty());
}

#[test_log::test(tokio::test)]
async fn default_proxy_header_is_not_trusted_when_overridden() {
    let server = TestServer::new();

    let mut res = TestClient::get("http://127.0.0.1:5800/api/app/whoami")
        .add_header("x-forwarded-user", "organizer-1", true)
        .send(&server.service)
        .await;

    let json: Value = res.take_json().await.expect("json body");
    assert_eq!(json, json!({ "status": "anonymous" }));
}

#[test_log::test(tokio::test)]
async fn like_and_unlike_a_comment() {
    let server = TestServer::new();
    let comment = Uuid::now_v7();
    let url = format!("http://127.0.0.1:5800/api/comments/{comment}/like");

    let mut liked = TestClient::post(&url)
        .add_header("x-rally-user", "player-1", true)
        .json(&json!({ "liked": false, "like_count": 0 }))
        .send(&server.service)
        .await;
    let state: Value = liked.take_json().await.expect("json body");
    assert_eq!(state, json!({ "liked": true, "like_count": 1 }));
    assert!(server.likes.is_liked(comment, "player-1"));

    let mut unliked = TestClient::post(&url)
        .add_header("x-rally-user", "player-1", true)
        .json(&state)
        .send(&server.service)
        .await;
    let state: Value = unliked.take_json().await.expect("json body");
    assert_eq!(state, json!({ "liked": false, "like_count": 0 }));
    assert!(!server.likes.is_liked(comment, "player-1"));
}
