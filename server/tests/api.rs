// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Availability endpoint tests against a mocked feed.

use std::sync::Arc;

use anaue_feed::{FeedClient, FeedConfig};
use anaue_server::{AppState, app};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED_BODY: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
DTSTART;VALUE=DATE:20240117\r\n\
DTEND;VALUE=DATE:20240119\r\n\
SUMMARY:Reserved\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

fn state_for(server: &MockServer) -> AppState {
    let config = FeedConfig {
        ical_url: format!("{}/calendar.ics", server.uri()),
        ..FeedConfig::default()
    };
    AppState {
        feed: Arc::new(FeedClient::new(config).expect("failed to create client")),
    }
}

async fn get_json(
    state: AppState,
    uri: &str,
) -> (StatusCode, serde_json::Value) {
    let response = app(state)
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let json = serde_json::from_slice(&bytes).expect("JSON body");
    (status, json)
}

#[tokio::test]
async fn availability_returns_booked_dates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calendar.ics"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(FEED_BODY, "text/calendar"))
        .mount(&server)
        .await;

    let (status, json) = get_json(state_for(&server), "/api/availability").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], serde_json::json!(true));
    assert_eq!(
        json["availability"],
        serde_json::json!({
            "2024-01-17": "booked",
            "2024-01-18": "booked",
        })
    );
    assert_eq!(json["eventsCount"], serde_json::json!(1));
    assert!(json["lastUpdated"].as_str().is_some());
}

#[tokio::test]
async fn upstream_failure_degrades_to_empty_map() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calendar.ics"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (status, json) = get_json(state_for(&server), "/api/availability").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], serde_json::json!(false));
    assert_eq!(json["error"], serde_json::json!("Erro ao buscar disponibilidade"));
    assert_eq!(json["availability"], serde_json::json!({}));
}

#[tokio::test]
async fn health_answers_ok() {
    let server = MockServer::start().await;
    let response = app(state_for(&server))
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    assert_eq!(&bytes[..], b"OK");
}
