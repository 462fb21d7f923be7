mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_form_style_guest_count_is_accepted() {
    let app = TestApp::new().await;

    let (status, body) = app.post_json("/api/v1/availability", &json!({
        "checkin": "2024-07-01",
        "checkout": "2024-07-05",
        "guests": "3"
    })).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["rooms"].as_array().unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["201", "301"]);

    let (status, body) = app.post_json("/api/v1/bookings", &json!({
        "roomId": "101",
        "name": "Form Guest",
        "email": "form@example.com",
        "checkin": "2024-07-01",
        "checkout": "2024-07-05",
        "guests": "2"
    })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["booking"]["guests"], 2);
    assert_eq!(body["booking"]["total"], 796);
}

#[tokio::test]
async fn test_blank_guest_count_defaults_to_one() {
    let app = TestApp::new().await;

    let (status, body) = app.post_json("/api/v1/bookings", &json!({
        "roomId": "102",
        "name": "Solo",
        "checkin": "2024-07-01",
        "checkout": "2024-07-02",
        "guests": ""
    })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["booking"]["guests"], 1);
}

#[tokio::test]
async fn test_numeric_room_id_is_accepted() {
    let app = TestApp::new().await;

    let (status, body) = app.post_json("/api/v1/bookings", &json!({
        "roomId": 201,
        "name": "Number Room",
        "checkin": "2024-08-01",
        "checkout": "2024-08-03",
        "guests": 4
    })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["booking"]["roomId"], "201");

    let (status, body) = app.post_json("/api/v1/availability", &json!({
        "checkin": "2024-08-01",
        "checkout": "2024-08-03",
        "roomId": 201
    })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], false);
}

#[tokio::test]
async fn test_non_numeric_guest_count_is_invalid_request() {
    let app = TestApp::new().await;

    let (status, body) = app.post_json("/api/v1/availability", &json!({
        "checkin": "2024-07-01",
        "checkout": "2024-07-05",
        "guests": "two"
    })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn test_unreadable_bodies_get_error_envelope() {
    let app = TestApp::new().await;

    for uri in ["/api/v1/availability", "/api/v1/bookings"] {
        for raw in ["[]", "\"just text\"", "{\"checkin\": ", "42"] {
            let (status, body) = app.post_raw(uri, raw).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{} with body {}", uri, raw);
            assert_eq!(body["code"], "INVALID_REQUEST", "{} with body {}", uri, raw);
            assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()));
        }
    }

    let (_, list) = app.get_json("/api/v1/bookings").await;
    assert!(list.as_array().unwrap().is_empty());
}
