mod common;

use axum::{body::Body, http::{Request, StatusCode}};
use common::{memory_service, router_for, send, test_config};

fn health() -> Request<Body> {
    Request::builder().uri("/health").body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_requests_over_budget_get_429() {
    let mut config = test_config(None);
    config.rate_limit_max = 3;
    config.rate_limit_window_secs = 900;
    let router = router_for(memory_service(), config);

    for _ in 0..3 {
        let (status, _) = send(&router, health()).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&router, health()).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["code"], "RATE_LIMITED");

    let request = Request::builder().uri("/api/v1/rooms").body(Body::empty()).unwrap();
    let (status, _) = send(&router, request).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_zero_budget_never_throttles() {
    let router = router_for(memory_service(), test_config(None));

    for _ in 0..50 {
        let (status, _) = send(&router, health()).await;
        assert_eq!(status, StatusCode::OK);
    }
}
