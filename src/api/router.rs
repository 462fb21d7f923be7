use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{availability, booking, customer, health, room};
use crate::api::rate_limit::{enforce_rate_limit, ClientRateLimiter};
use tower_http::{
    classify::ServerErrorsFailureClass,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info_span, warn, Span, error, info};
use uuid::Uuid;

const DEV_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:3001",
    "http://localhost:5000",
    "http://localhost:5001",
    "http://localhost:5002",
    "http://localhost:5003",
    "http://localhost:5004",
    "http://localhost:5005",
];

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(state.config.client_origin.as_deref());

    let mut routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/info", get(health::service_info))

        // Catalog
        .route("/api/v1/rooms", get(room::list_rooms))

        // Public Booking Flow
        .route("/api/v1/availability", post(availability::check_availability))
        .route("/api/v1/bookings", post(booking::create_booking).get(booking::list_bookings))
        .route("/api/v1/bookings/{booking_id}", get(booking::get_booking))

        // Directory
        .route("/api/v1/customers", get(customer::list_customers));

    match ClientRateLimiter::from_config(&state.config) {
        Some(limiter) => {
            routes = routes.layer(middleware::from_fn_with_state(Arc::new(limiter), enforce_rate_limit));
        }
        None => warn!("Request rate limiting is disabled"),
    }

    routes
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(cors)
        .with_state(state)
}

fn cors_layer(extra_origin: Option<&str>) -> CorsLayer {
    let mut origins: Vec<HeaderValue> = DEV_ORIGINS
        .iter()
        .copied()
        .map(HeaderValue::from_static)
        .collect();

    if let Some(origin) = extra_origin {
        match HeaderValue::from_str(origin) {
            Ok(value) if !origins.contains(&value) => origins.push(value),
            Ok(_) => {}
            Err(_) => warn!("Ignoring malformed CLIENT_ORIGIN {:?}", origin),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
