use axum::{response::IntoResponse, Json};
use serde_json::json;
use crate::api::dtos::responses::ServiceInfoResponse;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok", "service": "hotel-nova-backend" }))
}

pub async fn service_info() -> impl IntoResponse {
    Json(ServiceInfoResponse {
        name: "Hotel Nova API",
        version: env!("CARGO_PKG_VERSION"),
        message: "Welcome to Hotel Nova backend API",
    })
}
