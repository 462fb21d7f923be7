use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Unknown room: {0}")]
    UnknownRoom(String),
    #[error("Room {room_id} sleeps at most {capacity} guests ({requested} requested)")]
    CapacityExceeded {
        room_id: String,
        capacity: i32,
        requested: i32,
    },
    #[error("Room not available for selected dates")]
    RoomUnavailable,
    #[error("Too many requests, please try again later.")]
    RateLimited,
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Internal server error")]
    Internal,
}

impl AppError {
    /// Store outages and throttling clear up on their own; every other failure
    /// is a property of the request and will repeat on retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AppError::StoreUnavailable(_) | AppError::Database(_) | AppError::RateLimited
        )
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::UnknownRoom(_) => "UNKNOWN_ROOM",
            AppError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            AppError::RoomUnavailable => "ROOM_UNAVAILABLE",
            AppError::RateLimited => "RATE_LIMITED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::StoreUnavailable(_) | AppError::Database(_) => "STORE_UNAVAILABLE",
            AppError::Internal => "INTERNAL",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidRequest(_)
            | AppError::UnknownRoom(_)
            | AppError::CapacityExceeded { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::RoomUnavailable => (StatusCode::CONFLICT, self.to_string()),
            AppError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::StoreUnavailable(msg) => {
                error!("Store unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "Booking store unavailable".to_string())
            }
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                (StatusCode::SERVICE_UNAVAILABLE, "Booking store unavailable".to_string())
            }
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string()),
        };

        let body = Json(json!({
            "error": message,
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}
