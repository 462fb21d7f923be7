use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::json::ApiJson;
use crate::api::dtos::{requests::AvailabilityRequest, responses::AvailabilityResponse};
use crate::error::AppError;
use std::sync::Arc;
use tracing::debug;

pub async fn check_availability(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<AvailabilityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let stay = payload.stay()?;
    let report = state.booking_service
        .check_availability(&stay, payload.room_id.as_deref())
        .await?;

    debug!(
        "check_availability: {} -> {} for {} guests: {} rooms free",
        stay.checkin, stay.checkout, stay.guests, report.rooms.len()
    );
    Ok(Json(AvailabilityResponse::from(report)))
}
