use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::json::ApiJson;
use crate::api::dtos::{
    requests::{CreateBookingRequest, ValidatedBooking},
    responses::BookingCreatedResponse,
};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let request = ValidatedBooking::try_from(payload)?;
    info!("create_booking: room {} from {} to {}", request.room_id, request.stay.checkin, request.stay.checkout);

    let booking = state.booking_service
        .create_booking(&request.room_id, &request.stay, &request.contact)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse { confirmation: booking.id.clone(), booking }),
    ))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_service.list_bookings().await?;
    Ok(Json(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_service.get_booking(&booking_id).await?;
    Ok(Json(booking))
}
