use serde::Serialize;
use crate::domain::models::{booking::Booking, room::Room};
use crate::domain::services::booking_service::AvailabilityReport;

#[derive(Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub rooms: Vec<Room>,
}

impl From<AvailabilityReport> for AvailabilityResponse {
    fn from(report: AvailabilityReport) -> Self {
        Self { available: report.available, rooms: report.rooms }
    }
}

#[derive(Serialize)]
pub struct BookingCreatedResponse {
    pub confirmation: String,
    pub booking: Booking,
}

#[derive(Serialize)]
pub struct ServiceInfoResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub message: &'static str,
}
