use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use crate::domain::models::{customer::GuestContact, room::Room, stay::StayRequest};
use crate::domain::services::availability::{overlaps, stay_total};
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub room_id: String,
    pub room_name: String,
    pub price_per_night: i64,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub guests: i32,
    pub nights: i64,
    pub total: i64,
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams<'a> {
    pub room: &'a Room,
    pub stay: &'a StayRequest,
    pub contact: &'a GuestContact,
}

impl Booking {
    pub fn new(params: NewBookingParams<'_>) -> Result<Self, AppError> {
        let nights = params.stay.nights();
        let total = stay_total(nights, params.room.price_per_night)
            .ok_or_else(|| AppError::InvalidRequest("Stay total is out of range".into()))?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            room_id: params.room.id.clone(),
            room_name: params.room.name.clone(),
            price_per_night: params.room.price_per_night,
            checkin: params.stay.checkin,
            checkout: params.stay.checkout,
            guests: params.stay.guests,
            nights,
            total,
            guest_name: params.contact.name.clone(),
            guest_email: params.contact.email.clone(),
            guest_phone: params.contact.phone.clone(),
            created_at: Utc::now(),
        })
    }

    pub fn conflicts_with(&self, room_id: &str, checkin: NaiveDate, checkout: NaiveDate) -> bool {
        self.room_id == room_id && overlaps(self.checkin, self.checkout, checkin, checkout)
    }
}
