use chrono::{DateTime, NaiveDate};
use crate::domain::services::availability::count_nights;
use crate::error::AppError;

/// A validated date range plus party size. Once constructed,
/// `checkin < checkout` and `guests >= 1` hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRequest {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub guests: i32,
}

impl StayRequest {
    pub fn new(checkin: NaiveDate, checkout: NaiveDate, guests: i32) -> Result<Self, AppError> {
        if checkin >= checkout {
            return Err(AppError::InvalidRequest("Checkout must be after checkin".into()));
        }
        if guests < 1 {
            return Err(AppError::InvalidRequest("Guest count must be at least 1".into()));
        }
        Ok(Self { checkin, checkout, guests })
    }

    /// Parses raw request fields. A missing guest count means one guest.
    pub fn parse(
        checkin: Option<&str>,
        checkout: Option<&str>,
        guests: Option<i64>,
    ) -> Result<Self, AppError> {
        let checkin = checkin
            .ok_or_else(|| AppError::InvalidRequest("checkin is required".into()))
            .and_then(parse_stay_date)?;
        let checkout = checkout
            .ok_or_else(|| AppError::InvalidRequest("checkout is required".into()))
            .and_then(parse_stay_date)?;
        let guests = i32::try_from(guests.unwrap_or(1))
            .map_err(|_| AppError::InvalidRequest("Guest count out of range".into()))?;

        Self::new(checkin, checkout, guests)
    }

    pub fn nights(&self) -> i64 {
        count_nights(self.checkin, self.checkout)
    }
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp, keeping only the
/// calendar date of the latter.
pub fn parse_stay_date(raw: &str) -> Result<NaiveDate, AppError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| AppError::InvalidRequest(format!("Invalid date: {raw:?}")))
}
