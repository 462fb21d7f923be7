use crate::domain::models::{
    booking::Booking, customer::{Customer, GuestContact}, room::Room,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read-only room reference data.
#[async_trait]
pub trait RoomCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<Room>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Room>, AppError>;
}

/// The booking ledger.
///
/// `create_if_available` must perform the overlap check and the insert as one
/// atomic step per room: of two concurrent calls for the same room and
/// overlapping ranges, at most one may succeed. The loser gets
/// `AppError::RoomUnavailable` and the ledger is left untouched.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create_if_available(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    /// Newest first.
    async fn list(&self) -> Result<Vec<Booking>, AppError>;
    async fn find_overlapping(&self, room_id: &str, checkin: NaiveDate, checkout: NaiveDate) -> Result<Vec<Booking>, AppError>;
}

#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    async fn upsert(&self, contact_key: &str, contact: &GuestContact) -> Result<Customer, AppError>;
    /// Newest first.
    async fn list(&self) -> Result<Vec<Customer>, AppError>;
}
