use crate::domain::{models::booking::Booking, ports::BookingRepository, services::availability::has_conflict};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;

/// Process-local ledger, one booking list per room.
///
/// Admission holds the room's map entry for the duration of the overlap
/// check and the push, so writers to the same room are serialized while
/// other rooms proceed independently.
#[derive(Default)]
pub struct MemoryBookingRepo {
    rooms: DashMap<String, Vec<Booking>>,
}

impl MemoryBookingRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for MemoryBookingRepo {
    async fn create_if_available(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut ledger = self.rooms.entry(booking.room_id.clone()).or_default();
        if has_conflict(&ledger, &booking.room_id, booking.checkin, booking.checkout) {
            return Err(AppError::RoomUnavailable);
        }
        ledger.push(booking.clone());
        Ok(booking.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        Ok(self.rooms.iter().find_map(|room| room.iter().find(|b| b.id == id).cloned()))
    }

    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        let mut all: Vec<Booking> = self.rooms.iter().flat_map(|room| room.value().clone()).collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_overlapping(&self, room_id: &str, checkin: NaiveDate, checkout: NaiveDate) -> Result<Vec<Booking>, AppError> {
        Ok(self.rooms.get(room_id)
            .map(|room| room.iter().filter(|b| b.conflicts_with(room_id, checkin, checkout)).cloned().collect())
            .unwrap_or_default())
    }
}
