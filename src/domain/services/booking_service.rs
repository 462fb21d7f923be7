use std::sync::Arc;
use crate::domain::{
    models::{
        booking::{Booking, NewBookingParams},
        customer::{Customer, GuestContact},
        room::Room,
        stay::StayRequest,
    },
    ports::{BookingRepository, CustomerDirectory, RoomCatalog},
    services::availability::candidate_rooms,
};
use crate::error::AppError;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityReport {
    pub available: bool,
    pub rooms: Vec<Room>,
}

pub struct BookingService {
    catalog: Arc<dyn RoomCatalog>,
    ledger: Arc<dyn BookingRepository>,
    customers: Arc<dyn CustomerDirectory>,
}

impl BookingService {
    pub fn new(
        catalog: Arc<dyn RoomCatalog>,
        ledger: Arc<dyn BookingRepository>,
        customers: Arc<dyn CustomerDirectory>,
    ) -> Self {
        Self { catalog, ledger, customers }
    }

    /// Advisory read: the answer may be stale by the time the caller books.
    /// An unknown `room_id` filter yields an empty report rather than an error.
    pub async fn check_availability(
        &self,
        stay: &StayRequest,
        room_id: Option<&str>,
    ) -> Result<AvailabilityReport, AppError> {
        let candidates = candidate_rooms(self.catalog.list().await?, stay.guests, room_id);

        let mut rooms = Vec::with_capacity(candidates.len());
        for room in candidates {
            let conflicts = self.ledger.find_overlapping(&room.id, stay.checkin, stay.checkout).await?;
            if conflicts.is_empty() {
                rooms.push(room);
            }
        }

        Ok(AvailabilityReport {
            available: !rooms.is_empty(),
            rooms,
        })
    }

    pub async fn create_booking(
        &self,
        room_id: &str,
        stay: &StayRequest,
        contact: &GuestContact,
    ) -> Result<Booking, AppError> {
        let room = self.catalog.find_by_id(room_id).await?
            .ok_or_else(|| AppError::UnknownRoom(room_id.to_string()))?;

        if !room.sleeps(stay.guests) {
            return Err(AppError::CapacityExceeded {
                room_id: room.id,
                capacity: room.capacity,
                requested: stay.guests,
            });
        }

        let booking = Booking::new(NewBookingParams { room: &room, stay, contact })?;

        let created = match self.ledger.create_if_available(&booking).await {
            Ok(created) => created,
            Err(AppError::RoomUnavailable) => {
                warn!(
                    "Booking rejected: room {} already taken between {} and {}",
                    room.id, stay.checkin, stay.checkout
                );
                return Err(AppError::RoomUnavailable);
            }
            Err(e) => return Err(e),
        };

        info!(
            "Booking confirmed: {} for room {} ({} nights, total {})",
            created.id, created.room_id, created.nights, created.total
        );

        self.record_customer(contact).await;

        Ok(created)
    }

    /// Directory bookkeeping never fails the booking that triggered it.
    async fn record_customer(&self, contact: &GuestContact) {
        let Some(key) = contact.directory_key() else {
            return;
        };

        if let Err(e) = self.customers.upsert(&key, contact).await {
            warn!("Customer upsert for {} failed: {}", key, e);
        }
    }

    pub async fn list_rooms(&self) -> Result<Vec<Room>, AppError> {
        self.catalog.list().await
    }

    pub async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        self.ledger.list().await
    }

    pub async fn get_booking(&self, id: &str) -> Result<Booking, AppError> {
        self.ledger.find_by_id(id).await?
            .ok_or_else(|| AppError::NotFound("Booking not found".into()))
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        self.customers.list().await
    }
}
