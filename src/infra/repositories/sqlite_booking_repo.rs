use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use chrono::NaiveDate;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    // SQLite takes the write lock before evaluating the NOT EXISTS guard, so
    // the check and the insert cannot interleave with another writer.
    async fn create_if_available(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, room_id, room_name, price_per_night, checkin, checkout, guests, nights, total, guest_name, guest_email, guest_phone, created_at)
             SELECT ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?
             WHERE NOT EXISTS (
                 SELECT 1 FROM bookings WHERE room_id = ? AND checkin < ? AND checkout > ?
             )
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.room_id).bind(&booking.room_name).bind(booking.price_per_night)
            .bind(booking.checkin).bind(booking.checkout).bind(booking.guests).bind(booking.nights)
            .bind(booking.total).bind(&booking.guest_name).bind(&booking.guest_email).bind(&booking.guest_phone)
            .bind(booking.created_at)
            .bind(&booking.room_id).bind(booking.checkout).bind(booking.checkin)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or(AppError::RoomUnavailable)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_overlapping(&self, room_id: &str, checkin: NaiveDate, checkout: NaiveDate) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE room_id = ? AND checkin < ? AND checkout > ? ORDER BY checkin ASC")
            .bind(room_id).bind(checkout).bind(checkin)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
