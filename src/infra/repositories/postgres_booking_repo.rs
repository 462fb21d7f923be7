use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use chrono::NaiveDate;

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create_if_available(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Per-room serialization point, released on commit/rollback.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(&booking.room_id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, room_id, room_name, price_per_night, checkin, checkout, guests, nights, total, guest_name, guest_email, guest_phone, created_at)
             SELECT $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13
             WHERE NOT EXISTS (
                 SELECT 1 FROM bookings WHERE room_id = $2 AND checkin < $6 AND checkout > $5
             )
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.room_id).bind(&booking.room_name).bind(booking.price_per_night)
            .bind(booking.checkin).bind(booking.checkout).bind(booking.guests).bind(booking.nights)
            .bind(booking.total).bind(&booking.guest_name).bind(&booking.guest_email).bind(&booking.guest_phone)
            .bind(booking.created_at)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?;

        let Some(created) = created else {
            tx.rollback().await.map_err(AppError::Database)?;
            return Err(AppError::RoomUnavailable);
        };

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_overlapping(&self, room_id: &str, checkin: NaiveDate, checkout: NaiveDate) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE room_id = $1 AND checkin < $2 AND checkout > $3 ORDER BY checkin ASC")
            .bind(room_id).bind(checkout).bind(checkin)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
