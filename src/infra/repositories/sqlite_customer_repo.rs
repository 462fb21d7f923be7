use crate::domain::{models::customer::{Customer, GuestContact}, ports::CustomerDirectory};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteCustomerRepo {
    pool: SqlitePool,
}

impl SqliteCustomerRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl CustomerDirectory for SqliteCustomerRepo {
    async fn upsert(&self, contact_key: &str, contact: &GuestContact) -> Result<Customer, AppError> {
        let fresh = Customer::new(contact_key.to_string(), contact);
        sqlx::query_as::<_, Customer>(
            r#"INSERT INTO customers (id, contact_key, name, email, phone, note, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(contact_key) DO UPDATE SET
               name=excluded.name,
               email=COALESCE(excluded.email, customers.email),
               phone=COALESCE(excluded.phone, customers.phone),
               updated_at=excluded.updated_at
               RETURNING *"#
        )
            .bind(&fresh.id)
            .bind(&fresh.contact_key)
            .bind(&fresh.name)
            .bind(&fresh.email)
            .bind(&fresh.phone)
            .bind(&fresh.note)
            .bind(fresh.created_at)
            .bind(fresh.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
