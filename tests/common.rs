#![allow(dead_code)]

use hotel_nova_backend::{
    api::router::create_router,
    config::Config,
    domain::{
        models::{booking::Booking, customer::{Customer, GuestContact}},
        ports::{BookingRepository, CustomerDirectory, RoomCatalog},
        services::booking_service::BookingService,
    },
    error::AppError,
    infra::{
        catalog::StaticRoomCatalog,
        factory::connect_sqlite,
        repositories::{
            memory_booking_repo::MemoryBookingRepo,
            memory_customer_repo::MemoryCustomerRepo,
            sqlite_booking_repo::SqliteBookingRepo,
            sqlite_customer_repo::SqliteCustomerRepo,
        },
    },
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

/// Directory that is always down; bookings must succeed regardless.
pub struct FailingCustomerDirectory;

#[async_trait]
impl CustomerDirectory for FailingCustomerDirectory {
    async fn upsert(&self, _contact_key: &str, _contact: &GuestContact) -> Result<Customer, AppError> {
        Err(AppError::StoreUnavailable("directory offline".into()))
    }

    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        Err(AppError::StoreUnavailable("directory offline".into()))
    }
}

/// Ledger whose store is unreachable for every call.
pub struct FailingBookingRepository;

#[async_trait]
impl BookingRepository for FailingBookingRepository {
    async fn create_if_available(&self, _booking: &Booking) -> Result<Booking, AppError> {
        Err(AppError::StoreUnavailable("ledger offline".into()))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Booking>, AppError> {
        Err(AppError::StoreUnavailable("ledger offline".into()))
    }

    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        Err(AppError::StoreUnavailable("ledger offline".into()))
    }

    async fn find_overlapping(&self, _room_id: &str, _checkin: NaiveDate, _checkout: NaiveDate) -> Result<Vec<Booking>, AppError> {
        Err(AppError::StoreUnavailable("ledger offline".into()))
    }
}

/// Limiting is off unless a test turns it on.
pub fn test_config(database_url: Option<String>) -> Config {
    Config {
        database_url,
        port: 0,
        rooms_file: None,
        client_origin: None,
        log_dir: "./logs".to_string(),
        rate_limit_max: 0,
        rate_limit_window_secs: 900,
    }
}

pub fn router_for(service: BookingService, config: Config) -> Router {
    create_router(Arc::new(AppState {
        config,
        booking_service: Arc::new(service),
    }))
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, parse_body(response).await)
}

pub fn json_request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub fn memory_service() -> BookingService {
    BookingService::new(
        Arc::new(StaticRoomCatalog::default()),
        Arc::new(MemoryBookingRepo::new()),
        Arc::new(MemoryCustomerRepo::new()),
    )
}

pub fn service_with(
    catalog: Arc<dyn RoomCatalog>,
    ledger: Arc<dyn BookingRepository>,
    customers: Arc<dyn CustomerDirectory>,
) -> BookingService {
    BookingService::new(catalog, ledger, customers)
}

pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let pool = connect_sqlite(&db_url)
            .await
            .expect("Failed to set up test db");

        let config = test_config(Some(db_url));

        let service = BookingService::new(
            Arc::new(StaticRoomCatalog::default()),
            Arc::new(SqliteBookingRepo::new(pool.clone())),
            Arc::new(SqliteCustomerRepo::new(pool.clone())),
        );

        let state = Arc::new(AppState {
            config,
            booking_service: Arc::new(service),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn post_json(&self, uri: &str, payload: &Value) -> (StatusCode, Value) {
        self.post_raw(uri, payload.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
        send(&self.router, json_request("POST", uri, body)).await
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        send(&self.router, request).await
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
