use std::sync::Arc;
use crate::config::Config;
use crate::domain::services::booking_service::BookingService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub booking_service: Arc<BookingService>,
}
