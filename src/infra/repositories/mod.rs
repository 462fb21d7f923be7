pub mod memory_booking_repo;
pub mod memory_customer_repo;

pub mod sqlite_booking_repo;
pub mod sqlite_customer_repo;

pub mod postgres_booking_repo;
pub mod postgres_customer_repo;
