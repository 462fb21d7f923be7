pub mod availability;
pub mod booking;
pub mod customer;
pub mod health;
pub mod room;
