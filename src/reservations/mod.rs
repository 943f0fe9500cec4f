//! # Reservations Module
//!
//! Reservation records and everything that operates on them:
//! - Validation engine for candidate reservations
//! - Merge-patch update semantics
//! - Bill calculation helpers
//! - SQLite store binding and HTTP handlers

pub mod billing;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod validators;

#[cfg(test)]
mod tests;

pub use models::{Reservation, ReservationStatus, RoomType};
pub use routes::reservations_routes;
