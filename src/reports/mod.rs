//! # Reports Module
//!
//! Aggregate reports over the reservation collection: summary, income,
//! occupancy, and the filtered listing. All computation lives in pure
//! fold functions in `aggregate`.

pub mod aggregate;
pub mod handlers;
pub mod models;
pub mod routes;


pub use routes::reports_routes;
