// src/reservations/billing.rs
//! Nightly room rates and bill calculation helpers
//!
//! The API persists whatever total bill the caller supplies (subject to the
//! non-negative rule); these helpers exist to quote a stay. Rates are LKR
//! per night.

use super::models::RoomType;
use chrono::NaiveDate;

/// Nightly rate for a room type, in LKR
pub fn nightly_rate(room_type: RoomType) -> f64 {
    match room_type {
        RoomType::Standard => 5000.0,
        RoomType::Deluxe => 8000.0,
        RoomType::Suite => 12000.0,
    }
}

/// Number of nights between two "YYYY-MM-DD" dates, clamped at zero
///
/// Returns 0 when either date fails to parse.
pub fn calculate_nights(check_in: &str, check_out: &str) -> i64 {
    let check_in = match NaiveDate::parse_from_str(check_in, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => return 0,
    };
    let check_out = match NaiveDate::parse_from_str(check_out, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => return 0,
    };

    (check_out - check_in).num_days().max(0)
}

/// Quote for a stay: nights times the nightly rate
pub fn calculate_bill(room_type: RoomType, check_in: &str, check_out: &str) -> f64 {
    calculate_nights(check_in, check_out) as f64 * nightly_rate(room_type)
}
