//! Report data models

use crate::reservations::{ReservationStatus, RoomType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whole-collection summary: counts, income, and per-room breakdowns
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub total: i64,
    pub pending: i64,
    pub confirmed: i64,
    pub checked_in: i64,
    pub checked_out: i64,
    pub cancelled: i64,
    pub total_income: f64,
    pub avg_bill: f64,
    pub income_by_room: HashMap<String, f64>,
    pub bookings_by_room: HashMap<String, i64>,
}

/// One projected row of the income report
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRow {
    pub reservation_number: String,
    pub guest_name: String,
    pub room_type: RoomType,
    pub check_in_date: String,
    pub check_out_date: String,
    pub status: ReservationStatus,
    pub total_bill: Option<f64>,
}

/// Date-filtered income projection over non-cancelled reservations
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeReport {
    pub records: Vec<IncomeRow>,
    pub total_income: f64,
    pub count: i64,
}

/// Occupancy counts by room type and lifecycle status
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyReport {
    pub by_room_type: HashMap<String, i64>,
    pub by_status: HashMap<String, i64>,
    pub total: i64,
}

/// Query parameters for the income report
#[derive(Deserialize, Debug, Default)]
pub struct IncomeQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Query parameters for the reservation filter
///
/// Status and room type compare against the exact wire strings; "All" (or
/// absence) skips that predicate. Date bounds are inclusive and compared
/// lexicographically, which is chronological for ISO dates.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReservationFilter {
    pub status: Option<String>,
    pub room_type: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}
