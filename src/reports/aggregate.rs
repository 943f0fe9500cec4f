// src/reports/aggregate.rs
//! Pure fold functions over the reservation collection
//!
//! Every report is recomputed from scratch over the slice the caller
//! fetched; nothing here caches or mutates.

use super::models::{
    IncomeReport, IncomeRow, OccupancyReport, ReservationFilter, SummaryReport,
};
use crate::reservations::{Reservation, ReservationStatus};
use std::collections::HashMap;

/// Fold the full collection into totals, income figures, and per-room
/// breakdowns
///
/// Cancelled reservations are excluded from the income figures; a missing
/// bill counts as 0 in the sums but is excluded from the average entirely.
pub fn summarize(reservations: &[Reservation]) -> SummaryReport {
    let count_status = |status: ReservationStatus| -> i64 {
        reservations.iter().filter(|r| r.status == status).count() as i64
    };

    let non_cancelled = || {
        reservations
            .iter()
            .filter(|r| r.status != ReservationStatus::Cancelled)
    };

    let total_income: f64 = non_cancelled().map(|r| r.total_bill.unwrap_or(0.0)).sum();

    let billed: Vec<f64> = non_cancelled().filter_map(|r| r.total_bill).collect();
    let avg_bill = if billed.is_empty() {
        0.0
    } else {
        billed.iter().sum::<f64>() / billed.len() as f64
    };

    let mut income_by_room: HashMap<String, f64> = HashMap::new();
    for reservation in non_cancelled() {
        *income_by_room
            .entry(reservation.room_type.as_str().to_string())
            .or_insert(0.0) += reservation.total_bill.unwrap_or(0.0);
    }

    let mut bookings_by_room: HashMap<String, i64> = HashMap::new();
    for reservation in reservations {
        *bookings_by_room
            .entry(reservation.room_type.as_str().to_string())
            .or_insert(0) += 1;
    }

    SummaryReport {
        total: reservations.len() as i64,
        pending: count_status(ReservationStatus::Pending),
        confirmed: count_status(ReservationStatus::Confirmed),
        checked_in: count_status(ReservationStatus::CheckedIn),
        checked_out: count_status(ReservationStatus::CheckedOut),
        cancelled: count_status(ReservationStatus::Cancelled),
        total_income,
        avg_bill,
        income_by_room,
        bookings_by_room,
    }
}

/// Project non-cancelled reservations within the inclusive check-in date
/// range into income rows
pub fn income_report(
    reservations: &[Reservation],
    from: Option<&str>,
    to: Option<&str>,
) -> IncomeReport {
    let records: Vec<IncomeRow> = reservations
        .iter()
        .filter(|r| within_check_in_range(r, from, to))
        .filter(|r| r.status != ReservationStatus::Cancelled)
        .map(|r| IncomeRow {
            reservation_number: r.reservation_number.clone(),
            guest_name: r.guest_name.clone(),
            room_type: r.room_type,
            check_in_date: r.check_in_date.clone(),
            check_out_date: r.check_out_date.clone(),
            status: r.status,
            total_bill: r.total_bill,
        })
        .collect();

    let total_income: f64 = records.iter().map(|r| r.total_bill.unwrap_or(0.0)).sum();
    let count = records.len() as i64;

    IncomeReport {
        records,
        total_income,
        count,
    }
}

/// Count occupied rooms (Checked-In or Confirmed) per room type, plus a
/// status breakdown over the whole collection
pub fn occupancy_report(reservations: &[Reservation]) -> OccupancyReport {
    let mut by_room_type: HashMap<String, i64> = HashMap::new();
    for reservation in reservations.iter().filter(|r| {
        matches!(
            r.status,
            ReservationStatus::CheckedIn | ReservationStatus::Confirmed
        )
    }) {
        *by_room_type
            .entry(reservation.room_type.as_str().to_string())
            .or_insert(0) += 1;
    }

    let mut by_status: HashMap<String, i64> = HashMap::new();
    for reservation in reservations {
        *by_status
            .entry(reservation.status.as_str().to_string())
            .or_insert(0) += 1;
    }

    OccupancyReport {
        by_room_type,
        by_status,
        total: reservations.len() as i64,
    }
}

/// Apply the filter predicates as a conjunction, preserving order
///
/// An unrecognized status or room type in the filter matches nothing
/// rather than being ignored.
pub fn filter_reservations(
    reservations: Vec<Reservation>,
    filter: &ReservationFilter,
) -> Vec<Reservation> {
    reservations
        .into_iter()
        .filter(|r| match filter.status.as_deref() {
            None | Some("All") => true,
            Some(status) => r.status.as_str() == status,
        })
        .filter(|r| match filter.room_type.as_deref() {
            None | Some("All") => true,
            Some(room_type) => r.room_type.as_str() == room_type,
        })
        .filter(|r| within_check_in_range(r, filter.from.as_deref(), filter.to.as_deref()))
        .collect()
}

fn within_check_in_range(reservation: &Reservation, from: Option<&str>, to: Option<&str>) -> bool {
    if let Some(from) = from.filter(|f| !f.is_empty()) {
        if reservation.check_in_date.as_str() < from {
            return false;
        }
    }
    if let Some(to) = to.filter(|t| !t.is_empty()) {
        if reservation.check_in_date.as_str() > to {
            return false;
        }
    }
    true
}
