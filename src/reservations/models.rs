//! Reservation data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Room types offered by the hotel
///
/// The wire and storage form is the exact variant name; anything else is
/// rejected at the validation boundary, so persisted records are valid by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Standard => "Standard",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
        }
    }

    /// Parse the exact wire string (case-sensitive, no trimming)
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Standard" => Some(RoomType::Standard),
            "Deluxe" => Some(RoomType::Deluxe),
            "Suite" => Some(RoomType::Suite),
            _ => None,
        }
    }
}

/// Reservation lifecycle statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    #[serde(rename = "Checked-In")]
    #[sqlx(rename = "Checked-In")]
    CheckedIn,
    #[serde(rename = "Checked-Out")]
    #[sqlx(rename = "Checked-Out")]
    CheckedOut,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Pending",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::CheckedIn => "Checked-In",
            ReservationStatus::CheckedOut => "Checked-Out",
            ReservationStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse the exact wire string (case-sensitive, no trimming)
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(ReservationStatus::Pending),
            "Confirmed" => Some(ReservationStatus::Confirmed),
            "Checked-In" => Some(ReservationStatus::CheckedIn),
            "Checked-Out" => Some(ReservationStatus::CheckedOut),
            "Cancelled" => Some(ReservationStatus::Cancelled),
            _ => None,
        }
    }
}

/// Reservation database model
///
/// Dates are kept as "YYYY-MM-DD" strings end to end; the validators parse
/// them, everything else compares them lexicographically.
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub reservation_number: String,
    pub guest_name: String,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub room_type: RoomType,
    pub check_in_date: String,
    pub check_out_date: String,
    pub total_bill: Option<f64>,
    pub status: ReservationStatus,
}

/// Candidate reservation as received from a client
///
/// Everything is optional and stringly typed so the validation engine can
/// inspect arbitrary input; only validated drafts become `Reservation`s.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    pub reservation_number: Option<String>,
    pub guest_name: Option<String>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub room_type: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub total_bill: Option<f64>,
    pub status: Option<String>,
}

/// Query parameters for a stay quote
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuoteQuery {
    pub room_type: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
}

/// Quoted price for a stay
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub room_type: RoomType,
    pub nights: i64,
    pub nightly_rate: f64,
    pub total_bill: f64,
}

/// Apply a patch to an existing reservation, returning the merged record
///
/// String fields overwrite only when present and non-empty; `total_bill`
/// overwrites whenever present. Room type and status strings that do not
/// parse are rejected by the handler before this is called and are left
/// untouched here.
pub fn merge_patch(existing: &Reservation, patch: &ReservationDraft) -> Reservation {
    let mut merged = existing.clone();

    if let Some(number) = non_empty(&patch.reservation_number) {
        merged.reservation_number = number.to_string();
    }
    if let Some(name) = non_empty(&patch.guest_name) {
        merged.guest_name = name.to_string();
    }
    if let Some(address) = non_empty(&patch.address) {
        merged.address = Some(address.to_string());
    }
    if let Some(contact) = non_empty(&patch.contact_number) {
        merged.contact_number = Some(contact.to_string());
    }
    if let Some(room_type) = non_empty(&patch.room_type).and_then(RoomType::from_wire) {
        merged.room_type = room_type;
    }
    if let Some(check_in) = non_empty(&patch.check_in_date) {
        merged.check_in_date = check_in.to_string();
    }
    if let Some(check_out) = non_empty(&patch.check_out_date) {
        merged.check_out_date = check_out.to_string();
    }
    if let Some(bill) = patch.total_bill {
        merged.total_bill = Some(bill);
    }
    if let Some(status) = non_empty(&patch.status).and_then(ReservationStatus::from_wire) {
        merged.status = status;
    }

    merged
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
