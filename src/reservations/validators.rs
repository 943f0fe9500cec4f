// src/reservations/validators.rs

use super::models::{ReservationDraft, ReservationStatus};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

static CONTACT_NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn contact_number_re() -> &'static Regex {
    CONTACT_NUMBER_RE.get_or_init(|| Regex::new(r"^[+]?[0-9\s\-]{7,15}$").unwrap())
}

/// Validate a candidate reservation, returning every rule violation in
/// rule order
///
/// All checks run independently; nothing short-circuits. An empty list
/// means the draft is acceptable.
pub fn validate_reservation(draft: &ReservationDraft) -> Vec<String> {
    let mut errors = Vec::new();

    if draft
        .reservation_number
        .as_deref()
        .map_or(true, |n| n.trim().is_empty())
    {
        errors.push("Reservation number is required".to_string());
    }

    // An absent guest name fires only the required rule; a present but
    // too-short one fires only the length rule.
    if draft
        .guest_name
        .as_deref()
        .map_or(true, |n| n.trim().is_empty())
    {
        errors.push("Guest name is required".to_string());
    }
    if let Some(name) = draft.guest_name.as_deref() {
        if name.trim().len() < 2 {
            errors.push("Guest name must be at least 2 characters".to_string());
        }
    }

    let room_type_ok = matches!(
        draft.room_type.as_deref(),
        Some("Standard") | Some("Deluxe") | Some("Suite")
    );
    if !room_type_ok {
        errors.push("Room type must be Standard, Deluxe, or Suite".to_string());
    }

    if draft
        .check_in_date
        .as_deref()
        .map_or(true, |d| d.trim().is_empty())
    {
        errors.push("Check-in date is required".to_string());
    }

    if draft
        .check_out_date
        .as_deref()
        .map_or(true, |d| d.trim().is_empty())
    {
        errors.push("Check-out date is required".to_string());
    }

    // Date logic validation
    if let (Some(check_in), Some(check_out)) =
        (draft.check_in_date.as_deref(), draft.check_out_date.as_deref())
    {
        match (parse_iso_date(check_in), parse_iso_date(check_out)) {
            (Ok(check_in), Ok(check_out)) => {
                if check_out <= check_in {
                    errors.push("Check-out date must be after check-in date".to_string());
                }
            }
            _ => errors.push("Dates must be in YYYY-MM-DD format".to_string()),
        }
    }

    if let Some(bill) = draft.total_bill {
        if bill < 0.0 {
            errors.push("Total bill cannot be negative".to_string());
        }
    }

    // Contact number format (if provided)
    if let Some(contact) = draft.contact_number.as_deref() {
        if !contact.is_empty() && !contact_number_re().is_match(contact) {
            errors.push("Contact number format is invalid".to_string());
        }
    }

    errors
}

/// True iff `value` is exactly one of the five lifecycle statuses
/// (case-sensitive, no trimming)
pub fn is_valid_status(value: &str) -> bool {
    ReservationStatus::from_wire(value).is_some()
}

fn parse_iso_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
}
