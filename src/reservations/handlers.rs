use super::billing;
use super::models::{
    merge_patch, QuoteQuery, QuoteResponse, Reservation, ReservationDraft, ReservationStatus,
    RoomType,
};
use super::store::ReservationStore;
use super::validators;
use crate::common::error::MessageResponse;
use crate::common::{generate_reservation_id, ApiError, AppState};
use axum::{
    extract::{Extension, Path, Query},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

// ============================================================================
// Reservation CRUD Handlers
// ============================================================================

/// GET /api/reservations - Get all reservations
pub async fn get_reservations(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let store = ReservationStore::new(app_state.db.clone());

    let reservations = store.find_all().await?;

    Ok(Json(reservations))
}

/// GET /api/reservations/:id - Get reservation by ID
pub async fn get_reservation_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(reservation_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let store = ReservationStore::new(app_state.db.clone());

    let reservation = store
        .find_by_id(&reservation_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Reservation not found".to_string()))?;

    Ok(Json(reservation))
}

/// POST /api/reservations - Create a new reservation
pub async fn create_reservation(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(draft): Json<ReservationDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = validators::validate_reservation(&draft);
    if !errors.is_empty() {
        return Err(ApiError::ValidationFailed(errors));
    }

    // Status defaults to Pending when omitted or empty
    let status = match draft.status.as_deref().filter(|s| !s.is_empty()) {
        Some(value) => ReservationStatus::from_wire(value)
            .ok_or_else(|| ApiError::BadRequest("Invalid status value".to_string()))?,
        None => ReservationStatus::Pending,
    };

    // Guaranteed by validation; the error arm keeps the handler total
    let room_type = draft
        .room_type
        .as_deref()
        .and_then(RoomType::from_wire)
        .ok_or_else(|| {
            ApiError::BadRequest("Room type must be Standard, Deluxe, or Suite".to_string())
        })?;

    let reservation = Reservation {
        id: generate_reservation_id(),
        reservation_number: draft.reservation_number.unwrap_or_default(),
        guest_name: draft.guest_name.unwrap_or_default(),
        address: draft.address,
        contact_number: draft.contact_number,
        room_type,
        check_in_date: draft.check_in_date.unwrap_or_default(),
        check_out_date: draft.check_out_date.unwrap_or_default(),
        total_bill: draft.total_bill,
        status,
    };

    let app_state = state.read().await;
    let store = ReservationStore::new(app_state.db.clone());
    store.insert(&reservation).await?;

    info!(
        reservation_id = %reservation.id,
        reservation_number = %reservation.reservation_number,
        "Created reservation"
    );

    Ok(Json(reservation))
}

/// PUT /api/reservations/:id - Update a reservation (merge-patch)
pub async fn update_reservation(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(reservation_id): Path<String>,
    Json(draft): Json<ReservationDraft>,
) -> Result<impl IntoResponse, ApiError> {
    // Reject values a closed enum cannot hold before touching the record
    if let Some(status) = draft.status.as_deref().filter(|s| !s.is_empty()) {
        if !validators::is_valid_status(status) {
            return Err(ApiError::BadRequest("Invalid status value".to_string()));
        }
    }
    if let Some(room_type) = draft.room_type.as_deref().filter(|s| !s.is_empty()) {
        if RoomType::from_wire(room_type).is_none() {
            return Err(ApiError::BadRequest(
                "Room type must be Standard, Deluxe, or Suite".to_string(),
            ));
        }
    }

    let app_state = state.read().await;
    let store = ReservationStore::new(app_state.db.clone());

    let existing = store
        .find_by_id(&reservation_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Reservation not found".to_string()))?;

    let merged = merge_patch(&existing, &draft);
    store.update(&merged).await?;

    info!(reservation_id = %merged.id, "Updated reservation");

    Ok(Json(merged))
}

/// GET /api/reservations/quote - Quote a stay from room type and dates
///
/// Unparseable or reversed dates quote zero nights rather than failing,
/// matching the bill-calculation helpers.
pub async fn quote_stay(Query(query): Query<QuoteQuery>) -> Result<impl IntoResponse, ApiError> {
    let room_type = query
        .room_type
        .as_deref()
        .and_then(RoomType::from_wire)
        .ok_or_else(|| {
            ApiError::BadRequest("Room type must be Standard, Deluxe, or Suite".to_string())
        })?;

    let check_in = query.check_in_date.as_deref().unwrap_or("");
    let check_out = query.check_out_date.as_deref().unwrap_or("");

    let nights = billing::calculate_nights(check_in, check_out);

    Ok(Json(QuoteResponse {
        room_type,
        nights,
        nightly_rate: billing::nightly_rate(room_type),
        total_bill: billing::calculate_bill(room_type, check_in, check_out),
    }))
}

/// DELETE /api/reservations/:id - Delete a reservation
pub async fn delete_reservation(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(reservation_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let store = ReservationStore::new(app_state.db.clone());

    if !store.exists_by_id(&reservation_id).await? {
        return Err(ApiError::NotFound("Reservation not found".to_string()));
    }

    store.delete_by_id(&reservation_id).await?;

    info!(reservation_id = %reservation_id, "Deleted reservation");

    Ok(Json(MessageResponse::new("Deleted successfully")))
}
