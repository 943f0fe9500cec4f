//! Reservation routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates the reservations router
///
/// # Routes
/// - `GET /api/reservations` - List all reservations
/// - `POST /api/reservations` - Create a reservation
/// - `GET /api/reservations/quote` - Quote a stay
/// - `GET /api/reservations/:id` - Get a reservation by ID
/// - `PUT /api/reservations/:id` - Merge-patch a reservation
/// - `DELETE /api/reservations/:id` - Delete a reservation
pub fn reservations_routes() -> Router {
    Router::new()
        .route(
            "/api/reservations",
            get(handlers::get_reservations).post(handlers::create_reservation),
        )
        .route("/api/reservations/quote", get(handlers::quote_stay))
        .route(
            "/api/reservations/:id",
            get(handlers::get_reservation_by_id)
                .put(handlers::update_reservation)
                .delete(handlers::delete_reservation),
        )
}
