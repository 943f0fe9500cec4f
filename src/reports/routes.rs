//! Report routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates the reports router
///
/// # Routes
/// - `GET /api/reports/summary` - Collection summary
/// - `GET /api/reports/income` - Date-filtered income report
/// - `GET /api/reports/occupancy` - Occupancy report
/// - `GET /api/reports/filter` - Filtered reservation list
pub fn reports_routes() -> Router {
    Router::new()
        .route("/api/reports/summary", get(handlers::get_summary))
        .route("/api/reports/income", get(handlers::get_income_report))
        .route("/api/reports/occupancy", get(handlers::get_occupancy_report))
        .route("/api/reports/filter", get(handlers::filter_reservations))
}
