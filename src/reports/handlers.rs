use super::aggregate;
use super::models::{IncomeQuery, ReservationFilter};
use crate::common::{ApiError, AppState};
use crate::reservations::store::ReservationStore;
use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Report Handlers
// ============================================================================
//
// Each handler fetches the full collection and hands it to the pure fold
// functions in `aggregate`; no report state survives the request.

/// GET /api/reports/summary - Collection summary
pub async fn get_summary(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let store = ReservationStore::new(app_state.db.clone());

    let reservations = store.find_all().await?;

    Ok(Json(aggregate::summarize(&reservations)))
}

/// GET /api/reports/income?from=&to= - Date-filtered income report
pub async fn get_income_report(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Query(query): Query<IncomeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let store = ReservationStore::new(app_state.db.clone());

    let reservations = store.find_all().await?;
    let report =
        aggregate::income_report(&reservations, query.from.as_deref(), query.to.as_deref());

    Ok(Json(report))
}

/// GET /api/reports/occupancy - Occupancy report
pub async fn get_occupancy_report(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let store = ReservationStore::new(app_state.db.clone());

    let reservations = store.find_all().await?;

    Ok(Json(aggregate::occupancy_report(&reservations)))
}

/// GET /api/reports/filter?status=&roomType=&from=&to= - Filtered reservations
pub async fn filter_reservations(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Query(filter): Query<ReservationFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let store = ReservationStore::new(app_state.db.clone());

    let reservations = store.find_all().await?;

    Ok(Json(aggregate::filter_reservations(reservations, &filter)))
}
