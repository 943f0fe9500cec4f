//! Auth and user routes

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers;

/// Creates the auth router
///
/// # Routes
/// - `POST /api/auth/register` - Register a new user
/// - `POST /api/auth/login` - Authenticate
/// - `GET /api/auth/users` - List all users
/// - `GET/PUT/DELETE /api/auth/users/:id` - User CRUD
/// - `PUT /api/auth/users/:id/change-password` - Change password
/// - `GET /api/auth/test` - Liveness check
pub fn auth_routes() -> Router {
    Router::new()
        .route("/api/auth/register", post(handlers::register))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/users", get(handlers::get_users))
        .route(
            "/api/auth/users/:id",
            get(handlers::get_user_by_id)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route(
            "/api/auth/users/:id/change-password",
            put(handlers::change_password),
        )
        .route("/api/auth/test", get(handlers::ping))
}
