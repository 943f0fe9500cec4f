use super::models::{
    merge_patch, ChangePasswordRequest, LoginRequest, RegisterResponse, Role, User, UserDraft,
    UserProfile,
};
use super::store::UserStore;
use super::validators;
use crate::common::error::MessageResponse;
use crate::common::{generate_user_id, safe_email_log, ApiError, AppState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

// ============================================================================
// Registration and Login Handlers
// ============================================================================

/// POST /api/auth/register - Register a new user
///
/// Duplicate username/email conflicts are checked before structural
/// validation, each as a single message-style failure.
pub async fn register(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(draft): Json<UserDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let store = UserStore::new(app_state.db.clone());

    let username = draft.username.as_deref().unwrap_or("");
    if store.find_by_username(username).await?.is_some() {
        return Err(ApiError::BadRequest("Username already exists".to_string()));
    }

    let email = draft.email.as_deref().unwrap_or("");
    if store.find_by_email(email).await?.is_some() {
        return Err(ApiError::BadRequest("Email already exists".to_string()));
    }

    let errors = validators::validate_user(&draft, false);
    if !errors.is_empty() {
        return Err(ApiError::ValidationFailed(errors));
    }

    // Role defaults to USER when omitted or empty
    let role = draft
        .role
        .as_deref()
        .filter(|r| !r.is_empty())
        .and_then(Role::from_wire)
        .unwrap_or(Role::User);

    let user = User {
        id: generate_user_id(),
        username: draft.username.unwrap_or_default(),
        email: draft.email.unwrap_or_default(),
        password: draft.password.unwrap_or_default(),
        role,
    };

    store.insert(&user).await?;

    info!(
        username = %user.username,
        email = %safe_email_log(&user.email),
        "Registered user"
    );

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful".to_string(),
            username: user.username,
            role: user.role,
        }),
    ))
}

/// POST /api/auth/login - Authenticate a user
///
/// Unknown username and wrong password are distinct outcomes (404 vs 401).
/// The success payload never includes the password.
pub async fn login(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let store = UserStore::new(app_state.db.clone());

    let username = request.username.as_deref().unwrap_or("");
    let user = store
        .find_by_username(username)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    if user.password != request.password.as_deref().unwrap_or("") {
        return Err(ApiError::Unauthorized("Invalid password".to_string()));
    }

    info!(username = %user.username, "User logged in");

    Ok(Json(UserProfile::from(&user)))
}

// ============================================================================
// User CRUD Handlers
// ============================================================================

/// GET /api/auth/users - Get all users
pub async fn get_users(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let store = UserStore::new(app_state.db.clone());

    let users = store.find_all().await?;

    Ok(Json(users))
}

/// GET /api/auth/users/:id - Get user by ID (password-free view)
pub async fn get_user_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let store = UserStore::new(app_state.db.clone());

    let user = store
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(UserProfile::from(&user)))
}

/// PUT /api/auth/users/:id - Update a user (merge-patch)
pub async fn update_user(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(user_id): Path<String>,
    Json(draft): Json<UserDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = validators::validate_user(&draft, true);
    if !errors.is_empty() {
        return Err(ApiError::ValidationFailed(errors));
    }

    let app_state = state.read().await;
    let store = UserStore::new(app_state.db.clone());

    let existing = store
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let merged = merge_patch(&existing, &draft);
    store.update(&merged).await?;

    info!(user_id = %merged.id, "Updated user");

    Ok(Json(MessageResponse::new("User updated successfully")))
}

/// DELETE /api/auth/users/:id - Delete a user
pub async fn delete_user(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let store = UserStore::new(app_state.db.clone());

    if !store.exists_by_id(&user_id).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    store.delete_by_id(&user_id).await?;

    info!(user_id = %user_id, "Deleted user");

    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// PUT /api/auth/users/:id/change-password - Change a user's password
pub async fn change_password(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(user_id): Path<String>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let store = UserStore::new(app_state.db.clone());

    let mut user = store
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    if user.password != request.old_password.as_deref().unwrap_or("") {
        return Err(ApiError::BadRequest("Old password is incorrect".to_string()));
    }

    let new_password = match request.new_password.as_deref() {
        Some(p) if p.len() >= 4 => p,
        _ => {
            return Err(ApiError::BadRequest(
                "New password must be at least 4 characters".to_string(),
            ))
        }
    };

    user.password = new_password.to_string();
    store.update(&user).await?;

    info!(user_id = %user.id, "Password changed");

    Ok(Json(MessageResponse::new("Password changed successfully")))
}

/// GET /api/auth/test - Liveness check for the auth API
pub async fn ping() -> impl IntoResponse {
    Json(MessageResponse::new("Auth API working!"))
}
