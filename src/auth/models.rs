//! Auth and user data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Staff roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Role {
    #[serde(rename = "USER")]
    #[sqlx(rename = "USER")]
    User,
    #[serde(rename = "ADMIN")]
    #[sqlx(rename = "ADMIN")]
    Admin,
}

impl Role {
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "USER" => Some(Role::User),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// User database model
///
/// Passwords are stored and compared verbatim and this struct serializes
/// them in the full-user listing, matching the system this replaces. See
/// DESIGN.md before changing that.
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Candidate user as received from a client
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UserDraft {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Login request body
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Change-password request body
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

/// Password-free view of a user, returned by login and get-by-id
#[derive(Serialize, Debug)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Registration response body
#[derive(Serialize, Debug)]
pub struct RegisterResponse {
    pub message: String,
    pub username: String,
    pub role: Role,
}

/// Apply a patch to an existing user, returning the merged record
///
/// Username, email, and role overwrite when present and non-empty; a blank
/// password means "keep existing". Roles that do not parse are rejected by
/// validation before this runs and are left untouched here.
pub fn merge_patch(existing: &User, patch: &UserDraft) -> User {
    let mut merged = existing.clone();

    if let Some(username) = non_empty(&patch.username) {
        merged.username = username.to_string();
    }
    if let Some(email) = non_empty(&patch.email) {
        merged.email = email.to_string();
    }
    if let Some(password) = non_empty(&patch.password) {
        merged.password = password.to_string();
    }
    if let Some(role) = non_empty(&patch.role).and_then(Role::from_wire) {
        merged.role = role;
    }

    merged
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
