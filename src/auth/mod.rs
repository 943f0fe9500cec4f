//! # Auth Module
//!
//! Staff/admin accounts and everything that operates on them:
//! - Registration with duplicate-conflict checks
//! - Plaintext login (verbatim behavior of the system this replaces)
//! - User CRUD and password change
//! - Validation engine for candidate users

pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod validators;

#[cfg(test)]
mod tests;

pub use models::{Role, User};
pub use routes::auth_routes;
