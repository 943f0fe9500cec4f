// src/auth/validators.rs

use super::models::UserDraft;
use regex::Regex;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Validate a candidate user, returning every rule violation in rule order
///
/// Create mode checks username, email, and password. Update mode only
/// checks the username when one is actively supplied, so callers can omit
/// or blank the password to mean "keep existing". Role is checked in both
/// modes.
pub fn validate_user(draft: &UserDraft, is_update: bool) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_update {
        if draft
            .username
            .as_deref()
            .map_or(true, |u| u.trim().len() < 3)
        {
            errors.push("Username must be at least 3 characters".to_string());
        }

        if draft
            .email
            .as_deref()
            .map_or(true, |e| !email_re().is_match(e))
        {
            errors.push("Valid email address is required".to_string());
        }

        if draft.password.as_deref().map_or(true, |p| p.len() < 4) {
            errors.push("Password must be at least 4 characters".to_string());
        }
    } else if let Some(username) = draft.username.as_deref() {
        let trimmed = username.trim();
        if !trimmed.is_empty() && trimmed.len() < 3 {
            errors.push("Username must be at least 3 characters".to_string());
        }
    }

    if let Some(role) = draft.role.as_deref() {
        if role != "USER" && role != "ADMIN" {
            errors.push("Role must be USER or ADMIN".to_string());
        }
    }

    errors
}
