//! Tests for the auth module
//!
//! Covers the user validation matrix, merge semantics, and the
//! register/login branches against in-memory SQLite.

#[cfg(test)]
mod tests {
    use super::super::models::{merge_patch, Role, User, UserDraft};
    use super::super::store::UserStore;
    use super::super::validators::validate_user;
    use crate::common::generate_user_id;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    fn valid_draft() -> UserDraft {
        UserDraft {
            username: Some("frontdesk".to_string()),
            email: Some("frontdesk@oceanview.lk".to_string()),
            password: Some("secret".to_string()),
            role: None,
        }
    }

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        crate::common::migrations::run_migrations(&pool).await.unwrap();

        pool
    }

    fn sample_user() -> User {
        User {
            id: generate_user_id(),
            username: "frontdesk".to_string(),
            email: "frontdesk@oceanview.lk".to_string(),
            password: "secret".to_string(),
            role: Role::User,
        }
    }

    // ------------------------------------------------------------------
    // validate_user
    // ------------------------------------------------------------------

    #[test]
    fn test_valid_create_draft_has_no_errors() {
        assert!(validate_user(&valid_draft(), false).is_empty());
    }

    #[test]
    fn test_short_username_on_create() {
        let draft = UserDraft {
            username: Some("ab".to_string()),
            ..valid_draft()
        };

        let errors = validate_user(&draft, false);
        assert_eq!(errors, vec!["Username must be at least 3 characters"]);
    }

    #[test]
    fn test_bad_emails_on_create() {
        for email in ["not-an-email", "a@b", "a b@c.com", "@c.com"] {
            let draft = UserDraft {
                email: Some(email.to_string()),
                ..valid_draft()
            };

            let errors = validate_user(&draft, false);
            assert_eq!(
                errors,
                vec!["Valid email address is required"],
                "email {:?} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_short_password_on_create() {
        let draft = UserDraft {
            password: Some("abc".to_string()),
            ..valid_draft()
        };

        let errors = validate_user(&draft, false);
        assert_eq!(errors, vec!["Password must be at least 4 characters"]);
    }

    #[test]
    fn test_missing_everything_on_create() {
        let errors = validate_user(&UserDraft::default(), false);
        assert_eq!(
            errors,
            vec![
                "Username must be at least 3 characters",
                "Valid email address is required",
                "Password must be at least 4 characters",
            ]
        );
    }

    #[test]
    fn test_update_skips_email_and_password() {
        let draft = UserDraft {
            username: None,
            email: Some("not-an-email".to_string()),
            password: Some("x".to_string()),
            role: None,
        };

        assert!(validate_user(&draft, true).is_empty());
    }

    #[test]
    fn test_update_checks_supplied_username() {
        let draft = UserDraft {
            username: Some("ab".to_string()),
            ..UserDraft::default()
        };

        let errors = validate_user(&draft, true);
        assert_eq!(errors, vec!["Username must be at least 3 characters"]);
    }

    #[test]
    fn test_update_ignores_blank_username() {
        let draft = UserDraft {
            username: Some("  ".to_string()),
            ..UserDraft::default()
        };

        assert!(validate_user(&draft, true).is_empty());
    }

    #[test]
    fn test_role_is_checked_in_both_modes() {
        for is_update in [false, true] {
            let draft = UserDraft {
                role: Some("MANAGER".to_string()),
                ..valid_draft()
            };

            let errors = validate_user(&draft, is_update);
            assert!(errors.contains(&"Role must be USER or ADMIN".to_string()));
        }
    }

    #[test]
    fn test_both_valid_roles_are_accepted() {
        for role in ["USER", "ADMIN"] {
            let draft = UserDraft {
                role: Some(role.to_string()),
                ..valid_draft()
            };

            assert!(validate_user(&draft, false).is_empty());
        }
    }

    // ------------------------------------------------------------------
    // merge_patch
    // ------------------------------------------------------------------

    #[test]
    fn test_merge_patch_blank_password_keeps_existing() {
        let existing = sample_user();
        let patch = UserDraft {
            password: Some("".to_string()),
            email: Some("reception@oceanview.lk".to_string()),
            ..UserDraft::default()
        };

        let merged = merge_patch(&existing, &patch);
        assert_eq!(merged.password, "secret");
        assert_eq!(merged.email, "reception@oceanview.lk");
    }

    #[test]
    fn test_merge_patch_applies_role() {
        let existing = sample_user();
        let patch = UserDraft {
            role: Some("ADMIN".to_string()),
            ..UserDraft::default()
        };

        let merged = merge_patch(&existing, &patch);
        assert_eq!(merged.role, Role::Admin);
    }

    // ------------------------------------------------------------------
    // UserStore
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_insert_and_lookup_paths() {
        let pool = setup_test_db().await;
        let store = UserStore::new(pool);

        let user = sample_user();
        store.insert(&user).await.unwrap();

        let by_id = store.find_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "frontdesk");
        assert_eq!(by_id.role, Role::User);

        let by_username = store.find_by_username("frontdesk").await.unwrap();
        assert!(by_username.is_some());

        let by_email = store.find_by_email("frontdesk@oceanview.lk").await.unwrap();
        assert!(by_email.is_some());

        // password round-trips verbatim
        assert_eq!(by_id.password, "secret");
    }

    #[tokio::test]
    async fn test_unknown_lookups_are_none() {
        let pool = setup_test_db().await;
        let store = UserStore::new(pool);

        assert!(store.find_by_id("U_MISSING").await.unwrap().is_none());
        assert!(store.find_by_username("ghost").await.unwrap().is_none());
        assert!(store.find_by_email("ghost@x.com").await.unwrap().is_none());
        assert!(!store.exists_by_id("U_MISSING").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let pool = setup_test_db().await;
        let store = UserStore::new(pool);

        let mut user = sample_user();
        store.insert(&user).await.unwrap();

        user.password = "newpass".to_string();
        user.role = Role::Admin;
        store.update(&user).await.unwrap();

        let found = store.find_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(found.password, "newpass");
        assert_eq!(found.role, Role::Admin);

        store.delete_by_id(&user.id).await.unwrap();
        assert!(!store.exists_by_id(&user.id).await.unwrap());
    }
}

#[cfg(test)]
mod handler_tests {
    use super::super::handlers;
    use super::super::models::{ChangePasswordRequest, LoginRequest, UserDraft};
    use crate::common::{ApiError, AppState};
    use axum::extract::{Extension, Path};
    use axum::Json;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    async fn setup_state() -> Extension<Arc<RwLock<AppState>>> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        crate::common::migrations::run_migrations(&pool).await.unwrap();

        Extension(Arc::new(RwLock::new(AppState { db: pool })))
    }

    fn draft() -> UserDraft {
        UserDraft {
            username: Some("frontdesk".to_string()),
            email: Some("frontdesk@oceanview.lk".to_string()),
            password: Some("secret".to_string()),
            role: None,
        }
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let state = setup_state().await;

        let result = handlers::register(state.clone(), Json(draft())).await;
        assert!(result.is_ok());

        let result = handlers::login(state, Json(login("frontdesk", "secret"))).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_username_before_validation() {
        let state = setup_state().await;
        handlers::register(state.clone(), Json(draft())).await.unwrap();

        // same username, otherwise invalid draft; the conflict wins
        let duplicate = UserDraft {
            email: None,
            password: None,
            ..draft()
        };
        let result = handlers::register(state, Json(duplicate)).await;

        assert!(
            matches!(result, Err(ApiError::BadRequest(ref msg)) if msg == "Username already exists")
        );
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let state = setup_state().await;
        handlers::register(state.clone(), Json(draft())).await.unwrap();

        let duplicate = UserDraft {
            username: Some("reception".to_string()),
            ..draft()
        };
        let result = handlers::register(state, Json(duplicate)).await;

        assert!(
            matches!(result, Err(ApiError::BadRequest(ref msg)) if msg == "Email already exists")
        );
    }

    #[tokio::test]
    async fn test_register_returns_violation_list() {
        let state = setup_state().await;

        let bad = UserDraft {
            username: Some("ab".to_string()),
            email: Some("x@y.com".to_string()),
            password: Some("abcd".to_string()),
            role: None,
        };
        let result = handlers::register(state, Json(bad)).await;

        match result {
            Err(ApiError::ValidationFailed(errors)) => {
                assert_eq!(errors, vec!["Username must be at least 3 characters"]);
            }
            other => panic!("expected ValidationFailed, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_login_unknown_username_is_not_found() {
        let state = setup_state().await;

        let result = handlers::login(state, Json(login("ghost", "whatever"))).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let state = setup_state().await;
        handlers::register(state.clone(), Json(draft())).await.unwrap();

        let result = handlers::login(state, Json(login("frontdesk", "wrong"))).await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_change_password_branches() {
        let state = setup_state().await;
        handlers::register(state.clone(), Json(draft())).await.unwrap();

        let user = {
            let app_state = state.0.read().await;
            let store = super::super::store::UserStore::new(app_state.db.clone());
            store.find_by_username("frontdesk").await.unwrap().unwrap()
        };

        // wrong old password
        let request = ChangePasswordRequest {
            old_password: Some("wrong".to_string()),
            new_password: Some("newpass".to_string()),
        };
        let result =
            handlers::change_password(state.clone(), Path(user.id.clone()), Json(request)).await;
        assert!(
            matches!(result, Err(ApiError::BadRequest(ref msg)) if msg == "Old password is incorrect")
        );

        // too-short new password
        let request = ChangePasswordRequest {
            old_password: Some("secret".to_string()),
            new_password: Some("abc".to_string()),
        };
        let result =
            handlers::change_password(state.clone(), Path(user.id.clone()), Json(request)).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));

        // success, then the new password logs in
        let request = ChangePasswordRequest {
            old_password: Some("secret".to_string()),
            new_password: Some("newpass".to_string()),
        };
        handlers::change_password(state.clone(), Path(user.id.clone()), Json(request))
            .await
            .unwrap();

        let result = handlers::login(state, Json(login("frontdesk", "newpass"))).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_and_delete_user_not_found() {
        let state = setup_state().await;

        let result = handlers::update_user(
            state.clone(),
            Path("U_MISSING".to_string()),
            Json(UserDraft::default()),
        )
        .await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));

        let result = handlers::delete_user(state, Path("U_MISSING".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
