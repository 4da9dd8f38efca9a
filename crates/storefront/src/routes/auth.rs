//! Authentication route handlers.
//!
//! Handles signup, login, and logout against the local account tables.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::{AuthError, AuthService, check_password_pair};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Signup form data.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub password1: String,
    pub password2: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate {
    pub error: Option<String>,
    pub username_value: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub username_value: String,
}

// =============================================================================
// Signup Routes
// =============================================================================

/// Display the signup page.
pub async fn signup_page() -> SignupTemplate {
    SignupTemplate {
        error: None,
        username_value: String::new(),
    }
}

/// Handle signup form submission.
///
/// On success the visitor is sent to the login page; signup never logs
/// the new account in.
#[instrument(skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Response> {
    if let Err(e) = check_password_pair(&form.password1, &form.password2) {
        return Ok(SignupTemplate {
            error: Some(user_facing_message(&e)),
            username_value: form.username,
        }
        .into_response());
    }

    match AuthService::new(state.pool())
        .register(&form.username, &form.password1)
        .await
    {
        Ok(account) => {
            tracing::info!(username = %account.username, "account registered");
            Ok(Redirect::to("/login/").into_response())
        }
        Err(
            e @ (AuthError::InvalidUsername(_)
            | AuthError::WeakPassword(_)
            | AuthError::UsernameTaken
            | AuthError::PasswordMismatch),
        ) => Ok(SignupTemplate {
            error: Some(user_facing_message(&e)),
            username_value: form.username,
        }
        .into_response()),
        Err(e) => Err(AppError::Auth(e)),
    }
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page() -> LoginTemplate {
    LoginTemplate {
        error: None,
        username_value: String::new(),
    }
}

/// Handle login form submission.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match AuthService::new(state.pool())
        .login(&form.username, &form.password)
        .await
    {
        Ok(account) => {
            let user = CurrentUser {
                id: account.id,
                username: account.username.clone(),
            };

            // New session id on privilege change
            session.cycle_id().await?;
            set_current_user(&session, &user).await?;
            set_sentry_user(&account.id, Some(account.username.as_str()));

            tracing::info!(username = %account.username, "login succeeded");
            Ok(Redirect::to("/").into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("login failed");
            Ok(LoginTemplate {
                error: Some("Invalid username or password.".to_owned()),
                username_value: form.username,
            }
            .into_response())
        }
        Err(e) => Err(AppError::Auth(e)),
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout: clear the login and destroy the session.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Response> {
    clear_current_user(&session).await?;
    session.flush().await?;
    clear_sentry_user();

    Ok(Redirect::to("/").into_response())
}

/// Map an auth error to a message safe to show on the form.
fn user_facing_message(err: &AuthError) -> String {
    match err {
        AuthError::InvalidUsername(e) => e.to_string(),
        AuthError::WeakPassword(msg) => msg.clone(),
        AuthError::UsernameTaken => "That username is already taken.".to_owned(),
        AuthError::PasswordMismatch => "Passwords do not match.".to_owned(),
        AuthError::InvalidCredentials
        | AuthError::Repository(_)
        | AuthError::PasswordHash => "Registration failed.".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_message_password_mismatch() {
        assert_eq!(
            user_facing_message(&AuthError::PasswordMismatch),
            "Passwords do not match."
        );
    }

    #[test]
    fn test_user_facing_message_never_leaks_internals() {
        assert_eq!(
            user_facing_message(&AuthError::PasswordHash),
            "Registration failed."
        );
    }
}
