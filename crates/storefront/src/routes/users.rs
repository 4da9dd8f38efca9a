//! Registered account list route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::db::accounts::AccountRepository;
use crate::error::Result;
use crate::filters;
use crate::models::Account;
use crate::state::AppState;

/// Account list template.
#[derive(Template, WebTemplate)]
#[template(path = "users.html")]
pub struct UsersTemplate {
    /// Accounts ordered by username.
    pub accounts: Vec<Account>,
}

/// Display every registered account, ordered by username.
#[instrument(skip(state))]
pub async fn user_list(State(state): State<AppState>) -> Result<UsersTemplate> {
    let accounts = AccountRepository::new(state.pool()).list_all().await?;

    Ok(UsersTemplate { accounts })
}
