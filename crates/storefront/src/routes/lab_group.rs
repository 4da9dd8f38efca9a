//! Lab group roster route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::db::lab::LabRepository;
use crate::error::Result;
use crate::filters;
use crate::models::LabMember;
use crate::state::AppState;

/// Lab group roster template.
#[derive(Template, WebTemplate)]
#[template(path = "lab_group.html")]
pub struct LabGroupTemplate {
    /// Members ordered by first name descending.
    pub members: Vec<LabMember>,
}

/// Display the lab group roster.
#[instrument(skip(state))]
pub async fn lab_group(State(state): State<AppState>) -> Result<LabGroupTemplate> {
    let members = LabRepository::new(state.pool()).list_all().await?;

    Ok(LabGroupTemplate { members })
}
