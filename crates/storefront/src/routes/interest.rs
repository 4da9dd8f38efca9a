//! Interest survey route handlers.
//!
//! Visitors can tell us whether they are interested in an item. A "yes"
//! answer bumps the item's interest counter; for logged-in clients it also
//! records a category interest on their profile.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use greenmarket_core::ItemId;

use crate::db::RepositoryError;
use crate::db::catalog::CatalogRepository;
use crate::db::clients::ClientRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::catalog::Item;
use crate::state::AppState;

/// Raw interest survey form data.
///
/// Every field is optional so that missing inputs surface as validation
/// errors instead of a rejected request.
#[derive(Debug, Deserialize)]
pub struct InterestForm {
    /// "1" for yes, "0" for no.
    pub interested: Option<String>,
    /// Requested quantity, as typed.
    pub quantity: Option<String>,
    /// Free-form comments.
    pub comments: Option<String>,
}

/// A validated interest survey submission.
#[derive(Debug, PartialEq, Eq)]
pub struct InterestSurvey {
    /// Whether the visitor answered yes.
    pub interested: bool,
    /// Requested quantity (at least 1).
    pub quantity: i32,
    /// Free-form comments, if any.
    pub comments: Option<String>,
}

/// Interest survey page template.
#[derive(Template, WebTemplate)]
#[template(path = "interest.html")]
pub struct InterestTemplate {
    /// The item the survey is about.
    pub item: Item,
    /// Quantity field value to redisplay.
    pub quantity_value: String,
    /// Comments field value to redisplay.
    pub comments_value: String,
    /// Validation errors from the last submission.
    pub errors: Vec<String>,
}

/// Display the interest survey form for an item.
#[instrument(skip(state))]
pub async fn survey_page(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> Result<InterestTemplate> {
    let item = get_item(&state, ItemId::new(item_id)).await?;

    Ok(InterestTemplate {
        item,
        quantity_value: "1".to_owned(),
        comments_value: String::new(),
        errors: Vec::new(),
    })
}

/// Handle an interest survey submission.
#[instrument(skip(state, form))]
pub async fn submit_survey(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Path(item_id): Path<i32>,
    axum::Form(form): axum::Form<InterestForm>,
) -> Result<Response> {
    let id = ItemId::new(item_id);
    let item = get_item(&state, id).await?;

    let survey = match validate_interest_form(&form) {
        Ok(survey) => survey,
        Err(errors) => {
            return Ok(InterestTemplate {
                item,
                quantity_value: form.quantity.unwrap_or_default(),
                comments_value: form.comments.unwrap_or_default(),
                errors,
            }
            .into_response());
        }
    };

    if survey.interested {
        let catalog = CatalogRepository::new(state.pool());
        catalog.record_interest(id).await.map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound(format!("item {item_id}")),
            other => AppError::Database(other),
        })?;

        // Logged-in clients also get the category noted on their profile
        if let Some(user) = user {
            let clients = ClientRepository::new(state.pool());
            if let Some(client) = clients.get_by_account(user.id).await? {
                clients.add_interest(client.id, item.type_id).await?;
            }
        }

        tracing::info!(item_id, quantity = survey.quantity, "interest recorded");
    }

    Ok(Redirect::to("/items/").into_response())
}

/// Fetch an item or produce a not-found error.
async fn get_item(state: &AppState, id: ItemId) -> Result<Item> {
    CatalogRepository::new(state.pool())
        .get_item(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("item {id}")))
}

/// Validate raw survey input into an [`InterestSurvey`].
///
/// # Errors
///
/// Returns the list of field error messages when any input is invalid.
pub fn validate_interest_form(form: &InterestForm) -> std::result::Result<InterestSurvey, Vec<String>> {
    let mut errors = Vec::new();

    let interested = match form.interested.as_deref() {
        Some("1") => Some(true),
        Some("0") => Some(false),
        _ => {
            errors.push("Select whether you are interested.".to_owned());
            None
        }
    };

    let quantity = match form.quantity.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => match raw.parse::<i32>() {
            Ok(quantity) if quantity >= 1 => Some(quantity),
            _ => {
                errors.push("Quantity must be a whole number of at least 1.".to_owned());
                None
            }
        },
        _ => {
            errors.push("Enter a quantity.".to_owned());
            None
        }
    };

    let comments = form
        .comments
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned);

    match (interested, quantity) {
        (Some(interested), Some(quantity)) if errors.is_empty() => Ok(InterestSurvey {
            interested,
            quantity,
            comments,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(
        interested: Option<&str>,
        quantity: Option<&str>,
        comments: Option<&str>,
    ) -> InterestForm {
        InterestForm {
            interested: interested.map(str::to_owned),
            quantity: quantity.map(str::to_owned),
            comments: comments.map(str::to_owned),
        }
    }

    #[test]
    fn test_validate_yes_submission() {
        let survey = validate_interest_form(&form(Some("1"), Some("3"), Some("looks fresh")))
            .unwrap();
        assert_eq!(
            survey,
            InterestSurvey {
                interested: true,
                quantity: 3,
                comments: Some("looks fresh".to_owned()),
            }
        );
    }

    #[test]
    fn test_validate_no_submission() {
        let survey = validate_interest_form(&form(Some("0"), Some("1"), None)).unwrap();
        assert!(!survey.interested);
        assert_eq!(survey.comments, None);
    }

    #[test]
    fn test_validate_missing_choice() {
        let errors = validate_interest_form(&form(None, Some("1"), None)).unwrap_err();
        assert_eq!(errors, vec!["Select whether you are interested.".to_owned()]);
    }

    #[test]
    fn test_validate_bad_choice_value() {
        let errors = validate_interest_form(&form(Some("maybe"), Some("1"), None)).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_validate_quantity_below_one() {
        let errors = validate_interest_form(&form(Some("1"), Some("0"), None)).unwrap_err();
        assert_eq!(
            errors,
            vec!["Quantity must be a whole number of at least 1.".to_owned()]
        );
    }

    #[test]
    fn test_validate_quantity_not_a_number() {
        assert!(validate_interest_form(&form(Some("1"), Some("lots"), None)).is_err());
    }

    #[test]
    fn test_validate_missing_quantity() {
        let errors = validate_interest_form(&form(Some("0"), None, None)).unwrap_err();
        assert_eq!(errors, vec!["Enter a quantity.".to_owned()]);
    }

    #[test]
    fn test_validate_blank_comments_dropped() {
        let survey = validate_interest_form(&form(Some("1"), Some("2"), Some("   "))).unwrap();
        assert_eq!(survey.comments, None);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let errors = validate_interest_form(&form(None, None, None)).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
