//! Catalog route handlers: category detail and item listing.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use greenmarket_core::TypeId;

use crate::db::catalog::CatalogRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::models::catalog::{Item, ItemType};
use crate::state::AppState;

/// Maximum number of items shown on the item list page.
const ITEM_LIST_LIMIT: i64 = 20;

/// Category detail template.
#[derive(Template, WebTemplate)]
#[template(path = "type_detail.html")]
pub struct TypeDetailTemplate {
    /// The category being viewed.
    pub selected_type: ItemType,
    /// Items belonging to the category.
    pub items: Vec<Item>,
}

/// Item list template.
#[derive(Template, WebTemplate)]
#[template(path = "items.html")]
pub struct ItemsTemplate {
    /// Items to display, with their interest counters.
    pub items: Vec<Item>,
}

/// Display the items belonging to one category.
#[instrument(skip(state))]
pub async fn type_detail(
    State(state): State<AppState>,
    Path(type_id): Path<i32>,
) -> Result<TypeDetailTemplate> {
    let repo = CatalogRepository::new(state.pool());
    let id = TypeId::new(type_id);

    let selected_type = repo
        .get_type(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {type_id}")))?;

    let items = repo.list_items_by_type(id).await?;

    Ok(TypeDetailTemplate {
        selected_type,
        items,
    })
}

/// Display the first twenty items with their interest counts.
#[instrument(skip(state))]
pub async fn items(State(state): State<AppState>) -> Result<ItemsTemplate> {
    let items = CatalogRepository::new(state.pool())
        .list_items(ITEM_LIST_LIMIT)
        .await?;

    Ok(ItemsTemplate { items })
}
