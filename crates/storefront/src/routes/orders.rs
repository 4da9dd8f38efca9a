//! Order route handlers: order form, submission, and order history.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tracing::instrument;

use greenmarket_core::{ClientId, ItemId};

use crate::db::catalog::CatalogRepository;
use crate::db::clients::{ClientChoice, ClientRepository};
use crate::db::orders::OrderRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::catalog::{Item, ItemType};
use crate::models::order::OrderWithItem;
use crate::state::AppState;

/// Raw order form data.
#[derive(Debug, Deserialize)]
pub struct OrderForm {
    /// Selected item ID, as submitted.
    pub item: Option<String>,
    /// Selected client ID, as submitted.
    pub client: Option<String>,
    /// Requested quantity, as typed.
    pub quantity: Option<String>,
}

/// A validated order submission.
#[derive(Debug, PartialEq, Eq)]
pub struct OrderRequest {
    /// Item to order.
    pub item_id: ItemId,
    /// Client placing the order.
    pub client_id: ClientId,
    /// Units ordered (at least 1).
    pub quantity: i32,
}

/// Order form page template.
#[derive(Template, WebTemplate)]
#[template(path = "place_order.html")]
pub struct PlaceOrderTemplate {
    /// Items available for ordering.
    pub items: Vec<Item>,
    /// Clients selectable on the form.
    pub clients: Vec<ClientChoice>,
    /// Validation errors from the last submission.
    pub errors: Vec<String>,
    /// Confirmation message after a successful order.
    pub success: Option<String>,
}

/// Order history page template.
#[derive(Template, WebTemplate)]
#[template(path = "my_orders.html")]
pub struct MyOrdersTemplate {
    /// The logged-in client's orders.
    pub orders: Vec<OrderWithItem>,
    /// Categories the client has marked interest in via the survey.
    pub interests: Vec<ItemType>,
    /// Message shown when the account has no client profile.
    pub message: Option<String>,
}

/// Display the order form.
#[instrument(skip(state))]
pub async fn place_order_page(State(state): State<AppState>) -> Result<PlaceOrderTemplate> {
    let (items, clients) = load_form_choices(&state).await?;

    Ok(PlaceOrderTemplate {
        items,
        clients,
        errors: Vec::new(),
        success: None,
    })
}

/// Handle an order submission.
#[instrument(skip(state, form))]
pub async fn place_order(
    State(state): State<AppState>,
    Form(form): Form<OrderForm>,
) -> Result<PlaceOrderTemplate> {
    let (items, clients) = load_form_choices(&state).await?;

    let errors = match validate_order_form(&form) {
        Ok(request) => {
            // The IDs come from the client; check them against real rows
            let mut errors = Vec::new();
            if CatalogRepository::new(state.pool())
                .get_item(request.item_id)
                .await?
                .is_none()
            {
                errors.push("Select a valid item.".to_owned());
            }
            if ClientRepository::new(state.pool())
                .get_by_id(request.client_id)
                .await?
                .is_none()
            {
                errors.push("Select a valid client.".to_owned());
            }

            if errors.is_empty() {
                let order = OrderRepository::new(state.pool())
                    .create(request.item_id, request.client_id, request.quantity)
                    .await?;

                tracing::info!(order_id = %order.id, quantity = order.quantity, "order placed");

                return Ok(PlaceOrderTemplate {
                    items,
                    clients,
                    errors: Vec::new(),
                    success: Some(format!("Order #{} placed.", order.id)),
                });
            }

            errors
        }
        Err(errors) => errors,
    };

    Ok(PlaceOrderTemplate {
        items,
        clients,
        errors,
        success: None,
    })
}

/// Display the logged-in client's order history.
#[instrument(skip(state))]
pub async fn my_orders(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<MyOrdersTemplate> {
    let client = ClientRepository::new(state.pool())
        .get_by_account(user.id)
        .await?;

    match client {
        Some(client) => {
            let orders = OrderRepository::new(state.pool())
                .list_for_client(client.id)
                .await?;
            let interests = ClientRepository::new(state.pool())
                .interests(client.id)
                .await?;

            Ok(MyOrdersTemplate {
                orders,
                interests,
                message: None,
            })
        }
        None => Ok(MyOrdersTemplate {
            orders: Vec::new(),
            interests: Vec::new(),
            message: Some("You are not a registered client!".to_owned()),
        }),
    }
}

/// Load the item and client choice lists for the order form.
///
/// Every item is offered, not just the first catalog page.
async fn load_form_choices(state: &AppState) -> Result<(Vec<Item>, Vec<ClientChoice>)> {
    let items = CatalogRepository::new(state.pool()).list_all_items().await?;
    let clients = ClientRepository::new(state.pool()).list_choices().await?;

    Ok((items, clients))
}

/// Validate raw order input into an [`OrderRequest`].
///
/// # Errors
///
/// Returns the list of field error messages when any input is invalid.
pub fn validate_order_form(form: &OrderForm) -> std::result::Result<OrderRequest, Vec<String>> {
    let mut errors = Vec::new();

    let item_id = match parse_id(form.item.as_deref()) {
        Some(id) => Some(ItemId::new(id)),
        None => {
            errors.push("Select an item.".to_owned());
            None
        }
    };

    let client_id = match parse_id(form.client.as_deref()) {
        Some(id) => Some(ClientId::new(id)),
        None => {
            errors.push("Select a client.".to_owned());
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

    match (item_id, client_id, quantity) {
        (Some(item_id), Some(client_id), Some(quantity)) if errors.is_empty() => Ok(OrderRequest {
            item_id,
            client_id,
            quantity,
        }),
        _ => Err(errors),
    }
}

/// Parse a positive ID out of a submitted choice value.
fn parse_id(raw: Option<&str>) -> Option<i32> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i32>().ok())
        .filter(|id| *id >= 1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(item: Option<&str>, client: Option<&str>, quantity: Option<&str>) -> OrderForm {
        OrderForm {
            item: item.map(str::to_owned),
            client: client.map(str::to_owned),
            quantity: quantity.map(str::to_owned),
        }
    }

    #[test]
    fn test_validate_order_ok() {
        let request = validate_order_form(&form(Some("3"), Some("7"), Some("2"))).unwrap();
        assert_eq!(
            request,
            OrderRequest {
                item_id: ItemId::new(3),
                client_id: ClientId::new(7),
                quantity: 2,
            }
        );
    }

    #[test]
    fn test_validate_order_missing_item() {
        let errors = validate_order_form(&form(None, Some("7"), Some("2"))).unwrap_err();
        assert_eq!(errors, vec!["Select an item.".to_owned()]);
    }

    #[test]
    fn test_validate_order_missing_client() {
        let errors = validate_order_form(&form(Some("3"), None, Some("2"))).unwrap_err();
        assert_eq!(errors, vec!["Select a client.".to_owned()]);
    }

    #[test]
    fn test_validate_order_zero_quantity() {
        let errors = validate_order_form(&form(Some("3"), Some("7"), Some("0"))).unwrap_err();
        assert_eq!(
            errors,
            vec!["Quantity must be a whole number of at least 1.".to_owned()]
        );
    }

    #[test]
    fn test_validate_order_garbage_ids() {
        let errors = validate_order_form(&form(Some("banana"), Some("-1"), Some("2"))).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_validate_order_all_missing() {
        let errors = validate_order_form(&form(None, None, None)).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(Some(" 5 ")), Some(5));
        assert_eq!(parse_id(Some("0")), None);
        assert_eq!(parse_id(Some("")), None);
        assert_eq!(parse_id(None), None);
    }
}
