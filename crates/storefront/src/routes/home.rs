//! Landing page route handler.
//!
//! Tracks a per-session visit counter and a short-lived `recent_visit`
//! cookie. The category list is only shown to logged-in visitors.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Response},
};
use tower_sessions::{Session, cookie::Cookie};
use tracing::instrument;

use crate::db::catalog::CatalogRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::{catalog::ItemType, session_keys};
use crate::state::AppState;

/// Name of the short-lived return-visitor cookie.
pub const RECENT_VISIT_COOKIE: &str = "recent_visit";

/// Lifetime of the `recent_visit` cookie, in seconds.
const RECENT_VISIT_MAX_AGE_SECONDS: i64 = 10;

/// Maximum number of categories shown on the landing page.
const HOME_TYPE_LIMIT: i64 = 10;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Number of landing-page visits in this session.
    pub visit_count: i32,
    /// Whether the visitor was here within the last ten seconds.
    pub recent_visit: bool,
    /// Username of the logged-in visitor, if any.
    pub username: Option<String>,
    /// Categories to display (empty for anonymous visitors).
    pub types: Vec<ItemType>,
}

/// Display the landing page.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
    headers: HeaderMap,
) -> Result<Response> {
    // Bump the per-session visit counter
    let visit_count = session
        .get::<i32>(session_keys::VISIT_COUNT)
        .await?
        .unwrap_or(0)
        + 1;
    session
        .insert(session_keys::VISIT_COUNT, visit_count)
        .await?;

    // Categories are only listed for logged-in visitors
    let types = if user.is_some() {
        CatalogRepository::new(state.pool())
            .list_types(HOME_TYPE_LIMIT)
            .await?
    } else {
        Vec::new()
    };

    let recent_visit = has_recent_visit_cookie(&headers);

    let mut response = HomeTemplate {
        visit_count,
        recent_visit,
        username: user.map(|u| u.username.to_string()),
        types,
    }
    .into_response();

    // First visit in the last ten seconds: mark the visitor
    if !recent_visit
        && let Ok(value) = HeaderValue::from_str(&recent_visit_cookie().to_string())
    {
        response.headers_mut().append(header::SET_COOKIE, value);
    }

    Ok(response)
}

/// Build the `recent_visit` marker cookie.
fn recent_visit_cookie() -> Cookie<'static> {
    Cookie::build((RECENT_VISIT_COOKIE, "true"))
        .path("/")
        .max_age(tower_sessions::cookie::time::Duration::seconds(
            RECENT_VISIT_MAX_AGE_SECONDS,
        ))
        .build()
}

/// Check whether the request carries the `recent_visit` cookie.
fn has_recent_visit_cookie(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|raw| {
            Cookie::split_parse(raw.to_owned())
                .filter_map(std::result::Result::ok)
                .any(|cookie| cookie.name() == RECENT_VISIT_COOKIE)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_visit_cookie_attributes() {
        let cookie = recent_visit_cookie().to_string();
        assert!(cookie.starts_with("recent_visit=true"));
        assert!(cookie.contains("Max-Age=10"));
        assert!(cookie.contains("Path=/"));
    }

    #[test]
    fn test_has_recent_visit_cookie_present() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("gm_session=abc; recent_visit=true"),
        );
        assert!(has_recent_visit_cookie(&headers));
    }

    #[test]
    fn test_has_recent_visit_cookie_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("gm_session=abc"));
        assert!(!has_recent_visit_cookie(&headers));

        assert!(!has_recent_visit_cookie(&HeaderMap::new()));
    }

    #[test]
    fn test_has_recent_visit_cookie_ignores_name_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("recent_visitor=true"),
        );
        assert!(!has_recent_visit_cookie(&headers));
    }
}
