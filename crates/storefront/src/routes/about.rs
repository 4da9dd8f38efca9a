//! About page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::Path;

use crate::error::{AppError, Result};
use crate::filters;

/// English month names, indexed by month number minus one.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    /// Welcome message.
    pub message: String,
}

/// Display the about page.
pub async fn about() -> AboutTemplate {
    AboutTemplate {
        message: "Welcome to our Online Grocery Store.".to_owned(),
    }
}

/// Display the about page with a month-specific greeting.
pub async fn about_month(Path((year, month)): Path<(i32, u32)>) -> Result<AboutTemplate> {
    let month_name =
        month_name(month).ok_or_else(|| AppError::NotFound(format!("month {month}")))?;

    Ok(AboutTemplate {
        message: format!("Welcome to our Online Grocery Store for {month_name} {year}."),
    })
}

/// Look up the English name for a 1-based month number.
fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(index).copied()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name_valid() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(6), Some("June"));
        assert_eq!(month_name(12), Some("December"));
    }

    #[test]
    fn test_month_name_out_of_range() {
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[tokio::test]
    async fn test_about_month_message() {
        let template = about_month(Path((2024, 3))).await.unwrap();
        assert_eq!(
            template.message,
            "Welcome to our Online Grocery Store for March 2024."
        );
    }

    #[tokio::test]
    async fn test_about_month_invalid_is_not_found() {
        assert!(matches!(
            about_month(Path((2024, 13))).await,
            Err(AppError::NotFound(_))
        ));
    }
}
