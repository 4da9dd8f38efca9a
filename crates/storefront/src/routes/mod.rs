//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Landing page (visit counter, category list)
//! GET  /health                  - Health check
//!
//! # Informational
//! GET  /about/                  - About page
//! GET  /about/{year}/{month}/   - About page with a month greeting
//!
//! # Catalog
//! GET  /type/{type_id}/         - Items in one category
//! GET  /items/                  - Item list (first 20)
//!
//! # Interest survey
//! GET  /interest/{item_id}/     - Interest survey form
//! POST /interest/{item_id}/     - Submit interest survey
//!
//! # Orders
//! GET  /placeorder/             - Order form
//! POST /placeorder/             - Submit order
//! GET  /myorders/               - Order history (requires login)
//!
//! # People
//! GET  /user/                   - Registered account list
//! GET  /lab-group/              - Lab group roster
//!
//! # Auth
//! GET  /signup/                 - Signup page
//! POST /signup/                 - Signup action
//! GET  /login/                  - Login page
//! POST /login/                  - Login action
//! POST /logout/                 - Logout action
//! ```

pub mod about;
pub mod auth;
pub mod catalog;
pub mod home;
pub mod interest;
pub mod lab_group;
pub mod orders;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(home::index))
        // Informational pages
        .route("/about/", get(about::about))
        .route("/about/{year}/{month}/", get(about::about_month))
        // Catalog
        .route("/type/{type_id}/", get(catalog::type_detail))
        .route("/items/", get(catalog::items))
        // Interest survey
        .route(
            "/interest/{item_id}/",
            get(interest::survey_page).post(interest::submit_survey),
        )
        // Orders
        .route(
            "/placeorder/",
            get(orders::place_order_page).post(orders::place_order),
        )
        .route("/myorders/", get(orders::my_orders))
        // People
        .route("/user/", get(users::user_list))
        .route("/lab-group/", get(lab_group::lab_group))
        // Auth
        .route("/signup/", get(auth::signup_page).post(auth::signup))
        .route("/login/", get(auth::login_page).post(auth::login))
        .route("/logout/", post(auth::logout))
}
