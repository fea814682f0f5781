//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database)
//!
//! # Catalog
//! GET  /product/{slug}         - Product detail
//! GET  /categories             - Category listing
//! GET  /category/{slug}        - Products in a category
//!
//! # Auth
//! GET  /login                  - Login page
//! POST /login                  - Login action
//! GET  /register               - Register page
//! POST /register               - Register action
//! POST /logout                 - Logout action
//!
//! # Account (requires auth)
//! GET  /profile                - Profile overview
//! GET  /address                - Address list and form
//! POST /address                - Create address
//! GET  /address/{id}/remove    - Delete address
//! POST /session/address        - Remember checkout address selection
//!
//! # Cart (requires auth)
//! GET  /cart                   - Cart page with totals
//! GET  /cart/add?prod_id=N     - Add product to cart
//! GET  /cart/{id}/plus         - Increment line quantity
//! GET  /cart/{id}/minus        - Decrement line quantity
//! GET  /cart/{id}/remove       - Remove line
//!
//! # Checkout and orders (requires auth)
//! GET  /checkout               - Convert cart into orders
//! GET  /orders                 - Order history
//!
//! # Chat
//! GET  /chat                   - Chat page
//! POST /chat                   - Send a message to the completion API
//! ```

pub mod account;
pub mod auth;
pub mod cart;
pub mod categories;
pub mod chat;
pub mod checkout;
pub mod home;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/product/{slug}", get(products::show))
        .route("/categories", get(categories::index))
        .route("/category/{slug}", get(categories::show))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(account::profile))
        .route(
            "/address",
            get(account::address_page).post(account::create_address),
        )
        .route("/address/{id}/remove", get(account::remove_address))
        .route("/session/address", post(account::select_address))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(cart::show))
        .route("/cart/add", get(cart::add))
        .route("/cart/{id}/plus", get(cart::plus))
        .route("/cart/{id}/minus", get(cart::minus))
        .route("/cart/{id}/remove", get(cart::remove))
}

/// Create the checkout and order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/checkout", get(checkout::checkout))
        .route("/orders", get(orders::index))
}

/// Create the chat routes router.
pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/chat", get(chat::page).post(chat::send))
}

/// Create the full application router (without middleware layers).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .merge(auth_routes())
        .merge(catalog_routes())
        .merge(account_routes())
        .merge(cart_routes())
        .merge(order_routes())
        .merge(chat_routes())
}
