//! Cart route handlers.
//!
//! Every handler requires a logged-in user; all repository calls are scoped
//! to that user's rows. Mutations redirect back to the cart page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::Deserialize;

use tamarind_core::{CartId, ProductId, format_usd};

use crate::db::CartRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{CartItem, CartTotals};
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: CartId,
    pub product_slug: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: String,
    pub line_total: String,
}

impl From<CartItem> for CartItemView {
    fn from(item: CartItem) -> Self {
        let line_total = format_usd(item.line_total());
        Self {
            id: item.id,
            product_slug: item.product_slug,
            product_name: item.product_name,
            quantity: item.quantity,
            unit_price: format_usd(item.unit_price),
            line_total,
        }
    }
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartTemplate {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
}

/// Query parameters for adding a product to the cart.
#[derive(Debug, Deserialize)]
pub struct AddToCartQuery {
    pub prod_id: ProductId,
}

/// Add one unit of a product to the cart, then show the cart.
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<AddToCartQuery>,
) -> Result<Redirect> {
    CartRepository::new(state.pool())
        .add_product(user.id, query.prod_id)
        .await?;

    Ok(Redirect::to("/cart"))
}

/// Display the cart with per-line and order totals.
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<CartTemplate> {
    let items = CartRepository::new(state.pool())
        .items_for_user(user.id)
        .await?;

    let totals = CartTotals::compute(&items);

    Ok(CartTemplate {
        items: items.into_iter().map(CartItemView::from).collect(),
        subtotal: format_usd(totals.subtotal),
        shipping: format_usd(totals.shipping),
        total: format_usd(totals.total),
    })
}

/// Remove a cart line.
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(cart_id): Path<CartId>,
) -> Result<Redirect> {
    CartRepository::new(state.pool())
        .remove(user.id, cart_id)
        .await?;

    Ok(Redirect::to("/cart"))
}

/// Increment a cart line's quantity.
pub async fn plus(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(cart_id): Path<CartId>,
) -> Result<Redirect> {
    CartRepository::new(state.pool())
        .increment(user.id, cart_id)
        .await?;

    Ok(Redirect::to("/cart"))
}

/// Decrement a cart line's quantity, removing the line at quantity 1.
pub async fn minus(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(cart_id): Path<CartId>,
) -> Result<Redirect> {
    CartRepository::new(state.pool())
        .decrement(user.id, cart_id)
        .await?;

    Ok(Redirect::to("/cart"))
}
