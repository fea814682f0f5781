//! Order history route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use chrono::{DateTime, Utc};

use tamarind_core::{OrderId, format_usd};

use crate::db::OrderRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::OrderSummary;
use crate::state::AppState;

/// Order display data for templates.
#[derive(Clone)]
pub struct OrderView {
    pub id: OrderId,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: String,
    pub line_total: String,
    pub city: String,
    pub state: String,
    pub ordered_at: DateTime<Utc>,
}

impl From<OrderSummary> for OrderView {
    fn from(order: OrderSummary) -> Self {
        let line_total = format_usd(order.line_total());
        Self {
            id: order.id,
            product_name: order.product_name,
            quantity: order.quantity,
            unit_price: format_usd(order.unit_price),
            line_total,
            city: order.city,
            state: order.state,
            ordered_at: order.ordered_at,
        }
    }
}

/// Order history page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersTemplate {
    pub orders: Vec<OrderView>,
}

/// Display the user's orders, newest first.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<OrdersTemplate> {
    let orders = OrderRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;

    Ok(OrdersTemplate {
        orders: orders.into_iter().map(OrderView::from).collect(),
    })
}
