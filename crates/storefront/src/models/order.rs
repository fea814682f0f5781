//! Order models.
//!
//! An order row is an immutable record of a completed purchase line, created
//! at checkout from a cart row. There is no cancel/update/status machinery.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use tamarind_core::{AddressId, OrderId, ProductId, UserId};

/// An order line joined with its product and address for display.
#[derive(Debug, Clone, FromRow)]
pub struct OrderSummary {
    /// Order row ID.
    pub id: OrderId,
    /// Owning user.
    pub user_id: UserId,
    /// Shipping address chosen at checkout.
    pub address_id: AddressId,
    /// The purchased product.
    pub product_id: ProductId,
    /// Quantity purchased.
    pub quantity: i32,
    /// When the order was placed.
    pub ordered_at: DateTime<Utc>,
    /// Product name (joined).
    pub product_name: String,
    /// Product unit price (joined).
    pub unit_price: Decimal,
    /// Destination city (joined).
    pub city: String,
    /// Destination state (joined).
    pub state: String,
}

impl OrderSummary {
    /// Line total: quantity x unit price.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}
