//! Cart models and total computation.

use rust_decimal::{Decimal, dec};
use sqlx::FromRow;

use tamarind_core::{CartId, ProductId, UserId};

/// Flat shipping surcharge applied to every cart total.
pub const SHIPPING_AMOUNT: Decimal = dec!(10);

/// A cart line joined with its product for display and totalling.
#[derive(Debug, Clone, FromRow)]
pub struct CartItem {
    /// Cart row ID.
    pub id: CartId,
    /// Owning user.
    pub user_id: UserId,
    /// The product in the cart.
    pub product_id: ProductId,
    /// Quantity, always >= 1.
    pub quantity: i32,
    /// Product slug (joined).
    pub product_slug: String,
    /// Product name (joined).
    pub product_name: String,
    /// Product unit price (joined).
    pub unit_price: Decimal,
}

impl CartItem {
    /// Line total: quantity x unit price.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Totals for a cart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line totals.
    pub subtotal: Decimal,
    /// Flat shipping surcharge.
    pub shipping: Decimal,
    /// Subtotal plus shipping.
    pub total: Decimal,
}

impl CartTotals {
    /// Compute totals over a user's cart lines.
    ///
    /// Shipping is charged even for an empty cart to match the cart page,
    /// which always displays the surcharge line.
    #[must_use]
    pub fn compute(items: &[CartItem]) -> Self {
        let subtotal: Decimal = items.iter().map(CartItem::line_total).sum();
        Self {
            subtotal,
            shipping: SHIPPING_AMOUNT,
            total: subtotal + SHIPPING_AMOUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, quantity: i32, unit_price: Decimal) -> CartItem {
        CartItem {
            id: CartId::new(id),
            user_id: UserId::new(1),
            product_id: ProductId::new(id),
            quantity,
            product_slug: format!("product-{id}"),
            product_name: format!("Product {id}"),
            unit_price,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(item(1, 3, dec!(4.50)).line_total(), dec!(13.50));
    }

    #[test]
    fn test_totals_for_empty_cart() {
        let totals = CartTotals::compute(&[]);
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.shipping, dec!(10));
        assert_eq!(totals.total, dec!(10));
    }

    #[test]
    fn test_totals_sum_quantity_times_price_plus_shipping() {
        // 2 x 5.00 + 1 x 3.00 + 10 shipping = 23.00
        let items = vec![item(1, 2, dec!(5.00)), item(2, 1, dec!(3.00))];
        let totals = CartTotals::compute(&items);
        assert_eq!(totals.subtotal, dec!(13.00));
        assert_eq!(totals.total, dec!(23.00));
    }

    #[test]
    fn test_totals_use_decimal_precision() {
        let items = vec![item(1, 3, dec!(0.10))];
        let totals = CartTotals::compute(&items);
        assert_eq!(totals.subtotal, dec!(0.30));
        assert_eq!(totals.total, dec!(10.30));
    }
}
