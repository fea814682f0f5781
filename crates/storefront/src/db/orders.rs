//! Order repository: checkout materialization and order history.

use sqlx::PgPool;

use tamarind_core::{AddressId, UserId};

use super::RepositoryError;
use crate::models::OrderSummary;

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Materialize a user's cart into orders against a chosen address.
    ///
    /// Runs as a single transaction: the address is re-validated against the
    /// requesting user, one order row is inserted per cart row, and the cart
    /// rows are deleted. Any failure rolls the whole operation back, so a
    /// cart is never half-drained. Returns the number of orders created
    /// (zero for an empty cart).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the address does not exist or
    /// belongs to another user.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn checkout(
        &self,
        user_id: UserId,
        address_id: AddressId,
    ) -> Result<u64, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        // The selected address id comes from the session and is untrusted
        // until this ownership check passes.
        let owned: Option<(AddressId,)> = sqlx::query_as(
            r"
            SELECT id FROM addresses
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(address_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        if owned.is_none() {
            return Err(RepositoryError::NotFound);
        }

        let inserted = sqlx::query(
            r"
            INSERT INTO orders (user_id, address_id, product_id, quantity)
            SELECT user_id, $2, product_id, quantity
            FROM cart_items
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .bind(address_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
            DELETE FROM cart_items
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(inserted.rows_affected())
    }

    /// List a user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<OrderSummary>, RepositoryError> {
        let orders = sqlx::query_as::<_, OrderSummary>(
            r"
            SELECT o.id, o.user_id, o.address_id, o.product_id, o.quantity, o.ordered_at,
                   p.name AS product_name, p.price AS unit_price,
                   a.city, a.state
            FROM orders o
            JOIN products p ON o.product_id = p.id
            JOIN addresses a ON o.address_id = a.id
            WHERE o.user_id = $1
            ORDER BY o.ordered_at DESC, o.id DESC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }
}
