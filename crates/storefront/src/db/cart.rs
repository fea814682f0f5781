//! Cart repository.
//!
//! A cart holds at most one row per (user, product); the `cart_items` table
//! enforces that with a uniqueness constraint, and adds are an atomic upsert
//! rather than a lookup-then-insert. All mutations are scoped to the owning
//! user.

use sqlx::PgPool;

use tamarind_core::{CartId, ProductId, UserId};

use super::RepositoryError;
use crate::models::CartItem;

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Add one unit of a product to a user's cart.
    ///
    /// Creates the row with quantity 1, or increments the existing row.
    /// There is no upper bound on quantity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn add_product(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO cart_items (user_id, product_id, quantity)
            SELECT $1, id, 1 FROM products WHERE id = $2
            ON CONFLICT (user_id, product_id)
            DO UPDATE SET quantity = cart_items.quantity + 1
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .execute(self.pool)
        .await?;

        // The SELECT produces no rows when the product id is unknown.
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// List a user's cart lines joined with their products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn items_for_user(&self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError> {
        let items = sqlx::query_as::<_, CartItem>(
            r"
            SELECT ci.id, ci.user_id, ci.product_id, ci.quantity,
                   p.slug AS product_slug, p.name AS product_name, p.price AS unit_price
            FROM cart_items ci
            JOIN products p ON ci.product_id = p.id
            WHERE ci.user_id = $1
            ORDER BY ci.id
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Increment a cart line's quantity by one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the row does not exist or
    /// belongs to another user.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn increment(&self, user_id: UserId, cart_id: CartId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE cart_items
            SET quantity = quantity + 1
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(cart_id)
        .bind(user_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Decrement a cart line's quantity by one, deleting the row at quantity 1.
    ///
    /// The guarded UPDATE never drives quantity below 1; a row that is
    /// already at 1 is deleted instead.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the row does not exist or
    /// belongs to another user.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn decrement(&self, user_id: UserId, cart_id: CartId) -> Result<(), RepositoryError> {
        let updated = sqlx::query(
            r"
            UPDATE cart_items
            SET quantity = quantity - 1
            WHERE id = $1 AND user_id = $2 AND quantity > 1
            ",
        )
        .bind(cart_id)
        .bind(user_id)
        .execute(self.pool)
        .await?;

        if updated.rows_affected() > 0 {
            return Ok(());
        }

        let deleted = sqlx::query(
            r"
            DELETE FROM cart_items
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(cart_id)
        .bind(user_id)
        .execute(self.pool)
        .await?;

        if deleted.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Remove a cart line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the row does not exist or
    /// belongs to another user.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn remove(&self, user_id: UserId, cart_id: CartId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM cart_items
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(cart_id)
        .bind(user_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
