//! Address repository.
//!
//! Every operation is scoped to the owning user; an address id belonging to
//! someone else behaves exactly like a missing row.

use sqlx::PgPool;

use tamarind_core::{AddressId, UserId};

use super::RepositoryError;
use crate::models::Address;

/// Repository for address database operations.
pub struct AddressRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AddressRepository<'a> {
    /// Create a new address repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a user's addresses, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Address>, RepositoryError> {
        let addresses = sqlx::query_as::<_, Address>(
            r"
            SELECT id, user_id, locality, city, state
            FROM addresses
            WHERE user_id = $1
            ORDER BY id
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(addresses)
    }

    /// Create an address for a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        user_id: UserId,
        locality: &str,
        city: &str,
        state: &str,
    ) -> Result<Address, RepositoryError> {
        let address = sqlx::query_as::<_, Address>(
            r"
            INSERT INTO addresses (user_id, locality, city, state)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, locality, city, state
            ",
        )
        .bind(user_id)
        .bind(locality)
        .bind(city)
        .bind(state)
        .fetch_one(self.pool)
        .await?;

        Ok(address)
    }

    /// Get an address owned by `user_id`.
    ///
    /// Returns `None` if the row does not exist or belongs to another user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_owned(
        &self,
        user_id: UserId,
        address_id: AddressId,
    ) -> Result<Option<Address>, RepositoryError> {
        let address = sqlx::query_as::<_, Address>(
            r"
            SELECT id, user_id, locality, city, state
            FROM addresses
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(address_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(address)
    }

    /// Delete an address owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the row does not exist or
    /// belongs to another user.
    /// Returns `RepositoryError::Conflict` if the address is referenced by
    /// existing orders (orders keep their shipping address).
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(
        &self,
        user_id: UserId,
        address_id: AddressId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM addresses
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(address_id)
        .bind(user_id)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::Conflict(
                    "address is referenced by existing orders".to_owned(),
                );
            }
            RepositoryError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
