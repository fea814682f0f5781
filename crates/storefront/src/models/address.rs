//! Address model.

use sqlx::FromRow;

use tamarind_core::{AddressId, UserId};

/// A user's shipping address.
///
/// Exclusively scoped to its owning user; every query filters by `user_id`.
#[derive(Debug, Clone, FromRow)]
pub struct Address {
    /// Database ID.
    pub id: AddressId,
    /// Owning user.
    pub user_id: UserId,
    /// Street / locality line.
    pub locality: String,
    /// City.
    pub city: String,
    /// State / province.
    pub state: String,
}
