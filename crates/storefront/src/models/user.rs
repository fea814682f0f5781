//! User model.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use tamarind_core::{Email, UserId};

/// A registered storefront user.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Database ID.
    pub id: UserId,
    /// Email address (unique).
    pub email: Email,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
