//! Catalog models: categories and products.
//!
//! Both are read-only from the storefront's perspective; rows are created by
//! the seeder (or out-of-band tooling).

use rust_decimal::Decimal;
use sqlx::FromRow;

use tamarind_core::{CategoryId, ProductId};

/// A product category.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    /// Database ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL slug (unique).
    pub slug: String,
    /// Whether the category is visible at all.
    pub is_active: bool,
    /// Whether the category is featured on the home page.
    pub is_featured: bool,
}

/// A product.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    /// Database ID.
    pub id: ProductId,
    /// URL slug (unique).
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Unit price in the store currency.
    pub price: Decimal,
    /// Owning category.
    pub category_id: CategoryId,
    /// Whether the product is visible at all.
    pub is_active: bool,
    /// Whether the product is featured on the home page.
    pub is_featured: bool,
}
