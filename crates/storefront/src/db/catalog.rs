//! Catalog repository: category and product reads.
//!
//! The catalog is read-only from the storefront's perspective; rows are
//! created by the seeder.

use sqlx::PgPool;

use tamarind_core::ProductId;

use super::RepositoryError;
use crate::models::{Category, Product};

/// Maximum featured categories shown on the home page.
const FEATURED_CATEGORY_LIMIT: i64 = 3;

/// Maximum featured products shown on the home page.
const FEATURED_PRODUCT_LIMIT: i64 = 8;

/// Repository for catalog reads.
pub struct CatalogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Active, featured categories for the home page (up to 3).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn featured_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(
            r"
            SELECT id, name, slug, is_active, is_featured
            FROM categories
            WHERE is_active AND is_featured
            ORDER BY name
            LIMIT $1
            ",
        )
        .bind(FEATURED_CATEGORY_LIMIT)
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Active, featured products for the home page (up to 8).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn featured_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, slug, name, price, category_id, is_active, is_featured
            FROM products
            WHERE is_active AND is_featured
            ORDER BY name
            LIMIT $1
            ",
        )
        .bind(FEATURED_PRODUCT_LIMIT)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// All active categories.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn active_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(
            r"
            SELECT id, name, slug, is_active, is_featured
            FROM categories
            WHERE is_active
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Look up a category by slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            r"
            SELECT id, name, slug, is_active, is_featured
            FROM categories
            WHERE slug = $1
            ",
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    /// Active products in a category (by category slug).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn products_in_category(
        &self,
        category_slug: &str,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT p.id, p.slug, p.name, p.price, p.category_id, p.is_active, p.is_featured
            FROM products p
            JOIN categories c ON p.category_id = c.id
            WHERE c.slug = $1 AND p.is_active
            ORDER BY p.name
            ",
        )
        .bind(category_slug)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Look up a product by slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT id, slug, name, price, category_id, is_active, is_featured
            FROM products
            WHERE slug = $1
            ",
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Active products in the same category as `product_id`, excluding it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn related_products(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT p.id, p.slug, p.name, p.price, p.category_id, p.is_active, p.is_featured
            FROM products p
            WHERE p.is_active
              AND p.id <> $1
              AND p.category_id = (SELECT category_id FROM products WHERE id = $1)
            ORDER BY p.name
            ",
        )
        .bind(product_id)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }
}
