//! Catalog seeding command.
//!
//! Inserts a small demo catalog so a fresh database has something to browse.
//! Re-running is safe: rows are keyed by slug and existing ones are left
//! untouched.

use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use tamarind_storefront::db;

/// Demo categories: (name, slug, featured).
const CATEGORIES: &[(&str, &str, bool)] = &[
    ("Coffee", "coffee", true),
    ("Tea", "tea", true),
    ("Brewing Gear", "brewing-gear", true),
    ("Gift Sets", "gift-sets", false),
];

/// Demo products: (name, slug, price, category slug, featured).
const PRODUCTS: &[(&str, &str, &str, &str, bool)] = &[
    ("House Blend Beans", "house-blend-beans", "14.50", "coffee", true),
    ("Single Origin Ethiopia", "single-origin-ethiopia", "18.00", "coffee", true),
    ("Decaf Dark Roast", "decaf-dark-roast", "13.25", "coffee", false),
    ("Jasmine Green Tea", "jasmine-green-tea", "9.75", "tea", true),
    ("Earl Grey", "earl-grey", "8.50", "tea", true),
    ("Masala Chai", "masala-chai", "10.00", "tea", false),
    ("Ceramic Pour-Over", "ceramic-pour-over", "24.00", "brewing-gear", true),
    ("French Press", "french-press", "32.00", "brewing-gear", true),
    ("Gooseneck Kettle", "gooseneck-kettle", "45.00", "brewing-gear", true),
    ("Starter Gift Set", "starter-gift-set", "39.99", "gift-sets", true),
];

/// Seed the catalog with demo data.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let database_url = super::database_url()?;

    info!("Connecting to storefront database...");
    let pool = db::create_pool(&database_url).await?;

    let categories = seed_categories(&pool).await?;
    let products = seed_products(&pool).await?;

    info!(categories, products, "Seeding complete!");
    Ok(())
}

/// Insert demo categories, skipping slugs that already exist.
async fn seed_categories(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;

    for (name, slug, featured) in CATEGORIES {
        let result = sqlx::query(
            r"
            INSERT INTO categories (name, slug, is_active, is_featured)
            VALUES ($1, $2, TRUE, $3)
            ON CONFLICT (slug) DO NOTHING
            ",
        )
        .bind(name)
        .bind(slug)
        .bind(featured)
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
    }

    Ok(inserted)
}

/// Insert demo products, skipping slugs that already exist.
async fn seed_products(pool: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let mut inserted = 0;

    for (name, slug, price, category_slug, featured) in PRODUCTS {
        let price: Decimal = price.parse()?;

        let result = sqlx::query(
            r"
            INSERT INTO products (name, slug, price, category_id, is_active, is_featured)
            SELECT $1, $2, $3, id, TRUE, $5
            FROM categories WHERE slug = $4
            ON CONFLICT (slug) DO NOTHING
            ",
        )
        .bind(name)
        .bind(slug)
        .bind(price)
        .bind(category_slug)
        .bind(featured)
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
    }

    Ok(inserted)
}
