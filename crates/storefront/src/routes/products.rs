//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use tamarind_core::{ProductId, format_usd};

use crate::db::CatalogRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::models::Product;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: ProductId,
    pub slug: String,
    pub name: String,
    pub price: String,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            slug: product.slug,
            name: product.name,
            price: format_usd(product.price),
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductView,
    pub related_products: Vec<ProductView>,
}

/// Display a product detail page with related products.
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ProductShowTemplate> {
    let catalog = CatalogRepository::new(state.pool());

    let product = catalog
        .product_by_slug(&slug)
        .await?
        .filter(|p| p.is_active)
        .ok_or_else(|| AppError::NotFound(format!("product: {slug}")))?;

    let related_products = catalog
        .related_products(product.id)
        .await?
        .into_iter()
        .map(ProductView::from)
        .collect();

    Ok(ProductShowTemplate {
        product: ProductView::from(product),
        related_products,
    })
}
