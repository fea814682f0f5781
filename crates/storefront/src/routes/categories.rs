//! Category route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use tamarind_core::CategoryId;

use crate::db::CatalogRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::models::Category;
use crate::routes::products::ProductView;
use crate::state::AppState;

/// Category display data for templates.
#[derive(Clone)]
pub struct CategoryView {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryView {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
        }
    }
}

/// Category listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/index.html")]
pub struct CategoriesIndexTemplate {
    pub categories: Vec<CategoryView>,
}

/// Category detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/show.html")]
pub struct CategoryShowTemplate {
    pub category: CategoryView,
    pub products: Vec<ProductView>,
}

/// Display all active categories.
pub async fn index(State(state): State<AppState>) -> Result<CategoriesIndexTemplate> {
    let catalog = CatalogRepository::new(state.pool());

    let categories = catalog
        .active_categories()
        .await?
        .into_iter()
        .map(CategoryView::from)
        .collect();

    Ok(CategoriesIndexTemplate { categories })
}

/// Display a category's active products.
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<CategoryShowTemplate> {
    let catalog = CatalogRepository::new(state.pool());

    let category = catalog
        .category_by_slug(&slug)
        .await?
        .filter(|c| c.is_active)
        .ok_or_else(|| AppError::NotFound(format!("category: {slug}")))?;

    let products = catalog
        .products_in_category(&category.slug)
        .await?
        .into_iter()
        .map(ProductView::from)
        .collect();

    Ok(CategoryShowTemplate {
        category: CategoryView::from(category),
        products,
    })
}
