//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::db::CatalogRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::routes::categories::CategoryView;
use crate::routes::products::ProductView;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub logged_in: bool,
    pub featured_categories: Vec<CategoryView>,
    pub featured_products: Vec<ProductView>,
}

/// Display the home page with featured categories and products.
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
) -> Result<HomeTemplate> {
    let catalog = CatalogRepository::new(state.pool());

    let featured_categories = catalog
        .featured_categories()
        .await?
        .into_iter()
        .map(CategoryView::from)
        .collect();

    let featured_products = catalog
        .featured_products()
        .await?
        .into_iter()
        .map(ProductView::from)
        .collect();

    Ok(HomeTemplate {
        logged_in: user.is_some(),
        featured_categories,
        featured_products,
    })
}
