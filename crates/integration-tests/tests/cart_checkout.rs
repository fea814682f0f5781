//! Database-backed tests for the cart and checkout workflow.
//!
//! Run with a disposable database:
//! `DATABASE_URL=postgres://localhost/tamarind_test cargo test -p tamarind-integration-tests -- --ignored`

use std::time::{SystemTime, UNIX_EPOCH};

use rust_decimal::{Decimal, dec};
use secrecy::SecretString;
use sqlx::PgPool;

use tamarind_core::{ProductId, UserId};
use tamarind_storefront::db::{
    self, AddressRepository, CartRepository, OrderRepository, RepositoryError,
};
use tamarind_storefront::services::auth::AuthService;

// ============================================================
// Helpers
// ============================================================

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_nanos()
}

async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = db::create_pool(&SecretString::from(url))
        .await
        .expect("connect to test database");

    sqlx::migrate!("../storefront/migrations")
        .run(&pool)
        .await
        .expect("run migrations");

    pool
}

async fn create_user(pool: &PgPool) -> UserId {
    let email = format!("shopper-{}@example.com", unique_suffix());
    let user = AuthService::new(pool)
        .register_with_password(&email, "a long enough password")
        .await
        .expect("register test user");

    user.id
}

async fn create_product(pool: &PgPool, price: Decimal) -> ProductId {
    let suffix = unique_suffix();

    let (category_id,): (i32,) = sqlx::query_as(
        r"
        INSERT INTO categories (name, slug)
        VALUES ($1, $2)
        RETURNING id
        ",
    )
    .bind(format!("Test Category {suffix}"))
    .bind(format!("test-category-{suffix}"))
    .fetch_one(pool)
    .await
    .expect("insert category");

    let (product_id,): (i32,) = sqlx::query_as(
        r"
        INSERT INTO products (slug, name, price, category_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        ",
    )
    .bind(format!("test-product-{suffix}"))
    .bind(format!("Test Product {suffix}"))
    .bind(price)
    .bind(category_id)
    .fetch_one(pool)
    .await
    .expect("insert product");

    ProductId::new(product_id)
}

// ============================================================
// Cart
// ============================================================

#[tokio::test]
#[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
async fn adding_a_product_twice_increments_one_row() {
    let pool = test_pool().await;
    let user_id = create_user(&pool).await;
    let product_id = create_product(&pool, dec!(5.00)).await;

    let cart = CartRepository::new(&pool);
    cart.add_product(user_id, product_id).await.expect("first add");
    cart.add_product(user_id, product_id).await.expect("second add");

    let items = cart.items_for_user(user_id).await.expect("list cart");
    assert_eq!(items.len(), 1, "one row per (user, product)");
    assert_eq!(items[0].quantity, 2);
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
async fn adding_an_unknown_product_is_not_found() {
    let pool = test_pool().await;
    let user_id = create_user(&pool).await;

    let result = CartRepository::new(&pool)
        .add_product(user_id, ProductId::new(-1))
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

// ============================================================
// Checkout
// ============================================================

#[tokio::test]
#[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
async fn checkout_converts_every_cart_row_into_an_order() {
    let pool = test_pool().await;
    let user_id = create_user(&pool).await;
    let first = create_product(&pool, dec!(5.00)).await;
    let second = create_product(&pool, dec!(3.00)).await;

    let cart = CartRepository::new(&pool);
    cart.add_product(user_id, first).await.expect("add first");
    cart.add_product(user_id, first).await.expect("add first again");
    cart.add_product(user_id, second).await.expect("add second");

    let address = AddressRepository::new(&pool)
        .create(user_id, "12 Test Lane", "Springfield", "IL")
        .await
        .expect("create address");

    let orders = OrderRepository::new(&pool);
    let created = orders
        .checkout(user_id, address.id)
        .await
        .expect("checkout succeeds");
    assert_eq!(created, 2, "one order per cart row");

    let remaining = cart.items_for_user(user_id).await.expect("list cart");
    assert!(remaining.is_empty(), "checkout drains the cart");

    let history = orders.list_for_user(user_id).await.expect("list orders");
    assert_eq!(history.len(), 2);
    let quantities: Vec<i32> = history.iter().map(|o| o.quantity).collect();
    assert!(quantities.contains(&2));
    assert!(quantities.contains(&1));
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
async fn checkout_rejects_an_address_owned_by_someone_else() {
    let pool = test_pool().await;
    let buyer = create_user(&pool).await;
    let other = create_user(&pool).await;
    let product = create_product(&pool, dec!(5.00)).await;

    let cart = CartRepository::new(&pool);
    cart.add_product(buyer, product).await.expect("add product");

    let foreign_address = AddressRepository::new(&pool)
        .create(other, "1 Elsewhere Rd", "Shelbyville", "IL")
        .await
        .expect("create address");

    let result = OrderRepository::new(&pool)
        .checkout(buyer, foreign_address.id)
        .await;
    assert!(matches!(result, Err(RepositoryError::NotFound)));

    let items = cart.items_for_user(buyer).await.expect("list cart");
    assert_eq!(items.len(), 1, "a rejected checkout leaves the cart intact");
}
