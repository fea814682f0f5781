//! Domain models for the storefront.

pub mod address;
pub mod cart;
pub mod catalog;
pub mod order;
pub mod session;
pub mod user;

pub use address::Address;
pub use cart::{CartItem, CartTotals, SHIPPING_AMOUNT};
pub use catalog::{Category, Product};
pub use order::OrderSummary;
pub use session::{CurrentUser, SelectedAddress, keys as session_keys};
pub use user::User;
