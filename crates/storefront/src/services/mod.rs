//! Business logic services for the storefront.
//!
//! - `auth` - password registration and login
//! - `completion` - text-completion API client for the chat page

pub mod auth;
pub mod completion;

pub use auth::{AuthError, AuthService};
pub use completion::{CompletionClient, CompletionError};
