//! Checkout route handler.

use axum::{extract::State, response::Redirect};
use tower_sessions::Session;

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{SelectedAddress, session_keys};
use crate::state::AppState;

/// Turn the cart into orders against the address selected earlier.
///
/// The whole conversion runs inside one database transaction; the selection
/// is cleared from the session only after it commits.
pub async fn checkout(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
) -> Result<Redirect> {
    let Some(selected) = session
        .get::<SelectedAddress>(session_keys::SELECTED_ADDRESS)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?
    else {
        // Nothing selected yet; send the user back to pick an address.
        return Ok(Redirect::to("/cart"));
    };

    let created = OrderRepository::new(state.pool())
        .checkout(user.id, selected.address_id)
        .await?;

    if let Err(e) = session
        .remove::<SelectedAddress>(session_keys::SELECTED_ADDRESS)
        .await
    {
        // Orders are already committed; a stale selection is harmless.
        tracing::warn!("Failed to clear selected address: {}", e);
    }

    tracing::info!(user_id = %user.id, orders = created, "checkout complete");

    Ok(Redirect::to("/orders"))
}
