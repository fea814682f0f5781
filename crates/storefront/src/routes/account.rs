//! Account route handlers: profile, addresses, and checkout address selection.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_sessions::Session;

use tamarind_core::AddressId;

use crate::db::{AddressRepository, OrderRepository};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{Address, SelectedAddress, session_keys};
use crate::routes::auth::MessageQuery;
use crate::routes::orders::OrderView;
use crate::state::AppState;

/// Address display data for templates.
#[derive(Clone)]
pub struct AddressView {
    pub id: AddressId,
    pub locality: String,
    pub city: String,
    pub state: String,
}

impl From<Address> for AddressView {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            locality: address.locality,
            city: address.city,
            state: address.state,
        }
    }
}

/// Profile page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/profile.html")]
pub struct ProfileTemplate {
    pub email: String,
    pub addresses: Vec<AddressView>,
    pub orders: Vec<OrderView>,
}

/// Address management page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/address_form.html")]
pub struct AddressFormTemplate {
    pub addresses: Vec<AddressView>,
    pub error: Option<String>,
}

/// New address form data.
#[derive(Debug, Deserialize)]
pub struct AddressForm {
    pub locality: String,
    pub city: String,
    pub state: String,
}

/// Checkout address selection payload.
#[derive(Debug, Deserialize)]
pub struct SelectAddressForm {
    pub address_id: AddressId,
}

/// Display the profile page with the user's addresses and order history.
pub async fn profile(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<ProfileTemplate> {
    let addresses = AddressRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;

    let orders = OrderRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;

    Ok(ProfileTemplate {
        email: user.email.to_string(),
        addresses: addresses.into_iter().map(AddressView::from).collect(),
        orders: orders.into_iter().map(OrderView::from).collect(),
    })
}

/// Display the address management page.
pub async fn address_page(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> Result<AddressFormTemplate> {
    let addresses = AddressRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;

    Ok(AddressFormTemplate {
        addresses: addresses.into_iter().map(AddressView::from).collect(),
        error: query.error,
    })
}

/// Create a new address, then return to the address page.
///
/// Blank fields redisplay the form with an `error` query parameter, the
/// same shape the auth forms use.
pub async fn create_address(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<AddressForm>,
) -> Result<Redirect> {
    let locality = form.locality.trim();
    let city = form.city.trim();
    let addr_state = form.state.trim();

    if locality.is_empty() || city.is_empty() || addr_state.is_empty() {
        return Ok(Redirect::to("/address?error=missing_fields"));
    }

    AddressRepository::new(state.pool())
        .create(user.id, locality, city, addr_state)
        .await?;

    Ok(Redirect::to("/address"))
}

/// Delete one of the user's addresses.
pub async fn remove_address(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(address_id): Path<AddressId>,
) -> Result<Redirect> {
    AddressRepository::new(state.pool())
        .delete(user.id, address_id)
        .await?;

    Ok(Redirect::to("/address"))
}

/// Remember the address chosen for checkout.
///
/// The id is stored in the session as-is; ownership is validated when the
/// checkout runs, so a fabricated id can never produce an order against
/// someone else's address.
pub async fn select_address(
    session: Session,
    Json(payload): Json<SelectAddressForm>,
) -> Result<Json<Value>> {
    let selected = SelectedAddress {
        address_id: payload.address_id,
    };

    session
        .insert(session_keys::SELECTED_ADDRESS, &selected)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    use super::*;

    #[test]
    fn select_address_payload_deserializes_from_json() {
        let payload: SelectAddressForm =
            serde_json::from_str(r#"{"address_id": 42}"#).expect("valid payload");
        assert_eq!(payload.address_id, AddressId::new(42));
    }

    #[tokio::test]
    async fn select_address_accepts_json_body() {
        let app = Router::new()
            .route("/session/address", post(select_address))
            .layer(SessionManagerLayer::new(MemoryStore::default()));

        let request = Request::builder()
            .method("POST")
            .uri("/session/address")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"address_id": 1}"#))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("handler runs");
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let reply: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(reply, json!({ "success": true }));
    }
}
