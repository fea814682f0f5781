//! Session-related types.
//!
//! Types stored in the session for authentication state and the pending
//! checkout address selection.

use serde::{Deserialize, Serialize};

use tamarind_core::{AddressId, Email, UserId};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
}

/// Pending checkout address selection.
///
/// Written by `POST /session/address` and consumed by checkout, which
/// re-validates that the address belongs to the requesting user. The id in
/// here is untrusted client input until that check passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedAddress {
    /// The chosen address id.
    pub address_id: AddressId,
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the pending checkout address selection.
    pub const SELECTED_ADDRESS: &str = "selected_address";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_address_serde_roundtrip() {
        let selected = SelectedAddress {
            address_id: AddressId::new(5),
        };
        let json = serde_json::to_string(&selected).expect("serialize");
        assert_eq!(json, r#"{"address_id":5}"#);

        let back: SelectedAddress = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, selected);
    }
}
