//! Authentication state model.
//!
//! # Responsibility
//! - Define the identity snapshot published by the identity provider.
//! - Represent signed-in/signed-out as one wholesale-replaced value.
//!
//! # Invariants
//! - `user` is either absent (signed out) or a complete identity snapshot.
//! - `UserId` is minted by the identity provider and never parsed here.
//!
//! # See also
//! - docs/architecture/state-layer.md

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque identity handle minted by the external identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw provider-issued id, for hand-back to the identity provider.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity snapshot for the signed-in user.
///
/// Field names follow the provider's user record on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Stable provider-issued identifier.
    pub uid: UserId,
    /// Display name as reported by the provider, when set.
    pub display_name: Option<String>,
    /// Primary email as reported by the provider, when set.
    pub email: Option<String>,
}

impl AuthUser {
    /// Creates a snapshot carrying only the provider id.
    pub fn new(uid: UserId) -> Self {
        Self {
            uid,
            display_name: None,
            email: None,
        }
    }
}

/// Current authentication state distributed to consumers.
///
/// The identity provider replaces the whole value on sign-in and sign-out;
/// nothing in this layer mutates it field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// Present while a user session is active.
    pub user: Option<AuthUser>,
}

impl AuthState {
    /// State before any sign-in, and after sign-out.
    pub fn signed_out() -> Self {
        Self { user: None }
    }

    /// State published by the identity provider on sign-in.
    pub fn signed_in(user: AuthUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Id of the active user, when signed in.
    pub fn user_id(&self) -> Option<&UserId> {
        self.user.as_ref().map(|user| &user.uid)
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::signed_out()
    }
}
