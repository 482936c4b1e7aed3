//! Identity provider interface
//!
//! The identity provider is an external collaborator that runs an interactive
//! login flow and hands back a session credential. The credential is opaque:
//! the client forwards it on authorized calls and never inspects the
//! delegation contents.

use crate::errors::AgoraError;
use crate::identifiers::Principal;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Credential produced by a successful interactive login
///
/// Held for the lifetime of the browser session and destroyed on logout.
/// Equality is by value; two identities with the same principal and
/// delegation are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// The signed-in account
    pub principal: Principal,
    /// Opaque delegation token authorizing calls on behalf of the principal
    pub delegation: String,
}

impl SessionIdentity {
    /// Create a session identity from its parts.
    pub fn new(principal: Principal, delegation: impl Into<String>) -> Self {
        Self {
            principal,
            delegation: delegation.into(),
        }
    }
}

/// Interactive login/logout against an external identity provider
///
/// A rejected or cancelled login is an error; the caller keeps its prior
/// authentication state and nothing is retried automatically.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Run the interactive login flow and return the resulting credential.
    async fn login(&self) -> Result<SessionIdentity, AgoraError>;

    /// Invalidate the provider-side session.
    async fn logout(&self) -> Result<(), AgoraError>;
}
