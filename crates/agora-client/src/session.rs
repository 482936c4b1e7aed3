//! Identity session lifecycle
//!
//! The session is the single owner of the current credential. It moves
//! through an explicit readiness lifecycle (uninitialized → pending →
//! ready/unavailable) instead of living in ambient global state, and it
//! bumps an epoch on every identity change so dependents know to rebuild
//! their bindings.

use agora_core::effects::{IdentityProvider, SessionIdentity};
use agora_core::errors::AgoraError;
use std::sync::Arc;

/// Readiness of the identity session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No login has been attempted
    #[default]
    Uninitialized,
    /// A login flow is in progress
    Pending,
    /// A credential is held
    Ready(SessionIdentity),
    /// No identity provider could be reached
    Unavailable {
        /// Why the session cannot become ready
        reason: String,
    },
}

/// Holds the cryptographic identity for the current session
pub struct IdentitySession {
    provider: Arc<dyn IdentityProvider>,
    state: SessionState,
    /// Incremented on every successful login and logout.
    epoch: u64,
}

impl IdentitySession {
    /// Create an unauthenticated session backed by the given provider.
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            state: SessionState::Uninitialized,
            epoch: 0,
        }
    }

    /// Run the provider's interactive login flow.
    ///
    /// A rejected or cancelled login restores the prior state; nothing is
    /// retried automatically.
    pub async fn login(&mut self) -> Result<(), AgoraError> {
        if self.is_authenticated() {
            return Ok(());
        }
        let prior = std::mem::replace(&mut self.state, SessionState::Pending);
        match self.provider.login().await {
            Ok(identity) => {
                tracing::info!(principal = %identity.principal, "login succeeded");
                self.state = SessionState::Ready(identity);
                self.epoch += 1;
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "login failed");
                self.state = prior;
                Err(error)
            }
        }
    }

    /// Clear the credential.
    ///
    /// A rejected logout leaves the prior authenticated state untouched.
    pub async fn logout(&mut self) -> Result<(), AgoraError> {
        if !self.is_authenticated() {
            return Ok(());
        }
        self.provider.logout().await?;
        tracing::info!("logged out");
        self.state = SessionState::Uninitialized;
        self.epoch += 1;
        Ok(())
    }

    /// True iff a credential is held.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Ready(_))
    }

    /// The held credential, if any.
    pub fn identity(&self) -> Option<&SessionIdentity> {
        match &self.state {
            SessionState::Ready(identity) => Some(identity),
            _ => None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Identity epoch; changes whenever the identity reference changes.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::identifiers::Principal;
    use agora_testkit::MockIdentityProvider;

    fn principal() -> Principal {
        Principal::from_text("alice-principal").unwrap()
    }

    #[tokio::test]
    async fn login_makes_session_ready() {
        let provider = Arc::new(MockIdentityProvider::new(principal()));
        let mut session = IdentitySession::new(provider);
        assert!(!session.is_authenticated());
        assert_eq!(session.epoch(), 0);

        session.login().await.unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.identity().unwrap().principal, principal());
        assert_eq!(session.epoch(), 1);
    }

    #[tokio::test]
    async fn rejected_login_leaves_prior_state() {
        let provider = Arc::new(MockIdentityProvider::rejecting());
        let mut session = IdentitySession::new(provider);

        assert!(session.login().await.is_err());
        assert!(!session.is_authenticated());
        assert_eq!(*session.state(), SessionState::Uninitialized);
        assert_eq!(session.epoch(), 0);
    }

    #[tokio::test]
    async fn logout_clears_identity_and_bumps_epoch() {
        let provider = Arc::new(MockIdentityProvider::new(principal()));
        let mut session = IdentitySession::new(provider);
        session.login().await.unwrap();

        session.logout().await.unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.epoch(), 2);
    }

    #[tokio::test]
    async fn login_while_authenticated_is_a_no_op() {
        let provider = Arc::new(MockIdentityProvider::new(principal()));
        let mut session = IdentitySession::new(provider);
        session.login().await.unwrap();
        let epoch = session.epoch();

        session.login().await.unwrap();
        assert_eq!(session.epoch(), epoch);
    }
}
