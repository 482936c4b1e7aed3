//! Mock identity provider

use agora_core::effects::{IdentityProvider, SessionIdentity};
use agora_core::errors::AgoraError;
use agora_core::identifiers::Principal;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Mock identity provider for testing
///
/// Either always grants a fixed principal or always rejects, standing in
/// for the interactive flow of a real provider.
#[derive(Debug, Clone)]
pub struct MockIdentityProvider {
    principal: Option<Principal>,
    fail_logout: Arc<AtomicBool>,
}

impl MockIdentityProvider {
    /// A provider that grants `principal` on every login.
    pub fn new(principal: Principal) -> Self {
        Self {
            principal: Some(principal),
            fail_logout: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A provider that rejects every login, as a cancelled flow would.
    pub fn rejecting() -> Self {
        Self {
            principal: None,
            fail_logout: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make subsequent logout calls fail.
    pub fn set_fail_logout(&self, fail: bool) {
        self.fail_logout.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn login(&self) -> Result<SessionIdentity, AgoraError> {
        match &self.principal {
            Some(principal) => Ok(SessionIdentity::new(principal.clone(), "mock-delegation")),
            None => Err(AgoraError::unauthenticated("login rejected by provider")),
        }
    }

    async fn logout(&self) -> Result<(), AgoraError> {
        if self.fail_logout.load(Ordering::SeqCst) {
            return Err(AgoraError::network("identity provider unreachable"));
        }
        Ok(())
    }
}
