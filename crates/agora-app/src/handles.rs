//! Service handle composition
//!
//! The store calls services through capability trait objects so frontends
//! and tests decide what sits behind them: remote bindings from
//! `agora-client` in production, in-memory fixtures in tests. A
//! [`BindingProvider`] is the single seam where handles are (re)built for an
//! identity; the store invokes it on every identity-epoch change.

use agora_client::{Binding, ClientConfig, ServiceBindings};
use agora_core::effects::{
    NftRegistry, ProfileService, SessionIdentity, StakingPool, TokenLedger,
};
use agora_core::errors::AgoraError;
use std::sync::Arc;

/// The four capability handles the store calls through
#[derive(Clone)]
pub struct ServiceHandles {
    /// User-profile service handle
    pub profile: Binding<Arc<dyn ProfileService>>,
    /// Token ledger handle
    pub ledger: Binding<Arc<dyn TokenLedger>>,
    /// Staking pool handle
    pub staking: Binding<Arc<dyn StakingPool>>,
    /// NFT registry handle
    pub nft: Binding<Arc<dyn NftRegistry>>,
}

impl ServiceHandles {
    /// Handles where every service reports the same unavailable reason.
    ///
    /// This is the state between logout and the next successful login.
    pub fn unavailable(reason: &str) -> Self {
        fn unavailable<T>(reason: &str) -> Binding<T> {
            Binding::Unavailable {
                reason: reason.to_string(),
            }
        }
        Self {
            profile: unavailable(reason),
            ledger: unavailable(reason),
            staking: unavailable(reason),
            nft: unavailable(reason),
        }
    }

    /// Whether all four services can be called.
    pub fn all_available(&self) -> bool {
        self.profile.is_available()
            && self.ledger.is_available()
            && self.staking.is_available()
            && self.nft.is_available()
    }

    pub(crate) fn profile(&self) -> Result<&Arc<dyn ProfileService>, AgoraError> {
        self.profile.require("profile")
    }

    pub(crate) fn ledger(&self) -> Result<&Arc<dyn TokenLedger>, AgoraError> {
        self.ledger.require("ledger")
    }

    pub(crate) fn staking(&self) -> Result<&Arc<dyn StakingPool>, AgoraError> {
        self.staking.require("staking")
    }

    pub(crate) fn nft(&self) -> Result<&Arc<dyn NftRegistry>, AgoraError> {
        self.nft.require("nft")
    }
}

/// Builds service handles for an identity
///
/// Invoked by the store whenever the identity epoch changes; the result
/// replaces all four handles atomically.
pub trait BindingProvider: Send + Sync {
    /// Build handles authorized by `identity`.
    fn build(&self, identity: &SessionIdentity, identity_epoch: u64) -> ServiceHandles;
}

/// The production provider: remote bindings from the deployment config
impl BindingProvider for ClientConfig {
    fn build(&self, identity: &SessionIdentity, identity_epoch: u64) -> ServiceHandles {
        let bindings = ServiceBindings::build(self, Some(identity), identity_epoch);
        ServiceHandles {
            profile: bindings
                .profile
                .map(|c| Arc::new(c) as Arc<dyn ProfileService>),
            ledger: bindings.ledger.map(|c| Arc::new(c) as Arc<dyn TokenLedger>),
            staking: bindings
                .staking
                .map(|c| Arc::new(c) as Arc<dyn StakingPool>),
            nft: bindings.nft.map(|c| Arc::new(c) as Arc<dyn NftRegistry>),
        }
    }
}

/// A provider that always returns the same pre-built handles
///
/// Used by tests and the demo host, where the services are in-memory
/// fixtures and identity does not change what they are.
#[derive(Clone)]
pub struct StaticBindingProvider {
    handles: ServiceHandles,
}

impl StaticBindingProvider {
    /// Wrap pre-built handles.
    pub fn new(handles: ServiceHandles) -> Self {
        Self { handles }
    }
}

impl BindingProvider for StaticBindingProvider {
    fn build(&self, _identity: &SessionIdentity, _identity_epoch: u64) -> ServiceHandles {
        self.handles.clone()
    }
}
