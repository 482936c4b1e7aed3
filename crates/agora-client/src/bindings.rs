//! Service binding construction
//!
//! All four bindings are built in one deterministic pass from the config and
//! the current identity, and rebuilt together whenever the identity epoch
//! changes. Construction never fails: a service whose address is missing
//! yields an unavailable binding, and reads that depend on it are skipped by
//! the caller.

use crate::agent::RpcAgent;
use crate::config::{ClientConfig, ServiceAddress};
use crate::services::{LedgerClient, NftClient, ProfileClient, StakingClient};
use agora_core::effects::SessionIdentity;
use agora_core::errors::AgoraError;
use std::sync::Arc;

/// One service binding: a usable client or the reason there is none
#[derive(Debug, Clone)]
pub enum Binding<T> {
    /// The binding was constructed and can issue calls
    Available(T),
    /// The binding could not be constructed
    Unavailable {
        /// Why construction was skipped
        reason: String,
    },
}

impl<T> Binding<T> {
    /// The client, if available.
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Available(client) => Some(client),
            Self::Unavailable { .. } => None,
        }
    }

    /// Whether the binding can issue calls.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Transform the client while preserving availability.
    ///
    /// Used by embedders to erase concrete clients into capability trait
    /// objects.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Binding<U> {
        match self {
            Self::Available(client) => Binding::Available(f(client)),
            Self::Unavailable { reason } => Binding::Unavailable { reason },
        }
    }

    /// The client, or an [`AgoraError::Unavailable`] naming the service.
    pub fn require(&self, service: &str) -> Result<&T, AgoraError> {
        match self {
            Self::Available(client) => Ok(client),
            Self::Unavailable { reason } => Err(AgoraError::unavailable(service, reason.clone())),
        }
    }
}

/// The four typed remote-call handles for one identity
///
/// Not persisted; owned by whoever owns the session and thrown away whenever
/// the identity changes.
#[derive(Debug, Clone)]
pub struct ServiceBindings {
    identity_epoch: u64,
    /// Binding to the user-profile service
    pub profile: Binding<ProfileClient>,
    /// Binding to the token ledger
    pub ledger: Binding<LedgerClient>,
    /// Binding to the staking pool
    pub staking: Binding<StakingClient>,
    /// Binding to the NFT registry
    pub nft: Binding<NftClient>,
}

impl ServiceBindings {
    /// Build all four bindings for the given identity.
    ///
    /// Deterministic: the same config and identity always produce bindings
    /// with the same addresses. `identity_epoch` tags the result so callers
    /// can tell which identity generation it belongs to.
    pub fn build(
        config: &ClientConfig,
        identity: Option<&SessionIdentity>,
        identity_epoch: u64,
    ) -> Self {
        let agent = Arc::new(RpcAgent::new(config.host.clone(), identity.cloned()));
        tracing::debug!(
            host = %config.host,
            identity_epoch,
            anonymous = identity.is_none(),
            "building service bindings"
        );
        Self {
            identity_epoch,
            profile: bind(&agent, &config.profile, ProfileClient::new),
            ledger: bind(&agent, &config.ledger, LedgerClient::new),
            staking: bind(&agent, &config.staking, StakingClient::new),
            nft: bind(&agent, &config.nft, NftClient::new),
        }
    }

    /// The identity generation these bindings were built against.
    pub fn identity_epoch(&self) -> u64 {
        self.identity_epoch
    }

    /// Whether all four services can be called.
    pub fn all_available(&self) -> bool {
        self.profile.is_available()
            && self.ledger.is_available()
            && self.staking.is_available()
            && self.nft.is_available()
    }

    /// The profile service binding.
    pub fn profile(&self) -> Result<&ProfileClient, AgoraError> {
        self.profile.require("profile")
    }

    /// The token ledger binding.
    pub fn ledger(&self) -> Result<&LedgerClient, AgoraError> {
        self.ledger.require("ledger")
    }

    /// The staking pool binding.
    pub fn staking(&self) -> Result<&StakingClient, AgoraError> {
        self.staking.require("staking")
    }

    /// The NFT registry binding.
    pub fn nft(&self) -> Result<&NftClient, AgoraError> {
        self.nft.require("nft")
    }
}

fn bind<T>(
    agent: &Arc<RpcAgent>,
    address: &Option<ServiceAddress>,
    make: impl FnOnce(Arc<RpcAgent>, ServiceAddress) -> T,
) -> Binding<T> {
    match address {
        Some(address) => Binding::Available(make(agent.clone(), address.clone())),
        None => Binding::Unavailable {
            reason: "no service address configured".to_string(),
        },
    }
}
