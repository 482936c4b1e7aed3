//! Deployment configuration
//!
//! A deployment is a network host plus four service addresses, selected by a
//! target flag (local replica vs. the public network). Addresses are
//! validated when set; an address that is missing or fails validation leaves
//! that service's binding unavailable rather than failing construction.

use agora_core::errors::AgoraError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the deployment target (`local`/`mainnet`).
pub const ENV_NETWORK: &str = "AGORA_NETWORK";
/// Environment variable overriding the network host.
pub const ENV_HOST: &str = "AGORA_HOST";
/// Environment variables carrying the four service addresses.
pub const ENV_PROFILE_SERVICE: &str = "AGORA_PROFILE_SERVICE_ID";
/// See [`ENV_PROFILE_SERVICE`].
pub const ENV_LEDGER_SERVICE: &str = "AGORA_LEDGER_SERVICE_ID";
/// See [`ENV_PROFILE_SERVICE`].
pub const ENV_STAKING_SERVICE: &str = "AGORA_STAKING_SERVICE_ID";
/// See [`ENV_PROFILE_SERVICE`].
pub const ENV_NFT_SERVICE: &str = "AGORA_NFT_SERVICE_ID";

/// Which network this deployment talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeploymentTarget {
    /// Local development replica
    #[default]
    Local,
    /// Public network
    Mainnet,
}

impl DeploymentTarget {
    /// Default network host for this target.
    pub fn default_host(&self) -> &'static str {
        match self {
            Self::Local => "http://127.0.0.1:4943",
            Self::Mainnet => "https://api.agora.network",
        }
    }

    /// Read the target from [`ENV_NETWORK`]; anything but `mainnet` is local.
    pub fn from_env() -> Self {
        match std::env::var(ENV_NETWORK).as_deref() {
            Ok("mainnet") => Self::Mainnet,
            _ => Self::Local,
        }
    }
}

/// Validated service identifier within a deployment
///
/// Opaque beyond validation: lowercase alphanumeric segments joined by `-`,
/// the same alphabet as principals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceAddress(String);

impl ServiceAddress {
    /// Parse and validate a service address.
    pub fn parse(text: impl Into<String>) -> Result<Self, AgoraError> {
        let text = text.into();
        let valid = !text.is_empty()
            && text
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(AgoraError::invalid(format!(
                "invalid service address: {text:?}"
            )));
        }
        Ok(Self(text))
    }

    /// The textual form used in request paths.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ServiceAddress {
    type Err = AgoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Per-deployment configuration for the client layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Deployment target this config was built for
    pub target: DeploymentTarget,
    /// Network host all calls are issued against
    pub host: String,
    /// Address of the user-profile service, if configured
    pub profile: Option<ServiceAddress>,
    /// Address of the token ledger, if configured
    pub ledger: Option<ServiceAddress>,
    /// Address of the staking pool, if configured
    pub staking: Option<ServiceAddress>,
    /// Address of the NFT registry, if configured
    pub nft: Option<ServiceAddress>,
}

impl ClientConfig {
    /// Start from a target with its default host and no addresses.
    pub fn for_target(target: DeploymentTarget) -> Self {
        Self {
            target,
            host: target.default_host().to_string(),
            profile: None,
            ledger: None,
            staking: None,
            nft: None,
        }
    }

    /// Set the profile service address.
    pub fn with_profile(mut self, address: ServiceAddress) -> Self {
        self.profile = Some(address);
        self
    }

    /// Set the token ledger address.
    pub fn with_ledger(mut self, address: ServiceAddress) -> Self {
        self.ledger = Some(address);
        self
    }

    /// Set the staking pool address.
    pub fn with_staking(mut self, address: ServiceAddress) -> Self {
        self.staking = Some(address);
        self
    }

    /// Set the NFT registry address.
    pub fn with_nft(mut self, address: ServiceAddress) -> Self {
        self.nft = Some(address);
        self
    }

    /// Build a config from the environment.
    ///
    /// Missing or invalid addresses become `None` (a warning is logged), so
    /// a partially configured deployment still constructs; the affected
    /// bindings report unavailable instead.
    pub fn from_env() -> Self {
        let target = DeploymentTarget::from_env();
        let host =
            std::env::var(ENV_HOST).unwrap_or_else(|_| target.default_host().to_string());
        Self {
            target,
            host,
            profile: address_from_env(ENV_PROFILE_SERVICE),
            ledger: address_from_env(ENV_LEDGER_SERVICE),
            staking: address_from_env(ENV_STAKING_SERVICE),
            nft: address_from_env(ENV_NFT_SERVICE),
        }
    }
}

fn address_from_env(var: &str) -> Option<ServiceAddress> {
    let raw = std::env::var(var).ok()?;
    match ServiceAddress::parse(raw) {
        Ok(address) => Some(address),
        Err(error) => {
            tracing::warn!(%var, %error, "ignoring invalid service address");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_have_distinct_hosts() {
        assert_ne!(
            DeploymentTarget::Local.default_host(),
            DeploymentTarget::Mainnet.default_host()
        );
    }

    #[test]
    fn address_validation() {
        assert!(ServiceAddress::parse("rrkah-fqaaa-aaaaa-aaaaq-cai").is_ok());
        assert!(ServiceAddress::parse("").is_err());
        assert!(ServiceAddress::parse("Not Valid").is_err());
    }

    #[test]
    fn builder_sets_addresses() {
        let config = ClientConfig::for_target(DeploymentTarget::Local)
            .with_profile(ServiceAddress::parse("profile-svc").unwrap());
        assert!(config.profile.is_some());
        assert!(config.ledger.is_none());
    }
}
