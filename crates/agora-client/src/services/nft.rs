//! NFT registry client

use super::decode;
use crate::agent::RpcAgent;
use crate::config::ServiceAddress;
use agora_core::domain::NftBadge;
use agora_core::effects::NftRegistry;
use agora_core::errors::AgoraError;
use agora_core::identifiers::Principal;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

/// Binding to the NFT registry
#[derive(Debug, Clone)]
pub struct NftClient {
    agent: Arc<RpcAgent>,
    address: ServiceAddress,
}

impl NftClient {
    pub(crate) fn new(agent: Arc<RpcAgent>, address: ServiceAddress) -> Self {
        Self { agent, address }
    }

    /// The service address this binding targets.
    pub fn address(&self) -> &ServiceAddress {
        &self.address
    }
}

#[async_trait]
impl NftRegistry for NftClient {
    async fn nfts_by_owner(&self, owner: &Principal) -> Result<Vec<NftBadge>, AgoraError> {
        let result = self
            .agent
            .call(&self.address, "getNFTsByOwner", json!({ "owner": owner }))
            .await?;
        decode("getNFTsByOwner", result)
    }
}
