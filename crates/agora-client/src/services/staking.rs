//! Staking pool client

use crate::agent::RpcAgent;
use crate::config::ServiceAddress;
use agora_core::amount::TokenAmount;
use agora_core::effects::StakingPool;
use agora_core::errors::AgoraError;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

/// Binding to the staking pool
#[derive(Debug, Clone)]
pub struct StakingClient {
    agent: Arc<RpcAgent>,
    address: ServiceAddress,
}

impl StakingClient {
    pub(crate) fn new(agent: Arc<RpcAgent>, address: ServiceAddress) -> Self {
        Self { agent, address }
    }

    /// The service address this binding targets.
    pub fn address(&self) -> &ServiceAddress {
        &self.address
    }
}

#[async_trait]
impl StakingPool for StakingClient {
    async fn stake(&self, amount: TokenAmount) -> Result<(), AgoraError> {
        // Amounts cross the boundary as raw e8s integers.
        self.agent
            .call(&self.address, "stake", json!({ "amount": amount.e8s() }))
            .await?;
        Ok(())
    }

    async fn claim(&self) -> Result<(), AgoraError> {
        self.agent.call(&self.address, "claim", json!({})).await?;
        Ok(())
    }
}
