//! Token ledger client

use super::decode;
use crate::agent::RpcAgent;
use crate::config::ServiceAddress;
use agora_core::amount::TokenAmount;
use agora_core::effects::TokenLedger;
use agora_core::errors::AgoraError;
use agora_core::identifiers::Principal;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

/// Binding to the fungible-token ledger
///
/// Balances come back as fixed-point integers at scale 10^8; `TokenAmount`'s
/// transparent serde form keeps them integers on the wire.
#[derive(Debug, Clone)]
pub struct LedgerClient {
    agent: Arc<RpcAgent>,
    address: ServiceAddress,
}

impl LedgerClient {
    pub(crate) fn new(agent: Arc<RpcAgent>, address: ServiceAddress) -> Self {
        Self { agent, address }
    }

    /// The service address this binding targets.
    pub fn address(&self) -> &ServiceAddress {
        &self.address
    }
}

#[async_trait]
impl TokenLedger for LedgerClient {
    async fn balance_of(&self, owner: &Principal) -> Result<TokenAmount, AgoraError> {
        let result = self
            .agent
            .call(
                &self.address,
                "icrc1_balance_of",
                json!({ "account": owner }),
            )
            .await?;
        decode("icrc1_balance_of", result)
    }
}
