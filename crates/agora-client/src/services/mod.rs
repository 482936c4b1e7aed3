//! Typed clients for the four remote services
//!
//! Each client pairs the shared [`RpcAgent`](crate::agent::RpcAgent) with one
//! service address and implements the matching capability trait from
//! `agora-core`. Method and argument names on the wire follow the services'
//! own interfaces; everything is checked against typed records on the way in.

mod ledger;
mod nft;
mod profile;
mod staking;

pub use ledger::LedgerClient;
pub use nft::NftClient;
pub use profile::ProfileClient;
pub use staking::StakingClient;

use agora_core::errors::AgoraError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a call result into its typed form.
fn decode<T: DeserializeOwned>(method: &str, value: Value) -> Result<T, AgoraError> {
    serde_json::from_value(value)
        .map_err(|e| AgoraError::serialization(format!("{method} result: {e}")))
}
