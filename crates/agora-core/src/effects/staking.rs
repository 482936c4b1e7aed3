//! Staking pool interface

use crate::amount::TokenAmount;
use crate::errors::AgoraError;
use async_trait::async_trait;

/// Stake and reward operations owned by the staking pool
///
/// Reward math lives entirely on the remote side; the client submits
/// amounts and re-reads the ledger afterwards.
#[async_trait]
pub trait StakingPool: Send + Sync {
    /// Stake the given amount from the calling identity's balance.
    async fn stake(&self, amount: TokenAmount) -> Result<(), AgoraError>;

    /// Claim any accrued rewards for the calling identity.
    async fn claim(&self) -> Result<(), AgoraError>;
}
