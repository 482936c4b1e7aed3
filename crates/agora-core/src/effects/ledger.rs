//! Fungible-token ledger interface

use crate::amount::TokenAmount;
use crate::errors::AgoraError;
use crate::identifiers::Principal;
use async_trait::async_trait;

/// Balance queries against the token ledger
///
/// Balances are always read from the ledger; the client never computes a
/// balance locally, not even after a stake or claim it issued itself.
#[async_trait]
pub trait TokenLedger: Send + Sync {
    /// Current balance of the given account.
    async fn balance_of(&self, owner: &Principal) -> Result<TokenAmount, AgoraError>;
}
