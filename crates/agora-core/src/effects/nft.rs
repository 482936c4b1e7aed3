//! NFT registry interface

use crate::domain::NftBadge;
use crate::errors::AgoraError;
use crate::identifiers::Principal;
use async_trait::async_trait;

/// Read-only badge queries against the NFT registry
#[async_trait]
pub trait NftRegistry: Send + Sync {
    /// Badges owned by the given account.
    async fn nfts_by_owner(&self, owner: &Principal) -> Result<Vec<NftBadge>, AgoraError>;
}
