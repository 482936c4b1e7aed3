//! NFT badge view state

use agora_core::domain::NftBadge;
use serde::{Deserialize, Serialize};

/// State behind the badge grid; read-only
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BadgesState {
    /// Badges owned by the signed-in principal
    pub badges: Vec<NftBadge>,
}
