//! Aggregate view state

use super::{BadgesState, FeedState, ProfileState, StakingState};
use serde::{Deserialize, Serialize};

/// Readiness of the store as a whole
///
/// Ready means an authenticated session and all four service bindings;
/// Unavailable means the session is authenticated but at least one binding
/// could not be constructed (reads that don't depend on it still run).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Readiness {
    /// No login has been attempted
    #[default]
    Uninitialized,
    /// Login or the initial read sequence is in progress
    Pending,
    /// Authenticated with all bindings available
    Ready,
    /// Authenticated but some binding is unavailable
    Unavailable,
}

/// Everything a frontend renders
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    /// Store readiness lifecycle
    pub readiness: Readiness,
    /// Profile panel
    pub profile: ProfileState,
    /// Social feed
    pub feed: FeedState,
    /// NFT badge grid
    pub badges: BadgesState,
    /// Staking dashboard
    pub staking: StakingState,
}
