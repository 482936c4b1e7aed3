//! User actions
//!
//! An intent is a user action dispatched into the store. Local edits
//! (`SetDraft`, `SetStakeInput`) mutate view state directly; everything else
//! is a remote call followed by the minimal re-reads that reflect its
//! outcome.

use agora_core::identifiers::PostId;
use serde::{Deserialize, Serialize};

/// A user action dispatched into the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Run the interactive login flow, build bindings, and load all views
    Login,
    /// Clear the identity and reset all view state
    Logout,
    /// Re-run the full read sequence
    Refresh,
    /// Replace the feed composer text
    SetDraft(String),
    /// Post the current composer text
    CreatePost,
    /// Like a post in the feed
    LikePost(PostId),
    /// Replace the stake-amount input
    SetStakeInput(String),
    /// Stake the current input amount
    Stake,
    /// Claim accrued staking rewards
    ClaimRewards,
}

impl Intent {
    /// Short label for diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
            Self::Refresh => "refresh",
            Self::SetDraft(_) => "set-draft",
            Self::CreatePost => "create-post",
            Self::LikePost(_) => "like-post",
            Self::SetStakeInput(_) => "set-stake-input",
            Self::Stake => "stake",
            Self::ClaimRewards => "claim-rewards",
        }
    }
}
