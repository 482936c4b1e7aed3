//! Staking dashboard view state

use serde::{Deserialize, Serialize};

/// State behind the staking dashboard
///
/// The stake input stays a string while the user edits; it is converted to
/// a fixed-point amount only at submission, and cleared only when the stake
/// succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StakingState {
    /// Transient amount the user is editing
    pub stake_input: String,
}
