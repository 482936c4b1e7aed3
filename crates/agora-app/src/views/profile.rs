//! Profile view state

use agora_core::identifiers::Principal;
use serde::{Deserialize, Serialize};

/// State behind the profile panel
///
/// The balance is a pre-formatted two-decimal string; conversion from the
/// ledger's fixed-point integers happens once, at refresh time, so the view
/// layer never touches raw e8s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileState {
    /// Signed-in principal, once the profile has been fetched
    pub principal: Option<Principal>,
    /// Display name from the profile record
    pub display_name: String,
    /// Two-decimal balance string
    pub balance: String,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            principal: None,
            display_name: String::new(),
            // Shown before the first ledger read completes.
            balance: "0.00".to_string(),
        }
    }
}
