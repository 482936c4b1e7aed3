//! Domain records exchanged with the remote services
//!
//! These are fetched, rendered, and refreshed; the client never mutates them
//! locally except by re-fetch. All are serde-serializable so frontends can
//! snapshot or transfer them across an FFI boundary.

use crate::identifiers::{BadgeId, PostId, Principal};
use serde::{Deserialize, Serialize};

/// Profile record owned by the user-profile service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable account identifier
    pub principal: Principal,
    /// Display name chosen at registration
    pub display_name: String,
}

/// A post in the social feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Identifier assigned by the profile service
    pub id: PostId,
    /// Author's principal
    pub author: Principal,
    /// Post body
    pub content: String,
    /// Principals that have liked this post
    pub likes: Vec<Principal>,
}

impl Post {
    /// Number of likes; always derived from the liker list, never stored.
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

/// An NFT badge owned by a principal
///
/// Read-only from the client's perspective; the metadata string is opaque
/// and owned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftBadge {
    /// Identifier assigned by the registry
    pub id: BadgeId,
    /// Opaque metadata string
    pub metadata: String,
}
