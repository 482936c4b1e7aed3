//! User-profile service interface

use crate::domain::{Post, UserProfile};
use crate::errors::AgoraError;
use crate::identifiers::PostId;
use async_trait::async_trait;

/// Profile and social-feed operations owned by the user-profile service
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Authenticate the calling identity and return (creating if necessary)
    /// its profile record.
    async fn authenticate(&self) -> Result<UserProfile, AgoraError>;

    /// Fetch the full feed, newest first.
    async fn get_all_posts(&self) -> Result<Vec<Post>, AgoraError>;

    /// Create a post authored by the calling identity.
    async fn create_post(&self, content: &str) -> Result<PostId, AgoraError>;

    /// Like a post as the calling identity.
    async fn like_post(&self, post: PostId) -> Result<(), AgoraError>;
}
