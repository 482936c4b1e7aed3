//! Social feed view state

use agora_core::domain::Post;
use agora_core::identifiers::PostId;
use serde::{Deserialize, Serialize};

/// State behind the social feed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedState {
    /// Cached post list, newest first; refreshed after every mutation
    pub posts: Vec<Post>,
    /// Composer text the user is editing; cleared only on successful post
    pub draft: String,
}

impl FeedState {
    /// Like count for a post, if it is in the cached list.
    pub fn like_count(&self, id: PostId) -> Option<usize> {
        self.posts.iter().find(|p| p.id == id).map(Post::like_count)
    }
}
