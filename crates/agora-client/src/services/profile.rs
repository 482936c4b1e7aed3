//! Profile service client

use super::decode;
use crate::agent::RpcAgent;
use crate::config::ServiceAddress;
use agora_core::domain::{Post, UserProfile};
use agora_core::effects::ProfileService;
use agora_core::errors::AgoraError;
use agora_core::identifiers::PostId;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

/// Binding to the user-profile service
#[derive(Debug, Clone)]
pub struct ProfileClient {
    agent: Arc<RpcAgent>,
    address: ServiceAddress,
}

impl ProfileClient {
    pub(crate) fn new(agent: Arc<RpcAgent>, address: ServiceAddress) -> Self {
        Self { agent, address }
    }

    /// The service address this binding targets.
    pub fn address(&self) -> &ServiceAddress {
        &self.address
    }
}

#[async_trait]
impl ProfileService for ProfileClient {
    async fn authenticate(&self) -> Result<UserProfile, AgoraError> {
        let result = self
            .agent
            .call(&self.address, "authenticate", json!({}))
            .await?;
        decode("authenticate", result)
    }

    async fn get_all_posts(&self) -> Result<Vec<Post>, AgoraError> {
        let result = self
            .agent
            .call(&self.address, "getAllPosts", json!({}))
            .await?;
        decode("getAllPosts", result)
    }

    async fn create_post(&self, content: &str) -> Result<PostId, AgoraError> {
        let result = self
            .agent
            .call(&self.address, "createPost", json!({ "content": content }))
            .await?;
        decode("createPost", result)
    }

    async fn like_post(&self, post: PostId) -> Result<(), AgoraError> {
        self.agent
            .call(&self.address, "likePost", json!({ "post_id": post }))
            .await?;
        Ok(())
    }
}
