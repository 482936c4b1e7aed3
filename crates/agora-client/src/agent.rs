//! RPC agent
//!
//! One agent per identity: it carries the network host, an HTTP client, and
//! the current session credential (or none, for anonymous calls). Every
//! remote operation is a single JSON request/response exchange with a fresh
//! correlation id; there is no retry, no backoff, and no cancellation of
//! in-flight calls.

use crate::config::ServiceAddress;
use agora_core::effects::SessionIdentity;
use agora_core::errors::AgoraError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Header carrying the delegation token on authorized calls.
const DELEGATION_HEADER: &str = "x-agora-delegation";

#[derive(Serialize)]
struct RpcRequest<'a> {
    request_id: Uuid,
    method: &'a str,
    args: Value,
}

/// Response envelope: exactly one of `result`/`error` is set.
#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Issues JSON calls to services on a fixed host
///
/// Cheap to clone via the inner `reqwest` client; bindings built from the
/// same agent share its connection pool.
#[derive(Debug, Clone)]
pub struct RpcAgent {
    http: reqwest::Client,
    host: String,
    identity: Option<SessionIdentity>,
}

impl RpcAgent {
    /// Create an agent for the given host, authorized by `identity` if set.
    pub fn new(host: impl Into<String>, identity: Option<SessionIdentity>) -> Self {
        Self {
            http: reqwest::Client::new(),
            host: host.into(),
            identity,
        }
    }

    /// Whether calls are issued without a session credential.
    pub fn is_anonymous(&self) -> bool {
        self.identity.is_none()
    }

    /// The network host this agent targets.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Issue a single call to `method` on the service at `address`.
    ///
    /// Transport failures map to [`AgoraError::Network`]; a non-success
    /// status or an error envelope maps to [`AgoraError::Rejected`].
    pub async fn call(
        &self,
        address: &ServiceAddress,
        method: &str,
        args: Value,
    ) -> Result<Value, AgoraError> {
        let request_id = Uuid::new_v4();
        let url = format!("{}/api/v1/{}/{}", self.host, address.as_str(), method);
        tracing::debug!(%request_id, service = %address, method, "issuing remote call");

        let mut request = self.http.post(&url).json(&RpcRequest {
            request_id,
            method,
            args,
        });
        if let Some(identity) = &self.identity {
            request = request.header(DELEGATION_HEADER, &identity.delegation);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AgoraError::network(format!("{method} on {address}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgoraError::rejected(
                address.as_str(),
                format!("{method} returned HTTP {status}"),
            ));
        }

        let envelope: RpcResponse = response
            .json()
            .await
            .map_err(|e| AgoraError::serialization(format!("{method} response: {e}")))?;

        if let Some(error) = envelope.error {
            return Err(AgoraError::rejected(address.as_str(), error));
        }
        envelope
            .result
            .ok_or_else(|| AgoraError::serialization(format!("{method}: envelope had no result")))
    }
}
