//! Unified error system for Agora
//!
//! One error type covers the whole client stack. Every failure a remote call
//! can produce maps onto a variant here, so call sites catch, log, and leave
//! prior state untouched without translating between error hierarchies.

use serde::{Deserialize, Serialize};

/// Convenience alias used throughout the workspace.
pub type AgoraResult<T> = Result<T, AgoraError>;

/// Unified error type for all Agora operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AgoraError {
    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// What was invalid
        message: String,
    },

    /// Operation requires an authenticated session
    #[error("Unauthenticated: {message}")]
    Unauthenticated {
        /// Why authentication was required or missing
        message: String,
    },

    /// A service binding is not available
    #[error("Service unavailable: {service}: {reason}")]
    Unavailable {
        /// The service whose binding is missing
        service: String,
        /// Why the binding could not be constructed
        reason: String,
    },

    /// Network or transport failure while issuing a remote call
    #[error("Network error: {message}")]
    Network {
        /// Transport-level failure description
        message: String,
    },

    /// The remote service rejected the call
    #[error("Rejected by {service}: {message}")]
    Rejected {
        /// The service that rejected the call
        service: String,
        /// The service's rejection message
        message: String,
    },

    /// Encoding or decoding a payload failed
    #[error("Serialization error: {message}")]
    Serialization {
        /// What failed to encode or decode
        message: String,
    },
}

impl AgoraError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create an unauthenticated error
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    /// Create an unavailable-binding error
    pub fn unavailable(service: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            service: service.into(),
            reason: reason.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a service rejection error
    pub fn rejected(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Whether this error came from the remote side (network or rejection)
    /// rather than from local validation.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Rejected { .. })
    }
}
