//! # Agora Core
//!
//! Foundational types and capability interfaces for the Agora client stack.
//! This crate is pure: it defines identifiers, fixed-point token amounts,
//! the domain records the remote services exchange, the unified error type,
//! and the async capability traits the client layer implements. It contains
//! no transport, no runtime coupling, and no application logic.
//!
//! Layering:
//!
//! ```text
//! agora-core      (this crate: types + interfaces)
//!   └── agora-client   (session, config, typed service bindings)
//!         └── agora-app     (view state store consumed by frontends)
//! ```

#![forbid(unsafe_code)]

/// Fixed-point token amounts (scale 10^8)
pub mod amount;

/// Domain records exchanged with the remote services
pub mod domain;

/// Service capability interfaces (pure signatures, no implementations)
pub mod effects;

/// Unified error handling
pub mod errors;

/// Account and resource identifiers
pub mod identifiers;

/// Poll-based reactive primitive for view-state observation
pub mod reactive;

pub use amount::TokenAmount;
pub use domain::{NftBadge, Post, UserProfile};
pub use errors::{AgoraError, AgoraResult};
pub use identifiers::{BadgeId, PostId, Principal};
