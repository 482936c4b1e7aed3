//! # Agora Client
//!
//! The composition layer between a session identity and the four remote
//! services. Given a deployment configuration and the current identity, this
//! crate deterministically builds one typed binding per service; all four are
//! rebuilt together whenever the identity changes. A missing or invalid
//! service address surfaces as an explicitly unavailable binding, never a
//! panic.
//!
//! Control flow: [`session::IdentitySession`] becomes ready →
//! [`bindings::ServiceBindings`] are constructed against it → callers issue
//! reads and writes through the typed clients in [`services`].

#![forbid(unsafe_code)]

/// RPC agent issuing JSON calls against the configured host
pub mod agent;

/// Binding construction and availability
pub mod bindings;

/// Deployment target and service addressing
pub mod config;

/// Typed clients for the four remote services
pub mod services;

/// Identity session lifecycle
pub mod session;

pub use bindings::{Binding, ServiceBindings};
pub use config::{ClientConfig, DeploymentTarget, ServiceAddress};
pub use services::{LedgerClient, NftClient, ProfileClient, StakingClient};
pub use session::{IdentitySession, SessionState};
