//! # Agora Testkit
//!
//! In-memory implementations of the capability traits in `agora-core`,
//! used as fixtures by the client and app test suites. Each fixture keeps
//! its state behind `Arc<Mutex<_>>` so clones share one service instance,
//! and exposes a failure toggle so tests can make any call fail mid-run.
//!
//! The ledger/staking pair shares state the way the real services do: a
//! stake debits the ledger balance and a claim credits it, so balance
//! refreshes observe remote-computed values.

#![forbid(unsafe_code)]
// Fixtures hold locks only for short copies; poisoning means a test already
// panicked, so unwrap is fine here.
#![allow(clippy::unwrap_used)]

mod identity;
mod services;

pub use identity::MockIdentityProvider;
pub use services::{
    InMemoryLedger, InMemoryNftRegistry, InMemoryProfileService, InMemoryStakingPool,
};
