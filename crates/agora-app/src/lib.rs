//! # Agora App
//!
//! Portable headless application core for Agora frontends. The store owns
//! the identity session and the service bindings, holds per-view state, and
//! exposes it through a poll-based [`Dynamic`](agora_core::reactive::Dynamic)
//! so any frontend (WASM, TUI, mobile FFI) can observe changes. User actions
//! enter as [`Intent`]s and leave as remote calls followed by the minimal
//! re-reads needed to reflect the new state.
//!
//! No optimistic updates: view state only changes after remote confirmation,
//! and a failed call is logged and leaves prior state untouched.

#![forbid(unsafe_code)]

/// Service handle composition seam
pub mod handles;

/// User actions
pub mod intent;

/// The view state store
pub mod store;

/// Per-view state types
pub mod views;

pub use handles::{BindingProvider, ServiceHandles, StaticBindingProvider};
pub use intent::Intent;
pub use store::AppStore;
pub use views::{BadgesState, FeedState, ProfileState, Readiness, StakingState, ViewState};
