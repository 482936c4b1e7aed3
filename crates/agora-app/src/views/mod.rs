//! # View State Module
//!
//! Per-view state types populated by remote reads. They are plain serde
//! records so they can be snapshotted for debugging or carried across an
//! FFI boundary, and cheap to clone because the store's `Dynamic` clones on
//! every read.

mod badges;
mod feed;
mod profile;
mod staking;
mod state;

pub use badges::BadgesState;
pub use feed::FeedState;
pub use profile::ProfileState;
pub use staking::StakingState;
pub use state::{Readiness, ViewState};
