//! Service capability interfaces
//!
//! Pure async trait signatures for the external collaborators this client
//! calls: the identity provider and the four backend services. Implementations
//! live in `agora-client` (remote bindings) and `agora-testkit` (in-memory
//! fixtures); nothing here performs I/O.
//!
//! Every trait method is a single-attempt operation: no retry, no backoff,
//! no timeout policy beyond what the transport enforces. A failed call is
//! terminal for that action.

pub mod identity;
pub mod ledger;
pub mod nft;
pub mod profile;
pub mod staking;

pub use identity::{IdentityProvider, SessionIdentity};
pub use ledger::TokenLedger;
pub use nft::NftRegistry;
pub use profile::ProfileService;
pub use staking::StakingPool;
