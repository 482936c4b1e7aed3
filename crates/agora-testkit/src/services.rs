//! In-memory service fixtures
//!
//! Each fixture mirrors one remote service's observable behavior closely
//! enough for store tests: posts get ids and liker lists, stakes debit the
//! ledger, claims credit it. Business logic beyond that is out of scope.

use agora_core::amount::TokenAmount;
use agora_core::domain::{NftBadge, Post, UserProfile};
use agora_core::effects::{NftRegistry, ProfileService, StakingPool, TokenLedger};
use agora_core::errors::AgoraError;
use agora_core::identifiers::{PostId, Principal};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

fn check_failing(failing: &AtomicBool, service: &str) -> Result<(), AgoraError> {
    if failing.load(Ordering::SeqCst) {
        return Err(AgoraError::rejected(service, "induced failure"));
    }
    Ok(())
}

// ============================================================================
// Profile service
// ============================================================================

/// In-memory profile service with a feed
///
/// The fixture is bound to one caller: `authenticate`, `create_post`, and
/// `like_post` act as the profile's principal, matching a binding built for
/// that identity.
#[derive(Debug, Clone)]
pub struct InMemoryProfileService {
    profile: UserProfile,
    posts: Arc<Mutex<Vec<Post>>>,
    next_id: Arc<AtomicU64>,
    failing: Arc<AtomicBool>,
}

impl InMemoryProfileService {
    /// Create a service whose calling identity is `profile`.
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            posts: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make subsequent calls fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of posts currently stored (for assertions).
    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }
}

#[async_trait]
impl ProfileService for InMemoryProfileService {
    async fn authenticate(&self) -> Result<UserProfile, AgoraError> {
        check_failing(&self.failing, "profile")?;
        Ok(self.profile.clone())
    }

    async fn get_all_posts(&self) -> Result<Vec<Post>, AgoraError> {
        check_failing(&self.failing, "profile")?;
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().rev().cloned().collect())
    }

    async fn create_post(&self, content: &str) -> Result<PostId, AgoraError> {
        check_failing(&self.failing, "profile")?;
        let id = PostId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.posts.lock().unwrap().push(Post {
            id,
            author: self.profile.principal.clone(),
            content: content.to_string(),
            likes: Vec::new(),
        });
        Ok(id)
    }

    async fn like_post(&self, post: PostId) -> Result<(), AgoraError> {
        check_failing(&self.failing, "profile")?;
        let mut posts = self.posts.lock().unwrap();
        let target = posts
            .iter_mut()
            .find(|p| p.id == post)
            .ok_or_else(|| AgoraError::rejected("profile", format!("no such post: {post}")))?;
        let liker = self.profile.principal.clone();
        if !target.likes.contains(&liker) {
            target.likes.push(liker);
        }
        Ok(())
    }
}

// ============================================================================
// Token ledger
// ============================================================================

/// In-memory token ledger
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    balances: Arc<Mutex<HashMap<Principal, TokenAmount>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an account's balance directly.
    pub fn set_balance(&self, owner: Principal, amount: TokenAmount) {
        self.balances.lock().unwrap().insert(owner, amount);
    }

    /// Make subsequent calls fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Remove `amount` from an account, rejecting on insufficient funds.
    pub fn debit(&self, owner: &Principal, amount: TokenAmount) -> Result<(), AgoraError> {
        let mut balances = self.balances.lock().unwrap();
        let current = balances.get(owner).copied().unwrap_or(TokenAmount::ZERO);
        let remaining = current
            .checked_sub(amount)
            .ok_or_else(|| AgoraError::rejected("ledger", "insufficient funds"))?;
        balances.insert(owner.clone(), remaining);
        Ok(())
    }

    /// Add `amount` to an account.
    pub fn credit(&self, owner: &Principal, amount: TokenAmount) {
        let mut balances = self.balances.lock().unwrap();
        let current = balances.get(owner).copied().unwrap_or(TokenAmount::ZERO);
        let updated = current.checked_add(amount).unwrap_or(current);
        balances.insert(owner.clone(), updated);
    }
}

#[async_trait]
impl TokenLedger for InMemoryLedger {
    async fn balance_of(&self, owner: &Principal) -> Result<TokenAmount, AgoraError> {
        check_failing(&self.failing, "ledger")?;
        let balances = self.balances.lock().unwrap();
        Ok(balances.get(owner).copied().unwrap_or(TokenAmount::ZERO))
    }
}

// ============================================================================
// Staking pool
// ============================================================================

/// In-memory staking pool backed by an [`InMemoryLedger`]
///
/// Bound to one caller, like the profile fixture. Stakes move tokens out of
/// the caller's ledger balance; claims credit the configured reward back.
#[derive(Debug, Clone)]
pub struct InMemoryStakingPool {
    ledger: InMemoryLedger,
    owner: Principal,
    staked: Arc<Mutex<TokenAmount>>,
    pending_reward: Arc<Mutex<TokenAmount>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryStakingPool {
    /// Create a pool debiting/crediting `owner` on the given ledger.
    pub fn new(ledger: InMemoryLedger, owner: Principal) -> Self {
        Self {
            ledger,
            owner,
            staked: Arc::new(Mutex::new(TokenAmount::ZERO)),
            pending_reward: Arc::new(Mutex::new(TokenAmount::ZERO)),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the reward the next claim pays out.
    pub fn set_pending_reward(&self, amount: TokenAmount) {
        *self.pending_reward.lock().unwrap() = amount;
    }

    /// Total staked so far (for assertions).
    pub fn staked(&self) -> TokenAmount {
        *self.staked.lock().unwrap()
    }

    /// Make subsequent calls fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl StakingPool for InMemoryStakingPool {
    async fn stake(&self, amount: TokenAmount) -> Result<(), AgoraError> {
        check_failing(&self.failing, "staking")?;
        self.ledger.debit(&self.owner, amount)?;
        let mut staked = self.staked.lock().unwrap();
        *staked = staked.checked_add(amount).unwrap_or(*staked);
        Ok(())
    }

    async fn claim(&self) -> Result<(), AgoraError> {
        check_failing(&self.failing, "staking")?;
        let reward = std::mem::take(&mut *self.pending_reward.lock().unwrap());
        if !reward.is_zero() {
            self.ledger.credit(&self.owner, reward);
        }
        Ok(())
    }
}

// ============================================================================
// NFT registry
// ============================================================================

/// In-memory NFT registry
#[derive(Debug, Clone, Default)]
pub struct InMemoryNftRegistry {
    badges: Arc<Mutex<HashMap<Principal, Vec<NftBadge>>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryNftRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a badge to an owner.
    pub fn grant(&self, owner: Principal, badge: NftBadge) {
        self.badges.lock().unwrap().entry(owner).or_default().push(badge);
    }

    /// Make subsequent calls fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl NftRegistry for InMemoryNftRegistry {
    async fn nfts_by_owner(&self, owner: &Principal) -> Result<Vec<NftBadge>, AgoraError> {
        check_failing(&self.failing, "nft")?;
        let badges = self.badges.lock().unwrap();
        Ok(badges.get(owner).cloned().unwrap_or_default())
    }
}
