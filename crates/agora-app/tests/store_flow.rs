//! End-to-end store flows against in-memory services

use agora_app::{AppStore, Intent, Readiness, ServiceHandles, StaticBindingProvider};
use agora_client::Binding;
use agora_core::amount::TokenAmount;
use agora_core::domain::{NftBadge, UserProfile};
use agora_core::effects::{NftRegistry, ProfileService, StakingPool, TokenLedger};
use agora_core::identifiers::{BadgeId, Principal};
use agora_testkit::{
    InMemoryLedger, InMemoryNftRegistry, InMemoryProfileService, InMemoryStakingPool,
    MockIdentityProvider,
};
use std::sync::Arc;

struct Harness {
    store: AppStore,
    profile: InMemoryProfileService,
    ledger: InMemoryLedger,
    staking: InMemoryStakingPool,
    nft: InMemoryNftRegistry,
}

fn principal() -> Principal {
    Principal::from_text("alice-principal").unwrap()
}

fn handles_for(
    profile: &InMemoryProfileService,
    ledger: &InMemoryLedger,
    staking: &InMemoryStakingPool,
    nft: &InMemoryNftRegistry,
) -> ServiceHandles {
    ServiceHandles {
        profile: Binding::Available(Arc::new(profile.clone()) as Arc<dyn ProfileService>),
        ledger: Binding::Available(Arc::new(ledger.clone()) as Arc<dyn TokenLedger>),
        staking: Binding::Available(Arc::new(staking.clone()) as Arc<dyn StakingPool>),
        nft: Binding::Available(Arc::new(nft.clone()) as Arc<dyn NftRegistry>),
    }
}

/// Fixture set: Alice with a 10-token balance and one badge.
fn harness() -> Harness {
    let principal = principal();
    let profile = InMemoryProfileService::new(UserProfile {
        principal: principal.clone(),
        display_name: "Alice".to_string(),
    });
    let ledger = InMemoryLedger::new();
    ledger.set_balance(principal.clone(), TokenAmount::from_tokens(10).unwrap());
    let staking = InMemoryStakingPool::new(ledger.clone(), principal.clone());
    let nft = InMemoryNftRegistry::new();
    nft.grant(
        principal.clone(),
        NftBadge {
            id: BadgeId::new("badge-1"),
            metadata: "Early adopter".to_string(),
        },
    );

    let handles = handles_for(&profile, &ledger, &staking, &nft);
    let store = AppStore::new(
        Arc::new(MockIdentityProvider::new(principal)),
        Arc::new(StaticBindingProvider::new(handles)),
    );
    Harness {
        store,
        profile,
        ledger,
        staking,
        nft,
    }
}

#[tokio::test]
async fn login_runs_the_ordered_read_sequence() {
    let h = harness();
    h.store.dispatch(Intent::Login).await.unwrap();

    let view = h.store.view();
    assert_eq!(view.readiness, Readiness::Ready);
    assert_eq!(view.profile.principal, Some(principal()));
    assert_eq!(view.profile.display_name, "Alice");
    assert_eq!(view.profile.balance, "10.00");
    assert!(view.feed.posts.is_empty());
    assert_eq!(view.badges.badges.len(), 1);
    assert_eq!(view.badges.badges[0].metadata, "Early adopter");
}

#[tokio::test]
async fn create_post_refreshes_feed_and_clears_draft() {
    let h = harness();
    h.store.dispatch(Intent::Login).await.unwrap();

    h.store
        .dispatch(Intent::SetDraft("hello".to_string()))
        .await
        .unwrap();
    h.store.dispatch(Intent::CreatePost).await.unwrap();

    let view = h.store.view();
    assert_eq!(view.feed.posts.len(), 1);
    assert_eq!(view.feed.posts[0].content, "hello");
    assert_eq!(view.feed.posts[0].author, principal());
    assert!(view.feed.draft.is_empty());
}

#[tokio::test]
async fn failed_create_post_keeps_draft_and_feed() {
    let h = harness();
    h.store.dispatch(Intent::Login).await.unwrap();
    h.store
        .dispatch(Intent::SetDraft("hello".to_string()))
        .await
        .unwrap();

    h.profile.set_failing(true);
    assert!(h.store.dispatch(Intent::CreatePost).await.is_err());

    let view = h.store.view();
    assert_eq!(view.feed.draft, "hello");
    assert!(view.feed.posts.is_empty());
    assert_eq!(h.profile.post_count(), 0);
}

#[tokio::test]
async fn like_shows_up_after_the_refresh() {
    let h = harness();
    h.store.dispatch(Intent::Login).await.unwrap();
    h.store
        .dispatch(Intent::SetDraft("first!".to_string()))
        .await
        .unwrap();
    h.store.dispatch(Intent::CreatePost).await.unwrap();

    let id = h.store.view().feed.posts[0].id;
    h.store.dispatch(Intent::LikePost(id)).await.unwrap();

    assert_eq!(h.store.view().feed.like_count(id), Some(1));
}

#[tokio::test]
async fn failed_like_leaves_count_unchanged() {
    let h = harness();
    h.store.dispatch(Intent::Login).await.unwrap();
    h.store
        .dispatch(Intent::SetDraft("first!".to_string()))
        .await
        .unwrap();
    h.store.dispatch(Intent::CreatePost).await.unwrap();
    let id = h.store.view().feed.posts[0].id;

    h.profile.set_failing(true);
    assert!(h.store.dispatch(Intent::LikePost(id)).await.is_err());

    assert_eq!(h.store.view().feed.like_count(id), Some(0));
}

#[tokio::test]
async fn stake_rereads_the_ledger_balance() {
    let h = harness();
    h.store.dispatch(Intent::Login).await.unwrap();

    h.store
        .dispatch(Intent::SetStakeInput("2.5".to_string()))
        .await
        .unwrap();
    h.store.dispatch(Intent::Stake).await.unwrap();

    let view = h.store.view();
    // The displayed balance is the ledger's number, not a local subtraction.
    assert_eq!(view.profile.balance, "7.50");
    assert!(view.staking.stake_input.is_empty());
    assert_eq!(h.staking.staked(), TokenAmount::from_decimal_str("2.5").unwrap());
}

#[tokio::test]
async fn rejected_stake_keeps_input_and_balance() {
    let h = harness();
    h.store.dispatch(Intent::Login).await.unwrap();

    h.store
        .dispatch(Intent::SetStakeInput("100".to_string()))
        .await
        .unwrap();
    // Only 10 tokens on the ledger.
    assert!(h.store.dispatch(Intent::Stake).await.is_err());

    let view = h.store.view();
    assert_eq!(view.staking.stake_input, "100");
    assert_eq!(view.profile.balance, "10.00");
}

#[tokio::test]
async fn unparseable_stake_input_never_reaches_the_pool() {
    let h = harness();
    h.store.dispatch(Intent::Login).await.unwrap();

    h.store
        .dispatch(Intent::SetStakeInput("1.234567891".to_string()))
        .await
        .unwrap();
    assert!(h.store.dispatch(Intent::Stake).await.is_err());
    assert_eq!(h.staking.staked(), TokenAmount::ZERO);
}

#[tokio::test]
async fn claim_rereads_the_ledger_balance() {
    let h = harness();
    h.store.dispatch(Intent::Login).await.unwrap();

    h.staking
        .set_pending_reward(TokenAmount::from_decimal_str("1.25").unwrap());
    h.store.dispatch(Intent::ClaimRewards).await.unwrap();

    assert_eq!(h.store.view().profile.balance, "11.25");
}

#[tokio::test]
async fn logout_resets_views_and_bindings() {
    let h = harness();
    h.store.dispatch(Intent::Login).await.unwrap();
    h.store.dispatch(Intent::Logout).await.unwrap();

    let view = h.store.view();
    assert_eq!(view, agora_app::ViewState::default());
    assert!(!h.store.is_authenticated().await);

    // Every remote action is unavailable until the next login.
    assert!(h.store.dispatch(Intent::Refresh).await.is_err());
    h.store
        .dispatch(Intent::SetDraft("orphan".to_string()))
        .await
        .unwrap();
    assert!(h.store.dispatch(Intent::CreatePost).await.is_err());

    // Logging back in restores service.
    h.store.dispatch(Intent::Login).await.unwrap();
    assert_eq!(h.store.view().readiness, Readiness::Ready);
}

#[tokio::test]
async fn rejected_login_stays_unauthenticated() {
    let h = harness();
    let handles = handles_for(&h.profile, &h.ledger, &h.staking, &h.nft);
    let store = AppStore::new(
        Arc::new(MockIdentityProvider::rejecting()),
        Arc::new(StaticBindingProvider::new(handles)),
    );

    assert!(store.dispatch(Intent::Login).await.is_err());
    assert!(!store.is_authenticated().await);
    assert_eq!(store.view().readiness, Readiness::Uninitialized);
}

#[tokio::test]
async fn missing_binding_skips_only_its_reads() {
    let h = harness();
    let mut handles = handles_for(&h.profile, &h.ledger, &h.staking, &h.nft);
    handles.nft = Binding::Unavailable {
        reason: "no service address configured".to_string(),
    };
    let store = AppStore::new(
        Arc::new(MockIdentityProvider::new(principal())),
        Arc::new(StaticBindingProvider::new(handles)),
    );

    store.dispatch(Intent::Login).await.unwrap();

    let view = store.view();
    assert_eq!(view.readiness, Readiness::Unavailable);
    // Profile and balance still loaded; only the badge read was skipped.
    assert_eq!(view.profile.principal, Some(principal()));
    assert_eq!(view.profile.balance, "10.00");
    assert!(view.badges.badges.is_empty());
}

#[tokio::test]
async fn rejected_logout_keeps_the_session() {
    let principal = principal();
    let provider = MockIdentityProvider::new(principal.clone());
    let h = harness();
    let handles = handles_for(&h.profile, &h.ledger, &h.staking, &h.nft);
    let store = AppStore::new(
        Arc::new(provider.clone()),
        Arc::new(StaticBindingProvider::new(handles)),
    );
    store.dispatch(Intent::Login).await.unwrap();

    provider.set_fail_logout(true);
    assert!(store.dispatch(Intent::Logout).await.is_err());

    // Prior authenticated state is kept, views untouched.
    assert!(store.is_authenticated().await);
    assert_eq!(store.view().profile.balance, "10.00");
}
