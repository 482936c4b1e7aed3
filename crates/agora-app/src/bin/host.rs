//! Demo composition root
//!
//! Wires the store to in-memory fixtures and walks one session: login, a
//! post, a like, a stake, a claim, then prints the resulting view state.
//! Run with `cargo run -p agora-app --features host --bin agora-host`;
//! `RUST_LOG=debug` shows every dispatched intent and remote call.

use agora_app::{AppStore, Intent, ServiceHandles, StaticBindingProvider};
use agora_client::Binding;
use agora_core::amount::TokenAmount;
use agora_core::domain::{NftBadge, UserProfile};
use agora_core::effects::{NftRegistry, ProfileService, StakingPool, TokenLedger};
use agora_core::identifiers::{BadgeId, Principal};
use agora_testkit::{
    InMemoryLedger, InMemoryNftRegistry, InMemoryProfileService, InMemoryStakingPool,
    MockIdentityProvider,
};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let principal = Principal::from_text("demo-principal")?;
    let profile = InMemoryProfileService::new(UserProfile {
        principal: principal.clone(),
        display_name: "Demo".to_string(),
    });
    let ledger = InMemoryLedger::new();
    ledger.set_balance(
        principal.clone(),
        TokenAmount::from_decimal_str("25")?,
    );
    let staking = InMemoryStakingPool::new(ledger.clone(), principal.clone());
    staking.set_pending_reward(TokenAmount::from_decimal_str("0.5")?);
    let nft = InMemoryNftRegistry::new();
    nft.grant(
        principal.clone(),
        NftBadge {
            id: BadgeId::new("genesis"),
            metadata: "Genesis badge".to_string(),
        },
    );

    let handles = ServiceHandles {
        profile: Binding::Available(Arc::new(profile) as Arc<dyn ProfileService>),
        ledger: Binding::Available(Arc::new(ledger) as Arc<dyn TokenLedger>),
        staking: Binding::Available(Arc::new(staking) as Arc<dyn StakingPool>),
        nft: Binding::Available(Arc::new(nft) as Arc<dyn NftRegistry>),
    };
    let store = AppStore::new(
        Arc::new(MockIdentityProvider::new(principal)),
        Arc::new(StaticBindingProvider::new(handles)),
    );

    store.dispatch(Intent::Login).await?;
    store
        .dispatch(Intent::SetDraft("hello from the host".to_string()))
        .await?;
    store.dispatch(Intent::CreatePost).await?;

    let first_post = store
        .view()
        .feed
        .posts
        .first()
        .map(|post| post.id)
        .context("feed is empty after posting")?;
    store.dispatch(Intent::LikePost(first_post)).await?;

    store
        .dispatch(Intent::SetStakeInput("5".to_string()))
        .await?;
    store.dispatch(Intent::Stake).await?;
    store.dispatch(Intent::ClaimRewards).await?;

    println!("{}", serde_json::to_string_pretty(&store.view())?);
    Ok(())
}
