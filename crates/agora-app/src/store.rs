//! The view state store
//!
//! [`AppStore`] is the single composition root: it owns the identity session
//! and the service handles, rebuilds the handles whenever the identity epoch
//! changes, and is the only writer of [`ViewState`]. One async `RwLock`
//! serializes actions, so no two pending intents mutate a view concurrently;
//! suspension happens only at remote call boundaries.
//!
//! Failure policy: every remote failure is caught where the call was issued,
//! logged, and leaves prior view state unchanged. Nothing is retried and
//! nothing escalates.

use crate::handles::{BindingProvider, ServiceHandles};
use crate::intent::Intent;
use crate::views::{Readiness, ViewState};
use agora_client::session::IdentitySession;
use agora_core::amount::TokenAmount;
use agora_core::effects::IdentityProvider;
use agora_core::errors::AgoraError;
use agora_core::identifiers::PostId;
use agora_core::reactive::Dynamic;
use async_lock::RwLock;
use std::sync::Arc;

struct Inner {
    session: IdentitySession,
    handles: ServiceHandles,
}

/// Headless store behind all Agora views
pub struct AppStore {
    bindings: Arc<dyn BindingProvider>,
    inner: RwLock<Inner>,
    state: Dynamic<ViewState>,
}

impl AppStore {
    /// Create an unauthenticated store.
    ///
    /// All handles start unavailable; they are built on the first successful
    /// login and rebuilt on every identity change after that.
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        bindings: Arc<dyn BindingProvider>,
    ) -> Self {
        Self {
            bindings,
            inner: RwLock::new(Inner {
                session: IdentitySession::new(identity),
                handles: ServiceHandles::unavailable("not authenticated"),
            }),
            state: Dynamic::new(ViewState::default()),
        }
    }

    /// Handle to the observable view state.
    pub fn state(&self) -> Dynamic<ViewState> {
        self.state.clone()
    }

    /// Snapshot of the current view state.
    pub fn view(&self) -> ViewState {
        self.state.get()
    }

    /// Whether a session identity is currently held.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.session.is_authenticated()
    }

    /// Apply a user action.
    ///
    /// The error is also logged here, so frontends that render nothing on
    /// failure can drop the result; view state is already consistent either
    /// way.
    pub async fn dispatch(&self, intent: Intent) -> Result<(), AgoraError> {
        let label = intent.label();
        tracing::debug!(intent = label, "dispatching");
        let result = match intent {
            Intent::Login => self.login().await,
            Intent::Logout => self.logout().await,
            Intent::Refresh => self.refresh().await,
            Intent::SetDraft(text) => {
                self.state.update(|s| s.feed.draft = text);
                Ok(())
            }
            Intent::CreatePost => self.create_post().await,
            Intent::LikePost(id) => self.like_post(id).await,
            Intent::SetStakeInput(text) => {
                self.state.update(|s| s.staking.stake_input = text);
                Ok(())
            }
            Intent::Stake => self.stake().await,
            Intent::ClaimRewards => self.claim().await,
        };
        if let Err(error) = &result {
            tracing::warn!(intent = label, %error, "intent failed");
        }
        result
    }

    // ========================================================================
    // Session lifecycle
    // ========================================================================

    async fn login(&self) -> Result<(), AgoraError> {
        let mut inner = self.inner.write().await;
        if inner.session.is_authenticated() {
            return Ok(());
        }
        self.state.update(|s| s.readiness = Readiness::Pending);
        if let Err(error) = inner.session.login().await {
            // Rejected or cancelled: back to the prior unauthenticated state.
            self.state.update(|s| s.readiness = Readiness::Uninitialized);
            return Err(error);
        }

        let epoch = inner.session.epoch();
        if let Some(identity) = inner.session.identity().cloned() {
            inner.handles = self.bindings.build(&identity, epoch);
        }

        self.load_all(&inner.handles).await;
        let readiness = if inner.handles.all_available() {
            Readiness::Ready
        } else {
            Readiness::Unavailable
        };
        self.state.update(|s| s.readiness = readiness);
        Ok(())
    }

    async fn logout(&self) -> Result<(), AgoraError> {
        let mut inner = self.inner.write().await;
        if !inner.session.is_authenticated() {
            return Ok(());
        }
        // A rejected logout keeps the prior authenticated state.
        inner.session.logout().await?;
        inner.handles = ServiceHandles::unavailable("logged out");
        self.state.set(ViewState::default());
        Ok(())
    }

    async fn refresh(&self) -> Result<(), AgoraError> {
        let inner = self.inner.write().await;
        if !inner.session.is_authenticated() {
            return Err(AgoraError::unauthenticated("refresh requires a session"));
        }
        self.load_all(&inner.handles).await;
        Ok(())
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Ordered read sequence: profile → balance → posts → badges.
    ///
    /// Each step is independent: a failed or skipped read logs and moves on,
    /// leaving that view at its last-known value. Steps that need the
    /// principal are skipped until a profile fetch has supplied one.
    async fn load_all(&self, handles: &ServiceHandles) {
        match handles.profile() {
            Ok(profile_svc) => match profile_svc.authenticate().await {
                Ok(profile) => self.state.update(|s| {
                    s.profile.principal = Some(profile.principal);
                    s.profile.display_name = profile.display_name;
                }),
                Err(error) => tracing::warn!(%error, "profile fetch failed"),
            },
            Err(error) => tracing::debug!(%error, "skipping profile fetch"),
        }

        self.refresh_balance(handles).await;
        self.refresh_posts(handles).await;

        let owner = self.state.get().profile.principal;
        if let Some(owner) = owner {
            match handles.nft() {
                Ok(nft) => match nft.nfts_by_owner(&owner).await {
                    Ok(badges) => self.state.update(|s| s.badges.badges = badges),
                    Err(error) => tracing::warn!(%error, "badge fetch failed"),
                },
                Err(error) => tracing::debug!(%error, "skipping badge fetch"),
            }
        }
    }

    async fn refresh_posts(&self, handles: &ServiceHandles) {
        let profile_svc = match handles.profile() {
            Ok(svc) => svc,
            Err(error) => {
                tracing::debug!(%error, "skipping post refresh");
                return;
            }
        };
        match profile_svc.get_all_posts().await {
            Ok(posts) => self.state.update(|s| s.feed.posts = posts),
            Err(error) => tracing::warn!(%error, "post list refresh failed"),
        }
    }

    async fn refresh_balance(&self, handles: &ServiceHandles) {
        let owner = match self.state.get().profile.principal {
            Some(owner) => owner,
            None => {
                tracing::debug!("no principal yet; skipping balance refresh");
                return;
            }
        };
        let ledger = match handles.ledger() {
            Ok(ledger) => ledger,
            Err(error) => {
                tracing::debug!(%error, "skipping balance refresh");
                return;
            }
        };
        match ledger.balance_of(&owner).await {
            Ok(balance) => self
                .state
                .update(|s| s.profile.balance = balance.display_2dp()),
            Err(error) => tracing::warn!(%error, "balance refresh failed"),
        }
    }

    // ========================================================================
    // Writes (remote confirmation, then minimal re-reads)
    // ========================================================================

    async fn create_post(&self) -> Result<(), AgoraError> {
        let inner = self.inner.write().await;
        let profile_svc = inner.handles.profile()?.clone();

        let content = self.state.get().feed.draft.trim().to_string();
        if content.is_empty() {
            return Err(AgoraError::invalid("post content is empty"));
        }

        profile_svc.create_post(&content).await?;
        self.state.update(|s| s.feed.draft.clear());
        self.refresh_posts(&inner.handles).await;
        Ok(())
    }

    async fn like_post(&self, id: PostId) -> Result<(), AgoraError> {
        let inner = self.inner.write().await;
        let profile_svc = inner.handles.profile()?.clone();

        profile_svc.like_post(id).await?;
        self.refresh_posts(&inner.handles).await;
        Ok(())
    }

    async fn stake(&self) -> Result<(), AgoraError> {
        let inner = self.inner.write().await;
        let staking = inner.handles.staking()?.clone();

        let input = self.state.get().staking.stake_input;
        let amount = TokenAmount::from_decimal_str(&input)?;
        if amount.is_zero() {
            return Err(AgoraError::invalid("stake amount must be positive"));
        }

        staking.stake(amount).await?;
        self.state.update(|s| s.staking.stake_input.clear());
        self.refresh_balance(&inner.handles).await;
        Ok(())
    }

    async fn claim(&self) -> Result<(), AgoraError> {
        let inner = self.inner.write().await;
        let staking = inner.handles.staking()?.clone();

        staking.claim().await?;
        self.refresh_balance(&inner.handles).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handles::StaticBindingProvider;
    use agora_core::identifiers::Principal;
    use agora_testkit::MockIdentityProvider;

    fn unauthenticated_store() -> AppStore {
        let principal = Principal::from_text("carol-principal").unwrap();
        AppStore::new(
            Arc::new(MockIdentityProvider::new(principal)),
            Arc::new(StaticBindingProvider::new(ServiceHandles::unavailable(
                "test",
            ))),
        )
    }

    #[tokio::test]
    async fn local_edits_do_not_need_a_session() {
        let store = unauthenticated_store();
        store
            .dispatch(Intent::SetDraft("hello".to_string()))
            .await
            .unwrap();
        store
            .dispatch(Intent::SetStakeInput("1.5".to_string()))
            .await
            .unwrap();

        let view = store.view();
        assert_eq!(view.feed.draft, "hello");
        assert_eq!(view.staking.stake_input, "1.5");
    }

    #[tokio::test]
    async fn refresh_requires_a_session() {
        let store = unauthenticated_store();
        assert!(store.dispatch(Intent::Refresh).await.is_err());
        assert_eq!(store.view().readiness, Readiness::Uninitialized);
    }

    #[tokio::test]
    async fn login_with_unavailable_bindings_reports_unavailable() {
        let store = unauthenticated_store();
        store.dispatch(Intent::Login).await.unwrap();
        assert!(store.is_authenticated().await);
        assert_eq!(store.view().readiness, Readiness::Unavailable);

        // Dependent actions surface the unavailable binding.
        let error = store.dispatch(Intent::CreatePost).await.unwrap_err();
        assert!(matches!(error, AgoraError::Unavailable { .. }));
    }
}
