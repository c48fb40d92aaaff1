//! Token lifecycle: password grant, scheduled refresh grant, revoke on shutdown.
//!
//! One `TokenManager` owns the only `TokenState` of the process. The state is
//! replaced as a whole after a successful exchange and never touched on failure.
//! Exchanges are serialized; a refresh tick that finds one in flight is skipped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use http::header::AUTHORIZATION;
use reqwest::Client;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::auth::credentials::Credentials;
use crate::auth::lifecycle::Lifecycle;
use crate::auth::request::{basic_auth_value, AuthRequest, RevokeRequest};
use crate::auth::token::TokenState;
use crate::config::endpoints::EndpointsConfig;
use crate::error::{AuthError, ClientError, Result, RevokeError};
use crate::helpers::time::{at_after, refresh_delay};
use crate::utils::constants::DEFAULT_REFRESH_RATIO_PERCENT;

#[derive(Debug, Default)]
struct RefreshTimer {
    handle: Option<JoinHandle<()>>,
    delay: Option<Duration>,
}

#[derive(Debug)]
struct Inner {
    client: Client,
    auth_url: String,
    revoke_url: String,
    credentials: Credentials,
    refresh_ratio_percent: AtomicU64,
    state: RwLock<TokenState>,
    lifecycle: Mutex<Lifecycle>,
    exchange: tokio::sync::Mutex<()>,
    refresh: Mutex<RefreshTimer>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(handle) = lock(&self.refresh).handle.take() {
            handle.abort();
        }
    }
}

/// Cheap to clone; all clones share one token state and one refresh timer.
#[derive(Debug, Clone)]
pub struct TokenManager {
    inner: Arc<Inner>,
}

impl TokenManager {
    pub fn new(client: Client, endpoints: &EndpointsConfig, credentials: Credentials) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                auth_url: endpoints.auth_url(),
                revoke_url: endpoints.revoke_url(),
                credentials,
                refresh_ratio_percent: AtomicU64::new(DEFAULT_REFRESH_RATIO_PERCENT),
                state: RwLock::new(TokenState::default()),
                lifecycle: Mutex::new(Lifecycle::Init),
                exchange: tokio::sync::Mutex::new(()),
                refresh: Mutex::new(RefreshTimer::default()),
            }),
        }
    }

    /// Share of `expires_in` (1..=100) after which the refresh grant fires.
    /// Shared by all clones, applies from the next armed timer.
    pub fn with_refresh_ratio(self, ratio_percent: u64) -> Self {
        self.inner
            .refresh_ratio_percent
            .store(ratio_percent.clamp(1, 100), Ordering::Relaxed);
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Current access token, empty before the first successful exchange.
    pub async fn access_token(&self) -> String {
        self.inner.state.read().await.access_token.to_owned()
    }

    pub async fn token_state(&self) -> TokenState {
        self.inner.state.read().await.clone()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        *lock(&self.inner.lifecycle)
    }

    /// Interval of the armed refresh timer, `None` when no timer runs.
    pub fn scheduled_refresh_delay(&self) -> Option<Duration> {
        let timer = lock(&self.inner.refresh);
        timer.handle.as_ref().and(timer.delay)
    }

    /// Password grant when `previous_refresh_token` is absent or empty, refresh
    /// grant otherwise. Re-arms the refresh timer on success.
    ///
    /// Fails with `ClientError::Closed` once the manager is `Failed`,
    /// `Revoking` or `Terminated`.
    pub async fn authenticate(&self, previous_refresh_token: Option<&str>) -> Result<TokenState> {
        // the old timer is replaced under the exchange lock, so it cannot
        // fire a second refresh in between
        let _exchange = self.inner.exchange.lock().await;

        match self.exchange(previous_refresh_token).await {
            Ok(state) => {
                self.schedule_refresh(state.expires_in);
                Ok(state)
            }
            Err(err) => {
                let mut lifecycle = lock(&self.inner.lifecycle);
                if *lifecycle == Lifecycle::Init {
                    *lifecycle = Lifecycle::Failed;
                }
                Err(err)
            }
        }
    }

    /// Cancels the running refresh timer and arms a new one.
    pub fn schedule_refresh(&self, expires_in_seconds: u64) -> Duration {
        let delay = refresh_delay(expires_in_seconds, self.refresh_ratio_percent());
        let weak = Arc::downgrade(&self.inner);

        let mut timer = lock(&self.inner.refresh);
        if let Some(previous) = timer.handle.take() {
            previous.abort();
        }
        timer.delay = Some(delay);
        timer.handle = Some(tokio::spawn(refresh_loop(weak, delay)));

        info!(
            "token refresh scheduled every {} ms, next at {}",
            delay.as_millis(),
            at_after(delay).to_rfc3339()
        );
        delay
    }

    pub fn cancel_refresh(&self) {
        let mut timer = lock(&self.inner.refresh);
        if let Some(handle) = timer.handle.take() {
            handle.abort();
            debug!("token refresh timer cancelled");
        }
        timer.delay = None;
    }

    /// Invalidate `access_token` at the authorization server.
    pub async fn revoke(&self, access_token: &str, client_id: &str) -> Result<()> {
        if access_token.is_empty() {
            return Err(ClientError::MissingAccessToken);
        }
        let request = RevokeRequest::new(access_token);

        let response = self
            .inner
            .client
            .post(&self.inner.revoke_url)
            .header(AUTHORIZATION, basic_auth_value(client_id))
            .form(&request.form())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(RevokeError { status: status.as_u16(), body }.into());
        }

        info!("Authentication Revoked");
        Ok(())
    }

    /// Stop refreshing, revoke the current token within `revoke_timeout`.
    /// Ends in `Terminated` whatever the revoke outcome.
    ///
    /// Waits for an exchange already in flight, so the token it stores is the
    /// one revoked. No exchange is accepted afterwards.
    pub async fn shutdown(&self, revoke_timeout: Duration) -> Result<()> {
        self.cancel_refresh();
        let _exchange = self.inner.exchange.lock().await;

        let access_token = self.access_token().await;
        if access_token.is_empty() {
            warn!("no access token to revoke");
            self.set_lifecycle(Lifecycle::Terminated);
            return Ok(());
        }

        self.set_lifecycle(Lifecycle::Revoking);
        let client_id = self.inner.credentials.client_id.to_owned();
        let outcome = match tokio::time::timeout(revoke_timeout, self.revoke(&access_token, &client_id)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ClientError::Timeout(revoke_timeout)),
        };
        self.set_lifecycle(Lifecycle::Terminated);

        if let Err(err) = &outcome {
            warn!("revoke failed: {}", err);
        }
        outcome
    }

    /// One request/response against the authorization endpoint. Caller holds
    /// the exchange lock.
    async fn exchange(&self, previous_refresh_token: Option<&str>) -> Result<TokenState> {
        let lifecycle = self.lifecycle();
        if !lifecycle.accepts_exchange() {
            return Err(ClientError::Closed(lifecycle));
        }
        let request = AuthRequest::build(&self.inner.credentials, previous_refresh_token);
        debug!("sending {} grant to {}", request.grant_type(), self.inner.auth_url);

        let response = self
            .inner
            .client
            .post(&self.inner.auth_url)
            .form(&request.form())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!("Authentication Failed: {} grant answered {}", request.grant_type(), status);
            return Err(AuthError { status: status.as_u16(), body }.into());
        }

        let token_state: TokenState = serde_json::from_str(&body)?;
        if !token_state.is_authenticated() {
            return Err(ClientError::Malformed(
                "token response without access_token or refresh_token".to_string(),
            ));
        }

        *self.inner.state.write().await = token_state.clone();
        self.set_lifecycle(Lifecycle::Authenticated);
        info!("Authentication Granted ({} grant), expires in {}s", request.grant_type(), token_state.expires_in);
        Ok(token_state)
    }

    /// Refresh grant with the current refresh token, skipped when another
    /// exchange is in flight.
    async fn refresh_once(&self) -> Result<Option<TokenState>> {
        let Ok(_exchange) = self.inner.exchange.try_lock() else {
            debug!("token exchange already in flight, skipping scheduled refresh");
            return Ok(None);
        };
        let refresh_token = self.inner.state.read().await.refresh_token.to_owned();
        self.exchange(Some(&refresh_token)).await.map(Some)
    }

    fn set_lifecycle(&self, lifecycle: Lifecycle) {
        debug!("token lifecycle: {}", lifecycle);
        *lock(&self.inner.lifecycle) = lifecycle;
    }

    fn refresh_ratio_percent(&self) -> u64 {
        self.inner.refresh_ratio_percent.load(Ordering::Relaxed)
    }

    fn record_delay(&self, delay: Duration) {
        lock(&self.inner.refresh).delay = Some(delay);
    }
}

/// Body of the refresh timer task. Holds only a weak handle, so dropping the
/// last `TokenManager` ends it.
async fn refresh_loop(inner: Weak<Inner>, mut delay: Duration) {
    loop {
        tokio::time::sleep(delay).await;

        let Some(strong) = inner.upgrade() else {
            return;
        };
        let manager = TokenManager { inner: strong };

        match manager.refresh_once().await {
            Ok(Some(state)) => {
                delay = refresh_delay(state.expires_in, manager.refresh_ratio_percent());
                manager.record_delay(delay);
                info!("token refreshed, next refresh at {}", at_after(delay).to_rfc3339());
            }
            Ok(None) => {}
            Err(err) => {
                error!("scheduled token refresh failed, keeping current token: {}", err);
            }
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
