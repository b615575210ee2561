use chrono::Utc;
use reqwest::Url;

use crate::{
    session::{SessionRecord, SessionStore, StoreError},
    utils,
};

/// The authorization endpoint parameters a login redirect is built from.
///
/// Callers configure the scope list; the grant is always `response_type=token`
/// (implicit grant, public browser-style client, no client secret).
#[derive(Debug, Clone)]
pub struct AuthEndpoint {
    pub authorize_url: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
}

impl AuthEndpoint {
    pub fn from_config() -> Self {
        AuthEndpoint {
            authorize_url: crate::config::auth_url(),
            client_id: crate::config::client_id(),
            redirect_uri: crate::config::redirect_uri(),
            scopes: crate::config::auth_scope()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug)]
pub enum AuthError {
    /// The callback fragment carried no access token.
    MissingToken,
    /// The echoed state did not match the nonce issued by this session.
    /// Security-relevant: rejected without storing any partial credential.
    StateMismatch,
    /// The authorization URL could not be assembled.
    BadEndpoint(String),
    Store(StoreError),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingToken => write!(f, "callback carried no access token"),
            AuthError::StateMismatch => write!(f, "callback state does not match issued nonce"),
            AuthError::BadEndpoint(e) => write!(f, "invalid authorization endpoint: {}", e),
            AuthError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::Store(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    PendingLogin,
    Authenticated,
}

/// Tags a fetch with the session epoch it was issued under, so a continuation
/// that completes after a logout can be recognized as stale and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
}

/// Owns the credential lifecycle. Single mutation owner for session state;
/// everything else reads through it.
pub struct SessionManager {
    store: SessionStore,
    record: SessionRecord,
    epoch: u64,
}

impl SessionManager {
    /// Loads whatever session the store holds; an empty store is an
    /// unauthenticated session, not an error.
    pub async fn load(store: SessionStore) -> Result<Self, StoreError> {
        let record = store.load().await?;
        Ok(SessionManager {
            store,
            record,
            epoch: 0,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state_at(Utc::now().timestamp())
    }

    pub fn state_at(&self, now: i64) -> SessionState {
        match (&self.record.access_token, self.record.expires_at) {
            (Some(_), Some(expiry)) if now < expiry => SessionState::Authenticated,
            _ if self.record.nonce.is_some() => SessionState::PendingLogin,
            _ => SessionState::Unauthenticated,
        }
    }

    /// Starts a login: issues a fresh nonce, persists it, and returns the
    /// authorization URL for the caller to navigate to. Ends the current
    /// credential's relevance only once the redirect completes.
    pub async fn begin_login(&mut self, endpoint: &AuthEndpoint) -> Result<String, AuthError> {
        let nonce = utils::generate_nonce();
        self.record.nonce = Some(nonce.clone());
        self.store.persist(&self.record).await?;

        let scope = endpoint.scopes.join(" ");
        let url = Url::parse_with_params(
            &endpoint.authorize_url,
            &[
                ("client_id", endpoint.client_id.as_str()),
                ("response_type", "token"),
                ("redirect_uri", endpoint.redirect_uri.as_str()),
                ("scope", scope.as_str()),
                ("state", nonce.as_str()),
            ],
        )
        .map_err(|e| AuthError::BadEndpoint(e.to_string()))?;

        Ok(url.to_string())
    }

    /// Validates the redirect's URL fragment and promotes the session to
    /// Authenticated.
    ///
    /// Rejects when the fragment carries no token, or when the echoed state
    /// differs from the most recently issued nonce. A state mismatch returns
    /// the session to Unauthenticated; it is not retried.
    pub async fn complete_login(&mut self, fragment: &str) -> Result<(), AuthError> {
        self.complete_login_at(fragment, Utc::now().timestamp())
            .await
    }

    pub async fn complete_login_at(&mut self, fragment: &str, now: i64) -> Result<(), AuthError> {
        let params = utils::parse_fragment(fragment);

        let Some(token) = params.get("access_token") else {
            return Err(AuthError::MissingToken);
        };

        let issued = self.record.nonce.as_deref();
        let echoed = params.get("state").map(|s| s.as_str());
        let state_ok = matches!((issued, echoed), (Some(a), Some(b)) if a == b);
        if !state_ok {
            self.record = SessionRecord::default();
            self.store.clear().await?;
            return Err(AuthError::StateMismatch);
        }

        // Provider omitting the lifetime falls back to the documented hour.
        let expires_in: i64 = params
            .get("expires_in")
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        self.record = SessionRecord {
            access_token: Some(token.clone()),
            expires_at: Some(now + expires_in),
            nonce: None,
        };
        self.store.persist(&self.record).await?;
        self.epoch += 1;
        Ok(())
    }

    /// Returns the stored token while it is strictly before its expiry.
    ///
    /// An expired or expiry-less token is treated as absent and cleaned from
    /// storage. Never performs network I/O.
    pub async fn current_token(&mut self) -> Option<String> {
        self.current_token_at(Utc::now().timestamp()).await
    }

    pub async fn current_token_at(&mut self, now: i64) -> Option<String> {
        match (&self.record.access_token, self.record.expires_at) {
            (Some(token), Some(expiry)) if now < expiry => Some(token.clone()),
            (None, None) => None,
            _ => {
                // Stale entry: clear token and expiry, keep a pending nonce.
                self.record.access_token = None;
                self.record.expires_at = None;
                let _ = self.store.persist(&self.record).await;
                None
            }
        }
    }

    /// Clears token, expiry, and nonce unconditionally; idempotent. Bumps the
    /// session epoch so in-flight fetch continuations are discarded.
    pub async fn logout(&mut self) -> Result<(), StoreError> {
        self.record = SessionRecord::default();
        self.epoch += 1;
        self.store.clear().await
    }

    /// The recovery action for an authorization failure reported by the API.
    pub async fn force_logout(&mut self) {
        if let Err(e) = self.logout().await {
            crate::warning!("Failed to clear session storage: {}", e);
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn fetch_ticket(&self) -> FetchTicket {
        FetchTicket { epoch: self.epoch }
    }

    /// Whether results fetched under `ticket` may still be applied.
    pub fn ticket_current(&self, ticket: &FetchTicket) -> bool {
        ticket.epoch == self.epoch
    }
}
