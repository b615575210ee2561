use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    error,
    server::start_relay_server,
    session::{AuthEndpoint, SessionManager, SessionStore},
    success,
    types::CallbackRelay,
    warning,
};

/// Runs the complete implicit-grant login flow.
///
/// 1. Issues a fresh anti-forgery nonce and persists it
/// 2. Starts the local callback relay server
/// 3. Opens the authorization URL in the user's browser
/// 4. Waits for the redirect fragment to arrive at the relay
/// 5. Validates state and expiry, persists the credential
///
/// The grant returns the token directly in the redirect fragment; there is
/// no client secret and no refresh token. A state mismatch is rejected as an
/// authentication failure and never retried silently.
pub async fn auth() {
    let mut session = match SessionManager::load(SessionStore::new()).await {
        Ok(session) => session,
        Err(e) => error!("Failed to load session storage: {}", e),
    };

    let shared_state: Arc<Mutex<Option<CallbackRelay>>> =
        Arc::new(Mutex::new(Some(CallbackRelay::default())));
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_relay_server(server_state).await;
    });

    let endpoint = AuthEndpoint::from_config();
    let auth_url = match session.begin_login(&endpoint).await {
        Ok(url) => url,
        Err(e) => error!("Failed to start login: {}", e),
    };

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for the redirect to land on the relay
    match wait_for_fragment(shared_state).await {
        Some(fragment) => match session.complete_login(&fragment).await {
            Ok(()) => success!("Authentication successful!"),
            Err(e) => error!("Authentication failed: {}", e),
        },
        None => error!("Authentication failed or timed out."),
    }
}

/// Polls the relay state for the callback fragment with a 60-second timeout.
async fn wait_for_fragment(shared_state: Arc<Mutex<Option<CallbackRelay>>>) -> Option<String> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(relay) = lock.as_ref() {
            if let Some(fragment) = &relay.fragment {
                return Some(fragment.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
