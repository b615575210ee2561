use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config, error, types::CallbackRelay};

/// Runs the local callback relay for the duration of a login flow.
///
/// The implicit grant returns the token in the redirect's URL fragment, which
/// never reaches a server; `/callback` therefore serves a page that forwards
/// the fragment to `/capture`, which stores it in the shared relay state.
pub async fn start_relay_server(state: Arc<Mutex<Option<CallbackRelay>>>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .route("/capture", get(api::capture).layer(Extension(state)));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
