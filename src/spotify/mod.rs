//! # Spotify Integration Module
//!
//! The data-fetch layer between the session manager and the scene composers.
//! Every call here is an authenticated GET with a bearer header against the
//! Spotify Web API, gated on a currently-valid credential and normalized into
//! [`crate::types::MusicDatum`] batches before anything downstream sees it.
//!
//! ## Endpoints covered
//!
//! - `GET /me` - the listener's profile
//! - `GET /me/top/artists` - top artists for a time range
//! - `GET /me/top/tracks` - top tracks for a time range
//! - `GET /me/player/recently-played` - recent play history
//! - `GET /me/playlists` - the listener's playlists
//!
//! ## Error handling
//!
//! Authorization failures (401/403) are owned by the session manager: the
//! fetch layer triggers its forced logout and reports
//! [`FetchError::AuthorizationRejected`], after which the caller prompts for
//! re-authentication. Every other network, status, or deserialization
//! failure is surfaced as a recoverable [`FetchError`] and does not by itself
//! invalidate the credential.
//!
//! Requests carry a 15 second timeout so a hung request cannot leave the
//! caller waiting indefinitely.

mod playlists;
mod profile;
mod stats;

pub use playlists::get_playlists;
pub use profile::get_profile;
pub use stats::get_recently_played;
pub use stats::get_top_artists;
pub use stats::get_top_tracks;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::session::SessionManager;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug)]
pub enum FetchError {
    /// No valid local credential; the caller should start a login.
    Unauthenticated,
    /// The API rejected the credential (401/403). The session has already
    /// been logged out by the time this is returned.
    AuthorizationRejected,
    /// Any other non-2xx response.
    Status(StatusCode),
    /// Network or deserialization failure.
    Http(reqwest::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Unauthenticated => write!(f, "not authenticated"),
            FetchError::AuthorizationRejected => {
                write!(f, "authorization rejected by the API; session cleared")
            }
            FetchError::Status(code) => write!(f, "unexpected API response: {}", code),
            FetchError::Http(e) => write!(f, "request failed: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(err)
    }
}

/// Issues one authenticated GET and deserializes the JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    session: &mut SessionManager,
    url: &str,
) -> Result<T, FetchError> {
    let Some(token) = session.current_token().await else {
        return Err(FetchError::Unauthenticated);
    };

    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client.get(url).bearer_auth(token).send().await?;

    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        session.force_logout().await;
        return Err(FetchError::AuthorizationRejected);
    }
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    Ok(response.json::<T>().await?)
}
