//! Configuration management for tunesphere.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials, the
//! callback server address, and endpoint overrides.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Looks for the file under the platform-specific local data directory at
/// `tunesphere/.env`:
/// - Linux: `~/.local/share/tunesphere/.env`
/// - macOS: `~/Library/Application Support/tunesphere/.env`
/// - Windows: `%LOCALAPPDATA%/tunesphere/.env`
///
/// A missing file is not an error: the implicit-grant client only strictly
/// needs `SPOTIFY_CLIENT_ID`, which may just as well come from the process
/// environment.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tunesphere/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the address for the local OAuth callback relay server.
///
/// Read from `SERVER_ADDRESS`; defaults to `127.0.0.1:8888`, which must then
/// match the redirect URI registered with the Spotify application.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8888".to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable which contains the
/// client ID obtained when registering the application with Spotify's
/// developer platform. The implicit grant is a public-client flow, so no
/// client secret exists anywhere in this application.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the OAuth redirect URI.
///
/// Read from `SPOTIFY_REDIRECT_URI`; defaults to the `/callback` route of the
/// local relay server. This must match the redirect URI registered in the
/// Spotify application settings.
pub fn redirect_uri() -> String {
    env::var("SPOTIFY_REDIRECT_URI")
        .unwrap_or_else(|_| format!("http://{}/callback", server_addr()))
}

/// Returns the space-separated OAuth scope list requested during login.
///
/// Read from `SPOTIFY_AUTH_SCOPE`. The default covers everything the bundled
/// scenes consume: profile, top items, recently played, and private
/// playlists.
pub fn auth_scope() -> String {
    env::var("SPOTIFY_AUTH_SCOPE").unwrap_or_else(|_| {
        [
            "user-read-private",
            "user-read-email",
            "user-top-read",
            "user-read-recently-played",
            "playlist-read-private",
        ]
        .join(" ")
    })
}

/// Returns the Spotify OAuth authorization URL.
///
/// Read from `SPOTIFY_AUTH_URL`; defaults to the public accounts endpoint.
pub fn auth_url() -> String {
    env::var("SPOTIFY_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Read from `SPOTIFY_API_URL`; defaults to the public v1 endpoint. This is
/// used for all API operations after authentication.
pub fn api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}
