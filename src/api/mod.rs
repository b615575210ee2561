//! HTTP endpoints for the local callback relay server.
//!
//! The relay exists only for the login handshake. Spotify's implicit grant
//! hands the access token back in the redirect's URL *fragment*, which the
//! browser never transmits to a server. [`callback`] therefore serves a tiny
//! page whose script reads `location.hash` and forwards it to [`capture`],
//! which parks the raw fragment in shared state for the waiting login flow.
//! The fragment is validated (state nonce, expiry) by the session manager,
//! never here. [`health`] reports status and version for diagnostics.

mod callback;
mod health;

pub use callback::callback;
pub use callback::capture;
pub use health::health;
