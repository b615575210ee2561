use crate::{
    error,
    session::{SessionManager, SessionStore},
    success,
};

/// Clears token, expiry, and any lingering login nonce. A no-op session is
/// still cleared, so running this twice is fine.
pub async fn logout() {
    let mut session = match SessionManager::load(SessionStore::new()).await {
        Ok(session) => session,
        Err(e) => error!("Failed to load session storage: {}", e),
    };

    match session.logout().await {
        Ok(()) => success!("Logged out."),
        Err(e) => error!("Failed to clear session: {}", e),
    }
}
