//! Credential lifecycle management.
//!
//! The session manager owns the implicit-grant handshake and the bearer
//! token's lifecycle: nonce issue, redirect-fragment validation, validity by
//! expiry, and invalidation. Everything else in the crate depends on it for
//! an authorization credential; nothing else mutates session state.
//!
//! State machine: Unauthenticated → PendingLogin (nonce stored, awaiting
//! redirect) → Authenticated(expiry) → Unauthenticated, on expiry, logout, or
//! an authenticated request rejected by the API. The implicit grant issues no
//! refresh token, so there is no refresh transition.

mod manager;
mod store;

pub use manager::AuthEndpoint;
pub use manager::AuthError;
pub use manager::FetchTicket;
pub use manager::SessionManager;
pub use manager::SessionState;
pub use store::SessionRecord;
pub use store::SessionStore;
pub use store::StoreError;
