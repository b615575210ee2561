//! # CLI Module
//!
//! User-facing command implementations. Each command coordinates the session
//! manager, the fetch layer, and the scene/render pipeline, and owns the
//! user interaction around them: spinners during network work, tables for
//! listings, and actionable error messages.
//!
//! ## Commands
//!
//! - [`auth`] - implicit-grant login via browser redirect and local relay
//! - [`logout`] - clear the stored session; idempotent
//! - [`top`] - print top artists/tracks as tables
//! - [`render`] - fetch statistics, compose a scene, export a PNG
//!
//! ## Error handling
//!
//! Credential problems carry their recovery action in the message ("run
//! tunesphere auth"); fetch failures are recoverable and reported without
//! touching the stored credential, matching the propagation policy of the
//! session layer.

mod auth;
mod logout;
mod render;
mod top;

pub use auth::auth;
pub use logout::logout;
pub use render::RenderParams;
pub use render::render;
pub use top::top;
