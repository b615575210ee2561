//! Music Visualization Studio Library
//!
//! This library authenticates a listener against the Spotify Web API, fetches
//! their personal listening statistics (top artists, top tracks, recently
//! played, playlists), and turns them into decorative raster artwork: a
//! procedurally generated planet, a museum wall of album covers, a particle
//! flow ring, and a photo collage. Scenes are rasterized on a built-in
//! software canvas and exported as PNG.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local callback relay server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `layout` - Deterministic placement algorithms (grid, radial, spherical)
//! - `render` - Software canvas, cover-art loading, and PNG capture
//! - `scene` - Scene composition from listening statistics
//! - `server` - Local HTTP server for OAuth callbacks
//! - `session` - Credential lifecycle and session storage
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use tunesphere::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> tunesphere::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod layout;
pub mod render;
pub mod scene;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Fetching top tracks...");
/// info!("Placed {} covers", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Authentication completed successfully");
/// success!("Saved artwork to {}", path);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// This macro terminates the program with exit code 1 immediately after
/// printing. It should only be used for fatal errors where recovery is not
/// possible.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues or important information that users should
/// notice without terminating the program.
///
/// # Example
///
/// ```
/// warning!("No cover art for {}, using placeholder", name);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
