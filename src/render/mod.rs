//! Software rasterization and image export.
//!
//! The renderer consumes scene descriptions and draws them onto an RGBA
//! [`Canvas`] using the painter's algorithm: items sorted by stacking key,
//! nearer items drawn last. Cover art is fetched up front as a single join
//! with a per-image timeout; anything unresolved by then renders as a
//! placeholder tile instead of blocking the paint.
//!
//! Export runs an ordered chain of capture strategies - direct PNG encoding
//! of the live surface, then a from-scratch re-render with placeholders -
//! each failure carrying a typed reason. Only exhausting the whole chain
//! surfaces as an error.

mod canvas;
mod covers;
mod export;
mod raster;

pub use canvas::Canvas;
pub use covers::CoverSet;
pub use covers::load_covers;
pub use export::CaptureError;
pub use export::CaptureFailure;
pub use export::CaptureStrategy;
pub use export::capture_png;
pub use raster::render_planet;
pub use raster::render_scene;
