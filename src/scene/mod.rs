//! Scene composition from listening statistics.
//!
//! Composers in this module sit between the fetch layer and the renderer:
//! they prepare a batch (dedup, repeat-to-target, weight derivation), pick a
//! layout strategy, and hand both to a [`SceneView`], which owns the placed
//! result and enforces the ordering rules around fetches and resizes.

mod gallery;
mod planet;
mod view;

pub use gallery::MUSEUM_TARGET_COVERS;
pub use gallery::collage_strategy;
pub use gallery::flow_strategy;
pub use gallery::museum_batch;
pub use gallery::museum_strategy;
pub use planet::FeatureKind;
pub use planet::PlanetFeature;
pub use planet::PlanetModel;
pub use planet::build_planet;
pub use view::Scene2D;
pub use view::SceneView;

use std::fmt;

/// Which visualization to compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneMode {
    Planet,
    Museum,
    Flow,
    Collage,
}

impl fmt::Display for SceneMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SceneMode::Planet => "planet",
            SceneMode::Museum => "museum",
            SceneMode::Flow => "flow",
            SceneMode::Collage => "collage",
        };
        write!(f, "{}", s)
    }
}

/// Parses a user-supplied scene mode.
pub fn parse_scene_mode(s: &str) -> Result<SceneMode, String> {
    match s.trim().to_lowercase().as_str() {
        "planet" => Ok(SceneMode::Planet),
        "museum" => Ok(SceneMode::Museum),
        "flow" => Ok(SceneMode::Flow),
        "collage" => Ok(SceneMode::Collage),
        other => Err(format!(
            "invalid value '{}' (expected planet, museum, flow, or collage)",
            other
        )),
    }
}

/// Background shared by the gallery scenes.
pub const DARK_BACKGROUND: [u8; 3] = [0x12, 0x12, 0x12];
