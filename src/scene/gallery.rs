use std::collections::HashSet;

use crate::{
    layout::{GridConfig, RadialConfig, RadialDistribution, Strategy},
    types::MusicDatum,
};

/// How many covers the museum wall aims to hang.
pub const MUSEUM_TARGET_COVERS: usize = 30;

/// Prepares the museum batch: unique covers first, then repeated cyclically
/// until the wall's target count is reached.
///
/// Play history repeats albums heavily, so uniqueness is keyed on the cover
/// image rather than the track; a listener with fewer distinct covers than
/// the target simply sees some of them twice.
pub fn museum_batch(tracks: &[MusicDatum]) -> Vec<MusicDatum> {
    let mut seen = HashSet::new();
    let unique: Vec<&MusicDatum> = tracks
        .iter()
        .filter(|datum| {
            let key = datum
                .cover_url()
                .map(str::to_string)
                .unwrap_or_else(|| datum.id.clone());
            seen.insert(key)
        })
        .collect();

    if unique.is_empty() {
        return Vec::new();
    }

    unique
        .iter()
        .cycle()
        .take(MUSEUM_TARGET_COVERS)
        .map(|datum| (*datum).clone())
        .collect()
}

/// Jittered gallery packing: covers stray inside their cells and hang at
/// slight angles, like a dense salon wall.
pub fn museum_strategy() -> Strategy {
    Strategy::Grid(GridConfig {
        footprint_fraction: 0.9,
        jitter: 0.8,
        max_tilt: 0.35,
        styles: 4,
    })
}

/// Loose ring of drifting covers around the surface center.
pub fn flow_strategy() -> Strategy {
    Strategy::Radial(RadialConfig {
        distribution: RadialDistribution::UniformRing,
        radius_fraction: 0.35,
        radial_jitter: 1.0,
        footprint_range: (40.0, 70.0),
        opacity_range: (0.7, 1.0),
        spin: true,
        styles: 1,
    })
}

/// Scattered snapshot collage: small covers thrown across the whole surface
/// with pronounced tilt.
pub fn collage_strategy() -> Strategy {
    Strategy::Grid(GridConfig {
        footprint_fraction: 0.5,
        jitter: 1.0,
        max_tilt: 0.35,
        styles: 4,
    })
}
