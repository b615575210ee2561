use std::f64::consts::TAU;

use rand::{Rng, rngs::StdRng};

use crate::layout::{GOLDEN_RATIO, PlacedItem, Position, Surface};

/// How angles advance around the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialDistribution {
    /// Evenly spaced spokes: `angle = i/N * 2π`, radius fixed.
    UniformRing,
    /// Golden-angle advance: `angle = i * φ * 2π`, radius growing with
    /// `sqrt(i/N)`. Successive points never align radially, which is what
    /// keeps organic scatters free of visible spokes.
    GoldenSpiral,
}

/// Radial scattering parameters for flow-gallery-style arrangements.
///
/// `radius_fraction` scales against the smaller surface dimension.
/// `radial_jitter` blends between the exact radius (0) and a fully random
/// one (1), matching the source material's loose ring. Degenerate footprint
/// and opacity ranges draw nothing from the generator, so a jitter-free
/// spiral is bit-for-bit reproducible.
#[derive(Debug, Clone)]
pub struct RadialConfig {
    pub distribution: RadialDistribution,
    pub radius_fraction: f64,
    pub radial_jitter: f64,
    pub footprint_range: (f64, f64),
    pub opacity_range: (f64, f64),
    pub spin: bool,
    pub styles: usize,
}

impl Default for RadialConfig {
    fn default() -> Self {
        RadialConfig {
            distribution: RadialDistribution::UniformRing,
            radius_fraction: 0.35,
            radial_jitter: 0.0,
            footprint_range: (48.0, 48.0),
            opacity_range: (1.0, 1.0),
            spin: false,
            styles: 1,
        }
    }
}

pub(super) fn scatter(
    n: usize,
    surface: Surface,
    cfg: &RadialConfig,
    rng: &mut StdRng,
) -> Vec<PlacedItem> {
    let center_x = surface.width() / 2.0;
    let center_y = surface.height() / 2.0;
    let base_radius = cfg.radius_fraction * surface.min_dim();
    let styles = cfg.styles.max(1);

    let mut items = Vec::with_capacity(n);
    for i in 0..n {
        let (angle, mut radius) = match cfg.distribution {
            RadialDistribution::UniformRing => ((i as f64 / n as f64) * TAU, base_radius),
            RadialDistribution::GoldenSpiral => (
                i as f64 * GOLDEN_RATIO * TAU,
                base_radius * (i as f64 / n as f64).sqrt(),
            ),
        };

        if cfg.radial_jitter > 0.0 {
            let factor = 1.0 - cfg.radial_jitter + cfg.radial_jitter * rng.random::<f64>();
            radius *= factor;
        }

        let x = center_x + angle.cos() * radius;
        let y = center_y + angle.sin() * radius;

        let (fp_min, fp_max) = cfg.footprint_range;
        let footprint = if fp_max > fp_min {
            rng.random_range(fp_min..fp_max)
        } else {
            fp_min
        };

        let (op_min, op_max) = cfg.opacity_range;
        let opacity = if op_max > op_min {
            rng.random_range(op_min..op_max)
        } else {
            op_min
        };

        let rotation = if cfg.spin { rng.random::<f64>() * TAU } else { 0.0 };

        items.push(PlacedItem {
            datum: i,
            position: Position::Plane { x, y },
            footprint,
            rotation,
            opacity,
            style: i % styles,
            depth: y,
        });
    }
    items
}
