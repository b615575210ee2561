//! Deterministic placement algorithms.
//!
//! The layout engine maps an ordered batch of data points onto render
//! coordinates, sizes, and decorative attributes. It is pure and stateless:
//! the same inputs and seed always produce the same placements, and a resize
//! recomputes every placement from scratch rather than patching any of them.
//! All randomness flows through a seeded generator injected per call.
//!
//! Two plane strategies (grid packing with jitter, radial scattering) and one
//! spherical strategy are provided. The engine holds no genre, color, or
//! size tables; weight-to-size mappings are supplied by callers.

mod grid;
mod radial;
mod sphere;

pub use grid::GridConfig;
pub use grid::grid_dimensions;
pub use radial::RadialConfig;
pub use radial::RadialDistribution;
pub use sphere::SpherePoint;
pub use sphere::place_on_sphere;
pub use sphere::sphere_surface;

use rand::{SeedableRng, rngs::StdRng};

pub const GOLDEN_RATIO: f64 = 1.618033988749895;

#[derive(Debug)]
pub enum LayoutError {
    /// Zero or negative surface dimensions.
    InvalidSurface { width: f64, height: f64 },
    /// Zero or negative sphere radius.
    InvalidRadius(f64),
    /// A weight slice that does not line up with its data slice.
    WeightMismatch { expected: usize, got: usize },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::InvalidSurface { width, height } => {
                write!(f, "invalid surface dimensions {}x{}", width, height)
            }
            LayoutError::InvalidRadius(r) => write!(f, "invalid sphere radius {}", r),
            LayoutError::WeightMismatch { expected, got } => {
                write!(f, "expected {} weights, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Validated drawing-surface bounds. The only constructor rejects degenerate
/// dimensions, so every `Surface` in circulation divides safely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    width: f64,
    height: f64,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        if !(width > 0.0) || !(height > 0.0) {
            return Err(LayoutError::InvalidSurface { width, height });
        }
        Ok(Surface { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    pub fn min_dim(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// A 2D or 3D placement coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    Plane { x: f64, y: f64 },
    Space { x: f64, y: f64, z: f64 },
}

/// A data point annotated with computed render attributes; the engine's sole
/// output type.
///
/// `datum` is an index into the batch the placement was computed from - a
/// read-only association, the engine never touches the source data. `depth`
/// is the stacking key renderers sort by for painter's-algorithm drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub datum: usize,
    pub position: Position,
    pub footprint: f64,
    pub rotation: f64,
    pub opacity: f64,
    pub style: usize,
    pub depth: f64,
}

/// The configuration-selected plane strategy.
#[derive(Debug, Clone)]
pub enum Strategy {
    Grid(GridConfig),
    Radial(RadialConfig),
}

/// Computes a placement for each of `n` data points on `surface`.
///
/// `n = 0` yields an empty list. The same `n`, surface, strategy, and seed
/// always produce identical output.
pub fn place(
    n: usize,
    surface: Surface,
    strategy: &Strategy,
    seed: u64,
) -> Result<Vec<PlacedItem>, LayoutError> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let items = match strategy {
        Strategy::Grid(cfg) => grid::pack(n, surface, cfg, &mut rng),
        Strategy::Radial(cfg) => radial::scatter(n, surface, cfg, &mut rng),
    };
    Ok(items)
}
