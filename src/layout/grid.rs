use rand::{Rng, rngs::StdRng};

use crate::layout::{PlacedItem, Position, Surface};

/// Grid packing parameters for museum-wall-style arrangements.
///
/// `footprint_fraction` spans the whole supported range, from small tiles
/// with padding up to 1.0 for edge-to-edge packing. `jitter` offsets each
/// item within its cell by at most `jitter * cell / 2`; at 0 the packing is
/// fully deterministic and rotation stays 0 regardless of `max_tilt`.
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub footprint_fraction: f64,
    pub jitter: f64,
    pub max_tilt: f64,
    pub styles: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            footprint_fraction: 0.8,
            jitter: 0.0,
            max_tilt: 0.1,
            styles: 1,
        }
    }
}

/// Chooses a column/row count whose capacity covers `n` at roughly the given
/// aspect ratio. Guarantees `rows * cols >= n` for any `n >= 1`.
pub fn grid_dimensions(n: usize, aspect: f64) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }

    let mut cols = ((n as f64 * aspect).sqrt()).round() as usize;
    if cols == 0 {
        cols = 1;
    }
    let mut rows = n.div_ceil(cols);
    while rows * cols < n {
        cols += 1;
        rows = n.div_ceil(cols);
    }
    (cols, rows)
}

pub(super) fn pack(
    n: usize,
    surface: Surface,
    cfg: &GridConfig,
    rng: &mut StdRng,
) -> Vec<PlacedItem> {
    let (cols, rows) = grid_dimensions(n, surface.aspect());
    let cell_width = surface.width() / cols as f64;
    let cell_height = surface.height() / rows as f64;
    let footprint = cfg.footprint_fraction * cell_width.min(cell_height);
    let styles = cfg.styles.max(1);

    let mut items = Vec::with_capacity(n);
    for i in 0..n {
        let col = i % cols;
        let row = i / cols;
        let mut x = (col as f64 + 0.5) * cell_width;
        let mut y = (row as f64 + 0.5) * cell_height;

        let rotation = if cfg.jitter > 0.0 {
            x += (rng.random::<f64>() - 0.5) * cell_width * cfg.jitter;
            y += (rng.random::<f64>() - 0.5) * cell_height * cfg.jitter;
            (rng.random::<f64>() * 2.0 - 1.0) * cfg.max_tilt
        } else {
            0.0
        };

        items.push(PlacedItem {
            datum: i,
            position: Position::Plane { x, y },
            footprint,
            rotation,
            opacity: 1.0,
            style: i % styles,
            depth: y,
        });
    }
    items
}
