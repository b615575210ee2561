use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    layout::{Position, Surface},
    render::{Canvas, CoverSet},
    scene::{FeatureKind, PlanetModel, Scene2D},
};

/// Placeholder tile colors per decorative style index, gilt frame first.
const STYLE_COLORS: [[u8; 3]; 4] = [
    [0xd4, 0xaf, 0x37],
    [0x8b, 0x45, 0x13],
    [0x46, 0x82, 0xb4],
    [0x5f, 0x9e, 0xa0],
];

const SPACE_BACKGROUND: [u8; 3] = [0x0a, 0x0a, 0x14];
const PLANET_BASE_COLOR: [u8; 3] = [0x1a, 0x1a, 0x2e];
const ATMOSPHERE_COLOR: [u8; 3] = [0x87, 0xce, 0xeb];
const CITY_GLOW_COLOR: [u8; 3] = [0xff, 0xff, 0x00];
const STAR_COUNT: usize = 200;

/// Rasterizes a 2D scene: background, then every item back-to-front by
/// stacking key so nearer items occlude farther ones.
pub fn render_scene(scene: &Scene2D, covers: &CoverSet) -> Canvas {
    let mut canvas = Canvas::new(scene.surface);
    canvas.fill(scene.background);

    let mut order: Vec<_> = scene.items.iter().collect();
    order.sort_by(|a, b| a.depth.total_cmp(&b.depth));

    for item in order {
        let Position::Plane { x, y } = item.position else {
            continue;
        };
        let datum = &scene.data[item.datum];

        match datum.cover_url().and_then(|url| covers.get(url)) {
            Some(cover) => {
                canvas.blit_cover(cover, x, y, item.footprint, item.rotation, item.opacity)
            }
            None => {
                let color = STYLE_COLORS[item.style % STYLE_COLORS.len()];
                canvas.fill_tile(x, y, item.footprint, item.rotation, color, item.opacity)
            }
        }
    }

    canvas
}

/// Rasterizes the planet with a fixed orthographic view: starfield,
/// atmosphere shell, base sphere, then front-hemisphere features sorted far
/// to near.
pub fn render_planet(model: &PlanetModel, surface: Surface, seed: u64) -> Canvas {
    let mut canvas = Canvas::new(surface);
    canvas.fill(SPACE_BACKGROUND);

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..STAR_COUNT {
        let x = rng.random::<f64>() * surface.width();
        let y = rng.random::<f64>() * surface.height();
        let radius = 0.5 + rng.random::<f64>() * 1.0;
        let opacity = 0.2 + rng.random::<f64>() * 0.8;
        canvas.fill_circle(x, y, radius, [0xff, 0xff, 0xff], opacity);
    }

    let cx = surface.width() / 2.0;
    let cy = surface.height() / 2.0;
    let scale = surface.min_dim() * 0.45 / model.atmosphere_radius;

    canvas.fill_circle(cx, cy, model.atmosphere_radius * scale, ATMOSPHERE_COLOR, 0.1);
    canvas.fill_circle(cx, cy, model.base_radius * scale, PLANET_BASE_COLOR, 1.0);

    let mut order: Vec<_> = model.features.iter().collect();
    order.sort_by(|a, b| a.depth.total_cmp(&b.depth));

    for feature in order {
        match &feature.kind {
            FeatureKind::Ocean { ring_rotation } => {
                // A tilted ring projects to an ellipse; the decorative
                // rendition squashes it into a rotated stroked circle.
                let squash = 0.5 + 0.5 * ring_rotation.cos().abs();
                canvas.stroke_circle(
                    cx,
                    cy,
                    feature.size * scale * squash,
                    0.05 * scale,
                    feature.color,
                    0.7,
                );
            }
            kind => {
                // Back-hemisphere features stay hidden in this fixed view.
                if feature.position[2] < 0.0 {
                    continue;
                }
                let px = cx + feature.position[0] * scale;
                let py = cy - feature.position[1] * scale;

                match kind {
                    FeatureKind::Continent => {
                        canvas.fill_circle(px, py, feature.size * scale * 0.4, feature.color, 1.0);
                    }
                    FeatureKind::Mountain => {
                        canvas.fill_tile(
                            px,
                            py,
                            feature.size * scale * 0.35,
                            std::f64::consts::FRAC_PI_4,
                            feature.color,
                            1.0,
                        );
                    }
                    FeatureKind::City => {
                        let radius = (feature.size * scale).max(1.5);
                        canvas.fill_circle(px, py, radius * 3.0, CITY_GLOW_COLOR, feature.glow * 0.3);
                        canvas.fill_circle(px, py, radius, feature.color, 1.0);
                    }
                    FeatureKind::Ocean { .. } => {}
                }
            }
        }
    }

    canvas
}
