use image::{Rgba, RgbaImage};

use crate::layout::Surface;

/// An RGBA software draw surface.
///
/// Draw calls blend source-over and are counted, so an exporter can tell a
/// painted canvas from one that only ever received its background fill.
pub struct Canvas {
    img: RgbaImage,
    ops: usize,
}

impl Canvas {
    pub fn new(surface: Surface) -> Self {
        let width = surface.width().round().max(1.0) as u32;
        let height = surface.height().round().max(1.0) as u32;
        Canvas {
            img: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255])),
            ops: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// True until the first draw call lands; a background fill alone does
    /// not count as content.
    pub fn is_blank(&self) -> bool {
        self.ops == 0
    }

    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    /// Paints the whole surface one opaque color.
    pub fn fill(&mut self, color: [u8; 3]) {
        for pixel in self.img.pixels_mut() {
            *pixel = Rgba([color[0], color[1], color[2], 255]);
        }
    }

    fn blend(&mut self, x: i64, y: i64, color: [u8; 3], alpha: f64) {
        if x < 0 || y < 0 || x >= self.img.width() as i64 || y >= self.img.height() as i64 {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }

        let pixel = self.img.get_pixel_mut(x as u32, y as u32);
        for c in 0..3 {
            let src = color[c] as f64;
            let dst = pixel.0[c] as f64;
            pixel.0[c] = (src * alpha + dst * (1.0 - alpha)).round() as u8;
        }
        pixel.0[3] = 255;
    }

    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: [u8; 3], opacity: f64) {
        if radius <= 0.0 {
            return;
        }
        self.ops += 1;

        let r2 = radius * radius;
        for py in (cy - radius).floor() as i64..=(cy + radius).ceil() as i64 {
            for px in (cx - radius).floor() as i64..=(cx + radius).ceil() as i64 {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.blend(px, py, color, opacity);
                }
            }
        }
    }

    pub fn stroke_circle(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        thickness: f64,
        color: [u8; 3],
        opacity: f64,
    ) {
        if radius <= 0.0 || thickness <= 0.0 {
            return;
        }
        self.ops += 1;

        let outer = radius + thickness / 2.0;
        let inner = (radius - thickness / 2.0).max(0.0);
        let outer2 = outer * outer;
        let inner2 = inner * inner;
        for py in (cy - outer).floor() as i64..=(cy + outer).ceil() as i64 {
            for px in (cx - outer).floor() as i64..=(cx + outer).ceil() as i64 {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                let d2 = dx * dx + dy * dy;
                if d2 <= outer2 && d2 >= inner2 {
                    self.blend(px, py, color, opacity);
                }
            }
        }
    }

    /// Draws a square cover image of side `size` centered at (cx, cy),
    /// rotated by `rotation` radians. Sampling is nearest-neighbor over the
    /// inverse mapping, so any source resolution blits without a separate
    /// resize pass.
    pub fn blit_cover(
        &mut self,
        cover: &RgbaImage,
        cx: f64,
        cy: f64,
        size: f64,
        rotation: f64,
        opacity: f64,
    ) {
        if size <= 0.0 || cover.width() == 0 || cover.height() == 0 {
            return;
        }
        self.ops += 1;

        let half = size / 2.0;
        let (sin_r, cos_r) = rotation.sin_cos();
        let reach = half * (sin_r.abs() + cos_r.abs());

        for py in (cy - reach).floor() as i64..=(cy + reach).ceil() as i64 {
            for px in (cx - reach).floor() as i64..=(cx + reach).ceil() as i64 {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                let u = dx * cos_r + dy * sin_r;
                let v = -dx * sin_r + dy * cos_r;
                if u.abs() > half || v.abs() > half {
                    continue;
                }

                let sx = ((u + half) / size * cover.width() as f64) as u32;
                let sy = ((v + half) / size * cover.height() as f64) as u32;
                let sx = sx.min(cover.width() - 1);
                let sy = sy.min(cover.height() - 1);
                let src = cover.get_pixel(sx, sy);
                let alpha = opacity * (src.0[3] as f64 / 255.0);
                self.blend(px, py, [src.0[0], src.0[1], src.0[2]], alpha);
            }
        }
    }

    /// Draws a placeholder tile where cover art is missing: a solid rotated
    /// square with a lighter border.
    pub fn fill_tile(
        &mut self,
        cx: f64,
        cy: f64,
        size: f64,
        rotation: f64,
        color: [u8; 3],
        opacity: f64,
    ) {
        if size <= 0.0 {
            return;
        }
        self.ops += 1;

        let half = size / 2.0;
        let border = (size * 0.06).max(1.5);
        let border_color = [
            color[0].saturating_add(60),
            color[1].saturating_add(60),
            color[2].saturating_add(60),
        ];
        let (sin_r, cos_r) = rotation.sin_cos();
        let reach = half * (sin_r.abs() + cos_r.abs());

        for py in (cy - reach).floor() as i64..=(cy + reach).ceil() as i64 {
            for px in (cx - reach).floor() as i64..=(cx + reach).ceil() as i64 {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                let u = dx * cos_r + dy * sin_r;
                let v = -dx * sin_r + dy * cos_r;
                if u.abs() > half || v.abs() > half {
                    continue;
                }

                let edge = half - u.abs().max(v.abs());
                let fill = if edge < border { border_color } else { color };
                self.blend(px, py, fill, opacity);
            }
        }
    }
}
