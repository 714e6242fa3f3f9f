//! Software raster surface for headless frame capture

use crate::surface::DrawingSurface;
use folio_core::{Dimensions, FolioError, Rect, Result, Rgba, Vec2};
use image::{Rgba as Pixel, RgbaImage};
use std::path::Path;

/// RGBA8 framebuffer that implements [`DrawingSurface`] with source-over blending
pub struct RasterSurface {
    image: RgbaImage,
    background: Rgba,
}

impl RasterSurface {
    /// A transparent surface, like a fresh canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Rgba::TRANSPARENT)
    }

    /// `clear` paints `background` instead of transparency
    pub fn with_background(width: u32, height: u32, background: Rgba) -> Self {
        let mut surface = Self {
            image: RgbaImage::new(width, height),
            background,
        };
        surface.clear(Rect::new(0.0, 0.0, width as f64, height as f64));
        surface
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.image.width() && y < self.image.height() {
            Some(self.image.get_pixel(x, y).0)
        } else {
            None
        }
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| FolioError::Render(format!("Failed to write {}: {}", path.display(), e)))
    }

    /// Pixel index range covering `[min, max]` on an axis of `len` pixels
    fn span(min: f64, max: f64, len: u32) -> std::ops::Range<u32> {
        let start = min.floor().max(0.0) as u32;
        let end = (max.ceil().max(0.0) as u32).min(len);
        start.min(end)..end
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgba, coverage: f64) {
        let alpha = (color.a * coverage).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let dst = self.image.get_pixel(x, y).0;
        let dst_a = dst[3] as f64 / 255.0;
        let out_a = alpha + dst_a * (1.0 - alpha);
        let mix = |src: u8, dst: u8| -> u8 {
            let c = (src as f64 * alpha + dst as f64 * dst_a * (1.0 - alpha)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };
        let out = [
            mix(color.r, dst[0]),
            mix(color.g, dst[1]),
            mix(color.b, dst[2]),
            (out_a * 255.0).round() as u8,
        ];
        self.image.put_pixel(x, y, Pixel(out));
    }
}

impl DrawingSurface for RasterSurface {
    fn width(&self) -> f64 {
        self.image.width() as f64
    }

    fn height(&self) -> f64 {
        self.image.height() as f64
    }

    fn resize(&mut self, dimensions: Dimensions) {
        let width = dimensions.width.max(0.0) as u32;
        let height = dimensions.height.max(0.0) as u32;
        self.image = RgbaImage::new(width, height);
        self.clear(dimensions.bounds());
    }

    fn clear(&mut self, region: Rect) {
        let fill = Pixel([
            self.background.r,
            self.background.g,
            self.background.b,
            (self.background.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]);
        let xs = Self::span(region.x, region.x + region.width, self.image.width());
        let ys = Self::span(region.y, region.y + region.height, self.image.height());
        for y in ys {
            for x in xs.clone() {
                self.image.put_pixel(x, y, fill);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        let xs = Self::span(center.x - radius, center.x + radius, self.image.width());
        let ys = Self::span(center.y - radius, center.y + radius, self.image.height());
        for y in ys {
            for x in xs.clone() {
                let sample = Vec2::new(x as f64 + 0.5, y as f64 + 0.5);
                if sample.distance(&center) <= radius {
                    self.blend(x, y, color, 1.0);
                }
            }
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f64) {
        // Hairlines keep a one-pixel footprint and fade with their width
        let (half, coverage) = if width < 1.0 {
            (0.5, width.max(0.0))
        } else {
            (width / 2.0, 1.0)
        };
        let xs = Self::span(from.x.min(to.x) - half, from.x.max(to.x) + half, self.image.width());
        let ys = Self::span(from.y.min(to.y) - half, from.y.max(to.y) + half, self.image.height());
        for y in ys {
            for x in xs.clone() {
                let sample = Vec2::new(x as f64 + 0.5, y as f64 + 0.5);
                if distance_to_segment(sample, from, to) <= half {
                    self.blend(x, y, color, coverage);
                }
            }
        }
    }
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq == 0.0 {
        return p.distance(&a);
    }
    let t = (((p.x - a.x) * ab.x + (p.y - a.y) * ab.y) / len_sq).clamp(0.0, 1.0);
    p.distance(&(a + ab * t))
}
