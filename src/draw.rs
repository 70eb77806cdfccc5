use std::fs;
use std::path::Path;
use ab_glyph::{FontVec, PxScale};
use image::{GrayImage, Luma, Rgb, RgbImage, Rgba};
use imageproc::drawing::{draw_text_mut, text_size, BresenhamLineIter};
use crate::error::{Error, Result};
use crate::geometry::AbsolutePolygon;
use crate::pixel::blend;

/// Light gray used for the logo edges.
pub const OUTLINE_COLOR: Rgba<u8> = Rgba([180, 180, 180, 255]);

pub const WATERMARK_TEXT: &str = "ethwallpaper.co";
pub const WATERMARK_FONT: &str = "Aquabase.ttf";
pub const WATERMARK_OPACITY: f32 = 0.3;
/// Font size is the image width divided by this.
pub const WATERMARK_RATIO: u32 = 40;
/// Distance from the bottom-right corner, in multiples of the text extent.
const WATERMARK_MARGIN: f32 = 1.2;

pub trait DrawOutline {
    fn draw_outline(&self, image: &mut RgbImage, color: Rgba<u8>);
}

const CLIP_LEFT: u8 = 1;
const CLIP_RIGHT: u8 = 2;
const CLIP_BOTTOM: u8 = 4;
const CLIP_TOP: u8 = 8;

fn clipping_flags((x, y): (f64, f64), (x1, y1, x2, y2): (f64, f64, f64, f64)) -> u8 {
    u8::from(x < x1) * CLIP_LEFT
        | u8::from(x > x2) * CLIP_RIGHT
        | u8::from(y < y1) * CLIP_BOTTOM
        | u8::from(y > y2) * CLIP_TOP
}

/// Clip the segment `a`-`b` against `[x1, x2] x [y1, y2]`.
///
/// Endpoints are moved onto the box edges one at a time, so the kept
/// coordinate is always interpolated from a point on the edge.
fn clip_segment(
    mut a: (f64, f64),
    mut b: (f64, f64),
    clip_box: (f64, f64, f64, f64),
) -> Option<((f32, f32), (f32, f32))> {
    let (x1, y1, x2, y2) = clip_box;
    // Each endpoint can be moved at most twice.
    for _ in 0..=4 {
        if ![a.0, a.1, b.0, b.1].iter().all(|v| v.is_finite()) {
            return None;
        }
        let (flags_a, flags_b) = (clipping_flags(a, clip_box), clipping_flags(b, clip_box));
        if flags_a | flags_b == 0 {
            return Some(((a.0 as f32, a.1 as f32), (b.0 as f32, b.1 as f32)));
        }
        if flags_a & flags_b != 0 {
            return None;
        }
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let (point, flags) = if flags_a != 0 { (&mut a, flags_a) } else { (&mut b, flags_b) };
        *point = if flags & CLIP_LEFT != 0 {
            (x1, point.1 + (x1 - point.0) * (dy / dx))
        } else if flags & CLIP_RIGHT != 0 {
            (x2, point.1 + (x2 - point.0) * (dy / dx))
        } else if flags & CLIP_BOTTOM != 0 {
            (point.0 + (y1 - point.1) * (dx / dy), y1)
        } else {
            (point.0 + (y2 - point.1) * (dx / dy), y2)
        };
    }
    None
}

fn blend_rgba(image: &mut RgbImage, x: i32, y: i32, color: Rgba<u8>, alpha: f32) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if x < image.width() && y < image.height() {
        let [r, g, b, a] = color.0;
        blend(image.get_pixel_mut(x, y), Rgb([r, g, b]), alpha * f32::from(a) / 255.0);
    }
}

impl DrawOutline for AbsolutePolygon {
    /// Closed loop of line segments through every vertex, clipped to the image.
    fn draw_outline(&self, image: &mut RgbImage, color: Rgba<u8>) {
        let clip_box = (-1.0, -1.0, f64::from(image.width()), f64::from(image.height()));
        let vertices = self.vertices();
        for (i, start) in vertices.iter().enumerate() {
            let end = vertices[(i + 1) % vertices.len()];
            let Some((start, end)) = clip_segment((start.x, start.y), (end.x, end.y), clip_box) else {
                continue;
            };
            for (x, y) in BresenhamLineIter::new(start, end) {
                blend_rgba(image, x, y, color, 1.0);
            }
        }
    }
}

/// Semi-transparent text stamped near the bottom-right corner.
pub struct Watermark {
    font: FontVec,
    text: String,
    color: Rgb<u8>,
    opacity: f32,
    ratio: u32,
}

impl Watermark {
    pub fn new(font: FontVec, text: impl Into<String>) -> Self {
        Self {
            font,
            text: text.into(),
            color: Rgb([255, 255, 255]),
            opacity: WATERMARK_OPACITY,
            ratio: WATERMARK_RATIO,
        }
    }

    pub fn from_bytes(data: Vec<u8>, text: impl Into<String>) -> Result<Self> {
        let font = FontVec::try_from_vec(data).map_err(|e| Error::Font(e.to_string()))?;
        Ok(Self::new(font, text))
    }

    pub fn from_file(path: &Path, text: impl Into<String>) -> Result<Self> {
        let data = fs::read(path)
            .map_err(|e| Error::Font(format!("{}: {}", path.display(), e)))?;
        let font = FontVec::try_from_vec(data)
            .map_err(|e| Error::Font(format!("{}: {}", path.display(), e)))?;
        Ok(Self::new(font, text))
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_ratio(mut self, ratio: u32) -> Self {
        self.ratio = ratio.max(1);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Rgb<u8>) -> Self {
        self.color = color;
        self
    }

    #[inline]
    #[must_use]
    pub fn font_size(&self, width: u32) -> u32 {
        width / self.ratio
    }

    /// Pixel scale and bounding box `(x, y, width, height)` of the text on an image.
    fn placement(&self, width: u32, height: u32) -> Option<(PxScale, i32, i32, u32, u32)> {
        let size = self.font_size(width);
        if size == 0 || self.text.is_empty() {
            return None;
        }
        let scale = PxScale::from(size as f32);
        let (text_width, text_height) = text_size(scale, &self.font, &self.text);
        let x = (width as f32 - text_width as f32 * WATERMARK_MARGIN) as i32;
        let y = (height as f32 - text_height as f32 * WATERMARK_MARGIN) as i32;
        Some((scale, x, y, text_width, text_height))
    }

    pub fn draw(&self, image: &mut RgbImage) {
        let (width, height) = image.dimensions();
        let Some((scale, x, y, _, _)) = self.placement(width, height) else {
            return;
        };

        // Glyph coverage on a transparent layer, later scaled into the blend mask.
        let mut layer = GrayImage::new(width, height);
        draw_text_mut(&mut layer, Luma([255u8]), x, y, scale, &self.font, &self.text);

        for (px, py, coverage) in layer.enumerate_pixels() {
            let Luma([coverage]) = *coverage;
            if coverage > 0 {
                let alpha = f32::from(coverage) / 255.0 * self.opacity;
                blend(image.get_pixel_mut(px, py), self.color, alpha);
            }
        }
    }
}
