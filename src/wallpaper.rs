use image::{DynamicImage, RgbImage, Rgba};
use log::debug;
use crate::crop::{crop_to_aspect, AspectRatio};
use crate::draw::{DrawOutline, OUTLINE_COLOR};
use crate::error::{Error, Result};
use crate::logo::Logo;
use crate::pixel::BRIGHTNESS;
use crate::region::Region;
use crate::remap::{mirror_offset, remap_region, Progress, ProgressTracker};

#[derive(Debug, Clone, PartialEq)]
pub struct WallpaperOptions {
    /// Multiplier pushing the logo vertices away from the image center.
    pub scale: f64,
    /// Factor applied to every channel of a mirrored pixel.
    pub brightness: f64,
    pub aspect: AspectRatio,
    /// Edge color; `None` skips the outline.
    pub outline: Option<Rgba<u8>>,
}

impl Default for WallpaperOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            brightness: BRIGHTNESS,
            aspect: AspectRatio::WALLPAPER,
            outline: Some(OUTLINE_COLOR),
        }
    }
}

/// Renders the mirrored logo; the watermark is stamped separately with
/// [`crate::draw::Watermark`] once the image is otherwise finished.
pub struct Wallpaper {
    options: WallpaperOptions,
}

impl Wallpaper {
    #[must_use]
    pub fn new(options: WallpaperOptions) -> Self {
        Self { options }
    }

    /// Crop `image` to the wallpaper aspect ratio and render the logo onto it.
    pub fn generate(&self, image: &DynamicImage, progress: &mut dyn Progress) -> Result<RgbImage> {
        let cropped = crop_to_aspect(image, self.options.aspect);
        self.render(&cropped, progress)
    }

    /// Render the logo onto an already cropped image.
    ///
    /// Every region reads from `source` as it was passed in; writes and
    /// outlines only land on the returned copy.
    pub fn render(&self, source: &RgbImage, progress: &mut dyn Progress) -> Result<RgbImage> {
        let brightness = self.options.brightness;
        if !brightness.is_finite() || brightness < 0.0 {
            return Err(Error::InvalidBrightness(brightness));
        }

        let (width, height) = source.dimensions();
        let logo = Logo::scaled(self.options.scale, width, height)?;

        let mut regions = Vec::with_capacity(4);
        for (orientation, polygon) in logo.iter() {
            let region = Region::new(polygon)
                .ok_or("Logo polygon has no vertices")?
                .clipped(width, height);
            let offset = mirror_offset(polygon, logo.polygon(orientation.mirror()))
                .ok_or("Logo polygon has no anchor vertex")?;
            regions.push((orientation, polygon, region, offset));
        }

        let total: u64 = regions.iter().map(|(_, _, r, _)| r.bounds().columns()).sum();
        let mut tracker = ProgressTracker::new(progress, total);
        let mut output = source.clone();

        for (orientation, polygon, region, offset) in &regions {
            debug!(
                "Processing {} region, bounds {:?}, mirror {}",
                orientation.name(),
                region.bounds(),
                orientation.mirror().name()
            );
            remap_region(source, &mut output, region, *offset, brightness, || tracker.tick());
            if let Some(color) = self.options.outline {
                polygon.draw_outline(&mut output, color);
            }
        }

        Ok(output)
    }
}
