use image::{DynamicImage, RgbImage};
use log::info;

/// Width-to-height ratio kept as an exact integer fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    /// 1920:1266, the proportions of the wallpaper template.
    pub const WALLPAPER: AspectRatio = AspectRatio { width: 1920, height: 1266 };

    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::WALLPAPER
    }
}

/// Largest centered window `(x, y, width, height)` of the given ratio.
#[must_use]
pub fn crop_window(width: u32, height: u32, ratio: AspectRatio) -> (u32, u32, u32, u32) {
    if ratio.width == 0 || ratio.height == 0 {
        return (0, 0, width, height);
    }
    let (w, h) = (u64::from(width), u64::from(height));
    let (rw, rh) = (u64::from(ratio.width), u64::from(ratio.height));

    if w * rh > h * rw {
        let new_width = (h * rw / rh).max(1) as u32;
        ((width - new_width) / 2, 0, new_width, height)
    } else {
        let new_height = (w * rh / rw).max(1) as u32;
        (0, (height - new_height) / 2, width, new_height)
    }
}

/// Center-crop to `ratio` and convert to 8-bit RGB.
#[must_use]
pub fn crop_to_aspect(image: &DynamicImage, ratio: AspectRatio) -> RgbImage {
    let (x, y, width, height) = crop_window(image.width(), image.height(), ratio);
    if (width, height) == (image.width(), image.height()) {
        return image.to_rgb8();
    }
    info!(
        "Cropping {}x{} to {}x{} at ({}, {})",
        image.width(),
        image.height(),
        width,
        height,
        x,
        y
    );
    image.crop_imm(x, y, width, height).to_rgb8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn exact_ratio_is_untouched() {
        assert_eq!(crop_window(1920, 1266, AspectRatio::WALLPAPER), (0, 0, 1920, 1266));
        assert_eq!(crop_window(960, 633, AspectRatio::WALLPAPER), (0, 0, 960, 633));
    }

    #[test]
    fn wide_images_lose_columns_on_both_sides() {
        assert_eq!(crop_window(3000, 1266, AspectRatio::WALLPAPER), (540, 0, 1920, 1266));
    }

    #[test]
    fn tall_images_lose_rows_on_both_sides() {
        assert_eq!(crop_window(1920, 2000, AspectRatio::WALLPAPER), (0, 367, 1920, 1266));
        assert_eq!(crop_window(200, 132, AspectRatio::WALLPAPER), (0, 0, 200, 131));
    }

    #[test]
    fn crop_keeps_the_center() {
        let image = RgbImage::from_fn(30, 10, |x, _| Rgb([x as u8, 0, 0]));
        let cropped = crop_to_aspect(&DynamicImage::ImageRgb8(image), AspectRatio::new(1, 1));
        assert_eq!(cropped.dimensions(), (10, 10));
        assert_eq!(cropped.get_pixel(0, 0)[0], 10);
        assert_eq!(cropped.get_pixel(9, 9)[0], 19);
    }

    #[test]
    fn converts_to_rgb() {
        let image = DynamicImage::new_luma8(1920, 1266);
        let cropped = crop_to_aspect(&image, AspectRatio::WALLPAPER);
        assert_eq!(cropped.dimensions(), (1920, 1266));
    }
}
