use image::{Pixel, Rgb};

/// Default multiplier applied to mirrored pixels.
pub const BRIGHTNESS: f64 = 1.3;

/// `min(round(value * factor), 255)`, never below zero.
#[inline]
#[must_use]
pub fn brighten_channel(value: u8, factor: f64) -> u8 {
    (f64::from(value) * factor).round().clamp(0.0, 255.0) as u8
}

#[inline]
#[must_use]
pub fn brighten(pixel: Rgb<u8>, factor: f64) -> Rgb<u8> {
    pixel.map(|channel| brighten_channel(channel, factor))
}

/// Mix `color` over `pixel` with coverage `alpha` in `[0, 1]`.
#[inline]
pub fn blend(pixel: &mut Rgb<u8>, color: Rgb<u8>, alpha: f32) {
    let alpha = alpha.clamp(0.0, 1.0);
    pixel.apply2(&color, |dst, src| {
        (f32::from(dst) * (1.0 - alpha) + f32::from(src) * alpha).round() as u8
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brighten_saturates_from_196() {
        assert_eq!(brighten_channel(190, BRIGHTNESS), 247);
        for value in 196..=255u8 {
            assert_eq!(brighten_channel(value, BRIGHTNESS), 255);
        }
        assert_eq!(brighten_channel(0, BRIGHTNESS), 0);
    }

    #[test]
    fn brighten_is_monotonic() {
        let mut previous = 0;
        for value in 0..=255u8 {
            let current = brighten_channel(value, BRIGHTNESS);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn brighten_rounds_each_channel() {
        assert_eq!(brighten(Rgb([128, 10, 200]), BRIGHTNESS), Rgb([166, 13, 255]));
    }

    #[test]
    fn blend_interpolates() {
        let mut pixel = Rgb([0, 100, 200]);
        blend(&mut pixel, Rgb([255, 255, 255]), 0.0);
        assert_eq!(pixel, Rgb([0, 100, 200]));
        blend(&mut pixel, Rgb([100, 100, 100]), 0.5);
        assert_eq!(pixel, Rgb([50, 100, 150]));
        blend(&mut pixel, Rgb([180, 180, 180]), 1.0);
        assert_eq!(pixel, Rgb([180, 180, 180]));
    }
}
