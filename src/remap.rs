//! Copies brightened pixels from each region's mirror partner into the region.

use image::RgbImage;
use log::debug;
use crate::geometry::AbsolutePolygon;
use crate::pixel::brighten;
use crate::region::Region;

/// Receives coarse completion milestones (10, 20, ... 100).
pub trait Progress {
    fn report(&mut self, percent: u8);
}

/// Discards every milestone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn report(&mut self, _: u8) {}
}

impl<F: FnMut(u8)> Progress for F {
    fn report(&mut self, percent: u8) {
        self(percent)
    }
}

/// Turns processed columns into milestones for a `Progress` sink.
pub(crate) struct ProgressTracker<'a> {
    sink: &'a mut dyn Progress,
    total: u64,
    done: u64,
    next: u8,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(sink: &'a mut dyn Progress, total: u64) -> Self {
        Self { sink, total, done: 0, next: 10 }
    }

    pub(crate) fn tick(&mut self) {
        self.done += 1;
        while self.next <= 100 && self.done * 100 >= u64::from(self.next) * self.total {
            self.sink.report(self.next);
            self.next += 10;
        }
    }
}

/// Translation from a region's anchor to its mirror's anchor, truncated toward zero.
#[must_use]
pub fn mirror_offset(region: &AbsolutePolygon, mirror: &AbsolutePolygon) -> Option<(i64, i64)> {
    let from = region.anchor()?;
    let to = mirror.anchor()?;
    Some(((to.x - from.x) as i64, (to.y - from.y) as i64))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemapStats {
    pub written: u64,
    pub skipped: u64,
}

#[inline]
fn in_bounds(image: &RgbImage, x: i64, y: i64) -> Option<(u32, u32)> {
    let x = u32::try_from(x).ok()?;
    let y = u32::try_from(y).ok()?;
    (x < image.width() && y < image.height()).then_some((x, y))
}

/// Overwrite every interior pixel of `region` in `target` with the brightened
/// pixel found at `offset` in `source`.
///
/// `source` is never written, so regions cannot observe each other's output.
/// Pixels whose target or source lies outside the image are left untouched.
/// `on_column` fires once per bounding-box column.
pub fn remap_region(
    source: &RgbImage,
    target: &mut RgbImage,
    region: &Region,
    offset: (i64, i64),
    brightness: f64,
    mut on_column: impl FnMut(),
) -> RemapStats {
    let (dx, dy) = offset;
    let bounds = region.bounds();
    let mut stats = RemapStats::default();

    for x in bounds.min_x..bounds.max_x {
        for (x, y) in region.column(x) {
            let mirrored = x.checked_add(dx).zip(y.checked_add(dy));
            let pixels = in_bounds(target, x, y)
                .zip(mirrored.and_then(|(sx, sy)| in_bounds(source, sx, sy)));
            match pixels {
                Some(((tx, ty), (sx, sy))) => {
                    target.put_pixel(tx, ty, brighten(*source.get_pixel(sx, sy), brightness));
                    stats.written += 1;
                }
                None => stats.skipped += 1,
            }
        }
        on_column();
    }

    debug!(
        "Remapped {} pixels with offset ({}, {}), skipped {}",
        stats.written, dx, dy, stats.skipped
    );
    stats
}
