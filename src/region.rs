use geo::{BoundingRect, Contains, Point, Polygon};
use crate::geometry::AbsolutePolygon;

/// Integer pixel box covering a polygon; `max_x` and `max_y` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl PixelBounds {
    #[inline]
    #[must_use]
    pub fn columns(&self) -> u64 {
        self.max_x.saturating_sub(self.min_x).max(0) as u64
    }

    /// Intersection with the `[0, width) x [0, height)` pixel grid.
    #[must_use]
    pub fn clip(&self, width: u32, height: u32) -> Self {
        let min_x = self.min_x.clamp(0, i64::from(width));
        let min_y = self.min_y.clamp(0, i64::from(height));
        Self {
            min_x,
            min_y,
            max_x: self.max_x.clamp(min_x, i64::from(width)),
            max_y: self.max_y.clamp(min_y, i64::from(height)),
        }
    }
}

/// A polygon prepared for pixel membership queries.
#[derive(Debug, Clone)]
pub struct Region {
    polygon: Polygon<f64>,
    bounds: PixelBounds,
}

impl Region {
    /// `None` when the polygon has no vertices.
    #[must_use]
    pub fn new(polygon: &AbsolutePolygon) -> Option<Self> {
        let polygon = polygon.to_polygon();
        let rect = polygon.bounding_rect()?;
        let bounds = PixelBounds {
            min_x: rect.min().x.floor() as i64,
            min_y: rect.min().y.floor() as i64,
            max_x: rect.max().x.ceil() as i64,
            max_y: rect.max().y.ceil() as i64,
        };
        Some(Self { polygon, bounds })
    }

    /// Restrict the scanned box to an image of the given size.
    #[must_use]
    pub fn clipped(mut self, width: u32, height: u32) -> Self {
        self.bounds = self.bounds.clip(width, height);
        self
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> PixelBounds {
        self.bounds
    }

    /// Strict interior test: points on an edge or vertex are outside.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.polygon.contains(&Point::new(x as f64, y as f64))
    }

    /// Interior pixels of a single bounding-box column, top to bottom.
    pub fn column(&self, x: i64) -> impl Iterator<Item = (i64, i64)> + '_ {
        (self.bounds.min_y..self.bounds.max_y)
            .filter(move |&y| self.contains(x, y))
            .map(move |y| (x, y))
    }

    /// All interior pixels, column by column.
    pub fn pixels(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        (self.bounds.min_x..self.bounds.max_x).flat_map(move |x| self.column(x))
    }
}

/// Every integer coordinate strictly inside `polygon`.
#[must_use]
pub fn interior_pixels(polygon: &AbsolutePolygon) -> Vec<(i64, i64)> {
    Region::new(polygon)
        .map(|region| region.pixels().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use std::collections::BTreeSet;
    use crate::logo::Logo;

    fn polygon(points: &[(f64, f64)]) -> AbsolutePolygon {
        AbsolutePolygon::new(points.iter().map(|&(x, y)| Coord { x, y }).collect())
    }

    #[test]
    fn square_excludes_its_boundary() {
        let square = polygon(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let pixels: BTreeSet<_> = interior_pixels(&square).into_iter().collect();
        let expected: BTreeSet<_> = (1..4).flat_map(|x| (1..4).map(move |y| (x, y))).collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn bounds_round_outward() {
        let triangle = polygon(&[(1.5, 2.2), (7.1, 2.9), (3.0, 9.5)]);
        let region = Region::new(&triangle).unwrap();
        assert_eq!(
            region.bounds(),
            PixelBounds { min_x: 1, min_y: 2, max_x: 8, max_y: 10 }
        );
        assert_eq!(region.bounds().columns(), 7);
    }

    #[test]
    fn clipping_keeps_bounds_inside_the_image() {
        let triangle = polygon(&[(-1e300, -1e300), (1e300, 5.0), (3.0, 1e300)]);
        let region = Region::new(&triangle).unwrap();
        assert_eq!(region.bounds().min_x, i64::MIN);
        assert_eq!(region.bounds().columns(), i64::MAX as u64);

        let region = region.clipped(16, 9);
        assert_eq!(
            region.bounds(),
            PixelBounds { min_x: 0, min_y: 0, max_x: 16, max_y: 9 }
        );
        assert!(region.pixels().all(|(x, y)| (0..16).contains(&x) && (0..9).contains(&y)));
    }

    #[test]
    fn clipping_outside_the_image_leaves_nothing() {
        let square = polygon(&[(100.0, 100.0), (110.0, 100.0), (110.0, 110.0), (100.0, 110.0)]);
        let region = Region::new(&square).unwrap().clipped(50, 50);
        assert_eq!(region.bounds().columns(), 0);
        assert_eq!(region.pixels().count(), 0);
    }

    #[test]
    fn rotating_vertices_keeps_the_same_pixels() {
        let logo = Logo::scaled(1.0, 1920, 1266).unwrap();
        for (_, absolute) in logo.iter() {
            let base: BTreeSet<_> = interior_pixels(absolute).into_iter().collect();
            assert!(!base.is_empty());
            let mut vertices = absolute.vertices().to_vec();
            for _ in 1..vertices.len() {
                vertices.rotate_left(1);
                let rotated = AbsolutePolygon::new(vertices.clone());
                let pixels: BTreeSet<_> = interior_pixels(&rotated).into_iter().collect();
                assert_eq!(pixels, base);
            }
        }
    }

    #[test]
    fn empty_polygon_has_no_pixels() {
        assert!(interior_pixels(&AbsolutePolygon::new(vec![])).is_empty());
    }
}
