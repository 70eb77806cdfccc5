use geo::{Coord, LineString, Polygon};
use crate::error::{Error, Result};
use crate::logo::RelativePolygon;

/// Relative coordinate of the image center, the origin of the radial scaling.
pub const CENTER: f64 = 0.5;

/// A polygon in pixel coordinates for one particular image.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsolutePolygon {
    vertices: Vec<Coord<f64>>,
}

impl AbsolutePolygon {
    #[must_use]
    pub fn new(vertices: Vec<Coord<f64>>) -> Self {
        Self { vertices }
    }

    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Coord<f64>] {
        &self.vertices
    }

    /// First vertex, used to line up a region with its mirror partner.
    #[inline]
    #[must_use]
    pub fn anchor(&self) -> Option<Coord<f64>> {
        self.vertices.first().copied()
    }

    /// Closed `geo` polygon over the same vertices.
    #[must_use]
    pub fn to_polygon(&self) -> Polygon<f64> {
        Polygon::new(LineString::from(self.vertices.clone()), vec![])
    }
}

/// Push a relative vertex away from (or toward) the center by `scale`.
///
/// A vertex exactly on the center has no direction and is rejected.
pub fn scale_vertex(x: f64, y: f64, scale: f64) -> Result<(f64, f64)> {
    let dx = x - CENTER;
    let dy = y - CENTER;
    let dist = dx.hypot(dy);
    if dist == 0.0 {
        return Err(Error::DegenerateVertex { x, y });
    }
    let cos = dx / dist;
    let sin = dy / dist;
    let dist = dist * scale;
    Ok((CENTER + dist * cos, CENTER + dist * sin))
}

pub fn scale_polygon(
    relative: &RelativePolygon,
    scale: f64,
    width: u32,
    height: u32,
) -> Result<AbsolutePolygon> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Error::InvalidScale(scale));
    }
    let (width, height) = (f64::from(width), f64::from(height));
    let vertices = relative
        .vertices()
        .iter()
        .map(|&(x, y)| {
            let (x, y) = scale_vertex(x, y, scale)?;
            let vertex = Coord { x: x * width, y: y * height };
            if vertex.x.is_finite() && vertex.y.is_finite() {
                Ok(vertex)
            } else {
                Err(Error::InvalidScale(scale))
            }
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(AbsolutePolygon::new(vertices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_scale_only_stretches_to_image_size() {
        static APEX: [(f64, f64); 3] = [(0.5, 0.183), (0.393, 0.445), (0.5, 0.538)];
        let polygon = scale_polygon(&RelativePolygon::new(&APEX), 1.0, 1920, 1266).unwrap();
        let apex = polygon.anchor().unwrap();
        assert_relative_eq!(apex.x, 960.0, epsilon = 1e-9);
        assert_relative_eq!(apex.y, 231.678, epsilon = 1e-9);

        for (abs, &(x, y)) in polygon.vertices().iter().zip(APEX.iter()) {
            assert_relative_eq!(abs.x, x * 1920.0, epsilon = 1e-9);
            assert_relative_eq!(abs.y, y * 1266.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn scale_moves_vertex_radially() {
        let (x, y) = scale_vertex(0.75, 0.5, 2.0).unwrap();
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(y, 0.5, epsilon = 1e-12);

        let (x, y) = scale_vertex(0.25, 0.25, 0.5).unwrap();
        assert_relative_eq!(x, 0.375, epsilon = 1e-12);
        assert_relative_eq!(y, 0.375, epsilon = 1e-12);
    }

    #[test]
    fn center_vertex_is_degenerate() {
        assert!(matches!(
            scale_vertex(0.5, 0.5, 1.0),
            Err(Error::DegenerateVertex { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_scale() {
        static TRIANGLE: [(f64, f64); 3] = [(0.1, 0.1), (0.9, 0.1), (0.5, 0.9)];
        let relative = RelativePolygon::new(&TRIANGLE);
        assert!(matches!(scale_polygon(&relative, 0.0, 10, 10), Err(Error::InvalidScale(_))));
        assert!(matches!(scale_polygon(&relative, f64::NAN, 10, 10), Err(Error::InvalidScale(_))));
        assert!(matches!(scale_polygon(&relative, f64::MAX, 10, 10), Err(Error::InvalidScale(_))));
        assert!(scale_polygon(&relative, 1e300, 10, 10).is_ok());
    }
}
