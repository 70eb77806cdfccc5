//! The Ethereum diamond, described as four kite-shaped regions relative to the image size.

use crate::error::Result;
use crate::geometry::{scale_polygon, AbsolutePolygon};

/// One of the four kites making up the logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Orientation {
    /// Processing order of the regions.
    pub const ALL: [Orientation; 4] = [
        Orientation::TopLeft,
        Orientation::TopRight,
        Orientation::BottomLeft,
        Orientation::BottomRight,
    ];

    /// The diagonally opposite region pixels are borrowed from.
    #[must_use]
    pub fn mirror(self) -> Self {
        match self {
            Orientation::TopLeft => Orientation::BottomRight,
            Orientation::TopRight => Orientation::BottomLeft,
            Orientation::BottomLeft => Orientation::TopRight,
            Orientation::BottomRight => Orientation::TopLeft,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Orientation::TopLeft => "top-left",
            Orientation::TopRight => "top-right",
            Orientation::BottomLeft => "bottom-left",
            Orientation::BottomRight => "bottom-right",
        }
    }

    #[must_use]
    pub fn template(self) -> RelativePolygon {
        match self {
            Orientation::TopLeft => RelativePolygon::new(&TOP_LEFT),
            Orientation::TopRight => RelativePolygon::new(&TOP_RIGHT),
            Orientation::BottomLeft => RelativePolygon::new(&BOTTOM_LEFT),
            Orientation::BottomRight => RelativePolygon::new(&BOTTOM_RIGHT),
        }
    }

    fn index(self) -> usize {
        match self {
            Orientation::TopLeft => 0,
            Orientation::TopRight => 1,
            Orientation::BottomLeft => 2,
            Orientation::BottomRight => 3,
        }
    }
}

// The first vertex of each kite is its anchor for the mirror translation.
const TOP_LEFT: [(f64, f64); 3] = [(0.500, 0.183), (0.393, 0.445), (0.500, 0.538)];
const TOP_RIGHT: [(f64, f64); 3] = [(0.500, 0.183), (0.604, 0.445), (0.500, 0.538)];
const BOTTOM_LEFT: [(f64, f64); 3] = [(0.392, 0.472), (0.500, 0.567), (0.500, 0.697)];
const BOTTOM_RIGHT: [(f64, f64); 3] = [(0.605, 0.472), (0.500, 0.567), (0.500, 0.697)];

/// Polygon vertices as fractions of the image width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativePolygon {
    vertices: &'static [(f64, f64)],
}

impl RelativePolygon {
    #[must_use]
    pub const fn new(vertices: &'static [(f64, f64)]) -> Self {
        Self { vertices }
    }

    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[(f64, f64)] {
        self.vertices
    }
}

/// The four regions scaled into pixel space for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    polygons: [AbsolutePolygon; 4],
}

impl Logo {
    pub fn scaled(scale: f64, width: u32, height: u32) -> Result<Self> {
        let [top_left, top_right, bottom_left, bottom_right] = Orientation::ALL;
        Ok(Self {
            polygons: [
                scale_polygon(&top_left.template(), scale, width, height)?,
                scale_polygon(&top_right.template(), scale, width, height)?,
                scale_polygon(&bottom_left.template(), scale, width, height)?,
                scale_polygon(&bottom_right.template(), scale, width, height)?,
            ],
        })
    }

    #[inline]
    #[must_use]
    pub fn polygon(&self, orientation: Orientation) -> &AbsolutePolygon {
        &self.polygons[orientation.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Orientation, &AbsolutePolygon)> {
        Orientation::ALL.into_iter().map(|o| (o, self.polygon(o)))
    }
}
