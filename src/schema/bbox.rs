//! Bounding boxes in COCO (x, y, width, height) order.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in COCO convention: `[x, y, width, height]`
/// with `(x, y)` the top-left corner in absolute pixel coordinates.
///
/// Serializes as a plain 4-element JSON array of numbers.
///
/// Note: the constructor does NOT reject malformed boxes (negative sizes,
/// non-finite values). Validation reports those issues instead of preventing
/// them from being represented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bbox(pub [f64; 4]);

impl Bbox {
    /// Creates a bounding box from explicit components.
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self([x, y, width, height])
    }

    /// Returns the x coordinate of the top-left corner.
    #[inline]
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    /// Returns the y coordinate of the top-left corner.
    #[inline]
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// Returns the box width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.0[2]
    }

    /// Returns the box height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.0[3]
    }

    /// Returns width * height.
    ///
    /// May be negative if the box is malformed.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns true if all four components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl From<[f64; 4]> for Bbox {
    fn from(raw: [f64; 4]) -> Self {
        Self(raw)
    }
}

impl From<(f64, f64, f64, f64)> for Bbox {
    fn from((x, y, w, h): (f64, f64, f64, f64)) -> Self {
        Self([x, y, w, h])
    }
}
