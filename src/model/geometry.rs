//! Geometry types shared by the input schema and the layout stages.
//!
//! Textract reports all coordinates in a normalized 0-1 space; pixel
//! values only exist after scaling by the resolved page dimensions.

use serde::{Deserialize, Serialize};

use crate::dimensions::PageDimensions;

/// An axis-aligned bounding box in normalized 0-1 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundingBox {
    /// Box width as a fraction of page width
    pub width: f64,
    /// Box height as a fraction of page height
    pub height: f64,
    /// Left edge as a fraction of page width
    pub left: f64,
    /// Top edge as a fraction of page height
    pub top: f64,
}

impl BoundingBox {
    /// Bottom edge (top + height) in normalized coordinates.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge (left + width) in normalized coordinates.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Check whether two boxes overlap on the vertical axis.
    ///
    /// Uses open-interval overlap on [top, top + height): boxes that
    /// merely touch edges do not intersect. Lines that pass this check
    /// share a reading-order band.
    pub fn intersects_vertically(&self, other: &BoundingBox) -> bool {
        self.top < other.bottom() && self.bottom() > other.top
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Scale into absolute pixel space for the given page dimensions.
    pub fn to_pixels(&self, dims: PageDimensions) -> PixelBox {
        let w = dims.width as f64;
        let h = dims.height as f64;
        PixelBox {
            left: (self.left * w).floor() as i32,
            top: (self.top * h).floor() as i32,
            right: (self.right() * w).floor() as i32,
            bottom: (self.bottom() * h).floor() as i32,
        }
    }
}

/// A single polygon vertex in normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Point {
    /// Horizontal position (0-1)
    pub x: f64,
    /// Vertical position (0-1)
    pub y: f64,
}

/// Block geometry: bounding box plus a four-point polygon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Geometry {
    /// Axis-aligned bounding box
    pub bounding_box: BoundingBox,
    /// Polygon outline, four vertices in source order
    #[serde(default)]
    pub polygon: Vec<Point>,
}

/// A bounding box in absolute pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    /// Left edge in pixels
    pub left: i32,
    /// Top edge in pixels
    pub top: i32,
    /// Right edge in pixels
    pub right: i32,
    /// Bottom edge in pixels
    pub bottom: i32,
}

impl PixelBox {
    /// Format as an hOCR `bbox` title fragment.
    pub fn to_bbox_title(&self) -> String {
        format!("bbox {} {} {} {}", self.left, self.top, self.right, self.bottom)
    }
}
