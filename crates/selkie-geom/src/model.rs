//! Plain data types exchanged with the rendering layer.
//!
//! Rectangles are top-left anchored. Width/height are optional because node
//! dimensions are only known after the renderer has measured the DOM/scene
//! node; geometry helpers either treat missing dimensions as zero or refuse
//! to compute, depending on what a wrong value would cost visually.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

/// The side of a node rectangle an edge attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeRect {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

impl NodeRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: Some(width),
            height: Some(height),
        }
    }

    /// A node whose dimensions have not been measured yet.
    pub fn unmeasured(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            width: None,
            height: None,
        }
    }

    pub fn extent_or_zero(&self) -> (f64, f64) {
        (self.width.unwrap_or(0.0), self.height.unwrap_or(0.0))
    }

    /// Both dimensions, or `None` if either is still unmeasured.
    pub fn measured(&self) -> Option<(f64, f64)> {
        Some((self.width?, self.height?))
    }

    pub fn center(&self) -> CanvasPoint {
        let (w, h) = self.extent_or_zero();
        CanvasPoint {
            x: self.x + w / 2.0,
            y: self.y + h / 2.0,
        }
    }
}

/// Where a line between two nodes starts and ends, and which side of each
/// rectangle it departs/arrives from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeEndpoints {
    pub source_x: f64,
    pub source_y: f64,
    pub target_x: f64,
    pub target_y: f64,
    pub source_side: Side,
    pub target_side: Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub const ZERO: Self = Self {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
    };

    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
