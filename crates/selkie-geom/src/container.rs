//! Group bounds and blob container placement.
//!
//! The blob generator works in a group-relative space; these helpers build
//! that space from absolute node rectangles and re-anchor the generated
//! outline back into absolute coordinates.

use serde::{Deserialize, Serialize};

use crate::blob::{BlobOutline, GroupMember};
use crate::model::{Bounds, NodeRect};

/// Absolute position and size of the element that hosts a blob path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bounding box over top-left-anchored rectangles, max taken at
/// `position + extent`. Degenerates to a point for a single zero-size
/// rectangle; `None` for an empty set.
pub fn bounding_box(rects: &[NodeRect]) -> Option<Bounds> {
    Bounds::from_points(rects.iter().flat_map(|r| {
        let (w, h) = r.extent_or_zero();
        [(r.x, r.y), (r.x + w, r.y + h)]
    }))
}

/// Converts absolute rectangles into the center-anchored, group-relative
/// members the blob generator consumes. `bounds` must be the bounding box of
/// the same rectangle set.
pub fn relative_members(rects: &[NodeRect], bounds: &Bounds) -> Vec<GroupMember> {
    rects
        .iter()
        .map(|r| {
            let (w, h) = r.extent_or_zero();
            GroupMember {
                cx: r.x - bounds.min_x + w / 2.0,
                cy: r.y - bounds.min_y + h / 2.0,
                width: w,
                height: h,
            }
        })
        .collect()
}

/// Re-anchors a blob outline into absolute space.
///
/// The outline's minima are typically negative (padding pushes the curve
/// outward past the tightest member bound), so adding them to the absolute
/// bounding-box minimum shifts the container up-left of the group. Pure
/// arithmetic; correctness rests on the outline's dual-space contract.
pub fn container_frame(bounds: &Bounds, outline: &BlobOutline) -> ContainerFrame {
    ContainerFrame {
        x: bounds.min_x + outline.bounds.min_x,
        y: bounds.min_y + outline.bounds.min_y,
        width: outline.bounds.width(),
        height: outline.bounds.height(),
    }
}
