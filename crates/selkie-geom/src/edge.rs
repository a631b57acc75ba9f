//! Edge endpoint solving against node rectangles.
//!
//! The intersection uses the radial line-vs-box parametrization from Dagre's
//! `intersectRect` / react-flow's floating-edge example: project the
//! center-to-center direction onto the rectangle boundary, classify the
//! nearest side, then snap the anchor to that side's midpoint. The snap step
//! keeps attachments horizontally/vertically stable while nodes are dragged
//! instead of letting them slide along a side.

use crate::model::{CanvasPoint, EdgeEndpoints, NodeRect, Side};

/// The point where a straight line from `node`'s center toward `other`'s
/// center crosses `node`'s boundary.
///
/// Missing dimensions are treated as zero here: the projective formula
/// degrades to the rectangle center for zero-size rectangles, which is the
/// only sensible anchor for an unmeasured node. Coincident centers also
/// return the center rather than dividing by zero.
pub fn node_intersection(node: &NodeRect, other: &NodeRect) -> CanvasPoint {
    let (nw, nh) = node.extent_or_zero();
    let w = nw / 2.0;
    let h = nh / 2.0;

    let center = node.center();
    let other_center = other.center();
    let dx = other_center.x - center.x;
    let dy = other_center.y - center.y;

    let xx1 = dx / (2.0 * w) - dy / (2.0 * h);
    let yy1 = dx / (2.0 * w) + dy / (2.0 * h);
    let denom = xx1.abs() + yy1.abs();
    if denom == 0.0 || !denom.is_finite() {
        return center;
    }

    let a = 1.0 / denom;
    let xx3 = a * xx1;
    let yy3 = a * yy1;
    let x = w * (xx3 + yy3) + center.x;
    let y = h * (-xx3 + yy3) + center.y;
    if !x.is_finite() || !y.is_finite() {
        return center;
    }

    CanvasPoint { x, y }
}

/// Classifies which side of `node` a boundary point lies on: minimum absolute
/// distance to the four edge lines, ties resolved in the fixed order Left,
/// Right, Top, Bottom.
pub fn nearest_side(node: &NodeRect, point: CanvasPoint) -> Side {
    let (w, h) = node.extent_or_zero();
    let left = (point.x - node.x).abs();
    let right = (point.x - (node.x + w)).abs();
    let top = (point.y - node.y).abs();
    let bottom = (point.y - (node.y + h)).abs();

    let mut best = (left, Side::Left);
    for candidate in [
        (right, Side::Right),
        (top, Side::Top),
        (bottom, Side::Bottom),
    ] {
        if candidate.0 < best.0 {
            best = candidate;
        }
    }
    best.1
}

fn side_midpoint(node: &NodeRect, side: Side) -> (f64, f64) {
    let (w, h) = node.extent_or_zero();
    let center = node.center();
    match side {
        Side::Left => (node.x, center.y),
        Side::Right => (node.x + w, center.y),
        Side::Top => (center.x, node.y),
        Side::Bottom => (center.x, node.y + h),
    }
}

/// Full endpoint solve for a floating edge between two nodes.
pub fn edge_endpoints(source: &NodeRect, target: &NodeRect) -> EdgeEndpoints {
    let source_hit = node_intersection(source, target);
    let target_hit = node_intersection(target, source);
    let source_side = nearest_side(source, source_hit);
    let target_side = nearest_side(target, target_hit);
    let (source_x, source_y) = side_midpoint(source, source_side);
    let (target_x, target_y) = side_midpoint(target, target_side);

    EdgeEndpoints {
        source_x,
        source_y,
        target_x,
        target_y,
        source_side,
        target_side,
    }
}

/// Endpoint solve for edges whose direction is fixed top-down by the caller's
/// domain (value-chain edges always flow downward): bottom-center of the
/// source to top-center of the target.
///
/// Returns `None` until both nodes are fully measured; a value-chain edge
/// drawn against guessed dimensions would visibly detach from its nodes.
pub fn vertical_edge_endpoints(
    source: Option<&NodeRect>,
    target: Option<&NodeRect>,
) -> Option<EdgeEndpoints> {
    let source = source?;
    let target = target?;
    let (sw, sh) = source.measured()?;
    let (tw, _) = target.measured()?;

    Some(EdgeEndpoints {
        source_x: source.x + sw / 2.0,
        source_y: source.y + sh,
        target_x: target.x + tw / 2.0,
        target_y: target.y,
        source_side: Side::Bottom,
        target_side: Side::Top,
    })
}
