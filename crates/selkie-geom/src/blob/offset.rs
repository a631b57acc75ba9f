//! Round-join polygon inflation over fixed-point integer coordinates.
//!
//! Mirrors the Clipper offsetter: coordinates are scaled into integers before
//! offsetting so the arc joins stay numerically stable, and each convex
//! corner is swept with a circular arc whose segment count follows Clipper's
//! arc-tolerance rule.

use std::f64::consts::{PI, TAU};

use crate::geom::{Point, Vector, point, vector};

/// Fixed-point scale applied to hull coordinates before offsetting.
pub(crate) const FIXED_POINT_SCALE: f64 = 100.0;

/// Maximum distance (in scaled units) an arc chord may deviate from the true
/// join circle.
const ARC_TOLERANCE: f64 = 0.25 * FIXED_POINT_SCALE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IntPoint {
    pub x: i64,
    pub y: i64,
}

pub(crate) fn scale_up(points: &[Point]) -> Vec<IntPoint> {
    points
        .iter()
        .map(|p| IntPoint {
            x: (p.x * FIXED_POINT_SCALE).round() as i64,
            y: (p.y * FIXED_POINT_SCALE).round() as i64,
        })
        .collect()
}

pub(crate) fn scale_down(points: &[IntPoint]) -> Vec<Point> {
    points
        .iter()
        .map(|p| point(p.x as f64 / FIXED_POINT_SCALE, p.y as f64 / FIXED_POINT_SCALE))
        .collect()
}

/// Outward unit normal of the edge `a -> b` for a counter-clockwise ring.
fn edge_normal(a: IntPoint, b: IntPoint) -> Vector {
    let dx = (b.x - a.x) as f64;
    let dy = (b.y - a.y) as f64;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return vector(0.0, 0.0);
    }
    vector(dy / len, -dx / len)
}

/// Inflates a strictly convex counter-clockwise ring by `delta` scaled units,
/// joining the offset edges with circular arcs around each source vertex.
///
/// Sub-unit deltas return the ring unchanged: an offset below the fixed-point
/// resolution is indistinguishable from no offset.
pub(crate) fn inflate_convex(ring: &[IntPoint], delta: f64) -> Vec<IntPoint> {
    if ring.len() < 3 || delta < 1.0 {
        return ring.to_vec();
    }

    let steps_per_turn = (PI / (1.0 - ARC_TOLERANCE / delta).acos()).clamp(4.0, 256.0);
    let step_angle = TAU / steps_per_turn;

    let n = ring.len();
    let mut out: Vec<IntPoint> = Vec::new();
    for i in 0..n {
        let prev = ring[(i + n - 1) % n];
        let cur = ring[i];
        let next = ring[(i + 1) % n];

        let n1 = edge_normal(prev, cur);
        let n2 = edge_normal(cur, next);

        let a1 = n1.y.atan2(n1.x);
        let mut a2 = n2.y.atan2(n2.x);
        if a2 < a1 {
            a2 += TAU;
        }
        let sweep = a2 - a1;
        let steps = (sweep / step_angle).ceil().max(1.0) as usize;

        for k in 0..=steps {
            let angle = a1 + sweep * (k as f64 / steps as f64);
            out.push(IntPoint {
                x: (cur.x as f64 + delta * angle.cos()).round() as i64,
                y: (cur.y as f64 + delta * angle.sin()).round() as i64,
            });
        }
    }
    out
}
