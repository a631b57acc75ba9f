//! Organic group boundary ("blob") generation.
//!
//! A group's outline is grown from its member rectangles: convex hull of the
//! member corners, inflated with round joins over fixed-point coordinates,
//! then smoothed with a Catmull-Rom pass. Inflating by `padding * 1.85`
//! over-expands on purpose: the smoothing pass cuts the corners back in, and
//! the over-expansion lands the visible curve at the requested padding
//! distance from the hull. The constant is part of the visual contract, not a
//! tunable.
//!
//! The emitted path lives in its own top-left-anchored space (minimum
//! coordinate at the origin) while `bounds` stays in the input coordinate
//! space. Container placement relies on both; see [`crate::container`].

mod curve;
mod hull;
mod offset;
pub(crate) mod path;

use serde::{Deserialize, Serialize};

use crate::geom::point;
use crate::model::Bounds;

pub const CORNER_COMPENSATION: f64 = 1.85;

const ELLIPSE_SAMPLES: usize = 16;
const CATMULL_ROM_ALPHA: f64 = 0.5;

/// One member rectangle of a group, center-anchored, in the group-relative
/// space built by [`crate::container::relative_members`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
    pub cx: f64,
    pub cy: f64,
    pub width: f64,
    pub height: f64,
}

/// Generated outline plus the metadata needed to re-anchor it.
///
/// `path` is expressed in a translated space whose minimum coordinate is
/// (0, 0); `bounds` is expressed in the original space of the input members.
/// `translate_x`/`translate_y` record the translation that was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlobOutline {
    pub path: String,
    pub translate_x: f64,
    pub translate_y: f64,
    pub bounds: Bounds,
}

impl BlobOutline {
    pub fn empty() -> Self {
        Self {
            path: String::new(),
            translate_x: 0.0,
            translate_y: 0.0,
            bounds: Bounds::ZERO,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Computes the closed organic curve enclosing `members` with a `padding`
/// margin.
///
/// Degenerate inputs (no members, or members whose corners collapse below a
/// usable hull) yield [`BlobOutline::empty`]; the renderer simply skips the
/// group boundary for that frame.
pub fn blob_outline(members: &[GroupMember], padding: f64) -> BlobOutline {
    match members {
        [] => BlobOutline::empty(),
        [single] => ellipse_outline(single, padding),
        _ => hull_outline(members, padding),
    }
}

fn ellipse_outline(member: &GroupMember, padding: f64) -> BlobOutline {
    let rx = member.width / 2.0 + padding;
    let ry = member.height / 2.0 + padding;

    let mut ring = Vec::with_capacity(ELLIPSE_SAMPLES + 1);
    for i in 0..ELLIPSE_SAMPLES {
        let angle = std::f64::consts::TAU * (i as f64) / (ELLIPSE_SAMPLES as f64);
        ring.push(point(
            member.cx + rx * angle.cos(),
            member.cy + ry * angle.sin(),
        ));
    }
    ring.push(ring[0]);

    finish(curve::catmull_rom_path(&ring, CATMULL_ROM_ALPHA))
}

fn hull_outline(members: &[GroupMember], padding: f64) -> BlobOutline {
    let mut corners = Vec::with_capacity(members.len() * 4);
    for m in members {
        let hw = m.width / 2.0;
        let hh = m.height / 2.0;
        corners.push(point(m.cx - hw, m.cy - hh));
        corners.push(point(m.cx + hw, m.cy - hh));
        corners.push(point(m.cx + hw, m.cy + hh));
        corners.push(point(m.cx - hw, m.cy + hh));
    }

    let hull = hull::convex_hull(&corners);
    if hull.len() < 3 {
        return BlobOutline::empty();
    }

    let scaled = offset::scale_up(&hull);
    let delta = padding * CORNER_COMPENSATION * offset::FIXED_POINT_SCALE;
    let inflated = offset::inflate_convex(&scaled, delta);
    let mut ring = offset::scale_down(&inflated);

    let Some(&first) = ring.first() else {
        return BlobOutline::empty();
    };
    ring.push(first);

    finish(curve::catmull_rom_path(&ring, CATMULL_ROM_ALPHA))
}

fn finish(mut path: path::PathData) -> BlobOutline {
    let Some(bounds) = path.bounds() else {
        return BlobOutline::empty();
    };
    path.translate(-bounds.min_x, -bounds.min_y);

    BlobOutline {
        path: path.to_svg_d(),
        translate_x: -bounds.min_x,
        translate_y: -bounds.min_y,
        bounds,
    }
}
