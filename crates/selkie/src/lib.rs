#![forbid(unsafe_code)]

//! `selkie` is the headless geometry + timeline core of a context-mapping
//! canvas.
//!
//! The rendering layer (out of tree) feeds plain node rectangles and keyframe
//! records in and draws whatever comes back; nothing in here touches a
//! renderer, a store, or ambient state. Everything is safe to call
//! concurrently: the functions are pure and never mutate their inputs.

pub use selkie_geom::*;

pub mod timeline {
    pub use selkie_timeline::*;
}

/// A group outline re-anchored into absolute canvas space.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupOutline {
    pub outline: BlobOutline,
    pub frame: ContainerFrame,
}

/// One-call group boundary: absolute node rectangles in, blob path plus the
/// absolute frame that hosts it out.
///
/// Returns `None` when no usable outline exists (no members, or members
/// degenerate below a hull).
pub fn group_outline(rects: &[NodeRect], padding: f64) -> Option<GroupOutline> {
    let bounds = bounding_box(rects)?;
    let members = relative_members(rects, &bounds);
    let outline = blob_outline(&members, padding);
    if outline.is_empty() {
        return None;
    }
    let frame = container_frame(&bounds, &outline);
    Some(GroupOutline { outline, frame })
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
