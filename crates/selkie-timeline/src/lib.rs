#![forbid(unsafe_code)]

//! Keyframe timeline arithmetic for context-map canvases.
//!
//! Design goals:
//! - pure, total functions: a render pass must never fail on stored data,
//!   so malformed dates are recovered, not raised
//! - keyframe ordering is re-derived on every lookup; callers may hand over
//!   arrays in any order and interpolation never mutates its inputs
//! - deterministic: the only ambient input (the current year, used as the
//!   malformed-date fallback) is pinnable for tests and snapshots

pub mod date;
pub mod document;
pub mod interpolate;
pub mod keyframe;

pub use date::{DateScale, MID_YEAR_OFFSET};
pub use document::{Result, TimelineDocument, TimelineError};
pub use keyframe::{
    Bracket, EntityPosition, Keyframe, SNAP_THRESHOLD, bracket, nearest, snap_target, snaps,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
