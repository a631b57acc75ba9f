//! Keyframe records, bracket lookup and scrubber snapping.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::date::DateScale;

pub type EntityId = String;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityPosition {
    pub x: f64,
    pub y: f64,
}

/// A dated snapshot of entity positions and visibility.
///
/// Keyframes are ordered by the numeric value of their date, never by their
/// index in the containing array; every lookup re-derives the ordering.
/// Lookups never mutate a keyframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Positions stored for entities that moved at this keyframe. Entities
    /// absent here keep their base position.
    #[serde(default)]
    pub positions: FxHashMap<EntityId, EntityPosition>,
    /// Entities visible at this keyframe.
    #[serde(default)]
    pub active: FxHashSet<EntityId>,
}

impl Keyframe {
    pub fn is_active(&self, entity: &str) -> bool {
        self.active.contains(entity)
    }
}

/// The keyframes bracketing a target date: `before` is the greatest date at
/// or under the target, `after` the smallest at or over it. When the target
/// sits exactly on a keyframe both point at the same record.
#[derive(Debug, Clone, Copy)]
pub struct Bracket<'a> {
    pub before: Option<&'a Keyframe>,
    pub after: Option<&'a Keyframe>,
}

impl<'a> Bracket<'a> {
    /// The single keyframe that applies when the target does not fall
    /// strictly between two distinct frames: exactly on a keyframe, or past
    /// the last one.
    pub fn single(&self) -> Option<&'a Keyframe> {
        match (self.before, self.after) {
            (Some(before), None) => Some(before),
            (Some(before), Some(after)) if std::ptr::eq(before, after) => Some(before),
            _ => None,
        }
    }
}

pub fn bracket<'a>(frames: &'a [Keyframe], scale: &DateScale, target: f64) -> Bracket<'a> {
    let mut before: Option<(f64, &Keyframe)> = None;
    let mut after: Option<(f64, &Keyframe)> = None;

    for frame in frames {
        let value = scale.numeric(&frame.date);
        if value <= target && before.is_none_or(|(best, _)| value > best) {
            before = Some((value, frame));
        }
        if value >= target && after.is_none_or(|(best, _)| value < best) {
            after = Some((value, frame));
        }
    }

    Bracket {
        before: before.map(|(_, frame)| frame),
        after: after.map(|(_, frame)| frame),
    }
}

/// The keyframe with the smallest absolute numeric distance to the target.
/// Ties keep the first-seen keyframe, so repeated calls are stable.
pub fn nearest<'a>(frames: &'a [Keyframe], scale: &DateScale, target: f64) -> Option<&'a Keyframe> {
    let mut best: Option<(f64, &Keyframe)> = None;
    for frame in frames {
        let distance = (scale.numeric(&frame.date) - target).abs();
        if best.is_none_or(|(b, _)| distance < b) {
            best = Some((distance, frame));
        }
    }
    best.map(|(_, frame)| frame)
}

/// Default scrubber snap threshold, in numeric-date units.
pub const SNAP_THRESHOLD: f64 = 0.05;

/// The raw threshold is widened into the magnetic window the scrubber feel
/// was tuned against; the factor is part of the interaction contract.
const SNAP_WINDOW_FACTOR: f64 = 5.0;

/// `true` when a scrubbed date is close enough to lock onto a keyframe.
pub fn snaps(distance: f64, threshold: f64) -> bool {
    distance.abs() < threshold * SNAP_WINDOW_FACTOR
}

/// The keyframe the scrubber should snap to for `target`, if any.
pub fn snap_target<'a>(
    frames: &'a [Keyframe],
    scale: &DateScale,
    target: f64,
    threshold: f64,
) -> Option<&'a Keyframe> {
    let frame = nearest(frames, scale, target)?;
    snaps(scale.numeric(&frame.date) - target, threshold).then_some(frame)
}
