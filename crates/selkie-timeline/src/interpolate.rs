//! Position and visibility interpolation along the keyframe timeline.
//!
//! All three functions share the same bracket policy (see
//! [`crate::keyframe::bracket`]) but diverge on purpose at the edges:
//! positions never extrapolate backward, opacity cuts hard past the last
//! keyframe while fading smoothly between interior ones, and the boolean
//! visibility variant ORs the bracketing frames instead of fading. The map
//! has no opinion beyond the planned horizon.

use crate::date::DateScale;
use crate::keyframe::{EntityPosition, Keyframe, bracket};

fn progress(scale: &DateScale, before: &Keyframe, after: &Keyframe, target: f64) -> f64 {
    let b = scale.numeric(&before.date);
    let a = scale.numeric(&after.date);
    if a > b { (target - b) / (a - b) } else { 0.0 }
}

fn stored_or(frame: &Keyframe, entity: &str, base: EntityPosition) -> EntityPosition {
    frame.positions.get(entity).copied().unwrap_or(base)
}

fn is_interior<'a>(
    before: Option<&'a Keyframe>,
    after: Option<&'a Keyframe>,
) -> Option<(&'a Keyframe, &'a Keyframe)> {
    match (before, after) {
        (Some(b), Some(a)) if !std::ptr::eq(b, a) => Some((b, a)),
        _ => None,
    }
}

/// Position of `entity` at `date`, starting from its `base` (layout)
/// position.
pub fn position(
    frames: &[Keyframe],
    scale: &DateScale,
    entity: &str,
    date: &str,
    base: EntityPosition,
) -> EntityPosition {
    if frames.is_empty() {
        return base;
    }

    let target = scale.numeric(date);
    let br = bracket(frames, scale, target);

    let Some(before) = br.before else {
        // Keyframes never extrapolate backward.
        return base;
    };

    if let Some((before, after)) = is_interior(Some(before), br.after) {
        let t = progress(scale, before, after, target);
        let from = stored_or(before, entity, base);
        let to = stored_or(after, entity, base);
        return EntityPosition {
            x: from.x + (to.x - from.x) * t,
            y: from.y + (to.y - from.y) * t,
        };
    }

    // Exactly on a keyframe, or past the last one.
    stored_or(before, entity, base)
}

/// Opacity of `entity` at `date`, driven by keyframe active-set membership.
pub fn opacity(frames: &[Keyframe], scale: &DateScale, entity: &str, date: &str) -> f64 {
    if frames.is_empty() {
        return 1.0;
    }

    let target = scale.numeric(date);
    let br = bracket(frames, scale, target);

    let Some(before) = br.before else {
        return 1.0;
    };

    if let Some((before, after)) = is_interior(Some(before), br.after) {
        return match (before.is_active(entity), after.is_active(entity)) {
            (true, true) => 1.0,
            (false, false) => 0.0,
            (true, false) => 1.0 - progress(scale, before, after, target),
            (false, true) => progress(scale, before, after, target),
        };
    }

    // Hard cut at and past the planned horizon, no fractional fade.
    if before.is_active(entity) { 1.0 } else { 0.0 }
}

/// Boolean visibility of `entity` at `date`: between two keyframes an entity
/// stays visible if either bracketing frame lists it.
pub fn visible(frames: &[Keyframe], scale: &DateScale, entity: &str, date: &str) -> bool {
    if frames.is_empty() {
        return true;
    }

    let target = scale.numeric(date);
    let br = bracket(frames, scale, target);

    let Some(before) = br.before else {
        return true;
    };

    if let Some((before, after)) = is_interior(Some(before), br.after) {
        return before.is_active(entity) || after.is_active(entity);
    }

    before.is_active(entity)
}
