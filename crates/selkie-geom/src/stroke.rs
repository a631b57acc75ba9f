//! Edge interaction state and stroke weights.

use serde::{Deserialize, Serialize};

/// Width of the invisible stroke the renderer lays over each edge to widen
/// its pointer hit area.
pub const EDGE_HIT_AREA_WIDTH: f64 = 20.0;

/// Visual state of an edge, in priority order: a selected edge stays
/// "selected" no matter what else is going on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeState {
    Selected,
    Highlighted,
    Hovered,
    Default,
}

pub fn edge_state(selected: bool, highlighted: bool, hovered: bool) -> EdgeState {
    if selected {
        EdgeState::Selected
    } else if highlighted {
        EdgeState::Highlighted
    } else if hovered {
        EdgeState::Hovered
    } else {
        EdgeState::Default
    }
}

/// Stroke widths supplied by the renderer's style system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeWidths {
    pub default: f64,
    pub hover: f64,
    pub selected: f64,
}

/// Highlighted edges render at the selected weight; the two states differ in
/// color only.
pub fn stroke_width(state: EdgeState, widths: &StrokeWidths) -> f64 {
    match state {
        EdgeState::Selected | EdgeState::Highlighted => widths.selected,
        EdgeState::Hovered => widths.hover,
        EdgeState::Default => widths.default,
    }
}
