//! Pattern-indicator badge placement next to a node side.

use serde::{Deserialize, Serialize};

use crate::model::{CanvasPoint, NodeRect, Side};

/// Gap between a node side and its indicator box, in canvas units.
pub const INDICATOR_GAP: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorBox {
    pub width: f64,
    pub height: f64,
}

/// Center of an indicator box offset outward from `side` by
/// `gap + box_extent / 2`, with the perpendicular coordinate centered on
/// that side.
///
/// Returns `None` when the node is absent or not fully measured. Unlike the
/// edge intersection this never defaults to zero dimensions: a badge rendered
/// at a wrongly derived position is worse than a badge skipped for one frame.
pub fn indicator_position(
    node: Option<&NodeRect>,
    side: Side,
    indicator: IndicatorBox,
    gap: f64,
) -> Option<CanvasPoint> {
    let node = node?;
    let (w, h) = node.measured()?;
    let cx = node.x + w / 2.0;
    let cy = node.y + h / 2.0;

    Some(match side {
        Side::Top => CanvasPoint {
            x: cx,
            y: node.y - gap - indicator.height / 2.0,
        },
        Side::Bottom => CanvasPoint {
            x: cx,
            y: node.y + h + gap + indicator.height / 2.0,
        },
        Side::Left => CanvasPoint {
            x: node.x - gap - indicator.width / 2.0,
            y: cy,
        },
        Side::Right => CanvasPoint {
            x: node.x + w + gap + indicator.width / 2.0,
            y: cy,
        },
    })
}
