#![forbid(unsafe_code)]

//! Edge and group geometry for context-map canvases.
//!
//! Design goals:
//! - pure, total functions over plain data (no renderer or store types leak in)
//! - graceful degradation on unmeasured or degenerate geometry (no panics; the
//!   interactive layer calls these every frame and must never crash)
//! - deterministic outputs suitable for snapshot tests

pub mod blob;
pub mod container;
pub mod edge;
pub mod geom;
pub mod indicator;
pub mod model;
pub mod stroke;

pub use blob::{BlobOutline, CORNER_COMPENSATION, GroupMember, blob_outline};
pub use container::{ContainerFrame, bounding_box, container_frame, relative_members};
pub use edge::{edge_endpoints, nearest_side, node_intersection, vertical_edge_endpoints};
pub use indicator::{INDICATOR_GAP, IndicatorBox, indicator_position};
pub use model::{Bounds, CanvasPoint, EdgeEndpoints, NodeRect, Side};
pub use stroke::{EDGE_HIT_AREA_WIDTH, EdgeState, StrokeWidths, edge_state, stroke_width};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
