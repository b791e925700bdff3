//! Pointer interaction.
//!
//! [`InteractionController`] is the single writer of positions and sizes
//! after a diagram is loaded. It consumes pointer events, coalesces moves
//! per frame, applies snapping and reports completed gestures to a
//! [`DiagramHost`].
//!
//! ```text
//! Idle ──down on entity──▶ PendingDrag ──move──▶ Dragging ──up──▶ Idle
//!   └───down on handle──▶ Resizing ──────────────────────up──▶ Idle
//! ```
//!
//! A gesture whose pointer-up lands less than [`DRAG_THRESHOLD`] screen
//! pixels from its pointer-down on both axes is a click: it selects rather
//! than moves.

mod controller;
mod frame;
mod highlight;
mod host;
mod snap;

pub use controller::{
    GestureOutcome, InteractionController, LinePreview, Phase, PointerEvent, PointerTarget, Preview,
    ResizeCorner,
};
pub use frame::FrameQueue;
pub use highlight::HighlightState;
pub use host::{DiagramHost, Editor, Selection};
pub use snap::{
    DRAG_THRESHOLD, GRID_SIZE, MIN_RESIZE, drag_position, is_click, resize_dimension, snap_point_to_grid,
    snap_to_grid,
};
