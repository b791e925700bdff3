//! Snapping rules applied to interactive positions and sizes.
//!
//! A dragged position goes through grid snap, then page-gap snap, then a
//! clamp to non-negative coordinates. A resized dimension is floored to
//! [`MIN_RESIZE`] and grid snapped.

use folio_core::geometry::Point;

use crate::pagination::PageGeometry;

/// Spacing of the snap grid, in canvas units.
pub const GRID_SIZE: f64 = 20.0;

/// Screen-space displacement below which a gesture counts as a click.
pub const DRAG_THRESHOLD: f64 = 5.0;

/// Smallest width or height a resize gesture produces before snapping.
pub const MIN_RESIZE: f64 = 20.0;

/// Rounds a value to the nearest grid line, half-way values rounding up.
///
/// # Examples
///
/// ```
/// # use folio::interaction::snap_to_grid;
/// assert_eq!(snap_to_grid(29.0), 20.0);
/// assert_eq!(snap_to_grid(30.0), 40.0);
/// assert_eq!(snap_to_grid(-30.0), -20.0);
/// ```
pub fn snap_to_grid(value: f64) -> f64 {
    (value / GRID_SIZE + 0.5).floor() * GRID_SIZE
}

/// Grid-snaps both coordinates of a point
pub fn snap_point_to_grid(point: Point) -> Point {
    Point::new(snap_to_grid(point.x()), snap_to_grid(point.y()))
}

/// Runs a raw drag position through the full snapping pipeline.
///
/// Page-gap snapping only applies when `pages` is given.
pub fn drag_position(raw: Point, pages: Option<&PageGeometry>) -> Point {
    let snapped = snap_point_to_grid(raw);
    let snapped = match pages {
        Some(geometry) => geometry.snap_to_page_area(snapped),
        None => snapped,
    };
    snapped.clamp_non_negative()
}

/// The new extent of a dimension dragged by `delta` canvas units
pub fn resize_dimension(initial: f64, delta: f64) -> f64 {
    snap_to_grid((initial + delta).max(MIN_RESIZE))
}

/// Returns true when the pointer moved less than [`DRAG_THRESHOLD`] on both axes
pub fn is_click(down: Point, up: Point) -> bool {
    up.sub_point(down).chebyshev() < DRAG_THRESHOLD
}
