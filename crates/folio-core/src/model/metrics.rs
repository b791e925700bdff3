//! Box metrics and the uniform [`Boundable`] capability.
//!
//! Tables and views do not store a height. Their height is derived from the
//! column count and a [`BoxMetrics`] value describing the rendering scale.
//! Shapes and labels carry explicit sizes and ignore the metrics.

use crate::geometry::{Bounds, Point, Size};

/// Fixed width of every table and view box, in logical units.
pub const BOX_WIDTH: f64 = 200.0;

/// Smallest width or height any entity can report.
pub const MIN_DIMENSION: f64 = 1.0;

/// Interior point of a table or view used as a relationship line endpoint.
pub const ANCHOR_OFFSET: Point = Point::new(100.0, 50.0);

/// Text and row dimensions of a table or view box at a given rendering scale.
///
/// # Examples
///
/// ```
/// # use folio_core::model::BoxMetrics;
/// let metrics = BoxMetrics::actual_size();
/// assert_eq!(metrics.header_height(), 17.0);
/// assert_eq!(metrics.row_height(), 16.0);
/// assert_eq!(metrics.box_height(3), 17.0 + 3.0 * 16.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMetrics {
    width: f64,
    header_font: f64,
    header_height: f64,
    column_font: f64,
    row_height: f64,
}

impl BoxMetrics {
    const HEADER_FONT: f64 = 11.0;
    const HEADER_PADDING: f64 = 6.0;
    const COLUMN_FONT: f64 = 8.0;
    const ROW_PADDING: f64 = 8.0;

    /// Metrics used by the actual-size export and the interactive view.
    pub const fn actual_size() -> Self {
        Self {
            width: BOX_WIDTH,
            header_font: Self::HEADER_FONT,
            header_height: Self::HEADER_FONT + Self::HEADER_PADDING,
            column_font: Self::COLUMN_FONT,
            row_height: Self::COLUMN_FONT + Self::ROW_PADDING,
        }
    }

    /// Metrics the scaled single-sheet export uses to measure content bounds.
    ///
    /// These are coarser than the drawn box so the fit leaves headroom.
    pub const fn sheet_bounds() -> Self {
        Self {
            width: BOX_WIDTH,
            header_font: Self::HEADER_FONT,
            header_height: 30.0,
            column_font: Self::COLUMN_FONT,
            row_height: 16.0,
        }
    }

    /// Metrics for drawing a box on the scaled single sheet.
    ///
    /// Fonts never shrink below 9 (header) and 7 (columns) while the
    /// paddings stay fixed.
    pub fn scaled_sheet(scale: f64) -> Self {
        let header_font = (Self::HEADER_FONT * scale).max(9.0);
        let column_font = (Self::COLUMN_FONT * scale).max(7.0);
        Self {
            width: BOX_WIDTH * scale,
            header_font,
            header_height: header_font + Self::HEADER_PADDING,
            column_font,
            row_height: column_font + Self::ROW_PADDING,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn header_font(&self) -> f64 {
        self.header_font
    }

    pub fn header_height(&self) -> f64 {
        self.header_height
    }

    pub fn column_font(&self) -> f64 {
        self.column_font
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Total height of a box with `columns` rows below the header
    pub fn box_height(&self, columns: usize) -> f64 {
        self.header_height + columns as f64 * self.row_height
    }
}

impl Default for BoxMetrics {
    fn default() -> Self {
        Self::actual_size()
    }
}

/// Anything that occupies a rectangle on the canvas.
///
/// Pagination, export and hit testing consume entities only through this
/// trait.
pub trait Boundable {
    /// Top-left corner in logical units
    fn position(&self) -> Point;

    /// Extent under the given metrics
    fn size_with(&self, metrics: &BoxMetrics) -> Size;

    /// Bounding rectangle under the given metrics, floored to [`MIN_DIMENSION`]
    fn bounds_with(&self, metrics: &BoxMetrics) -> Bounds {
        self.position()
            .to_bounds(self.size_with(metrics).floor_to(MIN_DIMENSION))
    }

    /// Bounding rectangle at actual size
    fn bounds(&self) -> Bounds {
        self.bounds_with(&BoxMetrics::actual_size())
    }
}
