//! Coordinate transforms.
//!
//! Three coordinate spaces meet in Folio:
//!
//! - **Canvas units**: the logical space every entity position lives in.
//!   One unit is one screen pixel at zoom 1.0 and 1/96 inch on paper.
//! - **Screen space**: pointer coordinates, offset by the canvas origin on
//!   screen and multiplied by the zoom factor ([`ScreenTransform`]).
//! - **Sheet space**: the scaled single-sheet export, where content is
//!   translated to its padded bounding box and uniformly scaled
//!   ([`ScaledSheet`]).
//!
//! Page-relative coordinates for actual-size export are a plain translation
//! by the page origin, see [`crate::pagination::PageGeometry`].

use folio_core::geometry::{Bounds, Insets, Point, Size};

/// Canvas units per inch.
pub const PIXELS_PER_INCH: f64 = 96.0;

/// Print points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Padding added around the content box in scaled single-sheet mode.
pub const SHEET_PADDING: f64 = 20.0;

/// Horizontal sheet space reserved around scaled content, in points.
pub const SHEET_MARGIN_X: f64 = 40.0;

/// Vertical sheet space reserved around scaled content, including the footer, in points.
pub const SHEET_MARGIN_Y: f64 = 60.0;

/// Converts inches to canvas units.
pub fn inches_to_units(inches: f64) -> f64 {
    inches * PIXELS_PER_INCH
}

/// Converts inches to print points.
pub fn inches_to_points(inches: f64) -> f64 {
    inches * POINTS_PER_INCH
}

/// Converts canvas units to print points.
///
/// # Examples
///
/// ```
/// # use folio::transform::units_to_points;
/// assert_eq!(units_to_points(96.0), 72.0);
/// ```
pub fn units_to_points(units: f64) -> f64 {
    units * POINTS_PER_INCH / PIXELS_PER_INCH
}

/// Maps between screen (pointer) coordinates and canvas units.
///
/// `origin` is the screen position of the canvas top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    zoom: f64,
    origin: Point,
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            origin: Point::default(),
        }
    }
}

impl ScreenTransform {
    /// Creates a transform. A zoom that is not a positive finite number is
    /// replaced by 1.0.
    pub fn new(zoom: f64, origin: Point) -> Self {
        Self {
            zoom: sanitize_zoom(zoom),
            origin,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = sanitize_zoom(zoom);
        self
    }

    /// Maps a screen point to canvas units
    pub fn to_canvas(&self, screen: Point) -> Point {
        screen.sub_point(self.origin).scale(1.0 / self.zoom)
    }

    /// Maps a canvas point to screen space
    pub fn to_screen(&self, canvas: Point) -> Point {
        canvas.scale(self.zoom).add_point(self.origin)
    }

    /// Converts a screen-space displacement to canvas units
    pub fn delta_to_canvas(&self, delta: Point) -> Point {
        delta.scale(1.0 / self.zoom)
    }
}

fn sanitize_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() && zoom > 0.0 {
        zoom
    } else {
        1.0
    }
}

/// The uniform fit of a content box onto one physical sheet.
///
/// Sheet coordinates are `(canvas - min) * scale`, where `min` is the top
/// left of the content box after [`SHEET_PADDING`] is added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledSheet {
    min: Point,
    scale: f64,
}

impl ScaledSheet {
    /// Fits `content` onto a sheet of `sheet` points.
    ///
    /// Content extents are floored to one unit so an empty or degenerate box
    /// never divides by zero.
    pub fn fit(content: Bounds, sheet: Size) -> Self {
        let padded = content.add_padding(Insets::uniform(SHEET_PADDING));
        let content_width = padded.width().max(1.0);
        let content_height = padded.height().max(1.0);

        let scale_x = (sheet.width() - SHEET_MARGIN_X) / content_width;
        let scale_y = (sheet.height() - SHEET_MARGIN_Y) / content_height;

        Self {
            min: padded.min_point(),
            scale: scale_x.min(scale_y),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The canvas point that maps to the sheet origin
    pub fn min(&self) -> Point {
        self.min
    }

    /// Maps a canvas point to sheet coordinates
    pub fn to_sheet(&self, canvas: Point) -> Point {
        canvas.sub_point(self.min).scale(self.scale)
    }
}
