//! The drawing primitives emitted by export.

use crate::{
    color::Color,
    draw::{StrokeDefinition, TextStyle},
    geometry::{Bounds, Point},
};

/// One vector drawing primitive, in page-relative content units.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// An axis-aligned rectangle. `fill` of `None` leaves the interior empty.
    Rect {
        bounds: Bounds,
        fill: Option<Color>,
        fill_opacity: f64,
        stroke: Option<StrokeDefinition>,
    },
    /// A straight line segment.
    Line {
        from: Point,
        to: Point,
        stroke: StrokeDefinition,
    },
    /// A single line of text anchored at its baseline.
    Text {
        position: Point,
        content: String,
        style: TextStyle,
    },
}

impl DrawCommand {
    /// A rectangle filled with an opaque color and no outline
    pub fn filled_rect(bounds: Bounds, fill: Color) -> Self {
        Self::Rect {
            bounds,
            fill: Some(fill),
            fill_opacity: 1.0,
            stroke: None,
        }
    }

    /// A rectangle with an outline and no fill
    pub fn outlined_rect(bounds: Bounds, stroke: StrokeDefinition) -> Self {
        Self::Rect {
            bounds,
            fill: None,
            fill_opacity: 1.0,
            stroke: Some(stroke),
        }
    }

    pub fn line(from: Point, to: Point, stroke: StrokeDefinition) -> Self {
        Self::Line { from, to, stroke }
    }

    pub fn text(position: Point, content: impl Into<String>, style: TextStyle) -> Self {
        Self::Text {
            position,
            content: content.into(),
            style,
        }
    }

    /// Returns the text content for text runs
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}
