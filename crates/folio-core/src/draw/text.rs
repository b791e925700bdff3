//! Text run styling.

use crate::color::Color;

/// Monospace font stack used for every exported text run.
pub const FONT_FAMILY: &str = "Consolas, Monaco, 'Courier New', monospace";

/// Horizontal alignment of a text run relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the `text-anchor` value
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Font, alignment and color of a text run.
///
/// The anchor point of a run is its baseline position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    font_size: f64,
    weight: FontWeight,
    anchor: TextAnchor,
    color: Color,
}

impl TextStyle {
    pub fn new(font_size: f64, color: Color) -> Self {
        Self {
            font_size,
            weight: FontWeight::Normal,
            anchor: TextAnchor::Start,
            color,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn color(&self) -> Color {
        self.color
    }
}
