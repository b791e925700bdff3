//! Stroke and line-style definitions.

use crate::color::Color;

/// The dash pattern of a stroke.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dash/gap lengths, e.g. `"6,4"`
    Dashed(String),
}

impl StrokeStyle {
    /// Returns the dasharray value for this style, or None for solid lines
    pub fn dasharray(&self) -> Option<&str> {
        match self {
            Self::Solid => None,
            Self::Dashed(pattern) => Some(pattern),
        }
    }
}

/// Defines how line endpoints are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
}

impl StrokeCap {
    /// Returns the `stroke-linecap` value
    pub fn name(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
        }
    }
}

/// The outline of a rectangle or the body of a line.
///
/// # Examples
///
/// ```
/// use folio_core::{color::Color, draw::{StrokeCap, StrokeDefinition}};
///
/// let stroke = StrokeDefinition::dashed(Color::new("#8AB4FF").unwrap(), 1.0, "6,4")
///     .with_cap(StrokeCap::Round);
/// assert_eq!(stroke.style().dasharray(), Some("6,4"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f64,
    style: StrokeStyle,
    cap: StrokeCap,
}

impl StrokeDefinition {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
            cap: StrokeCap::default(),
        }
    }

    pub fn dashed(color: Color, width: f64, pattern: impl Into<String>) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Dashed(pattern.into()),
            cap: StrokeCap::default(),
        }
    }

    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_has_no_dasharray() {
        let stroke = StrokeDefinition::solid(Color::default(), 1.2);
        assert_eq!(stroke.style().dasharray(), None);
        assert_eq!(stroke.cap(), StrokeCap::Butt);
        assert_eq!(stroke.width(), 1.2);
    }

    #[test]
    fn test_cap_names() {
        assert_eq!(StrokeCap::Butt.name(), "butt");
        assert_eq!(StrokeCap::Round.name(), "round");
    }
}
