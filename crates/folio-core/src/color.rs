//! Color handling for Folio diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, plus the two persisted color vocabularies of the
//! data model:
//!
//! - [`Fill`] - a shape fill, where the literal `"transparent"` is a sentinel
//!   distinct from every real color
//! - [`LabelColor`] - a background token drawn from a small fixed palette

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;
use log::warn;
use serde::{Deserialize, Serialize};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_core::color::Color;
    ///
    /// let navy = Color::new("#0f4c8a").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Parses a color, falling back to `fallback` when the string is not a
    /// valid CSS color.
    pub fn parse_or(color_str: &str, fallback: Color) -> Self {
        Self::new(color_str).unwrap_or_else(|err| {
            warn!(value = color_str; "{err}, using fallback");
            fallback
        })
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

/// The persisted fill of a shape.
///
/// `"transparent"` is stored as [`Fill::Transparent`]; any other string is
/// kept verbatim as [`Fill::Solid`] so documents round-trip unchanged.
///
/// # Examples
///
/// ```
/// use folio_core::color::Fill;
///
/// assert_eq!(Fill::from("transparent".to_string()), Fill::Transparent);
/// assert!(Fill::from("#ffffff".to_string()).is_visible());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Fill {
    #[default]
    Transparent,
    Solid(String),
}

impl Fill {
    const TRANSPARENT: &'static str = "transparent";

    /// Returns true unless this is the transparent sentinel
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Transparent)
    }

    /// Resolves the fill into a drawable color; `None` means no fill.
    pub fn to_color(&self) -> Option<Color> {
        match self {
            Self::Transparent => None,
            Self::Solid(value) => Some(Color::parse_or(value, Color::default())),
        }
    }
}

impl From<String> for Fill {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case(Self::TRANSPARENT) {
            Self::Transparent
        } else {
            Self::Solid(value)
        }
    }
}

impl From<Fill> for String {
    fn from(fill: Fill) -> Self {
        match fill {
            Fill::Transparent => Fill::TRANSPARENT.to_string(),
            Fill::Solid(value) => value,
        }
    }
}

/// Background color token of a label.
///
/// Known tokens map to a concrete export color. Unknown tokens are preserved
/// as [`LabelColor::Other`] and export like the default yellow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LabelColor {
    #[default]
    Yellow,
    Blue,
    Green,
    Red,
    Purple,
    Gray,
    Other(String),
}

impl LabelColor {
    /// Returns the persisted palette token
    pub fn token(&self) -> &str {
        match self {
            Self::Yellow => "bg-yellow-100",
            Self::Blue => "bg-blue-100",
            Self::Green => "bg-green-100",
            Self::Red => "bg-red-100",
            Self::Purple => "bg-purple-100",
            Self::Gray => "bg-gray-100",
            Self::Other(token) => token,
        }
    }

    /// Returns the hex fill used when exporting this token
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Yellow | Self::Other(_) => "#fef9c3",
            Self::Blue => "#dbeafe",
            Self::Green => "#dcfce7",
            Self::Red => "#fee2e2",
            Self::Purple => "#f3e8ff",
            Self::Gray => "#f3f4f6",
        }
    }

    /// Resolves this token into a drawable color
    pub fn to_color(&self) -> Color {
        Color::parse_or(self.hex(), Color::default())
    }
}

impl From<String> for LabelColor {
    fn from(value: String) -> Self {
        match value.as_str() {
            "bg-yellow-100" => Self::Yellow,
            "bg-blue-100" => Self::Blue,
            "bg-green-100" => Self::Green,
            "bg-red-100" => Self::Red,
            "bg-purple-100" => Self::Purple,
            "bg-gray-100" => Self::Gray,
            _ => Self::Other(value),
        }
    }
}

impl From<LabelColor> for String {
    fn from(color: LabelColor) -> Self {
        color.token().to_string()
    }
}
