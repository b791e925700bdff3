//! Free-form shapes and text labels.
//!
//! Both carry an explicit size and an id generated once at creation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    color::{Fill, LabelColor},
    geometry::{Point, Size},
    model::{Boundable, BoxMetrics},
};

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// A free-form geometric shape.
///
/// `kind` is a geometric tag such as `"rectangle"`; export draws every kind
/// as its bounding rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Shape {
    id: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub z_index: i32,
    pub border_color: String,
    pub fill_color: Fill,
    pub border_width: i32,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            id: fresh_id(),
            kind: "rectangle".to_string(),
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            z_index: 1,
            border_color: "#000000".to_string(),
            fill_color: Fill::Transparent,
            border_width: 1,
        }
    }
}

impl Shape {
    /// Creates a default rectangle with a fresh id at the given position
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill_color = fill;
        self
    }

    /// The stable identifier assigned at creation
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Boundable for Shape {
    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn size_with(&self, _metrics: &BoxMetrics) -> Size {
        Size::new(self.width, self.height)
    }
}

/// A free-standing text note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Label {
    id: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub z_index: i32,
    pub color: LabelColor,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            id: fresh_id(),
            text: "New Label".to_string(),
            x: 0.0,
            y: 0.0,
            width: 150.0,
            height: 40.0,
            z_index: 5,
            color: LabelColor::default(),
        }
    }
}

impl Label {
    /// Creates a default label with a fresh id at the given position
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_color(mut self, color: LabelColor) -> Self {
        self.color = color;
        self
    }

    /// The stable identifier assigned at creation
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Boundable for Label {
    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn size_with(&self, _metrics: &BoxMetrics) -> Size {
        Size::new(self.width, self.height)
    }
}
