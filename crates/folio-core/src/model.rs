//! The diagram data model.
//!
//! [`DatabaseSchema`] is the aggregate root. It owns every table, view,
//! relationship, shape and label as insertion-ordered collections.
//!
//! # Overview
//!
//! - [`Table`], [`View`], [`Column`] - database objects, keyed by `schema.name`
//! - [`Relationship`] - a weak, name-keyed link between two boxes
//! - [`Shape`], [`Label`] - free-form annotations with stable ids
//! - [`Boundable`] - the uniform rectangle capability shared by all four
//!   placed kinds
//! - [`EntityKey`], [`Entity`] - a typed handle to, and a borrowed view of,
//!   any placed entity

mod annotation;
mod metrics;
mod relationship;
mod table;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

pub use annotation::{Label, Shape};
pub use metrics::{ANCHOR_OFFSET, BOX_WIDTH, Boundable, BoxMetrics, MIN_DIMENSION};
pub use relationship::{DatabaseFunction, Relationship, StoredProcedure};
pub use table::{Column, DEFAULT_BOX_Z_INDEX, Table, View, full_name};

/// The four kinds of placed entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Table,
    View,
    Shape,
    Label,
}

impl EntityKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::View => "View",
            Self::Shape => "Shape",
            Self::Label => "Label",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifies one placed entity.
///
/// Tables and views are keyed by full name, shapes and labels by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKey {
    Table(String),
    View(String),
    Shape(String),
    Label(String),
}

impl EntityKey {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Table(_) => EntityKind::Table,
            Self::View(_) => EntityKind::View,
            Self::Shape(_) => EntityKind::Shape,
            Self::Label(_) => EntityKind::Label,
        }
    }

    /// The full name or id carried by the key
    pub fn id(&self) -> &str {
        match self {
            Self::Table(id) | Self::View(id) | Self::Shape(id) | Self::Label(id) => id,
        }
    }

    /// Returns true for tables and views, the kinds relationships can reference
    pub fn is_box(&self) -> bool {
        matches!(self, Self::Table(_) | Self::View(_))
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}

/// A borrowed view of any placed entity.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Table(&'a Table),
    View(&'a View),
    Shape(&'a Shape),
    Label(&'a Label),
}

impl Entity<'_> {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Table(_) => EntityKind::Table,
            Self::View(_) => EntityKind::View,
            Self::Shape(_) => EntityKind::Shape,
            Self::Label(_) => EntityKind::Label,
        }
    }

    pub fn key(&self) -> EntityKey {
        match self {
            Self::Table(table) => EntityKey::Table(table.full_name()),
            Self::View(view) => EntityKey::View(view.full_name()),
            Self::Shape(shape) => EntityKey::Shape(shape.id().to_string()),
            Self::Label(label) => EntityKey::Label(label.id().to_string()),
        }
    }

    pub fn z_index(&self) -> i32 {
        match self {
            Self::Table(table) => table.z_index,
            Self::View(view) => view.z_index,
            Self::Shape(shape) => shape.z_index,
            Self::Label(label) => label.z_index,
        }
    }
}

impl Boundable for Entity<'_> {
    fn position(&self) -> Point {
        match self {
            Self::Table(table) => table.position(),
            Self::View(view) => view.position(),
            Self::Shape(shape) => shape.position(),
            Self::Label(label) => label.position(),
        }
    }

    fn size_with(&self, metrics: &BoxMetrics) -> Size {
        match self {
            Self::Table(table) => table.size_with(metrics),
            Self::View(view) => view.size_with(metrics),
            Self::Shape(shape) => shape.size_with(metrics),
            Self::Label(label) => label.size_with(metrics),
        }
    }
}

/// The whole diagram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DatabaseSchema {
    pub tables: Vec<Table>,
    pub views: Vec<View>,
    pub relationships: Vec<Relationship>,
    pub shapes: Vec<Shape>,
    pub labels: Vec<Label>,
    pub stored_procedures: Vec<StoredProcedure>,
    pub functions: Vec<DatabaseFunction>,
}

impl DatabaseSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when there is nothing to draw a box for
    pub fn has_no_boxes(&self) -> bool {
        self.tables.is_empty() && self.views.is_empty()
    }

    /// Iterates all placed entities: tables, views, shapes, then labels
    pub fn entities(&self) -> impl Iterator<Item = Entity<'_>> {
        self.tables
            .iter()
            .map(Entity::Table)
            .chain(self.views.iter().map(Entity::View))
            .chain(self.shapes.iter().map(Entity::Shape))
            .chain(self.labels.iter().map(Entity::Label))
    }

    /// Iterates tables then views
    pub fn boxes(&self) -> impl Iterator<Item = Entity<'_>> {
        self.tables
            .iter()
            .map(Entity::Table)
            .chain(self.views.iter().map(Entity::View))
    }

    /// Finds the table or view whose full name is exactly `full_name`.
    ///
    /// Tables win over views when both share a name.
    pub fn find_box(&self, full_name: &str) -> Option<Entity<'_>> {
        self.boxes().find(|entity| match entity {
            Entity::Table(table) => table.full_name() == full_name,
            Entity::View(view) => view.full_name() == full_name,
            _ => false,
        })
    }

    /// Looks up the entity named by `key`
    pub fn find(&self, key: &EntityKey) -> Option<Entity<'_>> {
        match key {
            EntityKey::Table(name) => self
                .tables
                .iter()
                .find(|table| table.full_name() == *name)
                .map(Entity::Table),
            EntityKey::View(name) => self
                .views
                .iter()
                .find(|view| view.full_name() == *name)
                .map(Entity::View),
            EntityKey::Shape(id) => self
                .shapes
                .iter()
                .find(|shape| shape.id() == id)
                .map(Entity::Shape),
            EntityKey::Label(id) => self
                .labels
                .iter()
                .find(|label| label.id() == id)
                .map(Entity::Label),
        }
    }

    /// Moves an entity, clamping the position to non-negative coordinates.
    ///
    /// Returns false when no entity matches `key`.
    pub fn set_position(&mut self, key: &EntityKey, position: Point) -> bool {
        let position = position.clamp_non_negative();
        let slot = match key {
            EntityKey::Table(name) => self
                .tables
                .iter_mut()
                .find(|table| table.full_name() == *name)
                .map(|table| (&mut table.x, &mut table.y)),
            EntityKey::View(name) => self
                .views
                .iter_mut()
                .find(|view| view.full_name() == *name)
                .map(|view| (&mut view.x, &mut view.y)),
            EntityKey::Shape(id) => self
                .shapes
                .iter_mut()
                .find(|shape| shape.id() == id)
                .map(|shape| (&mut shape.x, &mut shape.y)),
            EntityKey::Label(id) => self
                .labels
                .iter_mut()
                .find(|label| label.id() == id)
                .map(|label| (&mut label.x, &mut label.y)),
        };

        match slot {
            Some((x, y)) => {
                *x = position.x();
                *y = position.y();
                true
            }
            None => false,
        }
    }

    /// Resizes a shape or label, flooring each dimension to [`MIN_DIMENSION`].
    ///
    /// Tables and views have derived sizes, so this returns false for them.
    pub fn set_size(&mut self, key: &EntityKey, size: Size) -> bool {
        let size = size.floor_to(MIN_DIMENSION);
        let slot = match key {
            EntityKey::Shape(id) => self
                .shapes
                .iter_mut()
                .find(|shape| shape.id() == id)
                .map(|shape| (&mut shape.width, &mut shape.height)),
            EntityKey::Label(id) => self
                .labels
                .iter_mut()
                .find(|label| label.id() == id)
                .map(|label| (&mut label.width, &mut label.height)),
            EntityKey::Table(_) | EntityKey::View(_) => None,
        };

        match slot {
            Some((width, height)) => {
                *width = size.width();
                *height = size.height();
                true
            }
            None => false,
        }
    }

    /// Adds a shape and returns its key
    pub fn add_shape(&mut self, shape: Shape) -> EntityKey {
        let key = EntityKey::Shape(shape.id().to_string());
        self.shapes.push(shape);
        key
    }

    /// Adds a label and returns its key
    pub fn add_label(&mut self, label: Label) -> EntityKey {
        let key = EntityKey::Label(label.id().to_string());
        self.labels.push(label);
        key
    }

    /// Removes an entity. Relationships that referenced it are left dangling.
    pub fn remove(&mut self, key: &EntityKey) -> bool {
        let before = self.entities().count();
        match key {
            EntityKey::Table(name) => self.tables.retain(|table| table.full_name() != *name),
            EntityKey::View(name) => self.views.retain(|view| view.full_name() != *name),
            EntityKey::Shape(id) => self.shapes.retain(|shape| shape.id() != id),
            EntityKey::Label(id) => self.labels.retain(|label| label.id() != id),
        }
        self.entities().count() != before
    }

    /// Full names shared by more than one table or view, in first-seen order
    pub fn duplicate_full_names(&self) -> Vec<String> {
        let mut seen = Vec::new();
        let mut duplicates = Vec::new();
        for entity in self.boxes() {
            let name = entity.key().id().to_string();
            if seen.contains(&name) {
                if !duplicates.contains(&name) {
                    duplicates.push(name);
                }
            } else {
                seen.push(name);
            }
        }
        duplicates
    }
}
