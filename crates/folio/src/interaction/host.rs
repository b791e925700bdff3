//! The callbacks that receive committed gesture results.

use indexmap::IndexSet;
use log::debug;

use folio_core::{
    geometry::{Point, Size},
    model::{DatabaseSchema, EntityKey, EntityKind},
};

/// Receiver of gesture results, called once when a gesture completes.
///
/// Intermediate per-frame positions never reach the host; they are exposed
/// as previews on the controller instead.
pub trait DiagramHost {
    fn update_table_position(&mut self, name: &str, x: f64, y: f64);
    fn update_view_position(&mut self, name: &str, x: f64, y: f64);
    fn update_shape_position(&mut self, id: &str, x: f64, y: f64);
    fn update_label_position(&mut self, id: &str, x: f64, y: f64);
    fn update_shape_size(&mut self, id: &str, width: f64, height: f64);
    fn update_label_size(&mut self, id: &str, width: f64, height: f64);

    /// A click on an entity. `additive` is set when a modifier key was held.
    fn select_object(&mut self, id: &str, kind: EntityKind, additive: bool);

    /// A click on the empty canvas.
    fn deselect_all(&mut self);
}

/// Dispatches a committed position to the matching host callback
pub(crate) fn commit_position<H: DiagramHost + ?Sized>(host: &mut H, key: &EntityKey, position: Point) {
    let (x, y) = (position.x(), position.y());
    match key {
        EntityKey::Table(name) => host.update_table_position(name, x, y),
        EntityKey::View(name) => host.update_view_position(name, x, y),
        EntityKey::Shape(id) => host.update_shape_position(id, x, y),
        EntityKey::Label(id) => host.update_label_position(id, x, y),
    }
}

/// Dispatches a committed size to the matching host callback
pub(crate) fn commit_size<H: DiagramHost + ?Sized>(host: &mut H, key: &EntityKey, size: Size) {
    let (width, height) = (size.width(), size.height());
    match key {
        EntityKey::Shape(id) => host.update_shape_size(id, width, height),
        EntityKey::Label(id) => host.update_label_size(id, width, height),
        EntityKey::Table(_) | EntityKey::View(_) => {}
    }
}

/// The set of selected entities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    items: IndexSet<EntityKey>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `key`. Additive selection toggles membership, plain selection
    /// replaces the whole set.
    pub fn select(&mut self, key: EntityKey, additive: bool) {
        if !additive {
            self.items.clear();
            self.items.insert(key);
        } else if !self.items.shift_remove(&key) {
            self.items.insert(key);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, key: &EntityKey) -> bool {
        self.items.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityKey> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A schema paired with a selection: the reference [`DiagramHost`].
#[derive(Debug, Clone, Default)]
pub struct Editor {
    schema: DatabaseSchema,
    selection: Selection,
}

impl Editor {
    pub fn new(schema: DatabaseSchema) -> Self {
        Self {
            schema,
            selection: Selection::default(),
        }
    }

    pub fn schema(&self) -> &DatabaseSchema {
        &self.schema
    }

    pub fn schema_mut(&mut self) -> &mut DatabaseSchema {
        &mut self.schema
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn into_schema(self) -> DatabaseSchema {
        self.schema
    }

    fn move_to(&mut self, key: EntityKey, x: f64, y: f64) {
        if !self.schema.set_position(&key, Point::new(x, y)) {
            debug!(entity:% = key; "Position update for unknown entity ignored");
        }
    }

    fn resize_to(&mut self, key: EntityKey, width: f64, height: f64) {
        if !self.schema.set_size(&key, Size::new(width, height)) {
            debug!(entity:% = key; "Size update for unknown entity ignored");
        }
    }
}

impl DiagramHost for Editor {
    fn update_table_position(&mut self, name: &str, x: f64, y: f64) {
        self.move_to(EntityKey::Table(name.to_string()), x, y);
    }

    fn update_view_position(&mut self, name: &str, x: f64, y: f64) {
        self.move_to(EntityKey::View(name.to_string()), x, y);
    }

    fn update_shape_position(&mut self, id: &str, x: f64, y: f64) {
        self.move_to(EntityKey::Shape(id.to_string()), x, y);
    }

    fn update_label_position(&mut self, id: &str, x: f64, y: f64) {
        self.move_to(EntityKey::Label(id.to_string()), x, y);
    }

    fn update_shape_size(&mut self, id: &str, width: f64, height: f64) {
        self.resize_to(EntityKey::Shape(id.to_string()), width, height);
    }

    fn update_label_size(&mut self, id: &str, width: f64, height: f64) {
        self.resize_to(EntityKey::Label(id.to_string()), width, height);
    }

    fn select_object(&mut self, id: &str, kind: EntityKind, additive: bool) {
        let key = match kind {
            EntityKind::Table => EntityKey::Table(id.to_string()),
            EntityKind::View => EntityKey::View(id.to_string()),
            EntityKind::Shape => EntityKey::Shape(id.to_string()),
            EntityKind::Label => EntityKey::Label(id.to_string()),
        };
        self.selection.select(key, additive);
    }

    fn deselect_all(&mut self) {
        self.selection.clear();
    }
}
