//! Tables, views and their columns.

use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Point, Size},
    model::{Boundable, BoxMetrics},
};

/// Stacking order assigned to tables and views that do not specify one.
pub const DEFAULT_BOX_Z_INDEX: i32 = 10;

/// Joins a schema and an object name into the `schema.name` join key.
pub fn full_name(schema: &str, name: &str) -> String {
    format!("{schema}.{name}")
}

/// A single column of a table or view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub max_length: Option<i64>,
    pub is_nullable: bool,
    pub is_primary_key: bool,
    pub is_foreign_key: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            ..Self::default()
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self.is_nullable = false;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn foreign_key(mut self) -> Self {
        self.is_foreign_key = true;
        self
    }

    pub fn with_max_length(mut self, max_length: i64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Data type as printed in a box, e.g. `nvarchar(50)` or `varbinary(max)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use folio_core::model::Column;
    /// assert_eq!(Column::new("Name", "nvarchar").with_max_length(50).display_type(), "nvarchar(50)");
    /// assert_eq!(Column::new("Blob", "varbinary").display_type(), "varbinary(max)");
    /// assert_eq!(Column::new("Id", "int").display_type(), "int");
    /// ```
    pub fn display_type(&self) -> String {
        if let Some(max_length) = self.max_length {
            return format!("{}({max_length})", self.data_type);
        }

        let lowered = self.data_type.to_lowercase();
        if lowered.contains("char") || lowered.contains("binary") {
            format!("{}(max)", self.data_type)
        } else {
            self.data_type.clone()
        }
    }
}

/// A database table placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Table {
    pub schema: String,
    pub name: String,
    pub columns: Vec<Column>,
    pub primary_keys: Vec<String>,
    pub x: f64,
    pub y: f64,
    pub z_index: i32,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            schema: String::new(),
            name: String::new(),
            columns: Vec::new(),
            primary_keys: Vec::new(),
            x: 0.0,
            y: 0.0,
            z_index: DEFAULT_BOX_Z_INDEX,
        }
    }
}

impl Table {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Appends a column, recording it as a primary key when flagged
    pub fn add_column(mut self, column: Column) -> Self {
        if column.is_primary_key {
            self.primary_keys.push(column.name.clone());
        }
        self.columns.push(column);
        self
    }

    /// The `schema.name` join key, always derived from the current fields
    pub fn full_name(&self) -> String {
        full_name(&self.schema, &self.name)
    }
}

impl Boundable for Table {
    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn size_with(&self, metrics: &BoxMetrics) -> Size {
        Size::new(metrics.width(), metrics.box_height(self.columns.len()))
    }
}

/// A database view placed on the canvas.
///
/// The definition is informational and never affects layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct View {
    pub schema: String,
    pub name: String,
    pub definition: String,
    pub columns: Vec<Column>,
    pub x: f64,
    pub y: f64,
    pub z_index: i32,
}

impl Default for View {
    fn default() -> Self {
        Self {
            schema: String::new(),
            name: String::new(),
            definition: String::new(),
            columns: Vec::new(),
            x: 0.0,
            y: 0.0,
            z_index: DEFAULT_BOX_Z_INDEX,
        }
    }
}

impl View {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    pub fn add_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// The `schema.name` join key, always derived from the current fields
    pub fn full_name(&self) -> String {
        full_name(&self.schema, &self.name)
    }
}

impl Boundable for View {
    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn size_with(&self, metrics: &BoxMetrics) -> Size {
        Size::new(metrics.width(), metrics.box_height(self.columns.len()))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_full_name_tracks_renames() {
        let mut table = Table::new("dbo", "Orders");
        assert_eq!(table.full_name(), "dbo.Orders");

        table.schema = "sales".to_string();
        table.name = "Order".to_string();
        assert_eq!(table.full_name(), "sales.Order");
    }

    #[test]
    fn test_add_column_records_primary_keys() {
        let table = Table::new("dbo", "Orders")
            .add_column(Column::new("Id", "int").primary_key())
            .add_column(Column::new("CustomerId", "int").foreign_key());

        assert_eq!(table.primary_keys, vec!["Id".to_string()]);
        assert_eq!(table.columns.len(), 2);
        assert!(!table.columns[0].is_nullable);
    }

    #[test]
    fn test_table_height_is_derived() {
        let table = Table::new("dbo", "Orders")
            .with_position(30.0, 30.0)
            .add_column(Column::new("Id", "int"))
            .add_column(Column::new("Total", "money"));

        let bounds = table.bounds();
        assert_approx_eq!(f64, bounds.min_x(), 30.0);
        assert_approx_eq!(f64, bounds.width(), 200.0);
        assert_approx_eq!(f64, bounds.height(), 17.0 + 2.0 * 16.0);

        let sheet = table.bounds_with(&BoxMetrics::sheet_bounds());
        assert_approx_eq!(f64, sheet.height(), 62.0);
    }

    #[test]
    fn test_view_defaults() {
        let view = View::new("dbo", "ActiveCustomers").with_definition("SELECT 1");
        assert_eq!(view.z_index, DEFAULT_BOX_Z_INDEX);
        assert_eq!(view.full_name(), "dbo.ActiveCustomers");
        assert_approx_eq!(f64, view.bounds().height(), 17.0);
    }

    #[test]
    fn test_display_type_case_insensitive() {
        assert_eq!(Column::new("Code", "NCHAR").display_type(), "NCHAR(max)");
        assert_eq!(
            Column::new("Hash", "binary").with_max_length(32).display_type(),
            "binary(32)"
        );
    }
}
