//! Relationships and the informational routine records.

use serde::{Deserialize, Serialize};

use crate::model::table::full_name;

/// A foreign-key relationship between two tables or views.
///
/// Endpoints are `schema.name` strings, not handles. A relationship whose
/// endpoint matches no live entity stays in the schema and is simply not
/// drawn; renaming an entity does not rewrite existing relationships.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Relationship {
    pub from_table: String,
    pub from_column: String,
    pub to_table: String,
    pub to_column: String,
    pub relationship_name: String,
}

impl Relationship {
    pub fn new(
        from_table: impl Into<String>,
        from_column: impl Into<String>,
        to_table: impl Into<String>,
        to_column: impl Into<String>,
    ) -> Self {
        Self {
            from_table: from_table.into(),
            from_column: from_column.into(),
            to_table: to_table.into(),
            to_column: to_column.into(),
            relationship_name: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.relationship_name = name.into();
        self
    }

    /// Returns true if either endpoint names `full_name`
    pub fn touches(&self, full_name: &str) -> bool {
        self.from_table == full_name || self.to_table == full_name
    }

    /// Returns the endpoint opposite to `full_name`, if it is an endpoint at all
    pub fn other_end(&self, full_name: &str) -> Option<&str> {
        if self.from_table == full_name {
            Some(&self.to_table)
        } else if self.to_table == full_name {
            Some(&self.from_table)
        } else {
            None
        }
    }
}

/// A stored procedure, carried through documents unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StoredProcedure {
    pub schema: String,
    pub name: String,
}

impl StoredProcedure {
    pub fn full_name(&self) -> String {
        full_name(&self.schema, &self.name)
    }
}

/// A database function, carried through documents unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DatabaseFunction {
    pub schema: String,
    pub name: String,
}

impl DatabaseFunction {
    pub fn full_name(&self) -> String {
        full_name(&self.schema, &self.name)
    }
}
