//! Document persistence.
//!
//! Diagrams are stored as pretty-printed JSON with PascalCase field names.
//! On read, field names are matched case-insensitively and absent or `null`
//! fields take their defaults, so documents written by older or hand-edited
//! tools load.
//!
//! Two read paths exist:
//!
//! - [`try_deserialize`] reports malformed input as an error.
//! - [`deserialize`] never fails; malformed input yields an empty schema.

use log::{debug, warn};
use serde_json::{Map, Value};

use folio_core::model::DatabaseSchema;

use crate::FolioError;

/// Every field name the data model persists.
const FIELD_NAMES: &[&str] = &[
    "Tables",
    "Views",
    "Relationships",
    "Shapes",
    "Labels",
    "StoredProcedures",
    "Functions",
    "Schema",
    "Name",
    "Columns",
    "PrimaryKeys",
    "X",
    "Y",
    "ZIndex",
    "Definition",
    "DataType",
    "MaxLength",
    "IsNullable",
    "IsPrimaryKey",
    "IsForeignKey",
    "FromTable",
    "FromColumn",
    "ToTable",
    "ToColumn",
    "RelationshipName",
    "Id",
    "Type",
    "Width",
    "Height",
    "BorderColor",
    "FillColor",
    "BorderWidth",
    "Text",
    "Color",
];

/// Serializes a schema as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`FolioError::Document`] if serialization fails.
pub fn serialize(schema: &DatabaseSchema) -> Result<String, FolioError> {
    let json = serde_json::to_string_pretty(schema)?;
    debug!(bytes = json.len(); "Schema serialized");
    Ok(json)
}

/// Parses a document, reporting malformed input.
///
/// A literal `null` document yields an empty schema.
///
/// # Errors
///
/// Returns [`FolioError::Document`] for invalid JSON or for fields whose
/// values have the wrong shape.
pub fn try_deserialize(text: &str) -> Result<DatabaseSchema, FolioError> {
    let mut value: Value = serde_json::from_str(text)?;
    if value.is_null() {
        return Ok(DatabaseSchema::default());
    }

    normalize_keys(&mut value);
    let schema: DatabaseSchema = serde_json::from_value(value)?;

    for full_name in schema.duplicate_full_names() {
        warn!(full_name; "Duplicate table or view name, relationships resolve to the first one");
    }

    debug!(
        tables = schema.tables.len(),
        views = schema.views.len(),
        relationships = schema.relationships.len(),
        shapes = schema.shapes.len(),
        labels = schema.labels.len();
        "Schema deserialized"
    );
    Ok(schema)
}

/// Parses a document, falling back to an empty schema on malformed input.
pub fn deserialize(text: &str) -> DatabaseSchema {
    try_deserialize(text).unwrap_or_else(|err| {
        warn!(err:%; "Malformed document, loading an empty schema");
        DatabaseSchema::default()
    })
}

/// Rewrites object keys that match a known field name, ignoring case, and
/// drops `null` members so they fall back to their defaults.
fn normalize_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let entries = std::mem::take(map);
            let mut normalized = Map::with_capacity(entries.len());
            for (key, mut child) in entries {
                if child.is_null() {
                    continue;
                }
                normalize_keys(&mut child);
                normalized.insert(canonical_name(&key), child);
            }
            *map = normalized;
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_keys),
        _ => {}
    }
}

fn canonical_name(key: &str) -> String {
    FIELD_NAMES
        .iter()
        .find(|name| name.eq_ignore_ascii_case(key))
        .map_or_else(|| key.to_string(), |name| (*name).to_string())
}

#[cfg(test)]
mod tests {
    use folio_core::{
        color::{Fill, LabelColor},
        model::{Column, Label, Relationship, Shape, StoredProcedure, Table, View},
    };

    use super::*;

    fn full_schema() -> DatabaseSchema {
        let mut schema = DatabaseSchema::new();
        schema.tables.push(
            Table::new("dbo", "Orders")
                .with_position(30.0, 30.0)
                .add_column(Column::new("Id", "int").primary_key())
                .add_column(Column::new("Note", "nvarchar").with_max_length(200).nullable()),
        );
        schema.views.push(
            View::new("dbo", "OpenOrders")
                .with_position(310.0, 30.0)
                .with_definition("SELECT * FROM dbo.Orders")
                .add_column(Column::new("Id", "int")),
        );
        schema.relationships.push(
            Relationship::new("dbo.OpenOrders", "Id", "dbo.Orders", "Id").with_name("FK_Open"),
        );
        schema.add_shape(
            Shape::new(40.0, 400.0)
                .with_size(120.0, 60.0)
                .with_fill(Fill::Solid("#ffeeaa".to_string())),
        );
        schema.add_label(
            Label::new(200.0, 400.0)
                .with_text("Billing area")
                .with_color(LabelColor::Blue),
        );
        schema.stored_procedures.push(StoredProcedure {
            schema: "dbo".to_string(),
            name: "usp_Close".to_string(),
        });
        schema
    }

    #[test]
    fn test_round_trip() {
        let schema = full_schema();
        let json = serialize(&schema).unwrap();
        let restored = try_deserialize(&json).unwrap();
        assert_eq!(restored, schema);
    }

    #[test]
    fn test_pascal_case_and_pretty() {
        let json = serialize(&full_schema()).unwrap();
        assert!(json.contains("\n"));
        assert!(json.contains("\"Tables\""));
        assert!(json.contains("\"ZIndex\""));
        assert!(json.contains("\"FillColor\": \"#ffeeaa\""));
        assert!(json.contains("\"Color\": \"bg-blue-100\""));
        assert!(!json.contains("FullName"));
    }

    #[test]
    fn test_case_insensitive_fields() {
        let json = r#"{
            "tables": [{"schema": "dbo", "NAME": "Orders", "x": 40, "y": 60, "columns": [{"name": "Id", "datatype": "int", "isprimarykey": true}]}],
            "relationships": [{"fromtable": "dbo.Orders", "totable": "dbo.Orders"}]
        }"#;

        let schema = try_deserialize(json).unwrap();
        assert_eq!(schema.tables[0].full_name(), "dbo.Orders");
        assert_eq!(schema.tables[0].x, 40.0);
        assert!(schema.tables[0].columns[0].is_primary_key);
        assert_eq!(schema.relationships[0].from_table, "dbo.Orders");
    }

    #[test]
    fn test_absent_fields_default() {
        let schema = try_deserialize(r#"{"Tables": [{"Name": "Orders"}]}"#).unwrap();
        assert!(schema.views.is_empty());
        assert!(schema.functions.is_empty());
        assert_eq!(schema.tables[0].z_index, 10);
    }

    #[test]
    fn test_null_document_is_empty() {
        assert_eq!(try_deserialize("null").unwrap(), DatabaseSchema::default());
    }

    #[test]
    fn test_null_collections_default() {
        let json = r#"{
            "Tables": null,
            "Views": [{"Schema": "dbo", "Name": "V", "Columns": null, "X": 10, "Y": null}],
            "Shapes": [{"Id": "s1", "FillColor": null}]
        }"#;

        let schema = try_deserialize(json).unwrap();
        assert!(schema.tables.is_empty());
        assert_eq!(schema.views.len(), 1);
        assert!(schema.views[0].columns.is_empty());
        assert_eq!(schema.views[0].x, 10.0);
        assert_eq!(schema.views[0].y, 0.0);
        assert_eq!(schema.shapes[0].fill_color, Fill::Transparent);

        let lenient = deserialize(json);
        assert_eq!(lenient.views.len(), 1);
        assert_eq!(lenient.views[0].full_name(), "dbo.V");
    }

    #[test]
    fn test_duplicate_full_names_are_reported() {
        let json = r#"{
            "Tables": [{"Schema": "dbo", "Name": "Orders"}, {"Schema": "dbo", "Name": "Orders", "X": 300}],
            "Views": [{"Schema": "dbo", "Name": "Customers"}]
        }"#;

        let schema = try_deserialize(json).unwrap();
        assert_eq!(schema.tables.len(), 2);
        assert_eq!(schema.duplicate_full_names(), vec!["dbo.Orders".to_string()]);
    }

    #[test]
    fn test_malformed_document() {
        assert!(try_deserialize("{ not json").is_err());
        assert!(try_deserialize(r#"{"Tables": 5}"#).is_err());

        assert_eq!(deserialize("{ not json"), DatabaseSchema::default());
        assert_eq!(deserialize(r#"{"Tables": "nope"}"#), DatabaseSchema::default());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let schema = try_deserialize(r#"{"Tables": [], "Theme": "dark"}"#).unwrap();
        assert!(schema.tables.is_empty());
    }
}
