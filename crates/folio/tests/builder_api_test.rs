//! Integration tests for the DiagramBuilder API

use chrono::{NaiveDate, NaiveDateTime};

use folio::{
    DiagramBuilder, FolioError,
    config::{AppConfig, ExportConfig, ExportMode, PagePreset, PageSettings},
    interaction::{PointerEvent, PointerTarget},
    model::EntityKey,
};

const DOCUMENT: &str = r#"{
    "Tables": [
        {
            "Schema": "dbo",
            "Name": "Orders",
            "X": 30,
            "Y": 30,
            "Columns": [
                { "Name": "Id", "DataType": "int", "IsPrimaryKey": true },
                { "Name": "CustomerId", "DataType": "int", "IsForeignKey": true }
            ]
        },
        { "Schema": "dbo", "Name": "Customers", "X": 310, "Y": 30 }
    ],
    "Relationships": [
        { "FromTable": "dbo.Orders", "FromColumn": "CustomerId", "ToTable": "dbo.Customers", "ToColumn": "Id" }
    ]
}"#;

fn printed_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 1)
        .and_then(|date| date.and_hms_opt(8, 0, 0))
        .expect("valid timestamp")
}

#[test]
fn test_builder_default() {
    let builder = DiagramBuilder::default();
    assert_eq!(builder.config(), &AppConfig::default());
    assert_eq!(builder.page_geometry().page_width(), 3072.0);
}

#[test]
fn test_load_and_save_round_trip() {
    let builder = DiagramBuilder::default();
    let schema = builder.try_load(DOCUMENT).expect("Failed to load document");
    assert_eq!(schema.tables.len(), 2);

    let saved = builder.save(&schema).expect("Failed to save schema");
    let reloaded = builder.try_load(&saved).expect("Failed to reload");
    assert_eq!(reloaded, schema);
}

#[test]
fn test_malformed_document() {
    let builder = DiagramBuilder::default();
    assert!(builder.load("{ not json").tables.is_empty());
    assert!(matches!(builder.try_load("{ not json"), Err(FolioError::Document(_))));
}

#[test]
fn test_render_svg_pages() {
    let builder = DiagramBuilder::default();
    let schema = builder.load(DOCUMENT);

    let pages = builder
        .render_svg_pages(&schema, printed_at())
        .expect("Failed to render pages");
    assert_eq!(pages.len(), 1);
    assert!(pages[0].contains("<svg"));
    assert!(pages[0].contains("</svg>"));
    assert!(pages[0].contains("dbo.Orders"));
    assert!(pages[0].contains("Printed: 2026-10-01 08:00"));
}

#[test]
fn test_scaled_mode_from_config() {
    let mut page = PageSettings::default();
    page.apply_preset(PagePreset::Letter);
    page.set_document_name("Sales");
    let config = AppConfig::new(page, ExportConfig::new(ExportMode::ScaledSingleSheet, "Acme"));

    let builder = DiagramBuilder::new(config);
    let schema = builder.load(DOCUMENT);
    let document = builder.export(&schema, printed_at());

    assert_eq!(document.len(), 1);
    assert_eq!(document.document_name(), "Sales");
    let texts: Vec<&str> = document.pages()[0].texts().collect();
    assert!(texts.contains(&"Acme"));
    assert!(texts.contains(&"Sales"));
}

#[test]
fn test_controller_from_builder() {
    let builder = DiagramBuilder::default();
    let mut editor = folio::interaction::Editor::new(builder.load(DOCUMENT));
    let mut controller = builder.controller();

    let orders = EntityKey::Table("dbo.Orders".to_string());
    let target = PointerTarget::Entity(orders.clone());
    assert!(controller.pointer_down(editor.schema(), &target, PointerEvent::new(40.0, 40.0)));
    controller.pointer_up(&mut editor, &target, PointerEvent::new(95.0, 40.0));

    let table = &editor.schema().tables[0];
    assert_eq!((table.x, table.y), (80.0, 40.0));
}
