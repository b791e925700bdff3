//! Folio - Pagination, interaction and print export for database diagrams.
//!
//! Folio lays tables, views, relationships, shapes and labels out on an
//! unbounded canvas, partitions that canvas into printable pages, drives
//! drag and resize gestures with grid and page-gap snapping, and exports
//! the result as print-accurate pages.

pub mod config;
pub mod document;
pub mod export;
pub mod graph;
pub mod ingest;
pub mod interaction;
pub mod pagination;
pub mod transform;

mod error;

pub use folio_core::{color, draw, geometry, model};

pub use error::FolioError;

use chrono::NaiveDateTime;
use log::{debug, info};

use config::{AppConfig, ExportMode};
use export::ExportDocument;
use interaction::InteractionController;
use model::DatabaseSchema;
use pagination::{PageGeometry, Pagination};

/// Entry point tying configuration to loading, pagination and export.
///
/// # Examples
///
/// ```
/// use folio::{DiagramBuilder, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let schema = builder.load(r#"{"Tables": [{"Schema": "dbo", "Name": "Orders", "X": 30, "Y": 30}]}"#);
///
/// let pagination = builder.paginate(&schema);
/// assert_eq!(pagination.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parses a document, yielding an empty schema when it is malformed
    pub fn load(&self, text: &str) -> DatabaseSchema {
        document::deserialize(text)
    }

    /// Parses a document, reporting malformed input.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Document`] if `text` is not a valid document.
    pub fn try_load(&self, text: &str) -> Result<DatabaseSchema, FolioError> {
        document::try_deserialize(text)
    }

    /// Serializes a schema as a pretty-printed document.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Document`] if serialization fails.
    pub fn save(&self, schema: &DatabaseSchema) -> Result<String, FolioError> {
        document::serialize(schema)
    }

    /// The page grid of the configured page size
    pub fn page_geometry(&self) -> PageGeometry {
        self.config.page().geometry()
    }

    /// Partitions `schema` into pages of the configured size
    pub fn paginate<'a>(&self, schema: &'a DatabaseSchema) -> Pagination<'a> {
        pagination::paginate(schema, &self.page_geometry())
    }

    /// Renders `schema` into export pages in the configured mode
    pub fn export(&self, schema: &DatabaseSchema, printed_at: NaiveDateTime) -> ExportDocument {
        info!(
            tables = schema.tables.len(),
            views = schema.views.len();
            "Exporting diagram"
        );
        export::render_document(schema, self.config.page(), self.config.export(), printed_at)
    }

    /// Renders `schema` and encodes every page as an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Export`] if a page cannot be encoded.
    pub fn render_svg_pages(
        &self,
        schema: &DatabaseSchema,
        printed_at: NaiveDateTime,
    ) -> Result<Vec<String>, FolioError> {
        let document = self.export(schema, printed_at);
        let pages = document
            .pages()
            .iter()
            .map(export::svg::encode_page)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(pages = pages.len(); "SVG pages encoded");
        Ok(pages)
    }

    /// A controller for the configured page grid.
    ///
    /// Page-gap snapping is only enabled in actual-size mode.
    pub fn controller(&self) -> InteractionController {
        let page_snap = self.config.export().mode() == ExportMode::ActualSize;
        InteractionController::new(self.page_geometry()).with_page_snap(page_snap)
    }
}
