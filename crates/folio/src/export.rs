//! Print export.
//!
//! Export turns a schema snapshot into an [`ExportDocument`]: a list of
//! physical pages, each holding layered [`DrawCommand`]s in page-relative
//! content units plus its physical size in points. Encoding those commands
//! into a file format is the job of an [`Exporter`] such as [`svg::Svg`].
//!
//! # Modes
//!
//! - [`ExportMode::ActualSize`] tiles the canvas into pages at print scale,
//!   one export page per cell of the pagination grid.
//! - [`ExportMode::ScaledSingleSheet`] fits every entity onto one sheet with
//!   a uniform scale factor.
//!
//! A schema with no tables and no views exports zero pages in either mode.
//!
//! # Layer order
//!
//! Every page draws its background, relationship lines, tables, views,
//! shapes, labels and finally the footer title block, in that order.

mod actual;
mod render;
mod scaled;
pub mod svg;
mod wrap;

use chrono::NaiveDateTime;
use log::info;
use thiserror::Error;

use folio_core::{
    draw::{DrawCommand, RenderLayer},
    geometry::Size,
    model::DatabaseSchema,
};

use crate::{
    config::{ExportConfig, ExportMode, PageSettings},
    pagination::{PageIndex, paginate},
};

pub use wrap::{LABEL_CHAR_WIDTH, LABEL_LINE_HEIGHT, LABEL_PADDING, wrap_label_text};

/// Errors that can occur while encoding or writing export output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstraction for export backends.
pub trait Exporter {
    /// Encodes every page of `document` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a page cannot be encoded, or
    /// [`Error::Io`] if writing the output fails.
    fn export_document(&mut self, document: &ExportDocument) -> Result<(), Error>;
}

/// One physical page of export output.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPage {
    index: Option<PageIndex>,
    width_points: f64,
    height_points: f64,
    content_size: Size,
    layers: Vec<(RenderLayer, Vec<DrawCommand>)>,
}

impl ExportPage {
    /// The pagination cell this page was cut from; `None` for a scaled sheet
    pub fn index(&self) -> Option<PageIndex> {
        self.index
    }

    pub fn width_points(&self) -> f64 {
        self.width_points
    }

    pub fn height_points(&self) -> f64 {
        self.height_points
    }

    /// Extent of the page in the units its commands are authored in
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Non-empty layers, bottom first
    pub fn layers(&self) -> &[(RenderLayer, Vec<DrawCommand>)] {
        &self.layers
    }

    /// Commands of a single layer
    pub fn layer(&self, layer: RenderLayer) -> &[DrawCommand] {
        self.layers
            .iter()
            .find(|(candidate, _)| *candidate == layer)
            .map(|(_, commands)| commands.as_slice())
            .unwrap_or_default()
    }

    /// All commands in drawing order
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.layers.iter().flat_map(|(_, commands)| commands.iter())
    }

    /// Text runs in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands().filter_map(DrawCommand::as_text)
    }
}

/// A complete export: zero or more pages sharing a document name.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    document_name: String,
    pages: Vec<ExportPage>,
}

impl ExportDocument {
    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    pub fn pages(&self) -> &[ExportPage] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn into_pages(self) -> Vec<ExportPage> {
        self.pages
    }
}

/// Renders `schema` into export pages.
///
/// `printed_at` is the timestamp printed in every footer.
pub fn render_document(
    schema: &DatabaseSchema,
    page: &PageSettings,
    config: &ExportConfig,
    printed_at: NaiveDateTime,
) -> ExportDocument {
    let document_name = page.document_name().to_string();

    if schema.has_no_boxes() {
        info!(document = document_name; "No tables or views, exporting an empty document");
        return ExportDocument {
            document_name,
            pages: Vec::new(),
        };
    }

    let title = render::TitleBlock::new(config.brand_label(), &document_name, printed_at);
    let sheet = Size::new(page.width_points(), page.height_points());

    let pages = match config.mode() {
        ExportMode::ActualSize => {
            let pagination = paginate(schema, &page.geometry());
            actual::render_pages(&pagination, &title, sheet)
        }
        ExportMode::ScaledSingleSheet => vec![scaled::render_sheet(schema, &title, sheet)],
    };

    info!(mode:? = config.mode(), pages = pages.len(); "Export rendered");
    ExportDocument {
        document_name,
        pages,
    }
}
