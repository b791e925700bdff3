//! Folio CLI library
//!
//! This module contains the core CLI logic for the Folio diagram exporter.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::{info, warn};

use folio::{
    DiagramBuilder, FolioError,
    export::{Exporter, svg::Svg},
    ingest,
};

/// Run the Folio CLI application
///
/// This function loads the input document, paginates and renders it, and
/// writes one SVG file per page into the output directory.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `FolioError` for:
/// - File I/O errors
/// - Configuration loading or override errors
/// - Malformed documents
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), FolioError> {
    info!(
        input_path = args.input,
        output_dir = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = config::apply_overrides(app_config, args)?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let mut schema = builder.try_load(&source)?;
    if args.layout {
        ingest::place_on_grid(&mut schema);
    }

    let printed_at = chrono::Local::now().naive_local();
    let document = builder.export(&schema, printed_at);
    if document.is_empty() {
        warn!(input_path = args.input; "Diagram has no tables or views, nothing to export");
        return Ok(());
    }

    fs::create_dir_all(&args.output)?;
    let mut exporter = Svg::new(&args.output, file_stem(&args.input));
    exporter.export_document(&document)?;

    info!(
        pages = exporter.written().len(),
        output_dir = args.output;
        "Pages exported successfully"
    );

    Ok(())
}

fn file_stem(input: &str) -> String {
    Path::new(input)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "diagram".to_string())
}
