//! Error types for Folio operations.
//!
//! Layout, pagination and interaction never fail. [`FolioError`] covers the
//! surfaces that touch the outside world: documents, files, configuration
//! and encoded export output.

use std::io;

use thiserror::Error;

/// The main error type for Folio operations.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Document error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}
