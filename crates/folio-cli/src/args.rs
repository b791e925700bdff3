//! Command-line argument definitions for the Folio CLI.
//!
//! Page and export flags override the matching values of the loaded
//! configuration file.

use clap::Parser;

/// Command-line arguments for the Folio diagram exporter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram document (JSON)
    #[arg(help = "Path to the input document")]
    pub input: String,

    /// Directory the page SVG files are written to
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Page size preset (cp-custom, letter, custom)
    #[arg(long)]
    pub preset: Option<String>,

    /// Custom page width in inches
    #[arg(long)]
    pub width: Option<f64>,

    /// Custom page height in inches
    #[arg(long)]
    pub height: Option<f64>,

    /// Document name printed in the footer
    #[arg(long)]
    pub name: Option<String>,

    /// Export mode (actual-size, scaled-single-sheet)
    #[arg(long)]
    pub mode: Option<String>,

    /// Place tables and views on the initial grid before exporting
    #[arg(long)]
    pub layout: bool,
}
