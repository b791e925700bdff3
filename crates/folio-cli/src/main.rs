//! Folio CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use folio_cli::{Args, error_adapter::to_reportables};

fn main() {
    // Panics during export get the same graphical report as errors
    miette::set_panic_hook();

    let args = Args::parse();

    // An unknown level still runs the export, just quieter
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?, input = args.input; "Starting Folio");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = folio_cli::run(&args) {
        let reporter = miette::GraphicalReportHandler::new();

        // One report per reportable, each logged as its own error record
        for reportable in to_reportables(&err) {
            let mut report = String::new();
            reporter
                .render_report(&mut report, &reportable)
                .expect("Writing to String buffer is infallible");

            error!("{report}");
        }

        process::exit(1);
    }

    info!(output_dir = args.output; "Export finished");
}
