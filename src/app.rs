// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod scanner;
pub mod writer;

use anyhow::{Context, Result};
use std::env;
use std::io::Write;

use self::cli::Cli;
use self::config::{defaults_file_path, load_defaults_file, resolve_config, DefaultsFile};
use self::formatter::OutputGenerator;
use self::models::{ListError, RuntimeConfig};
use self::scanner::Scanner;
use self::writer::OutputSink;

/// Resolves configuration for the parsed arguments and runs the listing.
pub fn run<W: Write>(args: Cli, console: W) -> Result<()> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;

    let defaults = match defaults_file_path() {
        Some(path) => load_defaults_file(&path)?,
        None => DefaultsFile::default(),
    };

    let config = resolve_config(args, defaults, current_dir);
    log::debug!("Resolved configuration: {:?}", config);

    list_directory(&config, console)?;
    Ok(())
}

/// Message for stderr and process exit code for a failed run.
///
/// A missing path is reported as its single line; everything else gets the cause chain.
pub fn failure_report(err: &anyhow::Error) -> (String, i32) {
    match err.downcast_ref::<ListError>() {
        Some(list_err @ ListError::PathNotFound { .. }) => {
            (list_err.to_string(), list_err.exit_code())
        }
        Some(list_err) => (format!("Error: {:#}", err), list_err.exit_code()),
        None => (format!("Error: {:#}", err), 1),
    }
}

/// Validate, enumerate once, then format and emit. Returns the console writer when printing.
pub fn list_directory<W: Write>(
    config: &RuntimeConfig,
    console: W,
) -> Result<Option<W>, ListError> {
    let scanner = Scanner::new(&config.path)?;
    let entries = scanner.scan()?;

    let lines = OutputGenerator::generate_lines(&entries, config);

    let mut sink = OutputSink::open(config, console)?;
    for line in &lines {
        sink.write_line(line)?;
    }
    sink.finish()
}
