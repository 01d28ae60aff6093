//! CLI logic for the Gantry diagram tool.
//!
//! This module contains the core CLI logic for the Gantry diagram tool.
//! Importing it never renders anything: generation happens only when
//! [`run`] is called from the binary entry point.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{path::PathBuf, str::FromStr};

use log::info;

use gantry::{DiagramBuilder, GantryError, OutputFormat, topology};

/// Run the Gantry CLI application
///
/// This function builds the Sock Shop topology, renders it through the
/// Gantry pipeline, and writes the resulting artifact. With no flags the
/// output is a PNG named from the diagram title, written to the working
/// directory.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Returns
///
/// The path of the written output file.
///
/// # Errors
///
/// Returns `GantryError` for:
/// - Configuration loading errors
/// - Graph validation errors
/// - Backend and I/O errors
pub fn run(args: &Args) -> Result<PathBuf, GantryError> {
    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    let format = OutputFormat::from_str(&args.format).map_err(GantryError::Config)?;

    // The topology is fixed; there is no input to read
    let diagram = topology::sock_shop();

    let output = match &args.output {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(format!("{}.{}", diagram.output_stem(), format.extension())),
    };

    info!(
        title = diagram.title(),
        output = output.display().to_string(),
        format = format.to_string();
        "Rendering diagram"
    );

    // Process diagram using DiagramBuilder API
    let builder = DiagramBuilder::new(app_config);
    builder.render_file(&diagram, &output, format)?;

    info!(output_file = output.display().to_string(); "Diagram exported successfully");

    Ok(output)
}
