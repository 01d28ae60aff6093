//! Command-line argument definitions for the Gantry CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The tool takes no positional input: the topology it
//! renders is fixed. Flags control output path, format, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Gantry diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output file; defaults to a name derived from the
    /// diagram title, written to the working directory
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (png, svg, dot)
    #[arg(short, long, default_value = "png")]
    pub format: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
