//! Export functionality for Gantry diagrams.
//!
//! This module converts a validated diagram into DOT source and delegates
//! layout and rasterization to the Graphviz backend. It is the final stage
//! in the Gantry processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Semantic Model
//!     ↓ structure
//! Topology Graph
//!     ↓ export (this module)
//! DOT source → Graphviz backend → Output File
//! ```
//!
//! # Organization
//!
//! - [`dot`]: DOT emission via `dot-structures`/`dot-generator`
//! - [`backend`]: Graphviz execution via `graphviz-rust`
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering backend failures and I/O
//! errors. [`Error`] converts into [`GantryError::Export`] at the crate
//! boundary.
//!
//! [`GantryError::Export`]: crate::GantryError::Export

pub mod backend;
pub mod dot;

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Output formats the renderer can produce.
///
/// `Png` and `Svg` run the Graphviz backend; `Dot` writes the generated
/// DOT source without invoking the backend at all.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rasterized PNG image (default)
    #[default]
    Png,
    /// Scalable vector graphics
    Svg,
    /// Plain DOT source
    Dot,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Dot => "dot",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "dot" => Ok(Self::Dot),
            _ => Err(format!(
                "invalid output format `{s}`, valid values: png, svg, dot"
            )),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Errors that can occur during diagram export.
///
/// This type is converted into [`GantryError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`GantryError::Export`]: crate::GantryError::Export
#[derive(Debug)]
pub enum Error {
    /// The Graphviz backend failed to execute or is unavailable.
    Backend(std::io::Error),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(err) => write!(f, "Graphviz backend error: {err}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Backend(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}
