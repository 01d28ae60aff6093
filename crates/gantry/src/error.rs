//! Error types for Gantry operations.
//!
//! This module provides the main error type [`GantryError`] which wraps
//! the error conditions that can occur while validating and rendering a
//! diagram.

use std::io;

use thiserror::Error;

/// The main error type for Gantry operations.
///
/// There is no recoverable-error path: every variant terminates the run.
/// Either the whole diagram renders or the program fails outright.
#[derive(Debug, Error)]
pub enum GantryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for GantryError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
