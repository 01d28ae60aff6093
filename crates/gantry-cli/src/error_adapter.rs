//! Error adapter for converting GantryError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use gantry::GantryError;

/// Adapter wrapping a [`GantryError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a GantryError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            GantryError::Io(_) => "gantry::io",
            GantryError::Config(_) => "gantry::config",
            GantryError::Graph(_) => "gantry::graph",
            GantryError::Export(_) => "gantry::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            GantryError::Export(_) => Some(Box::new(
                "raster output delegates to Graphviz; check that it is installed and on PATH",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`GantryError`] into a list of reportable errors.
///
/// The list shape mirrors multi-diagnostic reporting even though every
/// current variant yields exactly one report.
pub fn to_reportables(err: &GantryError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_error_report() {
        let err = GantryError::Graph("edge references undeclared node `ghost`".to_string());

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        assert_eq!(
            reportables[0].to_string(),
            "Graph error: edge references undeclared node `ghost`"
        );
        assert_eq!(reportables[0].code().unwrap().to_string(), "gantry::graph");
    }

    #[test]
    fn test_export_error_has_help() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "dot not found");
        let err = GantryError::Export(Box::new(io_err));

        let reportables = to_reportables(&err);
        assert!(reportables[0].help().is_some());
    }

    #[test]
    fn test_config_error_has_no_help() {
        let err = GantryError::Config("bad color".to_string());

        let reportables = to_reportables(&err);
        assert!(reportables[0].help().is_none());
        assert_eq!(reportables[0].code().unwrap().to_string(), "gantry::config");
    }
}
