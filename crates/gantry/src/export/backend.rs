//! Graphviz backend invocation.
//!
//! The backend is treated as an opaque collaborator: Gantry hands it a DOT
//! graph together with a layout program, an output format, and an output
//! path, and the backend performs all layout and rasterization. A missing
//! or broken Graphviz installation surfaces as [`Error::Backend`].

use std::{fs, io, path::Path};

use dot_structures::Graph;
use graphviz_rust::{
    cmd::{CommandArg, Format, Layout},
    printer::PrinterContext,
};
use log::{debug, info};

use crate::config::LayoutEngine;

use super::{Error, OutputFormat};

/// Renders the given DOT graph to a file.
///
/// For [`OutputFormat::Dot`] the graph is printed and written directly;
/// no backend runs. For raster/vector formats the Graphviz executable for
/// the selected layout engine is invoked and writes the output file itself.
///
/// # Errors
///
/// Returns [`Error::Io`] if the DOT source cannot be written, or
/// [`Error::Backend`] if the Graphviz executable is missing or exits with
/// a failure.
pub fn render_to_file(
    graph: Graph,
    engine: LayoutEngine,
    format: OutputFormat,
    path: &Path,
) -> Result<(), Error> {
    let mut ctx = PrinterContext::default();

    if format == OutputFormat::Dot {
        debug!("Writing DOT source without invoking the backend");
        let source = graphviz_rust::print(graph, &mut ctx);
        return fs::write(path, source).map_err(Error::Io);
    }

    info!(
        engine = engine.to_string(),
        format = format.to_string(),
        output = path.display().to_string();
        "Invoking Graphviz backend"
    );

    let args = vec![
        CommandArg::Layout(backend_layout(engine)),
        CommandArg::Format(backend_format(format)),
        CommandArg::Output(path.display().to_string()),
    ];

    graphviz_rust::exec(graph, &mut ctx, args).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            Error::Backend(io::Error::new(
                err.kind(),
                format!("Graphviz `{engine}` executable not found on PATH; install Graphviz"),
            ))
        } else {
            Error::Backend(err)
        }
    })?;

    Ok(())
}

/// Maps a [`LayoutEngine`] onto the backend's layout selection.
fn backend_layout(engine: LayoutEngine) -> Layout {
    match engine {
        LayoutEngine::Dot => Layout::Dot,
        LayoutEngine::Neato => Layout::Neato,
        LayoutEngine::Fdp => Layout::Fdp,
        LayoutEngine::Sfdp => Layout::Sfdp,
        LayoutEngine::Circo => Layout::Circo,
        LayoutEngine::Twopi => Layout::Twopi,
    }
}

/// Maps an [`OutputFormat`] onto the backend's format selection.
///
/// # Panics
/// Panics if called with [`OutputFormat::Dot`], which never reaches the
/// backend.
fn backend_format(format: OutputFormat) -> Format {
    match format {
        OutputFormat::Png => Format::Png,
        OutputFormat::Svg => Format::Svg,
        OutputFormat::Dot => unreachable!("DOT output is written without the backend"),
    }
}

#[cfg(test)]
mod tests {
    use gantry_core::semantic::{Diagram, Element, Node, NodeKind, RankDirection, Scope};
    use gantry_core::identifier::Id;

    use crate::export::dot::DotBuilder;

    use super::*;

    fn single_node_graph() -> Graph {
        let diagram = Diagram::new(
            "Backend Test",
            RankDirection::TopBottom,
            Scope::new(vec![Element::Node(Node::new(
                Id::new("app"),
                "App",
                NodeKind::Pod,
            ))]),
        );
        DotBuilder::new(&diagram).build()
    }

    #[test]
    fn test_dot_format_writes_without_backend() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("backend_test.dot");

        render_to_file(
            single_node_graph(),
            LayoutEngine::Dot,
            OutputFormat::Dot,
            &path,
        )
        .expect("DOT write should not require Graphviz");

        let written = std::fs::read_to_string(&path).expect("file exists");
        assert!(written.starts_with("digraph"));
        assert!(written.contains("app"));
    }

    #[test]
    fn test_dot_format_write_failure_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("backend_test.dot");

        let err = render_to_file(
            single_node_graph(),
            LayoutEngine::Dot,
            OutputFormat::Dot,
            &path,
        )
        .unwrap_err();

        assert!(matches!(err, Error::Io(_)));
    }
}
