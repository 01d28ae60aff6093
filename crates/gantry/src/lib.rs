//! Gantry - Architecture diagram rendering for the Sock Shop reference deployment.
//!
//! Gantry declares a typed graph of named nodes grouped into nested visual
//! clusters, with directed, optionally styled and labeled edges between
//! them, and delegates layout and rasterization to the Graphviz backend.
//! The Sock Shop deployment topology itself is literal data in the
//! [`topology`] module.

pub mod config;
pub mod export;
pub mod structure;
pub mod topology;

mod error;

pub use gantry_core::{color, identifier, semantic};

pub use error::GantryError;
pub use export::OutputFormat;

use std::path::Path;

use graphviz_rust::printer::PrinterContext;
use log::{debug, info};

use config::AppConfig;
use export::dot::DotBuilder;

/// Builder for validating and rendering Gantry diagrams.
///
/// This provides an API for processing a diagram through validation, DOT
/// emission, and backend rendering.
///
/// # Examples
///
/// ```rust
/// use gantry::{DiagramBuilder, topology};
///
/// let builder = DiagramBuilder::default();
/// let dot = builder.render_dot(&topology::sock_shop())
///     .expect("Failed to render");
/// assert!(dot.starts_with("digraph"));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gantry::{DiagramBuilder, config::AppConfig};
    ///
    /// let config = AppConfig::default();
    /// let builder = DiagramBuilder::new(config);
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Render a diagram to DOT source.
    ///
    /// This validates the diagram's structure and emits DOT without
    /// invoking the Graphviz backend.
    ///
    /// # Errors
    ///
    /// Returns `GantryError` for structural errors (an edge referencing an
    /// undeclared node, duplicate declarations) or configuration errors.
    pub fn render_dot(&self, diagram: &semantic::Diagram) -> Result<String, GantryError> {
        let graph = self.build_graph(diagram)?;
        let source = graphviz_rust::print(graph, &mut PrinterContext::default());

        debug!(bytes = source.len(); "DOT source generated");
        Ok(source)
    }

    /// Render a diagram to a file in the given format.
    ///
    /// [`OutputFormat::Png`] and [`OutputFormat::Svg`] delegate layout and
    /// rasterization to the Graphviz backend, which writes the output file
    /// itself. [`OutputFormat::Dot`] writes the generated source directly.
    ///
    /// # Errors
    ///
    /// Returns `GantryError` for structural errors, configuration errors,
    /// I/O errors, or a missing/failing Graphviz installation.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    ///
    /// use gantry::{DiagramBuilder, OutputFormat, topology};
    ///
    /// let builder = DiagramBuilder::default();
    /// let diagram = topology::sock_shop();
    /// builder.render_file(&diagram, Path::new("architecture.png"), OutputFormat::Png)
    ///     .expect("Failed to render");
    /// ```
    pub fn render_file(
        &self,
        diagram: &semantic::Diagram,
        path: &Path,
        format: OutputFormat,
    ) -> Result<(), GantryError> {
        let graph = self.build_graph(diagram)?;
        export::backend::render_to_file(graph, self.config.layout().engine(), format, path)?;

        info!(output = path.display().to_string(); "Diagram rendered");
        Ok(())
    }

    /// Validates the diagram and builds the DOT graph for it.
    fn build_graph(
        &self,
        diagram: &semantic::Diagram,
    ) -> Result<dot_structures::Graph, GantryError> {
        info!(title = diagram.title(); "Building diagram structure");
        let topology = structure::TopologyGraph::from_diagram(diagram)?;
        debug!(
            nodes = topology.nodes_count(),
            edges = topology.edges_count();
            "Structure validated"
        );

        let background = self
            .config
            .style()
            .background_color()
            .map_err(GantryError::Config)?;

        Ok(DotBuilder::new(diagram)
            .with_background_color(background)
            .build())
    }
}
