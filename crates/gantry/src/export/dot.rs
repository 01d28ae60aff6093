//! DOT emission.
//!
//! This module transforms a semantic diagram into a `dot-structures` graph
//! ready for printing or backend execution. Emission walks the scope tree
//! in declaration order: graph attributes first, then clusters (as nested
//! `cluster_*` subgraphs), nodes, and edges in the order they were declared.
//! The same diagram therefore always yields the same DOT source.

use dot_generator::*;
use dot_structures::*;

use gantry_core::{color::Color, identifier::Id as ElementId, semantic};

/// Cluster background fills, cycled by nesting depth.
const CLUSTER_FILLS: [&str; 4] = ["#e5f5fd", "#ebf3e7", "#ece8f6", "#fdf7e3"];

/// Builder that converts a semantic diagram into a DOT graph.
///
/// The diagram must already be validated (see
/// [`TopologyGraph::from_diagram`](crate::structure::TopologyGraph::from_diagram));
/// emission itself never fails.
pub struct DotBuilder<'a> {
    diagram: &'a semantic::Diagram,
    background_color: Option<Color>,
}

impl<'a> DotBuilder<'a> {
    /// Creates a builder for the given diagram.
    pub fn new(diagram: &'a semantic::Diagram) -> Self {
        Self {
            diagram,
            background_color: None,
        }
    }

    /// Sets the diagram background color, if any.
    pub fn with_background_color(mut self, color: Option<Color>) -> Self {
        self.background_color = color;
        self
    }

    /// Builds the DOT graph.
    pub fn build(&self) -> Graph {
        let mut stmts = vec![
            Stmt::Attribute(attr!("label", esc escape_text(self.diagram.title()))),
            Stmt::Attribute(attr!("labelloc", "t")),
            Stmt::Attribute(attr!("fontsize", "20")),
            Stmt::Attribute(attr!(
                "rankdir",
                self.diagram.direction().to_rankdir()
            )),
        ];

        if let Some(color) = self.background_color {
            stmts.push(Stmt::Attribute(attr!("bgcolor", esc color.to_hex_string())));
        }

        stmts.push(Stmt::GAttribute(GraphAttributes::Node(vec![
            attr!("style", "filled"),
            attr!("fontname", "Helvetica"),
        ])));
        stmts.push(Stmt::GAttribute(GraphAttributes::Edge(vec![
            attr!("fontname", "Helvetica"),
            attr!("fontsize", "11"),
        ])));

        emit_scope(self.diagram.scope(), 0, &mut stmts);

        Graph::DiGraph {
            id: quoted(self.diagram.title()),
            strict: false,
            stmts,
        }
    }
}

/// Emits the elements of one scope, recursing into clusters.
fn emit_scope(scope: &semantic::Scope, depth: usize, stmts: &mut Vec<Stmt>) {
    for element in scope.elements() {
        match element {
            semantic::Element::Node(node) => stmts.push(Stmt::Node(dot_node(node))),
            semantic::Element::Cluster(cluster) => {
                stmts.push(Stmt::Subgraph(dot_cluster(cluster, depth)));
            }
            semantic::Element::Edge(edge) => {
                for target in edge.targets() {
                    stmts.push(Stmt::Edge(dot_edge(edge, *target)));
                }
            }
        }
    }
}

/// Emits a cluster as a `cluster_*` subgraph with a depth-cycled fill.
fn dot_cluster(cluster: &semantic::Cluster, depth: usize) -> Subgraph {
    let mut stmts = vec![
        Stmt::Attribute(attr!("label", esc escape_text(cluster.label()))),
        Stmt::Attribute(attr!("labeljust", "l")),
        Stmt::Attribute(attr!("style", "filled")),
        Stmt::Attribute(attr!(
            "fillcolor",
            esc CLUSTER_FILLS[depth % CLUSTER_FILLS.len()]
        )),
    ];

    emit_scope(cluster.scope(), depth + 1, &mut stmts);

    Subgraph {
        id: quoted(&format!("cluster_{}", cluster.id())),
        stmts,
    }
}

/// Emits one node with its kind-derived shape and fill.
fn dot_node(node: &semantic::Node) -> Node {
    Node {
        id: node_ref(node.id()),
        attributes: vec![
            attr!("label", esc escape_text(node.label())),
            attr!("shape", node.kind().dot_shape()),
            attr!("fillcolor", esc node.kind().fill_color()),
        ],
    }
}

/// Emits one directed (source, target) pair of an edge.
fn dot_edge(edge: &semantic::Edge, target: ElementId) -> Edge {
    let mut attributes = Vec::new();

    if let Some(label) = edge.label() {
        attributes.push(attr!("label", esc escape_text(label)));
    }
    if let Some(style) = edge.line_style().to_dot_value() {
        attributes.push(attr!("style", style));
    }
    if let Some(color) = edge.color() {
        attributes.push(attr!("color", esc color.to_hex_string()));
        attributes.push(attr!("fontcolor", esc color.to_hex_string()));
    }

    Edge {
        ty: EdgeTy::Pair(
            Vertex::N(node_ref(edge.source())),
            Vertex::N(node_ref(target)),
        ),
        attributes,
    }
}

/// Builds a quoted DOT node reference from an element identifier.
fn node_ref(id: ElementId) -> NodeId {
    NodeId(quoted(&id.to_string()), None)
}

/// Builds a quoted DOT identifier.
fn quoted(text: &str) -> Id {
    id!(esc escape_text(text))
}

/// Escapes text for use inside a quoted DOT string.
///
/// Embedded newlines become the DOT `\n` escape, which Graphviz renders as
/// a centered line break.
fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use graphviz_rust::printer::PrinterContext;

    use gantry_core::semantic::{
        Cluster, Diagram, Edge as SemanticEdge, Element, LineStyle, Node as SemanticNode, NodeKind,
        RankDirection, Scope,
    };

    use super::*;

    fn sample_diagram() -> Diagram {
        let data = Cluster::new(
            ElementId::new("data"),
            "Data Layer",
            Scope::new(vec![Element::Node(SemanticNode::new(
                ElementId::new("carts_db"),
                "Carts DB",
                NodeKind::DocumentStore,
            ))]),
        );
        Diagram::new(
            "Sample Topology",
            RankDirection::TopBottom,
            Scope::new(vec![
                Element::Node(SemanticNode::new(
                    ElementId::new("carts"),
                    "Carts\nService",
                    NodeKind::Pod,
                )),
                Element::Cluster(data),
                Element::Edge(
                    SemanticEdge::new(ElementId::new("carts"), ElementId::new("carts_db"))
                        .with_line_style(LineStyle::Dashed)
                        .with_label("reads/writes"),
                ),
            ]),
        )
    }

    fn print(diagram: &Diagram) -> String {
        let graph = DotBuilder::new(diagram).build();
        graphviz_rust::print(graph, &mut PrinterContext::default())
    }

    #[test]
    fn test_build_emits_digraph_with_title() {
        let output = print(&sample_diagram());
        assert!(output.starts_with("digraph"), "{output}");
        assert!(output.contains("Sample Topology"), "{output}");
        assert!(output.contains("rankdir=TB"), "{output}");
    }

    #[test]
    fn test_build_emits_cluster_subgraph() {
        let output = print(&sample_diagram());
        assert!(output.contains("cluster_data"), "{output}");
        assert!(output.contains("Data Layer"), "{output}");
    }

    #[test]
    fn test_build_emits_typed_nodes() {
        let output = print(&sample_diagram());
        assert!(output.contains("shape=box"), "{output}");
        assert!(output.contains("shape=cylinder"), "{output}");
        assert!(output.contains("#dae8fc"), "{output}");
    }

    #[test]
    fn test_build_emits_styled_edge() {
        let output = print(&sample_diagram());
        assert!(output.contains("style=dashed"), "{output}");
        assert!(output.contains("reads/writes"), "{output}");
        assert!(output.contains("->"), "{output}");
    }

    #[test]
    fn test_background_color_attribute() {
        let diagram = sample_diagram();
        let graph = DotBuilder::new(&diagram)
            .with_background_color(Some(Color::new("white").unwrap()))
            .build();
        let output = graphviz_rust::print(graph, &mut PrinterContext::default());
        assert!(output.contains("bgcolor"), "{output}");
        assert!(output.contains("#ffffff"), "{output}");
    }

    #[test]
    fn test_emission_is_deterministic() {
        let diagram = sample_diagram();
        assert_eq!(print(&diagram), print(&diagram));
    }

    #[test]
    fn test_multiline_label_is_escaped() {
        let output = print(&sample_diagram());
        assert!(output.contains("Carts\\nService"), "{output}");
        assert!(!output.contains("Carts\nService"), "{output}");
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("plain"), "plain");
        assert_eq!(escape_text("a\nb"), "a\\nb");
        assert_eq!(escape_text("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
    }
}
