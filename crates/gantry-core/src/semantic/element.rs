//! Diagram element types for the semantic model.

use std::{fmt, str::FromStr};

use crate::{color::Color, identifier::Id, semantic::diagram::Scope};

/// Category of a diagram node, determining how the backend renders it.
///
/// Each kind maps to a Graphviz shape and fill color so that load balancers,
/// datastores, queues, and monitoring components are visually distinct
/// without any icon assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// External users of the system
    Users,
    /// A managed DNS zone
    DnsZone,
    /// A managed TLS certificate
    Certificate,
    /// An external load balancer
    LoadBalancer,
    /// A plain compute instance or IAM anchor
    Instance,
    /// A managed Kubernetes control plane
    ControlPlane,
    /// A Kubernetes deployment (controller workload)
    Deployment,
    /// A Kubernetes ingress resource
    Ingress,
    /// An application pod
    Pod,
    /// An in-memory store (session cache)
    InMemoryStore,
    /// A document datastore
    DocumentStore,
    /// A relational datastore
    RelationalStore,
    /// A message queue broker
    MessageQueue,
    /// A metrics collection agent
    MetricsCollector,
    /// A metrics dashboard
    Dashboard,
}

impl NodeKind {
    /// Returns the backend shape name for this kind.
    pub fn dot_shape(self) -> &'static str {
        match self {
            Self::Users => "oval",
            Self::DnsZone => "hexagon",
            Self::Certificate => "note",
            Self::LoadBalancer => "hexagon",
            Self::Instance => "box3d",
            Self::ControlPlane => "box3d",
            Self::Deployment => "component",
            Self::Ingress => "cds",
            Self::Pod => "box",
            Self::InMemoryStore => "cylinder",
            Self::DocumentStore => "cylinder",
            Self::RelationalStore => "cylinder",
            Self::MessageQueue => "cds",
            Self::MetricsCollector => "component",
            Self::Dashboard => "tab",
        }
    }

    /// Returns the backend fill color for this kind.
    pub fn fill_color(self) -> &'static str {
        match self {
            Self::Users => "#f5f5f5",
            Self::DnsZone => "#d5e8d4",
            Self::Certificate => "#fff2cc",
            Self::LoadBalancer => "#f8cecc",
            Self::Instance => "#ffe6cc",
            Self::ControlPlane => "#dae8fc",
            Self::Deployment => "#e1d5e7",
            Self::Ingress => "#dae8fc",
            Self::Pod => "#dae8fc",
            Self::InMemoryStore => "#f8cecc",
            Self::DocumentStore => "#d5e8d4",
            Self::RelationalStore => "#dae8fc",
            Self::MessageQueue => "#ffe6cc",
            Self::MetricsCollector => "#ffe6cc",
            Self::Dashboard => "#d5e8d4",
        }
    }
}

/// A diagram node: one labeled visual element representing a system component.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    label: String,
    kind: NodeKind,
}

impl Node {
    /// Create a new Node. The label may contain `\n` for multi-line display.
    pub fn new(id: Id, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id,
            label: label.into(),
            kind,
        }
    }

    /// Get the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the display label for this node.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the node kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A named visual grouping of nodes and/or other clusters.
///
/// Clusters exist purely for visual containment; they carry no runtime
/// meaning. Nesting is expressed through the cluster's scope containing
/// further [`Element::Cluster`] entries.
#[derive(Debug, Clone)]
pub struct Cluster {
    id: Id,
    label: String,
    scope: Scope,
}

impl Cluster {
    /// Create a new Cluster wrapping the given scope.
    pub fn new(id: Id, label: impl Into<String>, scope: Scope) -> Self {
        Self {
            id,
            label: label.into(),
            scope,
        }
    }

    /// Get the cluster identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the display label for this cluster.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Borrow the cluster's content scope.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

/// Line style of an edge.
///
/// Maps onto the backend's `style` edge attribute; solid lines omit the
/// attribute entirely.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
}

impl LineStyle {
    /// Returns the backend `style` value, or None for solid lines.
    pub fn to_dot_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("dashed"),
            Self::Dotted => Some("dotted"),
        }
    }
}

impl FromStr for LineStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            _ => Err(format!(
                "invalid line style `{s}`, valid values: solid, dashed, dotted"
            )),
        }
    }
}

/// A directed edge from one source node to one or more target nodes.
///
/// A multi-target edge models fan-out (one component talking to a set of
/// peers); it renders as one backend edge per (source, target) pair, all
/// sharing the same label and style.
#[derive(Debug, Clone)]
pub struct Edge {
    source: Id,
    targets: Vec<Id>,
    label: Option<String>,
    line_style: LineStyle,
    color: Option<Color>,
}

impl Edge {
    /// Create a plain solid edge between two nodes.
    pub fn new(source: Id, target: Id) -> Self {
        Self {
            source,
            targets: vec![target],
            label: None,
            line_style: LineStyle::Solid,
            color: None,
        }
    }

    /// Create a fan-out edge from one source to several targets.
    pub fn fan_out(source: Id, targets: Vec<Id>) -> Self {
        Self {
            source,
            targets,
            label: None,
            line_style: LineStyle::Solid,
            color: None,
        }
    }

    /// Attach a text label. The label may contain `\n` for multi-line display.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the line style.
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// Set the line color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Get the source node Id of this edge.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target node Ids of this edge.
    pub fn targets(&self) -> &[Id] {
        &self.targets
    }

    /// Get the edge label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the line style for this edge.
    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    /// Get the line color, if any.
    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

/// Top-level element within a scope.
#[derive(Debug, Clone)]
pub enum Element {
    /// A diagram node
    Node(Node),
    /// A nested cluster
    Cluster(Cluster),
    /// A directed edge between declared nodes
    Edge(Edge),
}
