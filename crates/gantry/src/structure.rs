//! Graph structure representation of a diagram.
//!
//! This module transforms the semantic model into a validated topology
//! graph. It walks the diagram's scope tree, registering every node with
//! its innermost cluster and every cluster with its parent, then checks
//! that each declared edge references only declared nodes.
//!
//! The module is organized in two layers:
//! - [`TopologyGraph`]: the validated registry with membership and
//!   adjacency queries
//! - `graph_base`: the low-level directed graph it is backed by

use indexmap::IndexMap;
use log::{debug, trace};

use gantry_core::{identifier::Id, semantic};

use crate::GantryError;

mod graph_base;

use graph_base::GraphInternal;

/// A node registered in the topology, together with its innermost cluster.
#[derive(Debug)]
struct NodeEntry<'a> {
    node: &'a semantic::Node,
    cluster: Option<Id>,
}

/// A cluster registered in the topology, together with its parent and
/// nesting depth (0 for top-level clusters).
#[derive(Debug)]
pub struct ClusterEntry<'a> {
    cluster: &'a semantic::Cluster,
    parent: Option<Id>,
    depth: usize,
}

impl<'a> ClusterEntry<'a> {
    /// Returns the underlying semantic cluster.
    pub fn cluster(&self) -> &'a semantic::Cluster {
        self.cluster
    }

    /// Returns the ID of the enclosing cluster, or `None` for a top-level cluster.
    pub fn parent(&self) -> Option<Id> {
        self.parent
    }

    /// Returns the nesting depth of this cluster (0 for top-level).
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Validated graph structure of a diagram.
///
/// Construction performs the diagram's only integrity check: every edge
/// endpoint must reference a node declared somewhere in the scope tree.
/// Registries preserve declaration order so that downstream emission is
/// deterministic.
#[derive(Debug)]
pub struct TopologyGraph<'a, 'idx> {
    nodes: IndexMap<Id, NodeEntry<'a>>,
    clusters: IndexMap<Id, ClusterEntry<'a>>,
    edges: Vec<&'a semantic::Edge>,
    graph: GraphInternal<'idx, Id>,
}

impl<'a, 'idx> TopologyGraph<'a, 'idx> {
    /// Builds a validated topology graph from a semantic diagram.
    ///
    /// Walks the scope tree in declaration order (nodes and clusters first,
    /// edges afterwards) and then links every edge pair into the adjacency
    /// graph.
    ///
    /// # Errors
    ///
    /// Returns [`GantryError::Graph`] if a node or cluster is declared twice,
    /// or if an edge references a node that was never declared.
    pub fn from_diagram(diagram: &'a semantic::Diagram) -> Result<Self, GantryError> {
        let mut topology = TopologyGraph {
            nodes: IndexMap::new(),
            clusters: IndexMap::new(),
            edges: Vec::new(),
            graph: GraphInternal::new(),
        };

        topology.collect_scope(diagram.scope(), None, 0)?;
        topology.link_edges()?;

        debug!(
            nodes = topology.nodes.len(),
            clusters = topology.clusters.len(),
            edge_pairs = topology.graph.edges_count();
            "Topology validated"
        );
        trace!(topology:?; "Built topology graph");

        Ok(topology)
    }

    /// Recursively registers the nodes, clusters, and edges of a scope.
    fn collect_scope(
        &mut self,
        scope: &'a semantic::Scope,
        container: Option<Id>,
        depth: usize,
    ) -> Result<(), GantryError> {
        for element in scope.elements() {
            match element {
                semantic::Element::Node(node) => {
                    let entry = NodeEntry {
                        node,
                        cluster: container,
                    };
                    if self.nodes.insert(node.id(), entry).is_some() {
                        return Err(GantryError::Graph(format!(
                            "node `{}` is declared more than once",
                            node.id()
                        )));
                    }
                    self.graph.add_node(node.id(), node.id());
                }
                semantic::Element::Cluster(cluster) => {
                    let entry = ClusterEntry {
                        cluster,
                        parent: container,
                        depth,
                    };
                    if self.clusters.insert(cluster.id(), entry).is_some() {
                        return Err(GantryError::Graph(format!(
                            "cluster `{}` is declared more than once",
                            cluster.id()
                        )));
                    }
                    self.collect_scope(cluster.scope(), Some(cluster.id()), depth + 1)?;
                }
                semantic::Element::Edge(edge) => self.edges.push(edge),
            }
        }
        Ok(())
    }

    /// Validates edge endpoints and records each (source, target) pair in
    /// the adjacency graph.
    fn link_edges(&mut self) -> Result<(), GantryError> {
        for edge in &self.edges {
            if !self.graph.contains_node(edge.source()) {
                return Err(GantryError::Graph(format!(
                    "edge references undeclared node `{}`",
                    edge.source()
                )));
            }
            for target in edge.targets() {
                if !self.graph.contains_node(*target) {
                    return Err(GantryError::Graph(format!(
                        "edge references undeclared node `{}`",
                        target
                    )));
                }
                self.graph.add_edge(edge.source(), *target);
            }
        }
        Ok(())
    }

    /// Returns an iterator over all declared nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &'a semantic::Node> {
        self.nodes.values().map(|entry| entry.node)
    }

    /// Returns the number of declared nodes.
    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the declared node with the given ID, if it exists.
    pub fn node_by_id(&self, id: Id) -> Option<&'a semantic::Node> {
        self.nodes.get(&id).map(|entry| entry.node)
    }

    /// Returns the innermost cluster containing the given node.
    ///
    /// Returns `None` if the node is at the top level or not declared.
    pub fn cluster_of(&self, node_id: Id) -> Option<Id> {
        self.nodes.get(&node_id).and_then(|entry| entry.cluster)
    }

    /// Returns the chain of clusters containing the given node, from
    /// outermost to innermost. Empty for top-level or undeclared nodes.
    pub fn cluster_path(&self, node_id: Id) -> Vec<Id> {
        let mut path = Vec::new();
        let mut current = self.cluster_of(node_id);
        while let Some(cluster_id) = current {
            path.push(cluster_id);
            current = self.clusters.get(&cluster_id).and_then(|entry| entry.parent);
        }
        path.reverse();
        path
    }

    /// Returns the registered cluster entry for the given ID, if it exists.
    pub fn cluster(&self, id: Id) -> Option<&ClusterEntry<'a>> {
        self.clusters.get(&id)
    }

    /// Returns the number of declared clusters.
    pub fn clusters_count(&self) -> usize {
        self.clusters.len()
    }

    /// Returns the number of declared edges (fan-out counts as one).
    pub fn edges_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of directed (source, target) pairs.
    pub fn edge_pairs_count(&self) -> usize {
        self.graph.edges_count()
    }

    /// Returns an iterator over entry points: nodes with no incoming edges.
    pub fn entry_points(&self) -> impl Iterator<Item = Id> {
        self.graph.roots()
    }

    /// Returns an iterator over the IDs of nodes reachable from the given
    /// source in one hop.
    pub fn outgoing(&self, source_id: Id) -> impl Iterator<Item = Id> {
        self.graph.outgoing_nodes(source_id)
    }
}
