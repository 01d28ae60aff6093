//! Low-level graph data structures and primitives.
//!
//! This module provides the foundational directed-graph implementation used
//! by [`TopologyGraph`](super::TopologyGraph). It offers a lightweight,
//! custom graph structure optimized for Gantry's specific needs without
//! requiring external dependencies.
//!
//! Capabilities:
//! - Node and edge storage via `HashMap` and `Vec`
//! - Tracking of both incoming and outgoing edges per node
//! - Root detection (nodes with no incoming edges)
//! - Type-safe node and edge access with lifetime guarantees
//!
//! This is an internal module; its types are not exposed publicly.

use std::{collections::HashMap, marker::PhantomData};

use gantry_core::identifier::Id;

/// Type-safe index for edges in the graph.
///
/// Uses phantom data to track lifetime relationships, ensuring that edge
/// indices cannot outlive the graph they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct EdgeIndex<'idx>(usize, PhantomData<&'idx ()>);

impl<'idx> EdgeIndex<'idx> {
    /// Creates a new edge index with the given numeric index.
    fn new(index: usize) -> Self {
        EdgeIndex(index, PhantomData)
    }
}

/// A directed edge in the graph, stored as a (source, target) pair.
#[derive(Debug)]
struct Edge {
    #[allow(dead_code)]
    source: Id,
    target: Id,
}

impl Edge {
    /// Creates a new edge with the given source and target.
    fn new(source: Id, target: Id) -> Self {
        Edge { source, target }
    }
}

/// Core graph data structure.
///
/// This generic graph implementation provides:
/// - Node storage by ID with generic node data type `N`
/// - Directed edge storage as (source, target) pairs
/// - Tracking of incoming and outgoing edges for each node
///
/// The graph is directed and allows multiple edges between the same pair of
/// nodes (the topology declares several relations over the same components).
#[derive(Debug)]
pub(super) struct GraphInternal<'idx, N>
where
    N: Copy + std::fmt::Debug,
{
    nodes: HashMap<Id, N>,
    edges: Vec<Edge>,
    income_edges: HashMap<Id, Vec<EdgeIndex<'idx>>>,
    outgoing_edges: HashMap<Id, Vec<EdgeIndex<'idx>>>,
}

impl<'idx, N> GraphInternal<'idx, N>
where
    N: Copy + std::fmt::Debug,
{
    /// Creates a new empty graph.
    pub(super) fn new() -> Self {
        GraphInternal {
            nodes: HashMap::new(),
            edges: Vec::new(),
            income_edges: HashMap::new(),
            outgoing_edges: HashMap::new(),
        }
    }

    /// Returns the node data for the given ID without checking existence.
    ///
    /// # Panics
    /// Panics if the node ID does not exist in the graph.
    fn node_unchecked(&self, id: Id) -> N {
        self.nodes[&id]
    }

    /// Checks if a node with the given ID exists in the graph.
    pub(super) fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the total number of edges in the graph.
    pub(super) fn edges_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over root nodes (nodes with no incoming edges).
    pub(super) fn roots(&self) -> impl Iterator<Item = N> {
        self.nodes.iter().filter_map(|(node_id, node)| {
            if !self.income_edges.contains_key(node_id) {
                Some(*node)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over nodes that are targets of outgoing edges from the given source.
    ///
    /// Returns an empty iterator if the source node has no outgoing edges.
    pub(super) fn outgoing_nodes(&self, source_id: Id) -> impl Iterator<Item = N> {
        self.outgoing_edges
            .get(&source_id)
            .into_iter()
            .flatten()
            .map(|idx| {
                let outgoing_node_id = self.edges[idx.0].target;
                self.node_unchecked(outgoing_node_id)
            })
    }

    /// Adds a node to the graph with the given ID and data.
    ///
    /// If a node with the same ID already exists, it will be replaced.
    pub(super) fn add_node(&mut self, id: Id, node: N) {
        self.nodes.insert(id, node);
    }

    /// Adds a directed edge to the graph between two nodes.
    ///
    /// Updates both the edge storage and the incoming/outgoing edge indices.
    /// Both source and target nodes must exist in the graph.
    ///
    /// # Panics
    /// Panics in debug mode if either the source or target node does not
    /// exist in the graph. Callers validate endpoints before insertion, so
    /// this check is a development aid and is optimized away in release
    /// builds.
    pub(super) fn add_edge(&mut self, source_id: Id, target_id: Id) {
        #[cfg(debug_assertions)]
        {
            assert!(
                self.nodes.contains_key(&source_id),
                "Adding edge: Source node {source_id} does not exist",
            );
            assert!(
                self.nodes.contains_key(&target_id),
                "Adding edge: Target node {target_id} does not exist",
            );
        }

        self.edges.push(Edge::new(source_id, target_id));

        let idx = EdgeIndex::new(self.edges.len() - 1);
        self.outgoing_edges.entry(source_id).or_default().push(idx);
        self.income_edges.entry(target_id).or_default().push(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test node payload mirroring how the topology graph stores node IDs
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct TestNode {
        tier: u32,
    }

    #[test]
    fn test_graph_new() {
        let graph: GraphInternal<TestNode> = GraphInternal::new();

        assert_eq!(graph.edges_count(), 0);
        assert_eq!(graph.roots().count(), 0);
    }

    #[test]
    fn test_add_node_and_contains() {
        let mut graph: GraphInternal<TestNode> = GraphInternal::new();
        let frontend = Id::new("frontend");
        let carts = Id::new("carts");

        graph.add_node(frontend, TestNode { tier: 1 });
        graph.add_node(carts, TestNode { tier: 2 });

        assert!(graph.contains_node(frontend));
        assert!(graph.contains_node(carts));
        assert!(!graph.contains_node(Id::new("missing")));
    }

    #[test]
    fn test_add_edge() {
        let mut graph: GraphInternal<TestNode> = GraphInternal::new();
        let source = Id::new("carts");
        let target = Id::new("carts_db");

        graph.add_node(source, TestNode { tier: 2 });
        graph.add_node(target, TestNode { tier: 3 });
        graph.add_edge(source, target);

        assert_eq!(graph.edges_count(), 1);
        let outgoing: Vec<TestNode> = graph.outgoing_nodes(source).collect();
        assert_eq!(outgoing, vec![TestNode { tier: 3 }]);
    }

    #[test]
    fn test_roots() {
        let mut graph: GraphInternal<TestNode> = GraphInternal::new();
        let users = Id::new("users");
        let acm = Id::new("acm");
        let alb = Id::new("alb");

        graph.add_node(users, TestNode { tier: 0 });
        graph.add_node(acm, TestNode { tier: 0 });
        graph.add_node(alb, TestNode { tier: 1 });
        graph.add_edge(users, alb);
        graph.add_edge(acm, alb);

        let roots: Vec<TestNode> = graph.roots().collect();
        assert_eq!(roots.len(), 2);
    }

    #[test]
    fn test_outgoing_nodes() {
        let mut graph: GraphInternal<TestNode> = GraphInternal::new();
        let frontend = Id::new("frontend");
        let catalogue = Id::new("catalogue");
        let orders = Id::new("orders");
        let isolated = Id::new("control_plane");

        graph.add_node(frontend, TestNode { tier: 1 });
        graph.add_node(catalogue, TestNode { tier: 2 });
        graph.add_node(orders, TestNode { tier: 2 });
        graph.add_node(isolated, TestNode { tier: 0 });
        graph.add_edge(frontend, catalogue);
        graph.add_edge(frontend, orders);

        assert_eq!(graph.outgoing_nodes(frontend).count(), 2);
        assert_eq!(graph.outgoing_nodes(isolated).count(), 0);
    }

    #[test]
    fn test_multiple_edges_between_same_nodes() {
        let mut graph: GraphInternal<TestNode> = GraphInternal::new();
        let prometheus = Id::new("prometheus");
        let frontend = Id::new("frontend");

        graph.add_node(prometheus, TestNode { tier: 4 });
        graph.add_node(frontend, TestNode { tier: 1 });

        graph.add_edge(prometheus, frontend);
        graph.add_edge(prometheus, frontend);

        assert_eq!(graph.edges_count(), 2);
        assert_eq!(graph.outgoing_nodes(prometheus).count(), 2);
    }

    #[test]
    fn test_disconnected_nodes_are_roots() {
        let mut graph: GraphInternal<TestNode> = GraphInternal::new();
        let a = Id::new("grafana");
        let b = Id::new("prometheus");
        let isolated = Id::new("session_db");

        graph.add_node(a, TestNode { tier: 4 });
        graph.add_node(b, TestNode { tier: 4 });
        graph.add_node(isolated, TestNode { tier: 3 });
        graph.add_edge(a, b);

        let roots: Vec<TestNode> = graph.roots().collect();
        assert_eq!(roots.len(), 2);
    }
}
