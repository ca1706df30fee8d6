use std::ops::Range;

use itertools::Itertools;

use crate::{edge::*, error::GraphError, node::*};

/// Node-count queries shared by every representation.
pub trait GraphNodeOrder {
    /// Number of nodes, including isolated ones.
    fn number_of_nodes(&self) -> NumNodes;

    /// Node count as `usize`, for indexing into per-node buffers.
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Iterates over all node ids in ascending order.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Tests whether `u` is a valid node id.
    fn has_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// An all-zero bitset sized to the node count.
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// An all-one bitset sized to the node count.
    fn vertex_bitset_set(&self) -> NodeBitSet {
        NodeBitSet::new_all_set(self.number_of_nodes())
    }

    /// The half-open range of valid node ids. Unlike [`GraphNodeOrder::vertices`]
    /// the range does not borrow the graph, so it can drive loops that also
    /// mutate the graph.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// True when the graph has zero nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Edge-count queries.
pub trait GraphEdgeOrder {
    /// Number of undirected edges.
    fn number_of_edges(&self) -> NumEdges;

    /// True when no node has a neighbor.
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(|u| self.$single(u))
        }
    };
}

/// Neighborhood and edge access.
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Iterates over the open neighborhood of `u`.
    /// Panics if `u` is out of range.
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Degree of `u`.
    /// Panics if `u` is out of range.
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Iterates over all nodes of non-zero degree.
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.degrees()
            .enumerate()
            .filter_map(|(u, d)| (d > 0).then_some(u as Node))
    }

    /// Counts the nodes of non-zero degree.
    fn number_of_nodes_with_neighbors(&self) -> NumNodes {
        self.vertices_with_neighbors().count() as NumNodes
    }

    /// The largest degree, or `0` on an empty graph.
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    node_iterator!(degrees, degree_of, NumNodes);

    /// The neighborhood of `u` packed into a bitset.
    /// Panics if `u` is out of range.
    fn neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
        NodeBitSet::new_with_bits_set(self.number_of_nodes(), self.neighbors_of(u))
    }

    /// Edges incident to `u`, in neighbor-storage order. With `only_normalized`
    /// each edge appears only in the direction `u <= v`.
    /// Panics if `u` is out of range.
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Edges incident to `u`, sorted ascending. With `only_normalized` each
    /// edge appears only in the direction `u <= v`.
    /// Panics if `u` is out of range.
    fn ordered_edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> {
        let mut edges = self.edges_of(u, only_normalized).collect_vec();
        edges.sort();
        edges.into_iter()
    }

    /// All edges of the graph. With `only_normalized` each edge appears once,
    /// as `(u, v)` with `u <= v`; otherwise both orientations show up.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// All edges of the graph in lexicographic order. With `only_normalized`
    /// each edge appears once, as `(u, v)` with `u <= v`.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.ordered_edges_of(u, only_normalized))
    }
}

/// Neighborhood and edge access carrying the stored weights.
pub trait WeightedAdjacencyList: AdjacencyList {
    /// Iterates over the neighbors of `u` paired with the weight of the
    /// connecting edge.
    /// Panics if `u` is out of range.
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Weight of the edge `(u, v)`, or `None` if the edge does not exist.
    /// Panics if `u` or `v` is out of range.
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight>;

    /// Weighted edges incident to `u`. With `only_normalized` each edge
    /// appears only in the direction `u <= v`.
    /// Panics if `u` is out of range.
    fn weighted_edges_of(
        &self,
        u: Node,
        only_normalized: bool,
    ) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| WeightedEdge(u, v, w))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// All weighted edges of the graph. With `only_normalized` each edge
    /// appears once, as `(u, v)` with `u <= v`.
    fn weighted_edges(&self, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.weighted_edges_of(u, only_normalized))
    }

    /// Sum of all edge weights, widened to avoid overflow.
    fn total_edge_weight(&self) -> TotalWeight {
        self.weighted_edges(true)
            .map(|e| e.weight() as TotalWeight)
            .sum()
    }
}

/// Constant-ish time membership tests.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Tests whether the edge `(u, v)` exists.
    /// Panics if `u` or `v` is out of range.
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Construction of an edgeless graph.
pub trait GraphNew {
    /// Creates a graph of `n` isolated nodes.
    fn new(n: NumNodes) -> Self;
}

/// Appending nodes to an existing graph.
pub trait GraphNodeEditing {
    /// Appends one isolated node and returns its id.
    fn add_node(&mut self) -> Node;

    /// Appends `count` isolated nodes.
    fn add_nodes(&mut self, count: NumNodes) {
        for _ in 0..count {
            self.add_node();
        }
    }
}

/// Insertion and deletion of weighted edges.
pub trait GraphEdgeEditing: GraphNew {
    /// Inserts the edge `(u, v)` with weight `w`.
    /// Panics if an endpoint is out of range or the edge already exists.
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) {
        assert!(!self.try_add_edge(u, v, w))
    }

    /// Inserts the edge `(u, v)` with weight `w` unless it already exists.
    /// Returns *true* exactly if the edge was already present; in that case the
    /// stored weight is left untouched (see [`GraphEdgeEditing::set_edge_weight`]).
    /// Panics if an endpoint is out of range.
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool;

    /// Inserts the edge `(u, v)` with weight `w` after validating the request:
    /// loops, out-of-range endpoints, and duplicate edges are rejected with
    /// [`GraphError::InvalidEdge`] instead of panicking.
    fn checked_add_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<(), GraphError>
    where
        Self: GraphNodeOrder,
    {
        if u == v || !self.has_node(u) || !self.has_node(v) || self.try_add_edge(u, v, w) {
            return Err(GraphError::InvalidEdge(u, v));
        }
        Ok(())
    }

    /// Inserts each edge of the collection via [`GraphEdgeEditing::add_edge`].
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v, w);
        }
    }

    /// Deletes the edge `(u, v)`.
    /// Panics if an endpoint is out of range or the edge does not exist.
    fn remove_edge(&mut self, u: Node, v: Node) {
        assert!(self.try_remove_edge(u, v));
    }

    /// Deletes each edge of the collection via [`GraphEdgeEditing::remove_edge`].
    fn remove_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.remove_edge(u, v);
        }
    }

    /// Deletes the edge `(u, v)` if it exists and reports whether it did.
    /// Panics if an endpoint is out of range.
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool;

    /// Overwrites the weight of the edge `(u, v)` and reports whether the
    /// edge exists.
    /// Panics if an endpoint is out of range.
    fn set_edge_weight(&mut self, u: Node, v: Node, w: Weight) -> bool;
}

/// One-shot construction from a node count and an edge list.
pub trait GraphFromScratch {
    /// Builds a graph of `n` nodes holding the given weighted edges.
    /// Weightless inputs enter at weight `1`.
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
