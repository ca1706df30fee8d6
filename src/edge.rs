use std::fmt::{Debug, Display};

use crate::node::Node;

/// A pair of endpoints.
/// All edges in this crate are undirected; the endpoint order only carries meaning
/// in walk outputs (Eulerian circuits, tree paths). Undirected comparisons go
/// through [`Edge::normalized`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Edge counts fit in 32 bit; widen to `u64` should a graph ever need more.
pub type NumEdges = u32;

/// Edge weights are small positive integers
pub type Weight = u32;

/// Accumulated weights (path distances, tree weights) use a wider type so sums
/// cannot overflow
pub type TotalWeight = u64;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Orients the edge so the smaller endpoint comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// True if the smaller endpoint already comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// True if both endpoints coincide
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Swaps the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

/// An edge together with its weight.
/// Ordering is lexicographic over `(endpoints, weight)`; the deterministic
/// Kruskal order `(weight, endpoints)` is built at the call site.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},w{})", self.0, self.1, self.2)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl WeightedEdge {
    /// Drops the weight
    pub fn edge(&self) -> Edge {
        Edge(self.0, self.1)
    }

    /// Returns the weight
    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Normalizes the endpoints such that the smaller value comes first
    pub fn normalized(&self) -> Self {
        WeightedEdge(self.0.min(self.1), self.0.max(self.1), self.2)
    }

    /// True if the smaller endpoint already comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// True if both endpoints coincide
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<(&Node, &Node)> for Edge {
    fn from(value: (&Node, &Node)) -> Self {
        Edge(*value.0, *value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

impl From<WeightedEdge> for Edge {
    fn from(value: WeightedEdge) -> Self {
        value.edge()
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<(Edge, Weight)> for WeightedEdge {
    fn from(value: (Edge, Weight)) -> Self {
        WeightedEdge(value.0.0, value.0.1, value.1)
    }
}

/// Weightless inputs enter at weight `1`; the weighting step reassigns later
impl From<Edge> for WeightedEdge {
    fn from(value: Edge) -> Self {
        WeightedEdge(value.0, value.1, 1)
    }
}

impl From<(Node, Node)> for WeightedEdge {
    fn from(value: (Node, Node)) -> Self {
        WeightedEdge(value.0, value.1, 1)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}
