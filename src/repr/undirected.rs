use super::*;
use crate::{edge::*, node::*, ops::*, testing::test_graph_ops};

/// An undirected graph storing one weighted [`Neighborhood`] per node.
///
/// Neighborhoods are kept symmetric: an edge `(u, v)` appears in the
/// neighborhoods of both `u` and `v` with the same weight. Cloning is a plain
/// deep copy, so algorithms needing a disposable working graph just `clone()`.
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArray = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArray = UndirectedGraph<SparseNeighborhood>;

/// Representation using per-node Hash-Maps with constant-time adjacency lookups
pub type AdjMap = UndirectedGraph<MapNeighborhood>;

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> WeightedAdjacencyList for UndirectedGraph<Nbs> {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nbs[u as usize].weighted_neighbors()
    }

    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight> {
        self.nbs[u as usize].weight_to(v)
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            num_edges: 0,
            nbs: vec![Nbs::new(n); n as usize],
        }
    }
}

impl<Nbs: Neighborhood> GraphNodeEditing for UndirectedGraph<Nbs> {
    fn add_node(&mut self) -> Node {
        let u = self.number_of_nodes();
        self.nbs.push(Nbs::new(u + 1));
        u
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool {
        if !self.nbs[u as usize].try_add_neighbor(v, w) {
            if u != v {
                assert!(!self.nbs[v as usize].try_add_neighbor(u, w));
            }
            self.num_edges += 1;
            false
        } else {
            true
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.nbs[u as usize].try_remove_neighbor(v) {
            if u != v {
                assert!(self.nbs[v as usize].try_remove_neighbor(u));
            }
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }

    fn set_edge_weight(&mut self, u: Node, v: Node, w: Weight) -> bool {
        if self.nbs[u as usize].set_weight(v, w) {
            if u != v {
                assert!(self.nbs[v as usize].set_weight(u, w));
            }
            true
        } else {
            false
        }
    }
}

test_graph_ops!(
    test_adj_array,
    AdjArray,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

test_graph_ops!(
    test_sparse_adj_array,
    SparseAdjArray,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

test_graph_ops!(
    test_adj_map,
    AdjMap,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn checked_add_edge_rejects_invalid_requests() {
        let mut graph = AdjArray::new(4);

        assert_eq!(
            graph.checked_add_edge(1, 1, 3),
            Err(GraphError::InvalidEdge(1, 1))
        );
        assert_eq!(
            graph.checked_add_edge(0, 4, 1),
            Err(GraphError::InvalidEdge(0, 4))
        );

        assert_eq!(graph.checked_add_edge(0, 2, 5), Ok(()));
        assert_eq!(
            graph.checked_add_edge(2, 0, 7),
            Err(GraphError::InvalidEdge(2, 0))
        );

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.edge_weight(0, 2), Some(5));
        assert_eq!(graph.edge_weight(2, 0), Some(5));
    }

    #[test]
    fn add_node_appends_isolated_node() {
        let mut graph = AdjMap::new(2);
        graph.add_edge(0, 1, 2);

        assert_eq!(graph.add_node(), 2);
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.degree_of(2), 0);

        graph.add_edge(2, 0, 9);
        assert_eq!(graph.edge_weight(0, 2), Some(9));
    }

    #[test]
    fn set_edge_weight_updates_both_directions() {
        let mut graph = SparseAdjArray::new(3);
        graph.add_edge(0, 1, 1);

        assert!(graph.set_edge_weight(1, 0, 8));
        assert_eq!(graph.edge_weight(0, 1), Some(8));
        assert_eq!(graph.edge_weight(1, 0), Some(8));

        assert!(!graph.set_edge_weight(0, 2, 4));
        assert_eq!(graph.edge_weight(0, 2), None);
    }

    #[test]
    fn clones_are_independent_working_copies() {
        let mut graph = AdjArray::new(3);
        graph.add_edges([(0, 1, 2), (1, 2, 3)].into_iter());

        let mut copy = graph.clone();
        copy.remove_edge(0, 1);

        assert_eq!(copy.number_of_edges(), 1);
        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.has_edge(0, 1));
    }
}
