/*!
Flow-based connectivity numbers.

By Menger's theorem, the number of pairwise edge-disjoint (vertex-disjoint)
paths between two nodes equals the size of a smallest edge (vertex) cut
separating them. Both are computed on a unit-capacity residual network with
the Edmonds-Karp augmenting path scheme:
- [`ResidualBitMatrix::edge_disjoint`] turns every undirected edge into two
  antiparallel unit arcs,
- [`ResidualBitMatrix::vertex_disjoint`] additionally splits every inner
  node `v` into `v_in`/`v_out` joined by a unit arc.

[`KConnectivity`] lifts the path counts to whole-graph edge, vertex, and
overall connectivity.
*/

use itertools::Itertools;
use stream_bitset::prelude::{BitmaskStreamConsumer, ToBitmaskStream};

use super::*;

/// Unit-capacity residual network over the plain or doubled node set.
///
/// Adjacency is one bitset row per node holding all arcs with remaining
/// capacity, so reversing an arc along an augmenting path is a matter of
/// bit flips. Labels map gadget nodes back to the graph node they represent.
pub struct ResidualBitMatrix {
    s: Node,
    t: Node,
    n: NumNodes,
    capacity: Vec<NodeBitSet>,
    labels: Vec<Node>,
    antiparallel: bool,
}

impl GraphNodeOrder for ResidualBitMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }
}

impl AdjacencyList for ResidualBitMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.capacity[u as usize].bitmask_stream().iter_set_bits()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.capacity[u as usize].cardinality() as NumNodes
    }
}

impl ResidualBitMatrix {
    /// Builds the network for counting edge-disjoint paths from `s` to `t`:
    /// every undirected edge `{u, v}` becomes the two unit arcs `(u, v)`
    /// and `(v, u)`.
    pub fn edge_disjoint<G>(graph: &G, s: Node, t: Node) -> Self
    where
        G: AdjacencyList,
    {
        Self {
            s,
            t,
            n: graph.number_of_nodes(),
            capacity: graph
                .vertices()
                .map(|u| graph.neighbors_of_as_bitset(u))
                .collect(),
            labels: graph.vertices().collect(),
            antiparallel: true,
        }
    }

    /// Builds the network for counting vertex-disjoint paths from `s` to
    /// `t`. Every node `v` except `s` and `t` is split into `v_in = v` and
    /// `v_out = n + v` joined by a unit arc; edges enter at the `in` copy
    /// and leave from the `out` copy. `s` and `t` stay unsplit.
    pub fn vertex_disjoint<G>(graph: &G, s: Node, t: Node) -> Self
    where
        G: AdjacencyList,
    {
        let n = graph.number_of_nodes() * 2;
        let labels: Vec<_> = graph.vertices().chain(graph.vertices()).collect();

        let mut capacity = vec![NodeBitSet::new(n); n as usize];
        for v in graph.vertices() {
            if v == s || v == t {
                for u in graph.neighbors_of(v) {
                    capacity[v as usize].set_bit(u);
                }
                continue;
            }

            let v_out = graph.number_of_nodes() + v;
            capacity[v as usize].set_bit(v_out);

            for u in graph.neighbors_of(v) {
                // u as the in-copy; for u == s or u == t this is u itself
                capacity[v_out as usize].set_bit(u);
            }
        }

        Self {
            s,
            t,
            n,
            capacity,
            labels,
            antiparallel: false,
        }
    }

    pub fn source(&self) -> Node {
        self.s
    }

    pub fn target(&self) -> Node {
        self.t
    }

    /// Maps a network node back to the graph node it represents.
    pub fn label(&self, u: Node) -> Node {
        self.labels[u as usize]
    }

    /// Sends one unit of flow along the arc `(u, v)`.
    ///
    /// For antiparallel arc pairs the two bits encode the residual split
    /// `r(u, v) + r(v, u) = 2`, so pushing against an already reversed arc
    /// restores its counterpart instead of flipping. Panics if `(u, v)` has
    /// no remaining capacity.
    pub fn reverse(&mut self, u: Node, v: Node) {
        assert!(self.capacity[u as usize].get_bit(v));

        if self.antiparallel && !self.capacity[v as usize].get_bit(u) {
            self.capacity[v as usize].set_bit(u);
        } else {
            self.capacity[u as usize].clear_bit(v);
            self.capacity[v as usize].set_bit(u);
        }
    }
}

/// Edmonds-Karp augmenting path scheme on a [`ResidualBitMatrix`].
///
/// Every call to [`Iterator::next`] augments the flow by one unit and
/// yields the augmenting path, so the number of yielded items is the
/// maximum flow. Paths are reported in graph nodes with the internal arcs
/// of split-node gadgets collapsed.
pub struct EdmondsKarp {
    residual_network: ResidualBitMatrix,
    predecessor: Vec<Node>,
}

impl EdmondsKarp {
    pub fn new(residual_network: ResidualBitMatrix) -> Self {
        let n = residual_network.len();
        Self {
            residual_network,
            predecessor: vec![0; n],
        }
    }

    /// Searches an augmenting path and records it in the predecessor array.
    /// Returns whether the target was reached.
    fn bfs(&mut self) -> bool {
        let s = self.residual_network.source();
        let t = self.residual_network.target();

        let mut bfs = self.residual_network.bfs_with_predecessor(s);
        bfs.set_stop_at(t);
        bfs.parent_array_into(self.predecessor.as_mut_slice());
        bfs.did_visit_node(t)
    }

    /// Returns the total number of disjoint paths between source and target.
    pub fn num_disjoint(&mut self) -> usize {
        self.count()
    }

    /// Counts disjoint paths, stopping early once `k` paths are found.
    pub fn count_num_disjoint_upto(&mut self, k: NumNodes) -> NumNodes {
        self.take(k as usize).count() as NumNodes
    }

    /// Returns all disjoint paths between source and target as node
    /// sequences.
    pub fn disjoint_paths(&mut self) -> Vec<Vec<Node>> {
        self.collect()
    }
}

impl Iterator for EdmondsKarp {
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.bfs() {
            return None;
        }

        let s = self.residual_network.source();
        let t = self.residual_network.target();

        let mut path = vec![t];
        let mut v = t;
        while v != s {
            let u = self.predecessor[v as usize];
            // arcs inside a split-node gadget keep the label and are skipped
            if self.residual_network.label(u) != self.residual_network.label(v) {
                path.push(u);
            }
            self.residual_network.reverse(u, v);

            v = u;
        }

        Some(
            path.iter()
                .map(|&v| self.residual_network.label(v))
                .rev()
                .collect(),
        )
    }
}

/// Edge, vertex, and overall connectivity of undirected graphs.
///
/// Conventions: graphs with fewer than two nodes and disconnected graphs
/// have connectivity `0`; the complete graph on `n` nodes has vertex
/// connectivity `n - 1`.
pub trait KConnectivity: AdjacencyList {
    /// Size of a smallest edge set whose removal disconnects the graph.
    fn edge_connectivity(&self) -> NumNodes;

    /// Size of a smallest node set whose removal disconnects the graph or
    /// leaves a single node.
    fn vertex_connectivity(&self) -> NumNodes;

    /// Largest `k` such that the graph is both `k`-edge-connected and
    /// `k`-vertex-connected.
    fn k_connectivity(&self) -> NumNodes {
        self.edge_connectivity().min(self.vertex_connectivity())
    }
}

impl<G> KConnectivity for G
where
    G: AdjacencyList + AdjacencyTest,
{
    fn edge_connectivity(&self) -> NumNodes {
        if self.number_of_nodes() < 2 || !self.is_connected() {
            return 0;
        }

        // A minimum edge cut separates node 0 from some other node. The
        // running minimum bounds how far each flow needs to be driven.
        let mut best = self.degree_of(0);
        for t in 1..self.number_of_nodes() {
            let mut flow = EdmondsKarp::new(ResidualBitMatrix::edge_disjoint(self, 0, t));
            best = best.min(flow.count_num_disjoint_upto(best));
        }
        best
    }

    fn vertex_connectivity(&self) -> NumNodes {
        let n = self.number_of_nodes();
        if n < 2 || !self.is_connected() {
            return 0;
        }

        // Vertex connectivity is attained on a non-adjacent pair; complete
        // graphs have no such pair and sit at the convention value n - 1.
        let mut best = n - 1;
        for (s, t) in self.vertices_range().tuple_combinations() {
            if self.has_edge(s, t) {
                continue;
            }
            let mut flow = EdmondsKarp::new(ResidualBitMatrix::vertex_disjoint(self, s, t));
            best = best.min(flow.count_num_disjoint_upto(best));
        }
        best
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    // three internally disjoint paths between 0 and 1
    const THETA_EDGES: [(Node, Node); 6] = [(0, 2), (2, 1), (0, 3), (3, 1), (0, 4), (4, 1)];

    #[test]
    fn counts_edge_disjoint_paths() {
        let graph = AdjArray::from_edges(5, THETA_EDGES);
        let mut flow = EdmondsKarp::new(ResidualBitMatrix::edge_disjoint(&graph, 0, 1));
        assert_eq!(flow.num_disjoint(), 3);
    }

    #[test]
    fn counts_vertex_disjoint_paths() {
        let graph = AdjArray::from_edges(5, THETA_EDGES);
        let mut flow = EdmondsKarp::new(ResidualBitMatrix::vertex_disjoint(&graph, 0, 1));
        assert_eq!(flow.num_disjoint(), 3);
    }

    #[test]
    fn early_exit_caps_the_count() {
        for k in 0..5 {
            let graph = AdjArray::from_edges(5, THETA_EDGES);
            let mut flow = EdmondsKarp::new(ResidualBitMatrix::edge_disjoint(&graph, 0, 1));
            assert_eq!(flow.count_num_disjoint_upto(k), k.min(3));
        }
    }

    #[test]
    fn paths_share_only_their_endpoints() {
        let graph = AdjArray::from_edges(5, THETA_EDGES);
        let mut flow = EdmondsKarp::new(ResidualBitMatrix::vertex_disjoint(&graph, 0, 1));

        let paths = flow.disjoint_paths();
        assert_eq!(paths.len(), 3);

        let mut interior = Vec::new();
        for path in paths {
            assert_eq!(*path.first().unwrap(), 0);
            assert_eq!(*path.last().unwrap(), 1);
            interior.extend_from_slice(&path[1..path.len() - 1]);
        }

        interior.sort_unstable();
        assert_eq!(interior, vec![2, 3, 4]);
    }

    #[test]
    fn four_cycle_is_two_connected() {
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(graph.edge_connectivity(), 2);
        assert_eq!(graph.vertex_connectivity(), 2);
        assert_eq!(graph.k_connectivity(), 2);
    }

    #[test]
    fn shared_node_of_the_bowtie_is_a_cut_vertex() {
        let graph = AdjArray::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
        assert_eq!(graph.edge_connectivity(), 2);
        assert_eq!(graph.vertex_connectivity(), 1);
        assert_eq!(graph.k_connectivity(), 1);
    }

    #[test]
    fn complete_graph_reaches_the_convention_value() {
        let graph = AdjArray::from_edges(5, (0..5).tuple_combinations::<(Node, Node)>().collect_vec());
        assert_eq!(graph.edge_connectivity(), 4);
        assert_eq!(graph.vertex_connectivity(), 4);
    }

    #[test]
    fn degenerate_graphs_have_connectivity_zero() {
        assert_eq!(AdjArray::new(0).k_connectivity(), 0);
        assert_eq!(AdjArray::new(1).k_connectivity(), 0);
        assert_eq!(AdjArray::new(5).k_connectivity(), 0);

        let split = AdjArray::from_edges(4, [(0, 1), (2, 3)]);
        assert_eq!(split.edge_connectivity(), 0);
        assert_eq!(split.vertex_connectivity(), 0);

        let bridge = AdjArray::from_edges(2, [(0, 1)]);
        assert_eq!(bridge.k_connectivity(), 1);
    }

    fn brute_force_edge_connectivity(graph: &AdjArray) -> NumNodes {
        let edges = graph.ordered_edges(true).collect_vec();

        for k in 0..=edges.len() {
            for subset in edges.iter().combinations(k) {
                let mut cut = graph.clone();
                cut.remove_edges(subset.into_iter().copied());
                if !cut.is_connected() {
                    return k as NumNodes;
                }
            }
        }

        unreachable!("removing all edges disconnects any graph on two or more nodes");
    }

    #[test]
    fn agrees_with_brute_force_cuts() {
        let mut rng = Pcg64Mcg::seed_from_u64(6);

        for _ in 0..10 {
            let n = 6;
            let edges = (0..n - 1)
                .map(|u| (u, u + 1))
                .chain((0..n).map(|_| (rng.random_range(0..n), rng.random_range(0..n))))
                .filter(|&(u, v)| u != v)
                .map(|(u, v)| Edge(u, v).normalized())
                .sorted()
                .dedup()
                .collect_vec();
            let graph = AdjArray::from_edges(n, edges);

            let edge_conn = graph.edge_connectivity();
            assert_eq!(edge_conn, brute_force_edge_connectivity(&graph));

            let min_degree = graph.degrees().min().unwrap();
            assert!(graph.vertex_connectivity() <= edge_conn);
            assert!(edge_conn <= min_degree);
        }
    }
}
