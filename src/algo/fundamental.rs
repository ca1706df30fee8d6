/*!
Substructures of a graph relative to one of its spanning trees.

Every non-tree edge (*chord*) closes exactly one cycle with the tree, the
*fundamental circuit*. Every tree edge splits the tree into two parts; the
*fundamental cutset* collects **all** graph edges with one endpoint in each
part, not just a minimum cut of the tree plus one chord.
*/

use super::*;

/// The cycle closed by a single non-tree edge.
pub struct FundamentalCircuit {
    chord: Edge,
    edges: Vec<Edge>,
}

impl FundamentalCircuit {
    /// The non-tree edge that closes the cycle, normalized.
    pub fn chord(&self) -> Edge {
        self.chord
    }

    /// The cycle as a closed edge walk. It starts with the tree path from
    /// `chord.0` to `chord.1` and ends with the chord itself, traversed
    /// back from `chord.1` to `chord.0`.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// All graph edges crossing the split induced by removing one tree edge.
pub struct FundamentalCutset {
    tree_edge: Edge,
    side: NodeBitSet,
    edges: Vec<Edge>,
}

impl FundamentalCutset {
    /// The tree edge whose removal induces the split, normalized.
    pub fn tree_edge(&self) -> Edge {
        self.tree_edge
    }

    /// The crossing edges in ascending order. Always contains
    /// [`FundamentalCutset::tree_edge`].
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The nodes on the same side of the split as `tree_edge.0`.
    pub fn side(&self) -> &NodeBitSet {
        &self.side
    }
}

/// Fundamental circuits and cutsets relative to a spanning tree.
///
/// `tree` must be a spanning tree of the graph, or a spanning forest if the
/// graph is disconnected, as produced by
/// [`MinimumSpanningTree::minimum_spanning_forest`].
pub trait TreeSubstructures: AdjacencyList {
    /// Computes the fundamental circuit of every non-tree edge, in
    /// ascending order of the chords.
    fn fundamental_circuits(&self, tree: &Self) -> Vec<FundamentalCircuit>;

    /// Computes the fundamental cutset of every tree edge, in ascending
    /// order of the tree edges.
    fn fundamental_cutsets(&self, tree: &Self) -> Vec<FundamentalCutset>;
}

impl<G> TreeSubstructures for G
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeEditing + Clone,
{
    fn fundamental_circuits(&self, tree: &Self) -> Vec<FundamentalCircuit> {
        self.ordered_edges(true)
            .filter(|e| !tree.has_edge(e.0, e.1))
            .map(|chord| {
                let Edge(u, v) = chord;
                let parents = tree.bfs_with_predecessor(u).parent_array();

                let mut edges = Vec::new();
                let mut x = v;
                while x != u {
                    let p = parents[x as usize];
                    assert_ne!(p, x, "tree does not connect chord ({u},{v})");
                    edges.push(Edge(p, x));
                    x = p;
                }
                edges.reverse();
                edges.push(chord.reverse());

                FundamentalCircuit { chord, edges }
            })
            .collect()
    }

    fn fundamental_cutsets(&self, tree: &Self) -> Vec<FundamentalCutset> {
        tree.ordered_edges(true)
            .map(|tree_edge| {
                let mut split = tree.clone();
                split.remove_edge(tree_edge.0, tree_edge.1);

                let mut side = self.vertex_bitset_unset();
                side.set_bits(split.bfs(tree_edge.0));

                let edges = self
                    .ordered_edges(true)
                    .filter(|e| side.get_bit(e.0) != side.get_bit(e.1))
                    .collect();

                FundamentalCutset {
                    tree_edge,
                    side,
                    edges,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn square_with_chords() -> (AdjArray, AdjArray) {
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3), (0, 3), (0, 2)]);
        let tree = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        (graph, tree)
    }

    fn random_graph_with_forest(rng: &mut impl Rng) -> (AdjArray, AdjArray) {
        let n = 12;
        let edges = (0..n - 1)
            .filter(|u| u % 4 != 3)
            .map(|u| (u, u + 1))
            .chain((0..n).map(|_| (rng.random_range(0..n), rng.random_range(0..n))))
            .filter(|&(u, v)| u != v)
            .map(|(u, v)| Edge(u, v).normalized())
            .sorted()
            .dedup()
            .map(|Edge(u, v)| WeightedEdge(u, v, rng.random_range(1..=10)))
            .collect_vec();

        let graph = AdjArray::from_edges(n, edges);
        let forest = graph.minimum_spanning_forest();
        (graph, forest)
    }

    #[test]
    fn circuits_of_square_with_chords() {
        let (graph, tree) = square_with_chords();

        let circuits = graph.fundamental_circuits(&tree);
        assert_eq!(circuits.len(), 2);

        assert_eq!(circuits[0].chord(), Edge(0, 2));
        assert_eq!(
            circuits[0].edges(),
            [Edge(0, 1), Edge(1, 2), Edge(2, 0)]
        );

        assert_eq!(circuits[1].chord(), Edge(0, 3));
        assert_eq!(
            circuits[1].edges(),
            [Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 0)]
        );
    }

    #[test]
    fn cutset_collects_every_crossing_edge() {
        let (graph, tree) = square_with_chords();

        let cutsets = graph.fundamental_cutsets(&tree);
        assert_eq!(cutsets.len(), 3);

        // Removing (1,2) splits {0,1} from {2,3}. Besides the tree edge
        // itself, both chords cross the split.
        assert_eq!(cutsets[1].tree_edge(), Edge(1, 2));
        assert_eq!(
            cutsets[1].edges(),
            [Edge(0, 2), Edge(0, 3), Edge(1, 2)]
        );

        assert_eq!(cutsets[0].tree_edge(), Edge(0, 1));
        assert_eq!(cutsets[0].edges(), [Edge(0, 1)]);
    }

    #[test]
    fn circuit_is_tree_path_plus_chord() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);

        for _ in 0..5 {
            let (graph, forest) = random_graph_with_forest(&mut rng);
            let circuits = graph.fundamental_circuits(&forest);

            assert_eq!(
                circuits.len() as NumEdges,
                graph.number_of_edges() - forest.number_of_edges()
            );

            for circuit in circuits {
                let edges = circuit.edges();
                assert!(edges.len() >= 3);

                // closed walk with consecutive edges sharing an endpoint
                assert_eq!(edges[0].0, edges[edges.len() - 1].1);
                for (a, b) in edges.iter().tuple_windows() {
                    assert_eq!(a.1, b.0);
                }

                // the chord is the only non-tree edge on the cycle
                assert_eq!(*edges.last().unwrap(), circuit.chord().reverse());
                assert!(!forest.has_edge(circuit.chord().0, circuit.chord().1));
                for e in &edges[..edges.len() - 1] {
                    assert!(forest.has_edge(e.0, e.1));
                }
            }
        }
    }

    #[test]
    fn cutset_edges_separate_the_two_sides() {
        let mut rng = Pcg64Mcg::seed_from_u64(8);

        for _ in 0..5 {
            let (graph, forest) = random_graph_with_forest(&mut rng);

            for cutset in graph.fundamental_cutsets(&forest) {
                let Edge(u, v) = cutset.tree_edge();
                assert!(cutset.edges().contains(&cutset.tree_edge()));
                assert!(cutset.side().get_bit(u));
                assert!(!cutset.side().get_bit(v));

                for e in cutset.edges() {
                    assert_ne!(cutset.side().get_bit(e.0), cutset.side().get_bit(e.1));
                }

                // removing the whole cutset leaves no path between u and v
                let mut cut = graph.clone();
                cut.remove_edges(cutset.edges().iter().copied());
                assert!(cut.bfs(u).all(|x| x != v));
            }
        }
    }
}
