/*!
Minimum spanning trees and forests via Kruskal's algorithm.

Candidate edges are processed in ascending order of *(weight, u, v)*, so
among equally light edges the lexicographically smallest endpoint pair
wins. This makes the produced tree independent of the input's internal
neighborhood order.
*/

use itertools::Itertools;

use super::*;

/// Disjoint-set forest with path compression and union by rank.
pub struct UnionFind {
    parent: Vec<Node>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n - 1}`.
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
        }
    }

    /// Returns the representative of the set containing `u` and compresses
    /// the traversed path onto it.
    pub fn find(&mut self, u: Node) -> Node {
        if self.parent[u as usize] != u {
            self.parent[u as usize] = self.find(self.parent[u as usize]);
        }
        self.parent[u as usize]
    }

    /// Merges the sets containing `u` and `v`. Returns *false* if both
    /// already belong to the same set.
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let u_root = self.find(u);
        let v_root = self.find(v);

        if u_root == v_root {
            return false;
        }

        if self.rank[u_root as usize] < self.rank[v_root as usize] {
            self.parent[u_root as usize] = v_root;
        } else if self.rank[u_root as usize] > self.rank[v_root as usize] {
            self.parent[v_root as usize] = u_root;
        } else {
            self.parent[v_root as usize] = u_root;
            self.rank[u_root as usize] += 1;
        }

        true
    }
}

/// Kruskal's algorithm on weighted graphs.
pub trait MinimumSpanningTree: WeightedAdjacencyList + GraphFromScratch {
    /// Computes a minimum spanning forest, keeping the original edge
    /// weights. On a connected graph this is a minimum spanning tree; on a
    /// disconnected graph every connected component gets its own tree.
    fn minimum_spanning_forest(&self) -> Self;

    /// Computes a minimum spanning tree of a connected graph.
    ///
    /// Returns [`GraphError::Disconnected`] if no spanning tree exists.
    fn minimum_spanning_tree(&self) -> Result<Self, GraphError>
    where
        Self: Sized + GraphEdgeOrder,
    {
        let forest = self.minimum_spanning_forest();
        if self.number_of_nodes() > 0 && forest.number_of_edges() != self.number_of_nodes() - 1 {
            return Err(GraphError::Disconnected);
        }
        Ok(forest)
    }
}

impl<G> MinimumSpanningTree for G
where
    G: WeightedAdjacencyList + GraphFromScratch,
{
    fn minimum_spanning_forest(&self) -> Self {
        let mut candidates = self.weighted_edges(true).collect_vec();
        candidates.sort_by_key(|e| (e.weight(), e.edge()));

        let mut sets = UnionFind::new(self.number_of_nodes());
        Self::from_edges(
            self.number_of_nodes(),
            candidates.into_iter().filter(|e| sets.union(e.0, e.1)),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn union_find_merges_sets() {
        let mut sets = UnionFind::new(6);

        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.union(1, 0));
        assert_eq!(sets.find(0), sets.find(1));
        assert_ne!(sets.find(1), sets.find(2));

        assert!(sets.union(1, 3));
        assert_eq!(sets.find(0), sets.find(2));
        assert_ne!(sets.find(0), sets.find(5));
    }

    #[test]
    fn spanning_tree_of_small_example() {
        let graph = SparseAdjArray::from_edges(
            4,
            [(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 4), (0, 2, 5)],
        );

        let tree = graph.minimum_spanning_tree().unwrap();
        assert_eq!(tree.number_of_edges(), 3);
        assert_eq!(tree.total_edge_weight(), 6);
        assert_eq!(
            tree.ordered_edges(true).collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 3)]
        );
    }

    #[test]
    fn equal_weights_break_ties_lexicographically() {
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);

        let tree = graph.minimum_spanning_forest();
        assert_eq!(
            tree.ordered_edges(true).collect_vec(),
            vec![Edge(0, 1), Edge(0, 3), Edge(1, 2)]
        );
    }

    #[test]
    fn forest_spans_every_component() {
        let mut graph = AdjArray::new(7);
        graph.add_edges([(0, 1, 2), (1, 2, 2), (2, 0, 7), (4, 5, 1), (5, 6, 3), (6, 4, 3)]);

        let forest = graph.minimum_spanning_forest();
        assert_eq!(forest.number_of_edges(), 4);
        assert_eq!(forest.total_edge_weight(), 2 + 2 + 1 + 3);
        assert!(matches!(
            graph.minimum_spanning_tree(),
            Err(GraphError::Disconnected)
        ));
    }

    #[test]
    fn tree_keeps_original_weights() {
        let mut rng = Pcg64Mcg::seed_from_u64(9);

        let edges = (0..5u32)
            .map(|u| (u, u + 1))
            .chain([(0, 3), (1, 4), (2, 5)])
            .map(|(u, v)| WeightedEdge(u, v, rng.random_range(1..=10)))
            .collect_vec();
        let graph = AdjArray::from_edges(6, edges);

        let tree = graph.minimum_spanning_tree().unwrap();
        for WeightedEdge(u, v, w) in tree.weighted_edges(true) {
            assert_eq!(graph.edge_weight(u, v), Some(w));
        }
    }

    #[test]
    fn never_heavier_than_any_spanning_tree() {
        let mut rng = Pcg64Mcg::seed_from_u64(5);

        for n in 4..=6u32 {
            for _ in 0..10 {
                // A path plus random chords, so a spanning tree always exists.
                let edges = (0..n - 1)
                    .map(|u| (u, u + 1))
                    .chain((0..n).map(|_| (rng.random_range(0..n), rng.random_range(0..n))))
                    .filter(|&(u, v)| u != v)
                    .map(|(u, v)| Edge(u, v).normalized())
                    .sorted()
                    .dedup()
                    .map(|Edge(u, v)| WeightedEdge(u, v, rng.random_range(1..=10)))
                    .collect_vec();
                let graph = AdjArray::from_edges(n, edges.clone());

                let best = edges
                    .iter()
                    .combinations((n - 1) as usize)
                    .filter_map(|subset| {
                        let mut sets = UnionFind::new(n);
                        subset
                            .iter()
                            .all(|e| sets.union(e.0, e.1))
                            .then(|| subset.iter().map(|e| TotalWeight::from(e.weight())).sum())
                    })
                    .min();

                assert_eq!(
                    graph.minimum_spanning_forest().total_edge_weight(),
                    best.unwrap()
                );
            }
        }
    }
}
