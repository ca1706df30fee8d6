/// Every graph representation is checked against a naive mirror: a bitset
/// adjacency matrix plus a weight map keyed by normalized edges.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{edge::*, node::*, ops::*, repr::*, testing::test_graph_ops};
            use fxhash::FxHashMap;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of at most `m_ub` random weighted edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<WeightedEdge> {
                let mut edges: Vec<Edge> = (0..m_ub)
                    .filter_map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);

                        (u != v).then(|| Edge(u, v).normalized())
                    })
                    .collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
                    .into_iter()
                    .map(|Edge(u, v)| WeightedEdge(u, v, rng.random_range(1..=10)))
                    .collect_vec()
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 1..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                        let mut weights: FxHashMap<Edge, Weight> = FxHashMap::default();
                        for &WeightedEdge(u, v, w) in &edges {
                            adj_matrix[u as usize].set_bit(v);
                            adj_matrix[v as usize].set_bit(u);
                            weights.insert(Edge(u, v), w);
                        }

                        let graph = <$graph>::from_edges(n, edges.iter().copied());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(
                            graph.ordered_edges(true).collect_vec(),
                            edges.iter().map(|e| e.edge()).collect_vec()
                        );

                        for u in 0..n {
                            assert_eq!(graph.neighbors_of_as_bitset(u), adj_matrix[u as usize]);
                            assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());

                            for (v, w) in graph.weighted_neighbors_of(u) {
                                let expected = weights[&Edge(u, v).normalized()];
                                assert_eq!(w, expected);
                                assert_eq!(graph.edge_weight(u, v), Some(expected));
                                assert_eq!(graph.edge_weight(v, u), Some(expected));
                            }
                        }

                        assert_eq!(
                            graph.total_edge_weight(),
                            weights.values().map(|&w| w as TotalWeight).sum::<TotalWeight>()
                        );
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut graph = <$graph>::new(n);
                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];

                        for &WeightedEdge(u, v, w) in &edges {
                            adj_matrix[u as usize].set_bit(v);
                            adj_matrix[v as usize].set_bit(u);

                            assert!(!graph.try_add_edge(u, v, w));
                            assert!(graph.try_add_edge(u, v, w));
                            assert_eq!(graph.edge_weight(u, v), Some(w));
                        }

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);

                        let mut m = graph.number_of_edges();
                        assert_eq!(m, edges.len() as NumEdges);

                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            if adj_matrix[u as usize].clear_bit(v) {
                                assert!(graph.try_remove_edge(u, v));
                                m -= 1;

                                if u != v {
                                    assert!(adj_matrix[v as usize].clear_bit(u));
                                }
                            } else {
                                assert!(!graph.try_remove_edge(u, v));
                            }

                            assert_eq!(m, graph.number_of_edges());
                        }

                        let remaining = graph.ordered_edges(true).collect_vec();
                        graph.remove_edges(remaining.into_iter());
                        assert!(graph.is_singleton());
                        assert!(graph.degrees().all(|d| d == 0));
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
