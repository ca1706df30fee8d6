/*!
# Substructure Generators

Plants common motifs (paths, cycles, cliques) inside an already existing
graph. These are the fixture builders of the test suite: a 4-cycle for the
Eulerian example, cliques for the connectivity boundary cases.

All planted edges enter at weight `1`; run
[`AssignWeights`](crate::gens::AssignWeights) afterwards if the motif should
carry other weights.

# Example

```rust
use wgraphs::{prelude::*, gens::*};

let mut g = AdjArray::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_clique(&NodeBitSet::new_with_bits_set(5, [0 as Node, 2, 4]));

assert_eq!(
    g.ordered_edges(true).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(0, 2), Edge(0, 4), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use crate::utils::Set;

use super::*;

/// Deterministic motif insertion for all graphs that support edge editing.
pub trait GeneratorSubstructures {
    /// Joins each consecutive pair of the given nodes by an edge.
    ///
    /// # Panics
    /// Panics if one of the path edges already exists.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Like [`GeneratorSubstructures::connect_path`], but additionally joins
    /// the last node back to the first.
    ///
    /// Fewer than three nodes cannot form a simple cycle; such inputs
    /// degrade to a path since loops and parallel edges are not supported.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Joins every pair of the given nodes by an edge. Pairs already
    /// connected keep their current weight.
    fn connect_clique<C: Set<Node>>(&mut self, nodes: &C);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v, 1);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        let Some(first) = iter.next() else {
            return;
        };

        let mut prev = first;
        for cur in iter {
            self.add_edge(prev, cur, 1);
            prev = cur;
        }

        // the closing edge may coincide with the opening one on two nodes
        if prev != first {
            self.try_add_edge(prev, first, 1);
        }
    }

    fn connect_clique<C: Set<Node>>(&mut self, nodes: &C) {
        for u in nodes.iter() {
            for v in nodes.iter() {
                let e = Edge(u, v);
                if e.is_loop() || !e.is_normalized() {
                    continue;
                }

                self.try_add_edge(u, v, 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::*;

    use super::*;

    #[test]
    fn paths_need_two_or_more_nodes() {
        let mut g = AdjArray::new(6);

        g.connect_path([]);
        g.connect_path([1]);
        assert_eq!(g.number_of_edges(), 0);

        g.connect_path([2, 1]);
        assert_eq!(g.number_of_edges(), 1);
        assert!(g.has_edge(2, 1));
    }

    #[test]
    fn path_follows_the_given_order() {
        let mut g = AdjArray::new(6);
        g.connect_path([0, 3, 1, 4]);
        assert_eq!(
            g.ordered_edges(true).collect_vec(),
            vec![Edge(0, 3), Edge(1, 3), Edge(1, 4)]
        );
    }

    #[test]
    fn degenerate_cycles_produce_no_loops() {
        let mut g = AdjArray::new(6);

        g.connect_cycle([]);
        assert_eq!(g.number_of_edges(), 0);

        g.connect_cycle([1]);
        assert_eq!(g.number_of_edges(), 0);
        assert_eq!(g.degree_of(1), 0);
    }

    #[test]
    fn cycle_closes_back_to_the_start() {
        let mut g = AdjArray::new(6);
        g.connect_cycle([0, 3, 1, 4]);
        assert_eq!(
            g.ordered_edges(true).collect_vec(),
            vec![Edge(0, 3), Edge(0, 4), Edge(1, 3), Edge(1, 4)]
        );
        assert!(g.degrees().all(|d| d == 0 || d == 2));
    }

    #[test]
    fn clique_connects_all_pairs_once() {
        let mut g = AdjArray::new(6);

        g.connect_clique(&NodeBitSet::new(6));
        g.connect_clique(&NodeBitSet::new_with_bits_set(6, [1u32]));
        assert_eq!(g.number_of_edges(), 0);

        g.connect_clique(&NodeBitSet::new_with_bits_set(6, [1u32, 2, 4]));
        assert_eq!(g.number_of_edges(), 3);
        assert!(g.has_edge(1, 2) && g.has_edge(1, 4) && g.has_edge(2, 4));
    }

    #[test]
    fn clique_keeps_existing_weights() {
        let mut g = AdjArray::new(6);
        g.add_edge(1, 2, 7);

        g.connect_clique(&NodeBitSet::new_with_bits_set(6, [1u32, 2, 4]));
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.edge_weight(1, 2), Some(7));
    }
}
