/*!
Single-source shortest paths on non-negatively weighted graphs.

Dijkstra's algorithm with a binary min-heap. Weights in this crate are
strictly positive integers, so the non-negativity precondition holds by
construction and is not checked at runtime.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use fxhash::FxHashMap;

use super::*;

/// Shortest-path queries on weighted graphs.
pub trait ShortestPaths: WeightedAdjacencyList {
    /// Computes the total weight of a lightest path from `source` to every
    /// reachable node. Nodes that cannot be reached are absent from the
    /// returned mapping; the source itself maps to distance `0`.
    ///
    /// Returns [`GraphError::InvalidSource`] if `source` is not a node of
    /// the graph.
    fn dijkstra(&self, source: Node) -> Result<FxHashMap<Node, TotalWeight>, GraphError>;
}

impl<G> ShortestPaths for G
where
    G: WeightedAdjacencyList,
{
    fn dijkstra(&self, source: Node) -> Result<FxHashMap<Node, TotalWeight>, GraphError> {
        if !self.has_node(source) {
            return Err(GraphError::InvalidSource(source));
        }

        const UNREACHED: TotalWeight = TotalWeight::MAX;
        let mut dist = vec![UNREACHED; self.len()];
        dist[source as usize] = 0;

        // Min-heap keyed by (tentative distance, node). Settled nodes leave
        // stale entries behind which are skipped on pop.
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0, source)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if d > dist[u as usize] {
                continue;
            }

            for (v, w) in self.weighted_neighbors_of(u) {
                let next = d + TotalWeight::from(w);
                if next < dist[v as usize] {
                    dist[v as usize] = next;
                    heap.push(Reverse((next, v)));
                }
            }
        }

        Ok(self
            .vertices()
            .filter(|&u| dist[u as usize] != UNREACHED)
            .map(|u| (u, dist[u as usize]))
            .collect())
    }
}
