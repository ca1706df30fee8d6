/*!
Eulerian-circuit analysis.

A connected graph (ignoring isolated nodes) in which every node has even
degree admits a closed walk using every edge exactly once. The circuit is
constructed with Fleury's rule on a disposable clone of the graph: always
prefer an edge that is not a bridge of the remaining graph, so the walk
never strands edges in a component it can no longer reach.
*/

use fxhash::FxHashSet;
use num::Integer;

use super::*;

/// Eulerian queries for undirected graphs.
pub trait Eulerian: AdjacencyList + GraphEdgeOrder {
    /// Returns *true* exactly if the graph admits an Eulerian circuit:
    /// every degree is even and all edges lie in a single connected
    /// component. A graph without edges qualifies vacuously.
    fn is_eulerian(&self) -> bool;

    /// Returns an Eulerian circuit as the walk-ordered sequence of directed
    /// edge hops, where each hop leaves the endpoint the previous hop
    /// entered and the last hop returns to the start.
    ///
    /// Returns an empty sequence if the graph is not Eulerian or has no
    /// edges. The absence of a circuit is an ordinary outcome, not an error.
    fn eulerian_circuit(&self) -> Vec<Edge>;
}

impl<G> Eulerian for G
where
    G: AdjacencyList + GraphEdgeOrder + GraphEdgeEditing + Clone,
{
    fn is_eulerian(&self) -> bool {
        if self.number_of_edges() == 0 {
            return true;
        }

        self.vertices().all(|u| self.degree_of(u).is_even())
            && self.connected_components_no_isolated().take(2).count() == 1
    }

    fn eulerian_circuit(&self) -> Vec<Edge> {
        if self.number_of_edges() == 0 || !self.is_eulerian() {
            return Vec::new();
        }

        let mut work = self.clone();
        let mut circuit = Vec::with_capacity(self.number_of_edges() as usize);

        // The smallest node carrying an edge starts the walk.
        let Some(mut u) = work.vertices_with_neighbors().next() else {
            return Vec::new();
        };

        loop {
            // The set changes with every removed edge, so recompute.
            let bridges: FxHashSet<Edge> = work
                .compute_bridges()
                .into_iter()
                .map(|e| e.normalized())
                .collect();

            let step = work
                .neighbors_of(u)
                .find(|&v| !bridges.contains(&Edge(u, v).normalized()))
                .or_else(|| work.neighbors_of(u).next());

            let Some(v) = step else {
                break;
            };

            work.remove_edge(u, v);
            circuit.push(Edge(u, v));
            u = v;
        }

        circuit
    }
}
