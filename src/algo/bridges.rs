use super::*;

/// Computation of all bridges of an undirected graph.
///
/// A bridge is an edge whose removal increases the number of connected
/// components. The Eulerian circuit construction relies on this to avoid
/// burning its way out of a component too early.
pub trait Bridges: AdjacencyList {
    /// Returns all bridges. Each edge is reported once, oriented the way
    /// the search discovered it.
    fn compute_bridges(&self) -> Vec<Edge>;
}

impl<G> Bridges for G
where
    G: AdjacencyList,
{
    fn compute_bridges(&self) -> Vec<Edge> {
        LowpointDfs::new(self).run()
    }
}

/// Lowpoint DFS: the tree edge *(u,v)* is a bridge exactly if no back edge
/// leaves the subtree below *v* towards *u* or an earlier node.
struct LowpointDfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    seen: NodeBitSet,
    marks: Vec<DfsMark>,
    clock: Node,
    found: Vec<Edge>,
}

#[derive(Clone, Copy, Default)]
struct DfsMark {
    low: Node,
    disc: Node,
    parent: Node,
}

impl<'a, G> LowpointDfs<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        let n = graph.number_of_nodes();
        Self {
            graph,
            seen: NodeBitSet::new(n),
            marks: vec![DfsMark::default(); n as usize],
            clock: 0,
            found: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Edge> {
        for root in self.graph.vertices_with_neighbors() {
            if !self.seen.set_bit(root) {
                self.explore(root, root);
            }
        }

        self.found
    }

    fn explore(&mut self, parent: Node, u: Node) -> DfsMark {
        self.clock += 1;

        self.marks[u as usize] = DfsMark {
            low: self.clock,
            disc: self.clock,
            parent,
        };

        for v in self.graph.neighbors_of(u) {
            if !self.seen.set_bit(v) {
                let below = self.explore(u, v);

                let mark = &mut self.marks[u as usize];
                mark.low = mark.low.min(below.low);

                if below.low > mark.disc {
                    self.found.push(Edge(u, v));
                }
            } else if v != self.marks[u as usize].parent {
                // back edge, may shortcut the subtree around u
                let reach = self.marks[v as usize].disc;
                let mark = &mut self.marks[u as usize];
                mark.low = mark.low.min(reach);
            }
        }

        self.marks[u as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::GeneratorSubstructures;
    use itertools::Itertools;

    #[test]
    fn every_path_edge_is_a_bridge() {
        for n in [2, 5, 10, 15] {
            let mut graph = AdjArray::new(n);
            graph.connect_path(0..n);

            let mut found = graph.compute_bridges();
            found.sort();

            assert_eq!(found, graph.ordered_edges(true).collect_vec());
        }
    }

    #[test]
    fn no_bridges_in_cycle() {
        let graph = AdjArray::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        assert!(graph.compute_bridges().is_empty());
    }

    #[test]
    fn bridge_between_two_triangles() {
        let graph = AdjArray::from_edges(6, [(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)]);

        assert_eq!(graph.compute_bridges(), vec![Edge(1, 3)]);
    }

    #[test]
    fn isolated_nodes_report_nothing() {
        let graph = AdjArray::new(4);
        assert!(graph.compute_bridges().is_empty());
    }
}
