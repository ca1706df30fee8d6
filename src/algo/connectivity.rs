use itertools::Itertools;

use super::*;

/// Connected-component queries for undirected graphs.
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over all connected components of the graph where
    /// each component is emitted as a `Vec<Node>`.
    ///
    /// Isolated nodes form components of size one.
    ///
    /// # Panics
    /// Panics if the graph has no nodes.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self, false)
    }

    /// Returns an iterator over the connected components spanned by at least
    /// one edge. Isolated nodes are skipped entirely.
    ///
    /// # Panics
    /// Panics if the graph has no nodes.
    fn connected_components_no_isolated(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self, true)
    }

    /// Returns the number of connected components. An empty graph has none.
    fn number_of_connected_components(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.connected_components().count()
        }
    }

    /// Returns *true* exactly if every node is reachable from every other node.
    /// The empty graph is vacuously connected.
    fn is_connected(&self) -> bool {
        self.is_empty() || self.bfs(0).count() == self.len()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over the connected components of an undirected graph.
///
/// Drains a BFS into a component, then restarts the search at the next
/// unvisited node until the graph is exhausted.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: BFS<'a, G>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    /// Creates the component iterator. With `skip_isolated`, nodes without
    /// neighbors are treated as already visited and never emitted.
    ///
    /// # Panics
    /// Panics if the graph has no nodes.
    pub fn new(graph: &'a G, skip_isolated: bool) -> Self {
        assert!(
            !graph.is_empty(),
            "connected components are undefined on a graph without nodes"
        );
        if skip_isolated {
            if let Some(start_node) = graph.vertices_with_neighbors().next() {
                Self {
                    bfs: graph
                        .bfs(start_node)
                        .with_nodes_excluded(graph.vertices().filter(|&u| graph.degree_of(u) == 0)),
                }
            } else {
                let mut bfs = graph.bfs(0);
                bfs.exclude_nodes(graph.vertices());
                bfs.next(); // drop the start node the constructor enqueued
                Self { bfs }
            }
        } else {
            Self { bfs: graph.bfs(0) }
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cc = self.bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !self.bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

/// Brings a component list into canonical order: nodes ascending within each
/// component, components sorted by their smallest node.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn connected_components() {
        let mut graph = AdjArray::new(7);
        graph.add_edges([(1, 2), (2, 3), (4, 5)]);

        {
            let comps = sort_components(graph.connected_components().collect_vec());
            assert_eq!(comps, vec![vec![0], vec![1, 2, 3], vec![4, 5], vec![6]]);
        }

        {
            let comps = sort_components(graph.connected_components_no_isolated().collect_vec());
            assert_eq!(comps, vec![vec![1, 2, 3], vec![4, 5]]);
        }

        assert_eq!(graph.number_of_connected_components(), 4);
    }

    #[test]
    fn no_isolated_on_edgeless_graph() {
        let graph = AdjArray::new(4);
        assert_eq!(graph.connected_components_no_isolated().count(), 0);
        assert_eq!(graph.number_of_connected_components(), 4);
    }

    #[test]
    fn is_connected() {
        let empty = AdjArray::new(0);
        assert!(empty.is_connected());
        assert_eq!(empty.number_of_connected_components(), 0);

        let single = AdjArray::new(1);
        assert!(single.is_connected());

        let path = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert!(path.is_connected());

        let mut split = AdjArray::new(4);
        split.add_edges([(0, 1), (2, 3)]);
        assert!(!split.is_connected());
    }
}
