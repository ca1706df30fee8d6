/*!
Lazy graph traversals.

One generic engine drives all four traversal flavors: the frontier container
decides the order (queue = BFS, stack = DFS) and the item type decides whether
predecessors are recorded. Searches can be stopped at a target node, restarted
on unvisited nodes, or restricted by pre-marking nodes as visited, which is
what the component, circuit, and flow algorithms of this crate build on.

Traversals with predecessor tracking additionally yield the implied search
tree through [`TraversalTree`] (parent and depth arrays).
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Read access to the visited-set of a running traversal.
///
/// The set implementation is a type parameter so dense searches can use a
/// [`NodeBitSet`] while searches over huge sparse id spaces may fall back to
/// a hash set.
pub trait TraversalState<M>
where
    M: Set<Node>,
{
    /// The set of nodes discovered so far.
    fn visited(&self) -> &M;

    /// Returns *true* if `u` has already been discovered.
    fn did_visit_node(&self, u: Node) -> bool {
        self.visited().contains(&u)
    }
}

/// An entry of the traversal frontier: the node itself, optionally paired
/// with the node it was discovered from.
///
/// Implemented by plain [`Node`] (no tracking) and by [`PredecessorOfNode`].
pub trait SequencedItem: Clone + Copy {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    fn new_without_predecessor(item: Node) -> Self;

    /// The node this entry visits.
    fn item(&self) -> Node;

    /// The node this entry was discovered from, `None` for search roots.
    fn predecessor(&self) -> Option<Node>;

    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// A `(predecessor, node)` pair. Roots carry their own id in both slots,
/// which is unambiguous since the graphs have no loops.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }

    fn item(&self) -> Node {
        self.1
    }

    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// The frontier container of a traversal. Its removal order is the traversal
/// order: [`VecDeque`] dequeues FIFO and gives BFS, [`Vec`] pops LIFO and
/// gives DFS.
pub trait NodeSequencer<T> {
    fn init(u: T) -> Self;

    fn push(&mut self, item: T);

    fn pop(&mut self) -> Option<T>;

    /// Number of items waiting in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T: Clone> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T: Clone> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// The traversal engine: pops the next frontier entry, pushes its unvisited
/// neighbors, and yields the entry. Instantiated through the aliases below
/// or the [`Traversal`] methods on graphs.
pub struct TraversalSearch<'a, G, F, I, M>
where
    G: AdjacencyList,
    F: NodeSequencer<I>,
    I: SequencedItem,
    M: Set<Node>,
{
    graph: &'a G,
    visited: M,
    frontier: F,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// BFS with a caller-chosen visited-set implementation.
pub type BFSWithSet<'a, G, M> = TraversalSearch<'a, G, VecDeque<Node>, Node, M>;

/// DFS with a caller-chosen visited-set implementation.
pub type DFSWithSet<'a, G, M> = TraversalSearch<'a, G, Vec<Node>, Node, M>;

/// Breadth-first traversal yielding plain nodes.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node, NodeBitSet>;

/// Depth-first traversal yielding plain nodes.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node, NodeBitSet>;

/// Breadth-first traversal yielding `(predecessor, node)` pairs.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

/// Depth-first traversal yielding `(predecessor, node)` pairs.
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

impl<G, F, I, M> WithGraphRef<G> for TraversalSearch<'_, G, F, I, M>
where
    G: AdjacencyList,
    F: NodeSequencer<I>,
    I: SequencedItem,
    M: Set<Node>,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, F, I, M> TraversalState<M> for TraversalSearch<'_, G, F, I, M>
where
    G: AdjacencyList,
    F: NodeSequencer<I>,
    I: SequencedItem,
    M: Set<Node>,
{
    fn visited(&self) -> &M {
        &self.visited
    }
}

impl<G, F, I, M> Iterator for TraversalSearch<'_, G, F, I, M>
where
    G: AdjacencyList,
    F: NodeSequencer<I>,
    I: SequencedItem,
    M: Set<Node>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.frontier.pop()?;
        let u = entry.item();

        if self.stop_at == Some(u) {
            // yield the stopper itself, then nothing
            while self.frontier.pop().is_some() {}
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.insert(v) {
                    self.frontier.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(entry)
    }
}

impl<'a, G, F, I, M> TraversalSearch<'a, G, F, I, M>
where
    G: AdjacencyList,
    F: NodeSequencer<I>,
    I: SequencedItem,
    M: Set<Node> + FromCapacity,
{
    /// Creates a traversal over `graph` rooted at `start`.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let len = graph.len();
        let mut visited = M::from_total_used_capacity(len, len);
        visited.insert(start);
        Self {
            graph,
            visited,
            frontier: F::init(I::new_without_predecessor(start)),
            stop_at: None,
            _item: PhantomData,
        }
    }
}

impl<G, F, I, M> TraversalSearch<'_, G, F, I, M>
where
    G: AdjacencyList,
    F: NodeSequencer<I>,
    I: SequencedItem,
    M: Set<Node>,
{
    /// Re-roots an exhausted search at some unvisited node and returns *true*
    /// if one exists. The component iterator drives whole-graph sweeps with
    /// this.
    ///
    /// # Panics
    /// Panics if the frontier is not empty, i.e. the search has not come to
    /// a hold yet.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.frontier.cardinality(), 0);

        let Some(u) = self.graph.vertices().find(|u| !self.visited.contains(u)) else {
            return false;
        };
        self.visited.insert(u);
        self.frontier.push(I::new_without_predecessor(u));
        true
    }

    /// Sets a stopper node: once it is reached, the iterator yields it and
    /// afterwards only `None`.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Builder form of [`TraversalSearch::set_stop_at`].
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Marks `u` as visited so the search never enters it. Has no effect on
    /// nodes already in the frontier, so call this right after construction.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.insert(u);
    }

    /// Marks several nodes as visited; see [`TraversalSearch::exclude_node`].
    pub fn exclude_nodes<N>(&mut self, us: N)
    where
        N: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
    }

    /// Builder form of [`TraversalSearch::exclude_nodes`].
    pub fn with_nodes_excluded<N>(mut self, us: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        self.exclude_nodes(us);
        self
    }
}

/// Extraction of the search tree from predecessor-tracking traversals.
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Drains the traversal and writes each visited node's parent into
    /// `tree`; entries of unvisited nodes are left untouched. `tree` must
    /// hold at least `graph.len()` entries.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let mut parents: Vec<Node> = g.vertices_range().collect();
    /// g.bfs_with_predecessor(0).parent_array_into(&mut parents);
    /// assert_eq!(parents, vec![0, 0, 1]);
    /// ```
    fn parent_array_into(&mut self, tree: &mut [Node]) {
        for entry in self.by_ref() {
            if let Some(p) = entry.predecessor() {
                tree[entry.item() as usize] = p;
            }
        }
    }

    /// Like [`TraversalTree::parent_array_into`] but into a fresh array in
    /// which every node starts out as its own parent.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(2, [(0, 1)]);
    ///
    /// let parents = g.bfs_with_predecessor(0).parent_array();
    /// assert_eq!(parents, vec![0, 0]);
    /// ```
    fn parent_array(&mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph_ref().vertices_range().collect();
        self.parent_array_into(&mut tree);
        tree
    }

    /// Drains the traversal and writes each visited node's depth in the
    /// search tree into `depths` (roots have depth 0); entries of unvisited
    /// nodes are left untouched. `depths` must hold at least `graph.len()`
    /// entries.
    fn depths_into(&mut self, depths: &mut [Node]) {
        for entry in self.by_ref() {
            depths[entry.item() as usize] =
                entry.predecessor().map_or(0, |p| depths[p as usize] + 1);
        }
    }

    /// Like [`TraversalTree::depths_into`] but into a fresh zeroed array.
    ///
    /// On a BFS the result is the hop distance from the root, which the
    /// unit-weight shortest-path tests compare Dijkstra against.
    fn depths(&mut self) -> Vec<Node> {
        let mut depths: Vec<_> = vec![0; self.graph_ref().len()];
        self.depths_into(&mut depths);
        depths
    }
}

impl<'a, G, F, M> TraversalTree<'a, G> for TraversalSearch<'a, G, F, PredecessorOfNode, M>
where
    G: AdjacencyList,
    F: NodeSequencer<PredecessorOfNode>,
    M: Set<Node>,
{
}

/// Traversal entry points on graph values.
pub trait Traversal: AdjacencyList + Sized {
    /// Visits the nodes reachable from `start` in breadth-first order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(2, [(0, 1)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Visits the nodes reachable from `start` in depth-first order.
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Breadth-first traversal that also reports the edge over which each
    /// node was discovered.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(2, [(0, 1)]);
    ///
    /// let mut it = g.bfs_with_predecessor(0);
    /// assert_eq!(it.next().unwrap().item(), 0);
    /// assert_eq!(it.next().unwrap().predecessor(), Some(0));
    /// ```
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Depth-first traversal that also reports the edge over which each
    /// node was discovered.
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use fxhash::FxHashSet;
    use itertools::Itertools;

    fn spindle() -> AdjArray {
        // two parallel strands 1-2-4 and 1-0-5-4, with 3 dangling off 4
        AdjArray::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)])
    }

    #[test]
    fn bfs_visits_level_by_level() {
        let order: Vec<Node> = spindle().bfs(1).collect();

        assert_eq!(order[0], 1);
        assert_eq!(order[1..3].iter().sorted().collect_vec(), [&0, &2]);
        assert_eq!(order[3..5].iter().sorted().collect_vec(), [&4, &5]);
        assert_eq!(order[5], 3);
    }

    #[test]
    fn bfs_depths_are_hop_distances() {
        let depths = spindle().bfs_with_predecessor(1).depths();
        assert_eq!(depths, vec![1, 0, 1, 3, 2, 2]);
    }

    #[test]
    fn bfs_predecessors_form_a_tree() {
        let graph = spindle();

        let edges = graph
            .bfs_with_predecessor(1)
            .map(|x| x.predecessor_with_item())
            .sorted()
            .collect_vec();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(2), 4),
                (Some(4), 3)
            ]
        );

        // ArrNeighborhood iterates neighbors in insertion order which pins the tree
        assert_eq!(
            graph.bfs_with_predecessor(1).parent_array(),
            vec![1, 1, 1, 4, 2, 0]
        );
    }

    #[test]
    fn stopper_cuts_the_search_short() {
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(graph.bfs(0).stop_at(1).collect_vec(), vec![0, 1]);
    }

    #[test]
    fn excluded_nodes_block_the_search() {
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let order = graph.bfs(0).with_nodes_excluded([2]).collect_vec();
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn restarting_sweeps_all_components() {
        let graph = AdjArray::from_edges(5, [(0, 1), (3, 4)]);

        let mut bfs = graph.bfs(0);
        assert_eq!(bfs.by_ref().collect_vec(), vec![0, 1]);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![2]);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![3, 4]);
        assert!(!bfs.try_restart_at_unvisited());
    }

    #[test]
    fn hash_set_backed_bfs_agrees() {
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let order: Vec<Node> = BFSWithSet::<_, FxHashSet<Node>>::new(&graph, 0).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn dfs_follows_one_branch_to_the_end() {
        // the spindle without the 2-4 edge, so 2 becomes a dead end
        let graph = AdjArray::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);

        assert_eq!(graph.dfs(1).collect_vec(), [1, 0, 5, 4, 3, 2]);
        assert_eq!(graph.dfs(5).collect_vec(), [5, 4, 3, 0, 1, 2]);

        assert_eq!(
            graph.dfs_with_predecessor(1).parent_array(),
            vec![1, 1, 1, 4, 5, 0]
        );
    }
}
