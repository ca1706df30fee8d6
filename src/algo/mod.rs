/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the weighted graph
representations in this crate. All algorithms are re-exported at the top level of
this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, connectivity, Eulerian circuits, shortest paths,
spanning trees, tree-relative substructures, and flow-based connectivity numbers.
If possible, algorithms are provided as **iterators**, making it easy to consume
results lazily.
*/

mod bridges;
mod connectivity;
mod euler;
mod fundamental;
mod mst;
mod network_flow;
mod shortest_paths;
mod traversal;

use crate::{prelude::*, utils::*};

pub use bridges::*;
pub use connectivity::*;
pub use euler::*;
pub use fundamental::*;
pub use mst::*;
pub use network_flow::*;
pub use shortest_paths::*;
pub use traversal::*;

/// Access to the graph a lazy algorithm iterator operates on.
///
/// Algorithm iterators borrow their input graph. This trait exposes that
/// borrow so extension traits such as [`TraversalTree`] can query graph
/// properties (e.g., the number of nodes) while iterating.
pub trait WithGraphRef<G> {
    /// Returns a reference to the underlying graph.
    fn graph_ref(&self) -> &G;
}
