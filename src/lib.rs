/*!
`wgraphs` realizes **w**eighted undirected **graphs** from degree sequences and
analyzes them:

- **Realization**: the Havel-Hakimi construction turns a graphical degree
  sequence into a simple graph; graphicality is decided by the Erdős-Gallai
  criterion beforehand.
- **Weighting**: edge weights are small positive integers, drawn once after the
  topology is fixed from a seedable sampler (or supplied explicitly).
- **Analysis**: Eulerian circuits, single-source shortest paths, minimum
  spanning trees, fundamental circuits/cutsets relative to a spanning tree, and
  flow-based edge/vertex/k-connectivity.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of
nodes in the graph. As the realized graphs stay far below `2^32` nodes, this
suffices and saves space as compared to `u64/usize`. For **edges**, we use the
tuple-structs `Edge(Node, Node)` and `WeightedEdge(Node, Node, Weight)`.

All graphs are **undirected** and **simple**: `Edge(u, v)` is treated as
equivalent to `Edge(v, u)` (although we normalize edges often), and neither
loops nor parallel edges exist.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`AdjArray`](crate::repr::AdjArray)
- [`SparseAdjArray`](crate::repr::SparseAdjArray)
- [`AdjMap`](crate::repr::AdjMap)

Each representation makes different trade-offs in terms of memory usage and
lookup/iteration performance. All of them clone cheaply, which the analyses
rely on for disposable working copies: no algorithm mutates the graph it is
asked about.

# Design

All algorithms/generators are provided as configurable structs that one can
alter to their needs before calling the configured algorithm on a provided
graph. Alternatively, most important and commonly used functionalities are
already implemented via traits on the graph itself, making them usable without
configuring the algorithm beforehand.

Every step is deterministic: ties in the realization and in Kruskal's edge
order are broken towards smaller node ids, and the only randomness, the
weighting step, takes the random generator as an argument.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph
  operations, and all graph representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself
  such as BFS (`graph.bfs(start_node)`), Eulerian circuits, Dijkstra,
  Kruskal, tree substructures, and connectivity numbers,
- [`gens`] includes the degree-sequence realizer, the weighting step, and
  deterministic substructures such as paths/cycles/cliques.

A typical pipeline realizes a sequence, weights it, and runs the analyses:

```rust
use wgraphs::{prelude::*, algo::*, gens::*};
use rand::SeedableRng;

let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(7);
let graph = AdjArray::weighted_from_degree_sequence(
    &[3, 2, 2, 2, 1],
    &mut rng,
    &UniformWeights::default(),
)
.unwrap();

let distances = graph.dijkstra(0).unwrap();
assert_eq!(distances[&0], 0);

let tree = graph.minimum_spanning_tree().unwrap();
let circuits = graph.fundamental_circuits(&tree);
let cutsets = graph.fundamental_cutsets(&tree);
assert_eq!(circuits.len(), 1);
assert_eq!(cutsets.len(), 4);

assert!(graph.k_connectivity() <= graph.edge_connectivity());
```

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your
needs.

# When to use

You should only use this library if the following apply:
- Your graphs are undirected and simple, with positive integer edge weights
- You want to work in *Rust*
- You require only the functionality listed above

In all other cases, it might make sense for you to check out
[petgraph](https://crates.io/crates/petgraph) who provide a more extensive
library for general graphs in *Rust*.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `wgraphs::prelude` includes definitions for nodes, edges, and errors, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
