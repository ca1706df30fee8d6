/*!
# Graph Representations

A graph is stored as one [`Neighborhood`] per node plus an edge counter. The
neighborhood backing decides the trade-off:
- [`AdjArray`]: plain vectors, cheapest to clone and iterate,
- [`SparseAdjArray`]: inline small-vectors, avoids allocations for low degrees,
- [`AdjMap`]: hash maps, constant-time adjacency and weight lookups.

All backings expose the same trait surface from [`crate::ops`].
*/

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;
