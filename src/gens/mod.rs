/*!
# Graph Generators

This module turns abstract descriptions of a graph into concrete instances:

- [`HavelHakimi`] realizes a degree sequence as a simple graph, with
  [`RealizeDegreeSequence`] as the graph-level entry point,
- [`WeightSampler`] and [`AssignWeights`] draw edge weights once the
  topology is fixed,
- [`GeneratorSubstructures`] plants paths, cycles, and cliques inside an
  already existing graph.

The typical workflow chains realization and weighting:

```rust
use wgraphs::{prelude::*, gens::*};
use rand::SeedableRng;

let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(123);
let graph = AdjArray::weighted_from_degree_sequence(
    &[3, 3, 2, 2, 1, 1],
    &mut rng,
    &UniformWeights::default(),
)
.unwrap();

assert_eq!(graph.number_of_edges(), 6);
```

Weights are reproducible: the same seed and sampler yield the same graph.
*/

use rand::Rng;

use crate::prelude::*;

mod havel_hakimi;
mod substructures;
mod weights;

pub use havel_hakimi::*;
pub use substructures::*;
pub use weights::*;
