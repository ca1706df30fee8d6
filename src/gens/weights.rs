/*!
# Edge Weighting

Weights are assigned once, after the topology is fixed. A [`WeightSampler`]
decides the weight of each edge; [`AssignWeights`] walks the edges in
normalized ascending order so a seeded generator always produces the same
weighted graph.
*/

use std::ops::RangeInclusive;

use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;

/// A source of edge weights.
pub trait WeightSampler {
    /// Draws the weight for `edge`. Implementations that do not randomize
    /// simply ignore `rng`.
    fn sample_weight<R: Rng>(&self, rng: &mut R, edge: Edge) -> Weight;
}

/// Draws every weight independently and uniformly from an inclusive range.
///
/// The default range is `1..=10`.
pub struct UniformWeights {
    range: RangeInclusive<Weight>,
}

impl UniformWeights {
    /// # Panics
    /// Panics if the range is empty or starts at `0`: weights are positive.
    pub fn new(range: RangeInclusive<Weight>) -> Self {
        assert!(!range.is_empty() && *range.start() > 0);
        Self { range }
    }
}

impl Default for UniformWeights {
    fn default() -> Self {
        Self::new(1..=10)
    }
}

impl WeightSampler for UniformWeights {
    fn sample_weight<R: Rng>(&self, rng: &mut R, _edge: Edge) -> Weight {
        rng.random_range(self.range.clone())
    }
}

/// Looks every weight up in a fixed table, for deterministic fixtures.
///
/// Edges without an entry keep the construction weight `1`.
pub struct ExplicitWeights {
    weights: FxHashMap<Edge, Weight>,
}

impl ExplicitWeights {
    pub fn new(weights: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        Self {
            weights: weights
                .into_iter()
                .map(|e| {
                    let e = e.into().normalized();
                    (e.edge(), e.weight())
                })
                .collect(),
        }
    }
}

impl WeightSampler for ExplicitWeights {
    fn sample_weight<R: Rng>(&self, _rng: &mut R, edge: Edge) -> Weight {
        self.weights.get(&edge.normalized()).copied().unwrap_or(1)
    }
}

/// Reassignment of all edge weights of an existing graph.
pub trait AssignWeights {
    /// Overwrites the weight of every edge with a draw from `sampler`.
    /// Edges are processed in ascending normalized order, so the result
    /// depends only on the topology, the sampler, and the state of `rng`.
    fn assign_weights<R, W>(&mut self, rng: &mut R, sampler: &W)
    where
        R: Rng,
        W: WeightSampler;
}

impl<G> AssignWeights for G
where
    G: WeightedAdjacencyList + GraphEdgeEditing,
{
    fn assign_weights<R, W>(&mut self, rng: &mut R, sampler: &W)
    where
        R: Rng,
        W: WeightSampler,
    {
        let edges = self.ordered_edges(true).collect_vec();
        for edge in edges {
            let w = sampler.sample_weight(rng, edge);
            assert!(self.set_edge_weight(edge.0, edge.1, w));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn path_graph(n: NumNodes) -> AdjArray {
        AdjArray::from_edges(n, (0..n - 1).map(|u| (u, u + 1)))
    }

    #[test]
    fn uniform_weights_stay_in_range() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        let mut graph = path_graph(20);

        graph.assign_weights(&mut rng, &UniformWeights::new(3..=5));
        assert!(
            graph
                .weighted_edges(true)
                .all(|e| (3..=5).contains(&e.weight()))
        );
    }

    #[test]
    fn same_seed_same_weights() {
        let build = |seed| {
            let mut rng = Pcg64Mcg::seed_from_u64(seed);
            let mut graph = path_graph(10);
            graph.assign_weights(&mut rng, &UniformWeights::default());
            graph.weighted_edges(true).collect::<Vec<_>>()
        };

        assert_eq!(build(7), build(7));
        assert_ne!(build(7), build(8));
    }

    #[test]
    fn explicit_weights_apply_the_table() {
        let mut rng = Pcg64Mcg::seed_from_u64(0);
        let mut graph = path_graph(4);

        // entries may come in unnormalized
        let sampler = ExplicitWeights::new([(1, 0, 4), (1, 2, 9)]);
        graph.assign_weights(&mut rng, &sampler);

        assert_eq!(graph.edge_weight(0, 1), Some(4));
        assert_eq!(graph.edge_weight(1, 2), Some(9));
        assert_eq!(graph.edge_weight(2, 3), Some(1));
    }

    #[test]
    fn weighting_preserves_the_topology() {
        let mut rng = Pcg64Mcg::seed_from_u64(2);
        let mut graph = path_graph(6);
        let before: Vec<_> = graph.ordered_edges(true).collect();

        graph.assign_weights(&mut rng, &UniformWeights::default());
        assert_eq!(graph.ordered_edges(true).collect::<Vec<_>>(), before);
    }
}
