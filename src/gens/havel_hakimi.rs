/*!
Realization of degree sequences as simple graphs.

[`HavelHakimi::is_graphical`] decides realizability with the Erdős-Gallai
conditions; [`HavelHakimi::generate`] produces a witness edge list with the
Havel-Hakimi construction. Both take quadratic time in the worst case,
which matches the small instances this crate targets.
*/

use itertools::Itertools;
use num::Integer;

use super::*;

/// Havel-Hakimi realization of a degree sequence.
///
/// Node `v` of the produced graph has exactly `degrees[v]` neighbors. The
/// construction repeatedly connects the node of highest remaining degree
/// to the next-highest ones, breaking ties towards smaller node ids, so
/// the output for a fixed sequence is deterministic.
pub struct HavelHakimi {
    degrees: Vec<NumNodes>,
}

impl HavelHakimi {
    pub fn new(degrees: &[NumNodes]) -> Self {
        Self {
            degrees: degrees.to_vec(),
        }
    }

    /// Checks the Erdős-Gallai conditions: the degree sum is even and for
    /// every `k`, the `k` largest degrees satisfy
    /// `sum <= k * (k - 1) + sum_over_rest(min(d_i, k))`.
    ///
    /// The empty sequence is vacuously graphical.
    pub fn is_graphical(&self) -> bool {
        let sorted = self
            .degrees
            .iter()
            .map(|&d| u64::from(d))
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect_vec();

        if sorted.iter().sum::<u64>().is_odd() {
            return false;
        }

        let mut head_sum = 0;
        for k in 1..=sorted.len() {
            head_sum += sorted[k - 1];
            let tail_sum: u64 = sorted[k..].iter().map(|&d| d.min(k as u64)).sum();
            if head_sum > (k * (k - 1)) as u64 + tail_sum {
                return false;
            }
        }

        true
    }

    /// Runs the Havel-Hakimi construction and returns the realized edges.
    ///
    /// Returns [`GraphError::NotGraphical`] exactly if no simple graph has
    /// this degree sequence.
    pub fn generate(&self) -> Result<Vec<Edge>, GraphError> {
        let mut pairs = self
            .degrees
            .iter()
            .enumerate()
            .map(|(v, &d)| (d, v as Node))
            .collect_vec();

        let num_edges = self.degrees.iter().map(|&d| d as usize).sum::<usize>() / 2;
        let mut edges = Vec::with_capacity(num_edges);

        loop {
            // highest remaining degree first, ties towards smaller ids
            pairs.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

            let Some(&(d, v)) = pairs.first() else {
                break;
            };
            if d == 0 {
                break;
            }

            pairs.remove(0);
            let d = d as usize;
            if d > pairs.len() {
                return Err(GraphError::NotGraphical);
            }

            for (rd, u) in &mut pairs[..d] {
                if *rd == 0 {
                    return Err(GraphError::NotGraphical);
                }
                *rd -= 1;
                edges.push(Edge(v, *u));
            }
        }

        Ok(edges)
    }
}

/// Constructors realizing a degree sequence directly as a graph instance.
pub trait RealizeDegreeSequence: Sized {
    /// Builds a simple graph in which node `v` has exactly `degrees[v]`
    /// neighbors. All edges enter at weight `1`.
    ///
    /// Returns [`GraphError::NotGraphical`] if the sequence has no
    /// realization.
    fn from_degree_sequence(degrees: &[NumNodes]) -> Result<Self, GraphError>;

    /// Realizes the degree sequence and then draws a weight for every edge
    /// from `sampler` in a single step.
    fn weighted_from_degree_sequence<R, W>(
        degrees: &[NumNodes],
        rng: &mut R,
        sampler: &W,
    ) -> Result<Self, GraphError>
    where
        R: Rng,
        W: WeightSampler;
}

impl<G> RealizeDegreeSequence for G
where
    G: GraphFromScratch + WeightedAdjacencyList + GraphEdgeEditing,
{
    fn from_degree_sequence(degrees: &[NumNodes]) -> Result<Self, GraphError> {
        let edges = HavelHakimi::new(degrees).generate()?;
        Ok(Self::from_edges(degrees.len() as NumNodes, edges))
    }

    fn weighted_from_degree_sequence<R, W>(
        degrees: &[NumNodes],
        rng: &mut R,
        sampler: &W,
    ) -> Result<Self, GraphError>
    where
        R: Rng,
        W: WeightSampler,
    {
        let mut graph = Self::from_degree_sequence(degrees)?;
        graph.assign_weights(rng, sampler);
        Ok(graph)
    }
}
