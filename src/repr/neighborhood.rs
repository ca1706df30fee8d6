use std::collections::hash_map::Entry;

use fxhash::FxHashMap;
use itertools::Itertools;
use smallvec::{Array, SmallVec};

use crate::{edge::Weight, node::*};

/// Trait for methods on the Neighborhood of a specified Node.
/// Every entry carries the weight of its connecting edge.
pub trait Neighborhood: Clone {
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over all neighbors together with their edge weights
    fn weighted_neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Returns the weight of the edge to `v`, or `None` if `v` is no neighbor
    fn weight_to(&self, v: Node) -> Option<Weight> {
        self.weighted_neighbors()
            .find_map(|(u, w)| (u == v).then_some(w))
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before; the stored
    /// weight is left untouched in that case.
    fn try_add_neighbor(&mut self, v: Node, w: Weight) -> bool {
        if self.has_neighbor(v) {
            true
        } else {
            self.add_neighbor(v, w);
            false
        }
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    /// For some implementations, this might lead to Multi-Edges
    fn add_neighbor(&mut self, v: Node, w: Weight);

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, v: Node) -> bool;

    /// Overwrites the weight of the edge to `v`.
    /// Returns *true* exactly if `v` is a neighbor.
    fn set_weight(&mut self, v: Node, w: Weight) -> bool;

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}

/// Basic Neighborhood-Impl. using `Vec<(Node, Weight)>`
#[derive(Default, Clone)]
pub struct ArrNeighborhood(pub Vec<(Node, Weight)>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().map(|&(v, _)| v)
    }

    fn weighted_neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, v: Node, w: Weight) {
        self.0.push((v, w));
    }

    fn try_remove_neighbor(&mut self, v: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&&(x, _)| x == v) {
            self.0.swap_remove(pos);
            true
        } else {
            false
        }
    }

    fn set_weight(&mut self, v: Node, w: Weight) -> bool {
        if let Some(entry) = self.0.iter_mut().find(|(x, _)| *x == v) {
            entry.1 = w;
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Like [`ArrNeighborhood`] but uses `SmallVec<[(Node, Weight); N]>` instead.
/// Prefer this if the graph is known to be sparse.
#[derive(Default, Clone)]
pub struct SparseNeighborhood<const N: usize = 8>(pub SmallVec<[(Node, Weight); N]>)
where
    [(Node, Weight); N]: Array<Item = (Node, Weight)>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [(Node, Weight); N]: Array<Item = (Node, Weight)>,
{
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().map(|&(v, _)| v)
    }

    fn weighted_neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, v: Node, w: Weight) {
        self.0.push((v, w));
    }

    fn try_remove_neighbor(&mut self, v: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&&(x, _)| x == v) {
            self.0.swap_remove(pos);
            true
        } else {
            false
        }
    }

    fn set_weight(&mut self, v: Node, w: Weight) -> bool {
        if let Some(entry) = self.0.iter_mut().find(|(x, _)| *x == v) {
            entry.1 = w;
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// A Neighborhood backed by a `FxHashMap<Node, Weight>`.
/// Adjacency tests and weight lookups run in constant time; iteration order
/// follows the (deterministic) hasher, not insertion order.
#[derive(Default, Clone)]
pub struct MapNeighborhood(pub FxHashMap<Node, Weight>);

impl Neighborhood for MapNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.keys().copied()
    }

    fn weighted_neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.0.iter().map(|(&v, &w)| (v, w))
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.contains_key(&v)
    }

    fn weight_to(&self, v: Node) -> Option<Weight> {
        self.0.get(&v).copied()
    }

    fn try_add_neighbor(&mut self, v: Node, w: Weight) -> bool {
        match self.0.entry(v) {
            Entry::Occupied(_) => true,
            Entry::Vacant(entry) => {
                entry.insert(w);
                false
            }
        }
    }

    fn add_neighbor(&mut self, v: Node, w: Weight) {
        self.0.insert(v, w);
    }

    fn try_remove_neighbor(&mut self, v: Node) -> bool {
        self.0.remove(&v).is_some()
    }

    fn set_weight(&mut self, v: Node, w: Weight) -> bool {
        if let Some(slot) = self.0.get_mut(&v) {
            *slot = w;
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}
