/*!
# Error Types

All fallible operations in this crate share one error enum. Construction failures
([`GraphError::NotGraphical`], [`GraphError::InvalidEdge`]) stop the pipeline since no
graph is produced; analysis failures ([`GraphError::InvalidSource`],
[`GraphError::Disconnected`]) are degraded results the caller can react to. Outcomes
that are ordinary absences, such as a non-Eulerian graph having no circuit, are
encoded in return values instead.
*/

use thiserror::Error;

use crate::node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The degree sequence fails the Erdős–Gallai criterion, or a realization
    /// invariant broke mid-construction
    #[error("degree sequence is not graphical")]
    NotGraphical,

    /// Edge request with a loop, an out-of-range endpoint, or a duplicate pair
    #[error("invalid edge ({0},{1})")]
    InvalidEdge(Node, Node),

    /// Shortest-path source is not a node of the graph
    #[error("source node {0} is not in the graph")]
    InvalidSource(Node),

    /// The analysis requires a connected graph
    #[error("graph is not connected")]
    Disconnected,
}
