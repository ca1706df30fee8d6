/*!
# Node Representation

We choose `Node = u32` as the graphs realized from degree sequences stay far below
`2^32` nodes. This (1) saves space compared to `usize` or `u64` and (2) lets us use
node values directly as indices without abstracting over them.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
