/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve far less than `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` and (2) directly
manipulate node values without abstracting over them.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid.
/// Used as the *unreached* sentinel in parent maps.
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a network!
pub type NumNodes = Node;
