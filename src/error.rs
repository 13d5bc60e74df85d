//! Error types for network construction and flow queries
//!
//! The core operates on already-validated capacity structures, so the error
//! surface is small: out-of-bounds node indices and malformed capacity input.
//! Running out of augmenting paths is the expected termination condition of
//! the algorithm, never an error.

use thiserror::Error;

use crate::{arc::Capacity, node::*};

/// Result type for network and flow operations
pub type Result<T> = std::result::Result<T, FlowError>;

/// Errors that can occur when building networks or running flow queries
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
    /// A node index is out of bounds for the network
    #[error("node {node} is out of bounds for a network on {len} nodes")]
    InvalidNode {
        /// The offending node index
        node: Node,
        /// Number of nodes in the network
        len: NumNodes,
    },

    /// Capacity rows do not form a square matrix
    #[error("capacity rows must form a square matrix: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        /// Index of the offending row
        row: usize,
        /// Number of entries in that row
        len: usize,
        /// Expected number of entries (the number of rows)
        expected: usize,
    },

    /// A negative capacity was supplied
    #[error("negative capacity {capacity} on arc ({source},{target})")]
    NegativeCapacity {
        /// Source endpoint of the offending arc
        // Raw identifier: stops thiserror from treating this field as the
        // `std::error::Error::source` (it is the arc's source node, not a cause).
        r#source: Node,
        /// Target endpoint of the offending arc
        target: Node,
        /// The negative capacity value
        capacity: Capacity,
    },
}

impl FlowError {
    /// Creates an invalid node error
    pub fn invalid_node(node: Node, len: NumNodes) -> Self {
        Self::InvalidNode { node, len }
    }

    /// Creates a non-square matrix error
    pub fn non_square(row: usize, len: usize, expected: usize) -> Self {
        Self::NonSquareMatrix { row, len, expected }
    }

    /// Creates a negative capacity error
    pub fn negative_capacity(source: Node, target: Node, capacity: Capacity) -> Self {
        Self::NegativeCapacity {
            source,
            target,
            capacity,
        }
    }
}
