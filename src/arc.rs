use std::fmt::{Debug, Display};

use crate::node::Node;

/// Capacities (and flow values) are signed 64-bit integers.
///
/// Capacities themselves are always non-negative; the signed type exists so
/// that flow matrices can store antisymmetric values (`flow[u][v] == -flow[v][u]`)
/// in the same scalar type without conversions.
pub type Capacity = i64;

/// We limit the number of arcs to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumArcs = u32;

/// An arc is a directed edge from a source to a target node with an attached capacity.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arc(pub Node, pub Node, pub Capacity);

impl Display for Arc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}|{})", self.0, self.1, self.2)
    }
}

impl Debug for Arc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Arc {
    /// Returns the source endpoint
    pub fn source(&self) -> Node {
        self.0
    }

    /// Returns the target endpoint
    pub fn target(&self) -> Node {
        self.1
    }

    /// Returns the attached capacity
    pub fn capacity(&self) -> Capacity {
        self.2
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the arc by switching the endpoints. The capacity is kept.
    pub fn reverse(&self) -> Self {
        Arc(self.1, self.0, self.2)
    }
}

impl From<(Node, Node, Capacity)> for Arc {
    fn from(value: (Node, Node, Capacity)) -> Self {
        Arc(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Capacity)> for Arc {
    fn from(value: &(Node, Node, Capacity)) -> Self {
        Arc(value.0, value.1, value.2)
    }
}

impl From<&Arc> for Arc {
    fn from(value: &Arc) -> Self {
        *value
    }
}
