use std::ops::Range;

use itertools::Itertools;

use crate::{arc::*, node::*};

/// Provides getters pertaining to the node-size of a network
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the network
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    ///
    /// The returned range does not borrow self and hence may be used where
    /// additional mutable references of self are needed.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the network has no nodes (and thus no arcs)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the arc-size of a network
pub trait GraphArcOrder {
    /// Returns the number of arcs with positive capacity
    fn number_of_arcs(&self) -> NumArcs;

    /// Returns *true* if the network has no arcs
    fn is_singleton(&self) -> bool {
        self.number_of_arcs() == 0
    }
}

macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(|u| self.$single(u))
        }
    };
}

/// Getters for capacities, neighborhoods and arcs of a capacitated network.
///
/// An arc `(u, v)` exists exactly if `capacity_of(u, v) > 0`; a zero capacity
/// and an absent arc are indistinguishable by design.
pub trait CapacityGraph: GraphNodeOrder + GraphArcOrder + Sized {
    /// Returns the capacity of the arc `(u, v)`, or `0` if no such arc exists.
    /// ** Panics if `u >= n || v >= n` **
    fn capacity_of(&self, u: Node, v: Node) -> Capacity;

    /// Returns an iterator over the outgoing arcs of `u` as `(target, capacity)`
    /// pairs. Only arcs with positive capacity are yielded.
    /// ** Panics if `u >= n` **
    fn out_arcs_of(&self, u: Node) -> impl Iterator<Item = (Node, Capacity)> + '_;

    /// Returns an iterator over the incoming arcs of `u` as `(source, capacity)`
    /// pairs. Only arcs with positive capacity are yielded.
    /// ** Panics if `u >= n` **
    fn in_arcs_of(&self, u: Node) -> impl Iterator<Item = (Node, Capacity)> + '_;

    /// Returns an iterator over nodes `v` with arcs `(u, v)`
    /// ** Panics if `u >= n` **
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_arcs_of(u).map(|(v, _)| v)
    }

    /// Returns an iterator over nodes `v` with arcs `(v, u)`
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.in_arcs_of(u).map(|(v, _)| v)
    }

    /// Returns the number of outgoing arcs of `u`
    /// ** Panics if `u >= n` **
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_arcs_of(u).count() as NumNodes
    }

    /// Returns the number of incoming arcs of `u`
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_arcs_of(u).count() as NumNodes
    }

    node_iterator!(out_degrees, out_degree_of, NumNodes);
    node_iterator!(in_degrees, in_degree_of, NumNodes);

    /// Returns the total capacity of all outgoing arcs of `u`.
    /// An upper bound on any flow value with source `u`.
    /// ** Panics if `u >= n` **
    fn capacity_out_of(&self, u: Node) -> Capacity {
        self.out_arcs_of(u).map(|(_, c)| c).sum()
    }

    /// Returns the total capacity of all incoming arcs of `u`.
    /// An upper bound on any flow value with sink `u`.
    /// ** Panics if `u >= n` **
    fn capacity_into(&self, u: Node) -> Capacity {
        self.in_arcs_of(u).map(|(_, c)| c).sum()
    }

    /// Returns *true* if the arc `(u, v)` exists, i.e. has positive capacity.
    /// ** Panics if `u >= n || v >= n` **
    fn has_arc(&self, u: Node, v: Node) -> bool {
        self.capacity_of(u, v) > 0
    }

    /// Returns *true* if there exists an arc `(u, v)` as well as `(v, u)`.
    /// Such antiparallel pairs are legal; the flow matrix nets them against
    /// each other during augmentation.
    /// ** Panics if `u >= n || v >= n` **
    fn has_antiparallel_arc(&self, u: Node, v: Node) -> bool {
        self.has_arc(u, v) && self.has_arc(v, u)
    }

    /// Returns an iterator over all arcs in the network
    fn arcs(&self) -> impl Iterator<Item = Arc> + '_ {
        self.vertices()
            .flat_map(move |u| self.out_arcs_of(u).map(move |(v, c)| Arc(u, v, c)))
    }

    /// Returns an iterator over all arcs in the network in sorted order
    fn ordered_arcs(&self) -> impl Iterator<Item = Arc> + '_ {
        self.vertices().flat_map(move |u| {
            let mut arcs = self.out_arcs_of(u).map(move |(v, c)| Arc(u, v, c)).collect_vec();
            arcs.sort_unstable();
            arcs.into_iter()
        })
    }
}

/// Trait for creating a new empty network
pub trait GraphNew {
    /// Creates an empty network with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/update/delete arcs
pub trait CapacityEditing: GraphNew + CapacityGraph {
    /// Sets the capacity of the arc `(u, v)` to `c`, overwriting any previous
    /// value. Setting `c = 0` removes the arc.
    /// ** Panics if `u >= n || v >= n || c < 0` **
    fn set_capacity(&mut self, u: Node, v: Node, c: Capacity);

    /// Adds the arc to the network.
    /// ** Panics if an endpoint is `>= n`, the capacity is not positive,
    /// or the arc was already present **
    fn add_arc(&mut self, arc: impl Into<Arc>) {
        let Arc(u, v, c) = arc.into();
        assert!(c > 0);
        assert!(!self.has_arc(u, v));
        self.set_capacity(u, v, c);
    }

    /// Adds all arcs in the collection
    fn add_arcs(&mut self, arcs: impl IntoIterator<Item = impl Into<Arc>>) {
        for arc in arcs {
            self.add_arc(arc);
        }
    }

    /// Removes the arc `(u, v)` from the network.
    /// ** Panics if the arc is not present or `u >= n || v >= n` **
    fn remove_arc(&mut self, u: Node, v: Node) {
        assert!(self.has_arc(u, v));
        self.set_capacity(u, v, 0);
    }
}

/// A super trait for creating a network from scratch from a number of nodes
/// and a collection of arcs
pub trait GraphFromArcs {
    /// Create a network from a number of nodes and an iterator over arcs
    fn from_arcs(n: NumNodes, arcs: impl IntoIterator<Item = impl Into<Arc>>) -> Self;
}

impl<G: GraphNew + CapacityEditing> GraphFromArcs for G {
    fn from_arcs(n: NumNodes, arcs: impl IntoIterator<Item = impl Into<Arc>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_arcs(arcs);
        graph
    }
}
