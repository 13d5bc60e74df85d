/*!
# Sparse Adjacency Arrays

Stores per-node arc lists instead of a full matrix. Memory scales with the
number of arcs; capacity lookups scan the (usually short) list of the source
node. Both directions are stored so that reverse traversals, as performed by
the augmenting path search, do not require `O(n)` column scans.
*/

use itertools::Itertools;
use smallvec::SmallVec;

use super::*;
use crate::testing::test_network_ops;

/// The incident arcs of a single node as `(neighbor, capacity)` pairs.
/// Up to four arcs live inline before spilling to the heap.
type NodeArcs = SmallVec<[(Node, Capacity); 4]>;

/// A sparse capacitated network with out- and in-adjacency arrays.
#[derive(Clone, Default)]
pub struct CapacityAdjArray {
    out_arcs: Vec<NodeArcs>,
    in_arcs: Vec<NodeArcs>,
    num_arcs: NumArcs,
}

/// Removes the entry of `w` from an arc list. Returns *true* if it was present.
fn remove_arc_entry(arcs: &mut NodeArcs, w: Node) -> bool {
    if let Some((pos, _)) = arcs.iter().find_position(|&&(x, _)| x == w) {
        arcs.swap_remove(pos);
        true
    } else {
        false
    }
}

/// Updates the capacity of `w` in an arc list. Returns *true* if it was present.
fn update_arc_entry(arcs: &mut NodeArcs, w: Node, c: Capacity) -> bool {
    if let Some(entry) = arcs.iter_mut().find(|entry| entry.0 == w) {
        entry.1 = c;
        true
    } else {
        false
    }
}

impl GraphNodeOrder for CapacityAdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_arcs.len() as NumNodes
    }
}

impl GraphArcOrder for CapacityAdjArray {
    fn number_of_arcs(&self) -> NumArcs {
        self.num_arcs
    }
}

impl CapacityGraph for CapacityAdjArray {
    fn capacity_of(&self, u: Node, v: Node) -> Capacity {
        assert!((v as usize) < self.out_arcs.len());
        self.out_arcs[u as usize]
            .iter()
            .find_map(|&(w, c)| (w == v).then_some(c))
            .unwrap_or(0)
    }

    fn out_arcs_of(&self, u: Node) -> impl Iterator<Item = (Node, Capacity)> + '_ {
        self.out_arcs[u as usize].iter().copied()
    }

    fn in_arcs_of(&self, u: Node) -> impl Iterator<Item = (Node, Capacity)> + '_ {
        self.in_arcs[u as usize].iter().copied()
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_arcs[u as usize].len() as NumNodes
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_arcs[u as usize].len() as NumNodes
    }
}

impl GraphNew for CapacityAdjArray {
    fn new(n: NumNodes) -> Self {
        Self {
            out_arcs: vec![NodeArcs::new(); n as usize],
            in_arcs: vec![NodeArcs::new(); n as usize],
            num_arcs: 0,
        }
    }
}

impl CapacityEditing for CapacityAdjArray {
    fn set_capacity(&mut self, u: Node, v: Node, c: Capacity) {
        assert!(c >= 0);
        assert!((v as usize) < self.out_arcs.len());

        if c == 0 {
            if remove_arc_entry(&mut self.out_arcs[u as usize], v) {
                assert!(remove_arc_entry(&mut self.in_arcs[v as usize], u));
                self.num_arcs -= 1;
            }
            return;
        }

        if update_arc_entry(&mut self.out_arcs[u as usize], v, c) {
            assert!(update_arc_entry(&mut self.in_arcs[v as usize], u, c));
        } else {
            self.out_arcs[u as usize].push((v, c));
            self.in_arcs[v as usize].push((u, c));
            self.num_arcs += 1;
        }
    }
}

// ---------- Testing ----------

test_network_ops!(
    test_capacity_adj_array,
    CapacityAdjArray,
    (GraphNew, CapacityGraph, CapacityEditing)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn antiparallel_arcs() {
        let mut network = CapacityAdjArray::new(2);
        network.add_arc((0, 1, 5));
        network.add_arc((1, 0, 3));

        assert!(network.has_antiparallel_arc(0, 1));
        assert_eq!(network.capacity_of(0, 1), 5);
        assert_eq!(network.capacity_of(1, 0), 3);
        assert_eq!(network.number_of_arcs(), 2);
    }

    #[test]
    fn spills_inline_capacity() {
        let mut network = CapacityAdjArray::new(10);
        network.add_arcs((1..10).map(|v| (0, v, v as Capacity)));

        assert_eq!(network.out_degree_of(0), 9);
        assert_eq!(network.capacity_out_of(0), (1..10).sum::<Capacity>());
        assert_eq!(network.in_degree_of(9), 1);
        assert_eq!(network.capacity_of(0, 9), 9);
    }
}
