/*!
# Dense Capacity Matrix

Stores all `n * n` capacities row-major in a single flat vector. Lookups and
updates are constant time, iteration over the arcs of a node is a row (or
column) scan. The representation of choice for the small, dense networks the
flow solver typically runs on.
*/

use super::*;
use crate::testing::test_network_ops;

/// A dense capacity matrix over `n` nodes.
///
/// An arc `(u, v)` exists exactly if its matrix entry is positive; entries
/// are never negative. Use [`CapacityMatrix::from_rows`] to build a validated
/// matrix from untrusted input and the [`CapacityEditing`] trait for
/// programmatic construction.
#[derive(Clone, Debug)]
pub struct CapacityMatrix {
    n: NumNodes,
    capacities: Vec<Capacity>,
    num_arcs: NumArcs,
}

impl CapacityMatrix {
    /// Creates a matrix from explicit capacity rows.
    ///
    /// Fails if the rows do not form a square matrix or if any entry is
    /// negative. Zero entries denote absent arcs.
    ///
    /// # Example
    /// ```
    /// use flownets::prelude::*;
    ///
    /// let matrix = CapacityMatrix::from_rows(vec![
    ///     vec![0, 25, 20],
    ///     vec![0, 0, 15],
    ///     vec![0, 0, 0],
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(matrix.number_of_arcs(), 3);
    /// assert_eq!(matrix.capacity_of(0, 1), 25);
    /// ```
    pub fn from_rows(rows: Vec<Vec<Capacity>>) -> Result<Self> {
        let n = rows.len();
        let mut matrix = Self::new(n as NumNodes);

        for (u, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(FlowError::non_square(u, row.len(), n));
            }

            for (v, c) in row.into_iter().enumerate() {
                if c < 0 {
                    return Err(FlowError::negative_capacity(u as Node, v as Node, c));
                }

                if c > 0 {
                    matrix.set_capacity(u as Node, v as Node, c);
                }
            }
        }

        Ok(matrix)
    }

    /// Returns the capacities out of `u` as a slice indexed by target node
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[Capacity] {
        let row = self.idx(u, 0);
        &self.capacities[row..row + self.n as usize]
    }

    fn idx(&self, u: Node, v: Node) -> usize {
        assert!(u < self.n && v < self.n);
        u as usize * self.n as usize + v as usize
    }
}

impl GraphNodeOrder for CapacityMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphArcOrder for CapacityMatrix {
    fn number_of_arcs(&self) -> NumArcs {
        self.num_arcs
    }
}

impl CapacityGraph for CapacityMatrix {
    fn capacity_of(&self, u: Node, v: Node) -> Capacity {
        self.capacities[self.idx(u, v)]
    }

    fn out_arcs_of(&self, u: Node) -> impl Iterator<Item = (Node, Capacity)> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, &c)| (c > 0).then_some((v as Node, c)))
    }

    fn in_arcs_of(&self, u: Node) -> impl Iterator<Item = (Node, Capacity)> + '_ {
        assert!(u < self.n);
        self.vertices().filter_map(move |v| {
            let c = self.capacities[self.idx(v, u)];
            (c > 0).then_some((v, c))
        })
    }

    // Row-major iteration is already sorted by endpoints
    fn ordered_arcs(&self) -> impl Iterator<Item = Arc> + '_ {
        self.arcs()
    }
}

impl GraphNew for CapacityMatrix {
    fn new(n: NumNodes) -> Self {
        Self {
            n,
            capacities: vec![0; (n as usize) * (n as usize)],
            num_arcs: 0,
        }
    }
}

impl CapacityEditing for CapacityMatrix {
    fn set_capacity(&mut self, u: Node, v: Node, c: Capacity) {
        assert!(c >= 0);

        let idx = self.idx(u, v);
        let old = std::mem::replace(&mut self.capacities[idx], c);

        self.num_arcs += ((old == 0) && (c > 0)) as NumArcs;
        self.num_arcs -= ((old > 0) && (c == 0)) as NumArcs;
    }
}

// ---------- Testing ----------

test_network_ops!(
    test_capacity_matrix,
    CapacityMatrix,
    (GraphNew, CapacityGraph, CapacityEditing)
);
