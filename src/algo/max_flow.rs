/*!
# Maximum Flows

This module implements the **Edmonds-Karp** algorithm, i.e. the
Ford-Fulkerson method with a breadth-first path search. The BFS always finds
an augmenting path with the fewest arcs, which bounds the number of
augmentations polynomially and yields a total runtime of `O(V * E^2)`
independent of the capacity values.

## Core concepts

- The **residual capacity** of an arc `(u, v)` is
  `capacity(u, v) - flow(u, v)`. Pushing flow over `(u, v)` lowers it, while
  pushing flow over `(v, u)` raises it, allowing later augmentations to
  reroute earlier ones.
- A **flow assignment** is antisymmetric: `flow(u, v) == -flow(v, u)` holds at
  all times, so a single signed matrix covers forward flow and reverse
  bookkeeping.
- An **augmenting path** is a source-sink path with positive residual capacity
  on every arc. Each augmentation pushes the bottleneck of such a path.

## Entry points

- [`EdmondsKarp`] drives the computation and doubles as an [`Iterator`] over
  the performed [`Augmentation`]s.
- [`FlowAssignment`] is the resulting flow matrix.
- [`MaxFlow`] is implemented for every [`CapacityGraph`] and provides one-call
  access: `network.max_flow(s, t)`.
*/

use std::collections::VecDeque;

use log::{debug, trace};

use super::*;

/// Predecessor map filled by the path search of [`EdmondsKarp`].
///
/// [`INVALID_NODE`] marks unreached nodes. The start node records itself as
/// its own predecessor, so the map doubles as the visited set of the search.
#[derive(Clone)]
pub struct ParentMap {
    parent: Vec<Node>,
}

impl ParentMap {
    /// Creates a map for `n` nodes with every node unreached
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: vec![INVALID_NODE; n as usize],
        }
    }

    /// Marks every node as unreached
    pub fn reset(&mut self) {
        self.parent.fill(INVALID_NODE);
    }

    /// Records `parent` as the predecessor of `u`
    /// ** Panics if `u >= n` **
    pub fn record(&mut self, u: Node, parent: Node) {
        self.parent[u as usize] = parent;
    }

    /// Returns *true* if `u` was reached since the last reset
    /// ** Panics if `u >= n` **
    pub fn is_reached(&self, u: Node) -> bool {
        self.parent[u as usize] != INVALID_NODE
    }

    /// Returns the recorded predecessor of `u`, or `None` if `u` is unreached
    /// ** Panics if `u >= n` **
    pub fn predecessor_of(&self, u: Node) -> Option<Node> {
        let p = self.parent[u as usize];
        (p != INVALID_NODE).then_some(p)
    }

    /// Returns an iterator over all nodes reached since the last reset,
    /// in ascending order
    pub fn reached_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(u, &p)| (p != INVALID_NODE).then_some(u as Node))
    }

    /// Walks the recorded path backwards from `from`, yielding each arc as a
    /// `(predecessor, node)` pair. Stops at the node that recorded itself,
    /// i.e. the start of the search, or at an unreached node.
    /// ** Panics if `from >= n` **
    pub fn walk_back(&self, from: Node) -> impl Iterator<Item = (Node, Node)> + '_ {
        let mut v = from;
        std::iter::from_fn(move || {
            let u = self.parent[v as usize];
            (u != INVALID_NODE && u != v).then(|| {
                let step = (u, v);
                v = u;
                step
            })
        })
    }
}

/// An antisymmetric flow matrix as produced by [`EdmondsKarp`].
///
/// `between(u, v) == -between(v, u)` holds at all times; a negative value on
/// `(u, v)` mirrors positive flow routed over `(v, u)`.
#[derive(Clone)]
pub struct FlowAssignment {
    n: NumNodes,
    flows: Vec<Capacity>,
}

impl FlowAssignment {
    /// Creates an all-zero assignment for `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            flows: vec![0; (n as usize) * (n as usize)],
        }
    }

    /// Returns the number of nodes the assignment was created for
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the flow on the arc `(u, v)`
    /// ** Panics if `u >= n || v >= n` **
    pub fn between(&self, u: Node, v: Node) -> Capacity {
        self.flows[self.idx(u, v)]
    }

    /// Pushes `delta` additional units over `(u, v)`, keeping antisymmetry
    pub(crate) fn add(&mut self, u: Node, v: Node, delta: Capacity) {
        let uv = self.idx(u, v);
        self.flows[uv] += delta;
        let vu = self.idx(v, u);
        self.flows[vu] -= delta;
    }

    /// Returns the net flow leaving `u`, i.e. the sum of `between(u, v)` over
    /// all `v`. Zero for every node except the source (`+value`) and the sink
    /// (`-value`) of the computation that produced this assignment.
    /// ** Panics if `u >= n` **
    pub fn net_flow_out_of(&self, u: Node) -> Capacity {
        let row = self.idx(u, 0);
        self.flows[row..row + self.n as usize].iter().sum()
    }

    /// Returns an iterator over all arcs carrying positive flow
    pub fn positive_arcs(&self) -> impl Iterator<Item = Arc> + '_ {
        (0..self.n).flat_map(move |u| {
            (0..self.n).filter_map(move |v| {
                let f = self.between(u, v);
                (f > 0).then_some(Arc(u, v, f))
            })
        })
    }

    fn idx(&self, u: Node, v: Node) -> usize {
        assert!(u < self.n && v < self.n);
        u as usize * self.n as usize + v as usize
    }
}

/// A single augmenting step of [`EdmondsKarp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmentation {
    /// The augmenting path as a source-to-sink node sequence
    pub path: Vec<Node>,
    /// The bottleneck value pushed along the path
    pub value: Capacity,
}

/// Computes a maximum flow between two nodes using the Edmonds-Karp algorithm.
///
/// The solver borrows the network read-only and owns all per-query state: the
/// flow matrix, the predecessor map and the BFS queue. It implements
/// [`Iterator`], yielding one [`Augmentation`] per augmenting step; [`run`]
/// drains the iterator and returns the total flow value.
///
/// [`run`]: EdmondsKarp::run
///
/// # Example
/// ```
/// use flownets::{prelude::*, algo::*};
///
/// let mut network = CapacityAdjArray::new(3);
/// network.add_arcs([(0, 1, 10), (1, 2, 4)]);
///
/// let mut solver = EdmondsKarp::new(&network, 0, 2).unwrap();
/// assert_eq!(solver.run(), 4);
/// assert_eq!(solver.flow_between(0, 1), 4);
/// ```
pub struct EdmondsKarp<'a, G> {
    network: &'a G,
    source: Node,
    sink: Node,
    flow: FlowAssignment,
    parent: ParentMap,
    queue: VecDeque<Node>,
    value: Capacity,
    augmentations: usize,
}

impl<'a, G: CapacityGraph> EdmondsKarp<'a, G> {
    /// Creates a solver for the maximum flow from `source` to `sink`.
    /// Fails with [`FlowError::InvalidNode`] if either index is out of bounds.
    pub fn new(network: &'a G, source: Node, sink: Node) -> Result<Self> {
        let n = network.number_of_nodes();
        for u in [source, sink] {
            if u >= n {
                return Err(FlowError::invalid_node(u, n));
            }
        }

        Ok(Self {
            network,
            source,
            sink,
            flow: FlowAssignment::new(n),
            parent: ParentMap::new(n),
            queue: VecDeque::new(),
            value: 0,
            augmentations: 0,
        })
    }

    /// Exhausts all augmenting paths and returns the maximum flow value.
    ///
    /// Augmentations already performed by iterating are kept, so intermixing
    /// `next` and `run` is legal.
    pub fn run(&mut self) -> Capacity {
        while self.next().is_some() {}

        debug!(
            "max flow from {} to {} is {} after {} augmentations",
            self.source, self.sink, self.value, self.augmentations
        );

        self.value
    }

    /// Returns the flow value accumulated so far
    pub fn value(&self) -> Capacity {
        self.value
    }

    /// Returns the number of augmenting paths applied so far
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// Returns the current flow on the arc `(u, v)`
    /// ** Panics if `u >= n || v >= n` **
    pub fn flow_between(&self, u: Node, v: Node) -> Capacity {
        self.flow.between(u, v)
    }

    /// Returns the current flow assignment
    pub fn flow(&self) -> &FlowAssignment {
        &self.flow
    }

    /// Consumes the solver and returns the flow assignment
    pub fn into_flow(self) -> FlowAssignment {
        self.flow
    }

    /// Returns the nodes still reachable from the source in the residual
    /// network, in ascending order: the source side of a minimum cut.
    ///
    /// Only meaningful once the iterator is exhausted. The last (failed) path
    /// search then has marked exactly the residual-reachable set.
    pub fn source_side_cut(&self) -> Vec<Node> {
        self.parent.reached_nodes().collect()
    }

    /// Returns the remaining capacity of `(u, v)` under the current flow
    fn residual(&self, u: Node, v: Node) -> Capacity {
        self.network.capacity_of(u, v) - self.flow.between(u, v)
    }

    /// Breadth-first search from the source over arcs with positive residual
    /// capacity. Returns *true* if the sink was discovered; the shortest
    /// augmenting path is then encoded in the parent map.
    ///
    /// Candidate neighbors are the out-neighbors (forward residual) and the
    /// in-neighbors (reverse residual) of a node: reverse residual capacity
    /// only exists against arcs already carrying flow, and flow only exists
    /// on arcs with positive capacity.
    fn find_augmenting_path(&mut self) -> bool {
        self.parent.reset();
        self.parent.record(self.source, self.source);
        self.queue.clear();
        self.queue.push_back(self.source);

        let network = self.network;
        while let Some(u) = self.queue.pop_front() {
            for v in network
                .out_neighbors_of(u)
                .chain(network.in_neighbors_of(u))
            {
                if self.parent.is_reached(v) || self.residual(u, v) <= 0 {
                    continue;
                }

                self.parent.record(v, u);
                if v == self.sink {
                    return true;
                }
                self.queue.push_back(v);
            }
        }

        false
    }
}

impl<G: CapacityGraph> Iterator for EdmondsKarp<'_, G> {
    type Item = Augmentation;

    /// Performs one augmentation: finds a shortest residual path and pushes
    /// its bottleneck over every arc on it. Returns `None` once the sink is
    /// no longer reachable.
    fn next(&mut self) -> Option<Self::Item> {
        if !self.find_augmenting_path() {
            return None;
        }

        let value = self
            .parent
            .walk_back(self.sink)
            .map(|(u, v)| self.residual(u, v))
            .min()?;

        let mut path = vec![self.sink];
        for (u, v) in self.parent.walk_back(self.sink) {
            self.flow.add(u, v, value);
            path.push(u);
        }
        path.reverse();

        self.value += value;
        self.augmentations += 1;

        trace!(
            "augmentation {}: pushed {value} over a path of {} nodes",
            self.augmentations,
            path.len()
        );

        Some(Augmentation { path, value })
    }
}

/// Maximum flow computations, implemented for every capacitated network.
pub trait MaxFlow: CapacityGraph {
    /// Computes the maximum flow from `source` to `sink` and returns its
    /// value together with the final flow assignment.
    /// Fails with [`FlowError::InvalidNode`] if either index is out of bounds.
    fn max_flow(&self, source: Node, sink: Node) -> Result<(Capacity, FlowAssignment)>;

    /// Computes only the maximum flow value from `source` to `sink`
    fn max_flow_value(&self, source: Node, sink: Node) -> Result<Capacity>;
}

impl<G: CapacityGraph> MaxFlow for G {
    fn max_flow(&self, source: Node, sink: Node) -> Result<(Capacity, FlowAssignment)> {
        let mut solver = EdmondsKarp::new(self, source, sink)?;
        let value = solver.run();
        Ok((value, solver.into_flow()))
    }

    fn max_flow_value(&self, source: Node, sink: Node) -> Result<Capacity> {
        let mut solver = EdmondsKarp::new(self, source, sink)?;
        Ok(solver.run())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    /// The max-flow instance from Cormen et al., maximum flow 23
    const ARCS: [(Node, Node, Capacity); 9] = [
        (0, 1, 16),
        (0, 2, 13),
        (1, 3, 12),
        (2, 1, 4),
        (2, 4, 14),
        (3, 2, 9),
        (3, 5, 20),
        (4, 3, 7),
        (4, 5, 4),
    ];

    /// Asserts conservation, antisymmetry and capacity respect of `flow`
    fn check_flow_invariants<G: CapacityGraph>(
        network: &G,
        flow: &FlowAssignment,
        source: Node,
        sink: Node,
        value: Capacity,
    ) {
        assert!(value >= 0);
        assert_eq!(flow.net_flow_out_of(source), value);
        assert_eq!(flow.net_flow_out_of(sink), -value);

        for u in network.vertices() {
            if u != source && u != sink {
                assert_eq!(flow.net_flow_out_of(u), 0);
            }

            for v in network.vertices() {
                assert_eq!(flow.between(u, v), -flow.between(v, u));
                assert!(flow.between(u, v) <= network.capacity_of(u, v));
            }
        }
    }

    #[test]
    fn edmonds_karp() {
        let network = CapacityMatrix::from_arcs(6, ARCS);

        let mut solver = EdmondsKarp::new(&network, 0, 5).unwrap();
        assert_eq!(solver.run(), 23);
        assert_eq!(solver.value(), 23);

        check_flow_invariants(&network, solver.flow(), 0, 5, 23);
    }

    #[test]
    fn augmentation_paths_grow_monotonically() {
        let network = CapacityAdjArray::from_arcs(6, ARCS);

        let mut solver = EdmondsKarp::new(&network, 0, 5).unwrap();
        let augmentations = solver.by_ref().collect_vec();

        assert_eq!(augmentations.iter().map(|a| a.value).sum::<Capacity>(), 23);
        assert!(augmentations
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.path.len() <= b.path.len()));

        for augmentation in &augmentations {
            assert_eq!(augmentation.path.first(), Some(&0));
            assert_eq!(augmentation.path.last(), Some(&5));
            assert!(augmentation.value > 0);
        }
    }

    #[test]
    fn source_side_cut_is_a_minimum_cut() {
        let network = CapacityMatrix::from_arcs(6, ARCS);

        let mut solver = EdmondsKarp::new(&network, 0, 5).unwrap();
        let value = solver.run();

        let cut = solver.source_side_cut();
        assert_eq!(cut, [0, 1, 2, 4]);

        let mut in_cut = vec![false; network.len()];
        for &u in &cut {
            in_cut[u as usize] = true;
        }
        let crossing: Capacity = network
            .arcs()
            .filter(|arc| in_cut[arc.source() as usize] && !in_cut[arc.target() as usize])
            .map(|arc| arc.capacity())
            .sum();

        assert_eq!(crossing, value);
    }

    #[test]
    fn intermixing_next_and_run() {
        let network = CapacityMatrix::from_arcs(6, ARCS);

        let mut solver = EdmondsKarp::new(&network, 0, 5).unwrap();
        let first = solver.next().unwrap();
        assert!(first.value > 0);
        assert_eq!(solver.value(), first.value);

        assert_eq!(solver.run(), 23);
        assert!(solver.augmentations() >= 2);
        assert!(solver.next().is_none());
    }

    #[test]
    fn single_arc() {
        let network = CapacityAdjArray::from_arcs(2, [(0, 1, 42)]);
        assert_eq!(network.max_flow_value(0, 1).unwrap(), 42);
    }

    #[test]
    fn bottleneck_chain() {
        let network = CapacityAdjArray::from_arcs(3, [(0, 1, 10), (1, 2, 4)]);
        assert_eq!(network.max_flow_value(0, 2).unwrap(), 4);
    }

    #[test]
    fn parallel_paths_add_up() {
        let network = CapacityAdjArray::from_arcs(4, [(0, 1, 5), (1, 3, 5), (0, 2, 7), (2, 3, 7)]);
        assert_eq!(network.max_flow_value(0, 3).unwrap(), 12);
    }

    #[test]
    fn unreachable_sink_has_zero_flow() {
        let network = CapacityMatrix::from_arcs(4, [(0, 1, 5), (3, 2, 5)]);

        let (value, flow) = network.max_flow(0, 2).unwrap();
        assert_eq!(value, 0);
        assert_eq!(flow.positive_arcs().count(), 0);
    }

    #[test]
    fn source_equals_sink() {
        let network = CapacityMatrix::from_arcs(3, [(0, 1, 5), (1, 0, 5)]);
        assert_eq!(network.max_flow_value(0, 0).unwrap(), 0);
    }

    #[test]
    fn out_of_bounds_nodes_are_rejected() {
        let network = CapacityMatrix::new(3);

        assert_eq!(
            network.max_flow_value(0, 3).unwrap_err(),
            FlowError::invalid_node(3, 3)
        );
        assert_eq!(
            network.max_flow_value(7, 1).unwrap_err(),
            FlowError::invalid_node(7, 3)
        );
    }

    #[test]
    fn antiparallel_arcs_net_out() {
        let network = CapacityAdjArray::from_arcs(2, [(0, 1, 5), (1, 0, 3)]);

        let (value, flow) = network.max_flow(0, 1).unwrap();
        assert_eq!(value, 5);
        assert_eq!(flow.between(0, 1), 5);
        assert_eq!(flow.between(1, 0), -5);

        assert_eq!(network.max_flow_value(1, 0).unwrap(), 3);
    }

    #[test]
    fn repeated_queries_agree() {
        let network = CapacityAdjArray::from_arcs(6, ARCS);
        assert_eq!(
            network.max_flow_value(0, 5).unwrap(),
            network.max_flow_value(0, 5).unwrap()
        );
    }

    #[test]
    fn dense_and_sparse_agree_on_random_networks() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10 as NumNodes, 20, 50] {
            for p in [0.05, 0.2, 0.5] {
                let arcs = RandomNetwork::new()
                    .nodes(n)
                    .arc_prob(p)
                    .max_capacity(50)
                    .generate(rng);

                let matrix = CapacityMatrix::from_arcs(n, arcs.iter());
                let adj = CapacityAdjArray::from_arcs(n, arcs.iter());

                for (s, t) in [(0, n - 1), (n - 1, 0), (1, n / 2)] {
                    let (value, flow) = matrix.max_flow(s, t).unwrap();
                    assert_eq!(value, adj.max_flow_value(s, t).unwrap());

                    if s != t {
                        check_flow_invariants(&matrix, &flow, s, t, value);
                    }
                }
            }
        }
    }
}
