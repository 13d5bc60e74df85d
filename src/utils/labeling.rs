/*!
# Node Labeling

The algorithms in this crate operate on dense node indices `0..n`. Real
instances name their nodes differently: strings in reports, 1-based ids in
files. [`Labeling`] is the boundary adapter between the two worlds: labels map
to indices through a hash map, indices map back through a dense vector.

Indices are assigned in order of first appearance, so feeding the same
labeled arc list twice yields the same labeling.
*/

use std::hash::Hash;

use fxhash::FxHashMap;

use crate::{arc::*, node::*};

/// A bidirectional mapping between external labels and dense node indices.
///
/// # Example
/// ```
/// use flownets::utils::Labeling;
///
/// let mut labeling = Labeling::new();
///
/// assert_eq!(labeling.get_or_insert("Terminal 1"), 0);
/// assert_eq!(labeling.get_or_insert("Warehouse 1"), 1);
/// assert_eq!(labeling.get_or_insert("Terminal 1"), 0);
///
/// assert_eq!(labeling.node_of(&"Warehouse 1"), Some(1));
/// assert_eq!(labeling.label_of(0), Some(&"Terminal 1"));
/// assert_eq!(labeling.len(), 2);
/// ```
#[derive(Clone)]
pub struct Labeling<L> {
    label_to_node: FxHashMap<L, Node>,
    node_to_label: Vec<L>,
}

impl<L> Default for Labeling<L> {
    fn default() -> Self {
        Self {
            label_to_node: FxHashMap::default(),
            node_to_label: Vec::new(),
        }
    }
}

impl<L> Labeling<L>
where
    L: Clone + Eq + Hash,
{
    /// Creates an empty labeling
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty labeling with space reserved for `n` labels
    pub fn with_capacity(n: NumNodes) -> Self {
        Self {
            label_to_node: FxHashMap::with_capacity_and_hasher(n as usize, Default::default()),
            node_to_label: Vec::with_capacity(n as usize),
        }
    }

    /// Returns the node of `label`, assigning the next free index if the
    /// label is seen for the first time
    pub fn get_or_insert(&mut self, label: L) -> Node {
        if let Some(&u) = self.label_to_node.get(&label) {
            return u;
        }

        let u = self.node_to_label.len() as Node;
        self.label_to_node.insert(label.clone(), u);
        self.node_to_label.push(label);

        u
    }

    /// Returns the node assigned to `label`, or `None` if the label is unknown
    pub fn node_of(&self, label: &L) -> Option<Node> {
        self.label_to_node.get(label).copied()
    }

    /// Returns the label assigned to `u`, or `None` if `u` has no label
    pub fn label_of(&self, u: Node) -> Option<&L> {
        self.node_to_label.get(u as usize)
    }

    /// Returns the number of stored labels
    pub fn len(&self) -> NumNodes {
        self.node_to_label.len() as NumNodes
    }

    /// Returns *true* if no labels are stored
    pub fn is_empty(&self) -> bool {
        self.node_to_label.is_empty()
    }

    /// Returns an iterator over all labels in node order
    pub fn labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.node_to_label.iter()
    }

    /// Returns an iterator over all `(node, label)` pairs in node order
    pub fn iter(&self) -> impl Iterator<Item = (Node, &L)> + '_ {
        self.node_to_label
            .iter()
            .enumerate()
            .map(|(u, label)| (u as Node, label))
    }

    /// Builds a labeling and a translated arc list from labeled arcs.
    /// Nodes are assigned in order of first appearance, sources before
    /// targets.
    ///
    /// # Example
    /// ```
    /// use flownets::{prelude::*, utils::Labeling};
    ///
    /// let (labeling, arcs) = Labeling::from_labeled_arcs([
    ///     ("Terminal 1", "Warehouse 1", 25),
    ///     ("Warehouse 1", "Shop 1", 15),
    /// ]);
    ///
    /// assert_eq!(arcs, [Arc(0, 1, 25), Arc(1, 2, 15)]);
    /// let network = CapacityAdjArray::from_arcs(labeling.len(), arcs);
    /// assert_eq!(network.capacity_of(0, 1), 25);
    /// ```
    pub fn from_labeled_arcs<I>(arcs: I) -> (Self, Vec<Arc>)
    where
        I: IntoIterator<Item = (L, L, Capacity)>,
    {
        let mut labeling = Self::new();
        let arcs = arcs
            .into_iter()
            .map(|(source, target, capacity)| {
                let u = labeling.get_or_insert(source);
                let v = labeling.get_or_insert(target);
                Arc(u, v, capacity)
            })
            .collect();

        (labeling, arcs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_indices_in_first_appearance_order() {
        let mut labeling = Labeling::new();

        assert_eq!(labeling.get_or_insert("b"), 0);
        assert_eq!(labeling.get_or_insert("a"), 1);
        assert_eq!(labeling.get_or_insert("c"), 2);
        assert_eq!(labeling.get_or_insert("a"), 1);

        assert_eq!(labeling.len(), 3);
        assert_eq!(labeling.labels().collect::<Vec<_>>(), [&"b", &"a", &"c"]);
        assert_eq!(
            labeling.iter().collect::<Vec<_>>(),
            [(0, &"b"), (1, &"a"), (2, &"c")]
        );
    }

    #[test]
    fn misses_return_none() {
        let mut labeling = Labeling::new();
        labeling.get_or_insert("a".to_string());

        assert_eq!(labeling.node_of(&"b".to_string()), None);
        assert_eq!(labeling.label_of(1), None);
    }

    #[test]
    fn from_labeled_arcs_translates_endpoints() {
        let (labeling, arcs) = Labeling::from_labeled_arcs([
            ("s", "a", 10),
            ("s", "b", 5),
            ("a", "t", 10),
            ("b", "t", 5),
        ]);

        assert_eq!(labeling.len(), 4);
        assert_eq!(
            arcs,
            [Arc(0, 1, 10), Arc(0, 2, 5), Arc(1, 3, 10), Arc(2, 3, 5)]
        );
        assert_eq!(labeling.node_of(&"t"), Some(3));
    }

    #[test]
    fn empty_labeling() {
        let labeling = Labeling::<String>::new();
        assert!(labeling.is_empty());
        assert_eq!(labeling.len(), 0);
        assert_eq!(labeling.iter().count(), 0);
    }
}
