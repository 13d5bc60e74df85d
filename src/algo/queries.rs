/*!
# Batched Flow Queries

Runs one independent max-flow computation per requested `(source, sink)` pair
and collects the positive results. Pairs without a feasible route are omitted
from the output rather than reported as zero, so an empty result set is a
valid outcome.
*/

use itertools::Itertools;

use super::*;

/// The result of a single source-sink flow query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryResult {
    /// The queried source node
    pub source: Node,
    /// The queried sink node
    pub sink: Node,
    /// The maximum flow value from source to sink, always positive
    pub value: Capacity,
}

/// Batched maximum flow queries, implemented for every capacitated network.
///
/// Every pair is solved by a fresh [`EdmondsKarp`] run with its own
/// zero-initialized flow matrix; queries do not influence each other.
pub trait FlowQueries: CapacityGraph {
    /// Computes the maximum flow for every pair and returns the results with
    /// a strictly positive value, in input order.
    /// Fails with [`FlowError::InvalidNode`] on the first out-of-bounds pair.
    fn max_flows<I>(&self, pairs: I) -> Result<Vec<QueryResult>>
    where
        I: IntoIterator<Item = (Node, Node)>;

    /// Computes the maximum flow for every source-sink combination of the
    /// given sets, omitting pairs with no feasible route.
    fn max_flows_between<S, T>(&self, sources: S, sinks: T) -> Result<Vec<QueryResult>>
    where
        S: IntoIterator<Item = Node>,
        T: IntoIterator<Item = Node>,
        T::IntoIter: Clone;
}

impl<G: CapacityGraph> FlowQueries for G {
    fn max_flows<I>(&self, pairs: I) -> Result<Vec<QueryResult>>
    where
        I: IntoIterator<Item = (Node, Node)>,
    {
        let mut results = Vec::new();
        for (source, sink) in pairs {
            let value = self.max_flow_value(source, sink)?;
            if value > 0 {
                results.push(QueryResult {
                    source,
                    sink,
                    value,
                });
            }
        }

        Ok(results)
    }

    fn max_flows_between<S, T>(&self, sources: S, sinks: T) -> Result<Vec<QueryResult>>
    where
        S: IntoIterator<Item = Node>,
        T: IntoIterator<Item = Node>,
        T::IntoIter: Clone,
    {
        self.max_flows(sources.into_iter().cartesian_product(sinks))
    }
}
