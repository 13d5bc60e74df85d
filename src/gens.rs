/*!
# Network Generators

This module provides traits and a builder pattern for constructing random
capacitated networks.

Generators follow a builder-style workflow:

1. Create a generator instance (e.g. `RandomNetwork::new()`).
2. Set parameters using the builder methods (e.g. `.nodes(n).arc_prob(p)`).
3. Produce arcs via `generate()` or `stream()`, or a whole network via
   `network()`.

The provided model is `G(n,p)` restricted to loop-free arcs: every ordered
pair `(u, v)` with `u != v` carries an arc with probability `p` independent
from each other, and every generated arc draws its capacity uniformly from
`1..=max_capacity`.
*/

use rand::Rng;

use crate::{prelude::*, utils::*};

/// Trait for generators that allow setting the number of nodes.
///
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the network generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average out-degree.
pub trait AverageDegreeGen {
    /// Sets the average out-degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random arc generator.
///
/// Types implementing this trait can produce a complete arc list, a
/// lazily-evaluated stream of arcs, or a fully built network.
pub trait NetworkGenerator {
    /// Returns the number of nodes this generator is configured for.
    fn number_of_nodes(&self) -> NumNodes;

    /// Generates a list of random arcs.
    ///
    /// This collects the full result from `stream()` into a `Vec<Arc>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Arc>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated arcs.
    ///
    /// Preferred for large networks or pipelined filtering.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Arc>
    where
        R: Rng;

    /// Builds a network of the requested representation from a stream of
    /// random arcs.
    fn network<G, R>(&self, rng: &mut R) -> G
    where
        G: GraphFromArcs,
        R: Rng,
    {
        G::from_arcs(self.number_of_nodes(), self.stream(rng))
    }
}

/// The arc probability can be defined either directly or by the average
/// out-degree which is more common in practice
#[derive(Debug, Copy, Clone, Default)]
enum ArcProb {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average out-degree of a node
    AvgDeg(f64),
}

/// A `G(n,p)` generator over capacitated arcs.
///
/// Every ordered pair `(u, v)` with `u != v` is generated with probability
/// `p` independent from each other. Self-loops carry no flow and are skipped
/// in the generator itself.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use flownets::{gens::*, prelude::*};
///
/// let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(1234);
/// let network: CapacityAdjArray = RandomNetwork::new()
///     .nodes(100)
///     .arc_prob(0.1)
///     .max_capacity(20)
///     .network(&mut rng);
///
/// assert_eq!(network.number_of_nodes(), 100);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct RandomNetwork {
    n: NumNodes,
    p: ArcProb,
    max_capacity: Capacity,
}

impl Default for RandomNetwork {
    fn default() -> Self {
        Self {
            n: 0,
            p: ArcProb::NotSet,
            max_capacity: 1,
        }
    }
}

impl RandomNetwork {
    /// Creates a new empty `G(n,p)` network generator with unit capacities
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn arc_prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = ArcProb::Prob(prob);
        self
    }

    /// Updates the maximum arc capacity. Capacities are drawn uniformly from
    /// `1..=max_capacity`.
    pub fn max_capacity(mut self, max_capacity: Capacity) -> Self {
        assert!(max_capacity > 0);
        self.max_capacity = max_capacity;
        self
    }
}

impl NumNodesGen for RandomNetwork {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for RandomNetwork {
    /// Updates `p` such that `p = d/(n - 1)`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = ArcProb::AvgDeg(deg);
        self
    }
}

impl NetworkGenerator for RandomNetwork {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Creates a streaming generator over random capacitated arcs.
    /// Arcs are emitted in lexicographic order.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Arc>
    where
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");
        let p = match self.p {
            ArcProb::NotSet => panic!("Arc probability of RandomNetwork was not set!"),
            ArcProb::Prob(p) => p,
            ArcProb::AvgDeg(d) => {
                let p = d / (self.n - 1).max(1) as f64;
                assert!(
                    p.is_valid_probability(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        };

        let n = self.n as u64;
        let max_capacity = self.max_capacity;

        // The maximum possible value an arc can be mapped to
        let max_value = n * n;

        (0..max_value).filter_map(move |x| {
            let (u, v) = ((x / n) as Node, (x % n) as Node);
            (u != v && rng.random_bool(p))
                .then(|| Arc(u, v, rng.random_range(1..=max_capacity)))
        })
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn arc_count_concentrates_around_expectation() {
        let mut rng = Pcg64Mcg::seed_from_u64(123);
        let gen = RandomNetwork::new().nodes(50).arc_prob(0.3);

        for _ in 0..10 {
            // Expectation is 735, standard deviation roughly 23
            let num_arcs = gen.stream(&mut rng).count();
            assert!((620..850).contains(&num_arcs));
        }
    }

    #[test]
    fn extreme_probabilities() {
        let mut rng = Pcg64Mcg::seed_from_u64(234);

        let empty = RandomNetwork::new().nodes(30).arc_prob(0.0);
        assert_eq!(empty.generate(&mut rng), []);

        let complete = RandomNetwork::new().nodes(30).arc_prob(1.0);
        let arcs = complete.generate(&mut rng);
        assert_eq!(arcs.len(), 30 * 29);
        assert!(arcs.iter().all(|a| !a.is_loop() && a.capacity() == 1));
    }

    #[test]
    fn average_degree_sets_probability() {
        let mut rng = Pcg64Mcg::seed_from_u64(345);
        let gen = RandomNetwork::new().nodes(50).avg_deg(4.9);

        for _ in 0..10 {
            // Equivalent to p = 0.1, so the expectation is 245
            let num_arcs = gen.stream(&mut rng).count();
            assert!((170..320).contains(&num_arcs));
        }
    }

    #[test]
    fn capacities_stay_in_range() {
        let mut rng = Pcg64Mcg::seed_from_u64(456);
        let arcs = RandomNetwork::new()
            .nodes(40)
            .arc_prob(0.2)
            .max_capacity(7)
            .generate(&mut rng);

        assert!(arcs
            .iter()
            .all(|a| !a.is_loop() && (1..=7).contains(&a.capacity())));
        assert!(arcs.iter().any(|a| a.capacity() > 1));
    }

    #[test]
    fn streams_in_lexicographic_order() {
        let mut rng = Pcg64Mcg::seed_from_u64(567);
        let arcs = RandomNetwork::new()
            .nodes(25)
            .arc_prob(0.4)
            .generate(&mut rng);

        assert!(arcs
            .iter()
            .tuple_windows()
            .all(|(a, b)| (a.source(), a.target()) < (b.source(), b.target())));
    }

    #[test]
    fn network_matches_generated_arcs() {
        let gen = RandomNetwork::new().nodes(20).arc_prob(0.3).max_capacity(9);

        let arcs = gen.generate(&mut Pcg64Mcg::seed_from_u64(678));
        let network: CapacityAdjArray = gen.network(&mut Pcg64Mcg::seed_from_u64(678));

        assert_eq!(network.number_of_arcs(), arcs.len() as NumArcs);
        assert!(arcs
            .iter()
            .all(|a| network.capacity_of(a.source(), a.target()) == a.capacity()));
    }

    #[test]
    #[should_panic]
    fn missing_probability_panics() {
        let mut rng = Pcg64Mcg::seed_from_u64(789);
        let _ = RandomNetwork::new().nodes(10).generate(&mut rng);
    }
}
