/*!
# Testing

Private helpers to test representations against the network operation traits
from [`ops`](crate::ops).

As all representations should behave identically w.r.t. the operations they
support, every representation invokes [`test_network_ops`] once at the bottom
of its file, listing the traits it implements. The assertions compare against
a dense reference capacity table built independently of the representation.
*/

/// Expands to a test module for one representation.
///
/// The first argument names the module, the second is the representation type,
/// followed by the list of operation traits to test.
macro_rules! test_network_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            use crate::{arc::*, node::*, ops::*, repr::*, testing::test_network_ops};

            /// Creates at most `m_ub` random arcs between `n` nodes with
            /// unique endpoint pairs, sorted by endpoints
            fn random_arcs<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumArcs) -> Vec<Arc> {
                let mut arcs = (0..m_ub)
                    .map(|_| {
                        Arc(
                            rng.random_range(0..n),
                            rng.random_range(0..n),
                            rng.random_range(1..=100),
                        )
                    })
                    .collect_vec();
                arcs.sort_unstable();
                arcs.dedup_by_key(|arc| (arc.source(), arc.target()));

                arcs
            }

            $(
                test_network_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn test_graph_new() {
            for n in 1..50 {
                let network = <$graph>::new(n);

                assert_eq!(network.number_of_nodes(), n);
                assert_eq!(network.number_of_arcs(), 0);
                assert!(network.is_singleton());

                assert_eq!(network.vertices().collect_vec(), (0..n).collect_vec());
            }
        }
    };
    ($graph:ident: CapacityGraph) => {
        #[test]
        fn test_capacity_graph() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let arcs = random_arcs(rng, n, m_ub);

                        let mut capacities = vec![0 as Capacity; (n * n) as usize];
                        for arc in &arcs {
                            capacities[(arc.source() * n + arc.target()) as usize] =
                                arc.capacity();
                        }

                        let network = <$graph>::from_arcs(n, arcs.clone());

                        assert_eq!(network.number_of_nodes(), n);
                        assert_eq!(network.number_of_arcs(), arcs.len() as NumArcs);
                        assert_eq!(network.ordered_arcs().collect_vec(), arcs);

                        for u in 0..n {
                            for v in 0..n {
                                let c = capacities[(u * n + v) as usize];
                                assert_eq!(network.capacity_of(u, v), c);
                                assert_eq!(network.has_arc(u, v), c > 0);
                            }

                            let out_arcs =
                                network.out_arcs_of(u).sorted_unstable().collect_vec();
                            assert_eq!(
                                out_arcs,
                                (0..n)
                                    .filter_map(|v| {
                                        let c = capacities[(u * n + v) as usize];
                                        (c > 0).then_some((v, c))
                                    })
                                    .collect_vec()
                            );

                            let in_arcs =
                                network.in_arcs_of(u).sorted_unstable().collect_vec();
                            assert_eq!(
                                in_arcs,
                                (0..n)
                                    .filter_map(|v| {
                                        let c = capacities[(v * n + u) as usize];
                                        (c > 0).then_some((v, c))
                                    })
                                    .collect_vec()
                            );

                            assert_eq!(network.out_degree_of(u) as usize, out_arcs.len());
                            assert_eq!(network.in_degree_of(u) as usize, in_arcs.len());
                            assert_eq!(
                                network.capacity_out_of(u),
                                out_arcs.iter().map(|(_, c)| c).sum::<Capacity>()
                            );
                            assert_eq!(
                                network.capacity_into(u),
                                in_arcs.iter().map(|(_, c)| c).sum::<Capacity>()
                            );
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: CapacityEditing) => {
        #[test]
        fn test_capacity_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let arcs = random_arcs(rng, n, m_ub);

                        let mut network = <$graph>::new(n);
                        network.add_arcs(arcs.iter());
                        let mut m = arcs.len() as NumArcs;
                        assert_eq!(network.number_of_arcs(), m);

                        // overwriting a capacity must not change the arc count
                        for arc in &arcs {
                            network.set_capacity(
                                arc.source(),
                                arc.target(),
                                arc.capacity() + 7,
                            );
                            assert_eq!(
                                network.capacity_of(arc.source(), arc.target()),
                                arc.capacity() + 7
                            );
                            assert_eq!(network.number_of_arcs(), m);
                        }

                        // remove every other arc via `set_capacity`, the rest
                        // via `remove_arc`
                        for (i, arc) in arcs.iter().enumerate() {
                            if i % 2 == 0 {
                                network.set_capacity(arc.source(), arc.target(), 0);
                            } else {
                                network.remove_arc(arc.source(), arc.target());
                            }
                            m -= 1;

                            assert!(!network.has_arc(arc.source(), arc.target()));
                            assert_eq!(network.number_of_arcs(), m);
                        }

                        assert!(network.is_singleton());
                    }
                }
            }
        }
    };
}

pub(crate) use test_network_ops;
