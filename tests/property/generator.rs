use dagsched::dag::{has_cycle, sort};
use dagsched::types::GraphParams;
use dagsched_test_utils::fixtures::seeded_generator;
use proptest::prelude::*;

use crate::common::assert_simple_graph;

// Sparse sizes only: dense requests are valid but can need very many
// attempts before a random candidate happens to be acyclic.
fn params_strategy() -> impl Strategy<Value = (i64, i64)> {
    (1i64..=10).prop_flat_map(|n| {
        let max = n * (n - 1) / 2;
        (Just(n), 0..=max.min(n))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_graph_meets_its_contract((n, m) in params_strategy(), seed in any::<u64>()) {
        let params = GraphParams::new(n, m).unwrap();
        let mut generator = seeded_generator(seed);

        let generated = generator.generate(params).unwrap();
        let graph = &generated.graph;

        assert_simple_graph(graph);
        prop_assert_eq!(graph.node_count(), n as usize);
        prop_assert_eq!(graph.edge_count(), m as usize);
        prop_assert!(!has_cycle(graph));
        prop_assert!(sort(graph).unwrap().is_consistent_with(graph));
    }

    #[test]
    fn generation_is_reproducible_from_a_seed((n, m) in params_strategy(), seed in any::<u64>()) {
        let params = GraphParams::new(n, m).unwrap();

        let a = seeded_generator(seed).generate(params).unwrap();
        let b = seeded_generator(seed).generate(params).unwrap();

        prop_assert_eq!(a.graph, b.graph);
        prop_assert_eq!(a.attempts, b.attempts);
    }
}
