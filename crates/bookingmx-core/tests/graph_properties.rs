//! Property-based tests for graph construction, validation and the
//! nearby-city query.
//!
//! Datasets are generated valid by construction (unique non-blank names,
//! endpoints drawn from the city list, finite non-negative distances) so the
//! properties can be checked against every public entry point.

use proptest::{
    collection::{hash_set, vec},
    prelude::{prop_assert, prop_assert_eq, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};
use serde_json::json;

use bookingmx_core::graph::{
    build_graph, get_nearby_cities, validate_graph_data, EdgeInput, GraphData, Neighbor,
};

const GRAPH_PROP_CASES: u32 = 128;

fn city_names_strategy() -> impl Strategy<Value = Vec<String>> {
    hash_set("[A-Za-z][A-Za-z ]{0,11}", 1..12)
        .prop_map(|set| set.into_iter().collect::<Vec<String>>())
}

fn dataset_strategy() -> impl Strategy<Value = GraphData> {
    city_names_strategy().prop_flat_map(|cities| {
        let n = cities.len();
        vec((0..n, 0..n, 0.0_f64..500.0), 0..24).prop_map(move |raw| {
            let edges = raw
                .into_iter()
                .map(|(a, b, d)| EdgeInput::new(&cities[a], &cities[b], d))
                .collect();
            GraphData::new(cities.clone(), edges)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(GRAPH_PROP_CASES))]

    #[test]
    fn prop_valid_datasets_pass_validation(data in dataset_strategy()) {
        prop_assert!(data.validate().is_valid());
        let value = serde_json::to_value(&data).unwrap();
        prop_assert!(validate_graph_data(&value).is_valid());
    }

    #[test]
    fn prop_duplicate_city_is_reported(data in dataset_strategy(), pick in 0_usize..64) {
        let mut cities = data.cities.clone();
        let dup = cities[pick % cities.len()].clone();
        cities.push(dup);
        let outcome = validate_graph_data(&json!({"cities": cities, "edges": []}));
        prop_assert!(outcome.reason().unwrap_or_default().contains("duplicate"));
    }

    #[test]
    fn prop_unknown_endpoint_is_reported(data in dataset_strategy()) {
        let mut edges = data.edges.clone();
        edges.push(EdgeInput::new(&data.cities[0], "\u{0}missing", 1.0));
        let value = json!({"cities": data.cities, "edges": edges});
        let outcome = validate_graph_data(&value);
        prop_assert!(outcome.reason().unwrap_or_default().contains("unknown city"));
    }

    #[test]
    fn prop_negative_distance_is_rejected(data in dataset_strategy(), d in -1000.0_f64..-0.001) {
        let mut bad = data.clone();
        bad.edges.push(EdgeInput::new(&data.cities[0], &data.cities[0], d));
        prop_assert!(!bad.validate().is_valid());
    }

    #[test]
    fn prop_edges_are_symmetric(data in dataset_strategy()) {
        let graph = build_graph(&data.cities, &data.edges).unwrap();
        prop_assert_eq!(graph.edge_count(), data.edges.len());
        for edge in &data.edges {
            let forward = Neighbor { to: edge.to.clone(), distance: edge.distance };
            let backward = Neighbor { to: edge.from.clone(), distance: edge.distance };
            prop_assert!(graph.neighbors(&edge.from).unwrap().contains(&forward));
            prop_assert!(graph.neighbors(&edge.to).unwrap().contains(&backward));
        }
    }

    #[test]
    fn prop_add_city_is_idempotent(data in dataset_strategy(), pick in 0_usize..64) {
        let mut graph = build_graph(&data.cities, &data.edges).unwrap();
        let city = &data.cities[pick % data.cities.len()];
        let before = graph.neighbors(city).unwrap();
        graph.add_city(city).unwrap();
        prop_assert_eq!(graph.neighbors(city).unwrap(), before);
        prop_assert_eq!(graph.city_count(), data.cities.len());
    }

    #[test]
    fn prop_nearby_is_sorted_bounded_subset(
        data in dataset_strategy(),
        pick in 0_usize..64,
        max in 0.0_f64..600.0,
    ) {
        let graph = build_graph(&data.cities, &data.edges).unwrap();
        let destination = &data.cities[pick % data.cities.len()];
        let neighbors = graph.neighbors(destination).unwrap();
        let nearby = get_nearby_cities(&graph, Some(destination), Some(max)).unwrap();

        prop_assert!(nearby.windows(2).all(|w| w[0].distance <= w[1].distance));
        prop_assert!(nearby.iter().all(|n| n.distance <= max));
        for n in &nearby {
            let as_neighbor = Neighbor { to: n.city.clone(), distance: n.distance };
            prop_assert!(neighbors.contains(&as_neighbor));
        }
        let expected = neighbors.iter().filter(|n| n.distance <= max).count();
        prop_assert_eq!(nearby.len(), expected);
    }
}
