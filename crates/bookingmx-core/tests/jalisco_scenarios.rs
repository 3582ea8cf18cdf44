//! End-to-end scenarios over the Guadalajara metro dataset.

use bookingmx_core::{
    build_graph, get_nearby_cities, sample_data, validate_graph_data, EdgeInput, Error, Graph,
    GraphData, NearbyCity,
};

fn nearby(city: &str, distance: f64) -> NearbyCity {
    NearbyCity {
        city: city.to_string(),
        distance,
    }
}

fn metro_graph() -> Graph {
    build_graph(
        &["Guadalajara", "Tlaquepaque", "Zapopan", "Tepatitlán"],
        &[
            EdgeInput::new("Guadalajara", "Zapopan", 12.0),
            EdgeInput::new("Guadalajara", "Tlaquepaque", 10.0),
            EdgeInput::new("Guadalajara", "Tepatitlán", 78.0),
        ],
    )
    .expect("metro dataset builds")
}

#[test]
fn test_metro_within_50_km() {
    let graph = metro_graph();
    let result = get_nearby_cities(&graph, Some("Guadalajara"), Some(50.0)).unwrap();
    assert_eq!(
        result,
        vec![nearby("Tlaquepaque", 10.0), nearby("Zapopan", 12.0)]
    );
}

#[test]
fn test_metro_default_max_distance() {
    let graph = metro_graph();
    let result = get_nearby_cities(&graph, Some("Guadalajara"), None).unwrap();
    assert_eq!(
        result,
        vec![
            nearby("Tlaquepaque", 10.0),
            nearby("Zapopan", 12.0),
            nearby("Tepatitlán", 78.0),
        ]
    );
}

#[test]
fn test_metro_unknown_and_missing_destination() {
    let graph = metro_graph();
    assert!(get_nearby_cities(&graph, Some("UnknownCity"), Some(50.0))
        .unwrap()
        .is_empty());
    assert!(get_nearby_cities(&graph, None, Some(50.0))
        .unwrap()
        .is_empty());
}

#[test]
fn test_metro_not_a_graph() {
    let data = sample_data();
    assert_eq!(
        get_nearby_cities(&data, Some("X"), Some(50.0)),
        Err(Error::InvalidGraphArgument)
    );
}

#[test]
fn test_validate_then_build_from_json_text() {
    let text = r#"{
        "cities": ["Guadalajara", "Tequila"],
        "edges": [{"from": "Guadalajara", "to": "Tequila", "distance": 60}]
    }"#;
    let value: serde_json::Value = serde_json::from_str(text).unwrap();
    assert!(validate_graph_data(&value).is_valid());

    let data = GraphData::from_json_str(text).unwrap();
    let graph = Graph::from_data(&data).unwrap();
    assert_eq!(
        graph.nearby_cities("Tequila", 100.0),
        vec![nearby("Guadalajara", 60.0)]
    );
}

#[test]
fn test_rejected_dataset_does_not_build() {
    let data = GraphData::new(
        vec!["Guadalajara".to_string()],
        vec![EdgeInput::new("Guadalajara", "Tala", 40.0)],
    );
    assert_eq!(
        data.validate().reason(),
        Some("edge references unknown city")
    );
    assert_eq!(
        Graph::from_data(&data).unwrap_err(),
        Error::UnknownCity("Tala".to_string())
    );
}
