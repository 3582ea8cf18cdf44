//! Tests for graph value types (EdgeInput, GraphData, NearbyCity).

use super::types::{EdgeInput, GraphData, NearbyCity, Neighbor};
use crate::error::Error;

#[test]
fn test_edge_input_new() {
    let edge = EdgeInput::new("Zapopan", "Tala", 35.0);
    assert_eq!(edge.from, "Zapopan");
    assert_eq!(edge.to, "Tala");
    assert_eq!(edge.distance, 35.0);
}

#[test]
fn test_graph_data_from_json_str() {
    let data = GraphData::from_json_str(
        r#"{"cities": ["A", "B"], "edges": [{"from": "A", "to": "B", "distance": 7.5}]}"#,
    )
    .unwrap();
    assert_eq!(data.cities, vec!["A", "B"]);
    assert_eq!(data.edges, vec![EdgeInput::new("A", "B", 7.5)]);
}

#[test]
fn test_graph_data_from_json_str_rejects_wrong_shape() {
    let err = GraphData::from_json_str(r#"{"cities": null, "edges": []}"#).unwrap_err();
    assert!(matches!(err, Error::Dataset(_)));
}

#[test]
fn test_neighbor_into_nearby_city() {
    let nearby = NearbyCity::from(Neighbor {
        to: "Tequila".to_string(),
        distance: 60.0,
    });
    assert_eq!(nearby.city, "Tequila");
    assert_eq!(nearby.distance, 60.0);
}

#[test]
fn test_nearby_city_serializes_city_and_distance() {
    let json = serde_json::to_value(NearbyCity {
        city: "Zapopan".to_string(),
        distance: 12.0,
    })
    .unwrap();
    assert_eq!(json, serde_json::json!({"city": "Zapopan", "distance": 12.0}));
}
