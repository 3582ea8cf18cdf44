//! In-memory city graph module.
//!
//! Provides the undirected city graph, dataset validation, graph building
//! and the nearby-city query.
//!
//! # Example
//!
//! ```rust
//! use bookingmx_core::graph::{build_graph, get_nearby_cities, sample_data};
//!
//! let data = sample_data();
//! assert!(data.validate().is_valid());
//!
//! let graph = build_graph(&data.cities, &data.edges).unwrap();
//! let nearby = get_nearby_cities(&graph, Some("Guadalajara"), Some(50.0)).unwrap();
//! assert_eq!(nearby.len(), 2);
//! assert_eq!(nearby[0].city, "Tlaquepaque");
//! ```

mod city_graph;
mod nearby;
mod sample;
mod types;
mod validation;

#[cfg(test)]
mod types_tests;

pub use city_graph::{build_graph, Graph};
pub use nearby::{get_nearby_cities, DEFAULT_MAX_DISTANCE_KM};
pub use sample::sample_data;
pub use types::{EdgeInput, GraphData, NearbyCity, Neighbor};
pub use validation::{validate_graph_data, GraphValidation};

/// Returns true if `name` can identify a city (non-blank after trimming).
pub(crate) fn is_valid_city_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Returns true if `distance` is finite and non-negative.
pub(crate) fn is_valid_distance(distance: f64) -> bool {
    distance.is_finite() && distance >= 0.0
}
