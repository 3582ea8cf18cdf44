//! Nearby-city query over direct neighbors.
//!
//! Only cities with a direct edge to the destination are reported; there is
//! no multi-hop search.

use std::any::Any;

use crate::error::{Error, Result};

use super::city_graph::Graph;
use super::types::NearbyCity;

/// Default distance ceiling for [`get_nearby_cities`], in kilometers.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 250.0;

/// Returns cities directly connected to `destination` within `max_distance`
/// (default [`DEFAULT_MAX_DISTANCE_KM`]), sorted ascending by distance.
///
/// `graph` is checked at runtime so that callers holding type-erased values
/// (UI bindings, plugin hosts) get a hard error when they pass the wrong
/// object. A missing or unknown `destination` is not an error and yields an
/// empty result.
///
/// # Errors
///
/// Returns `Error::InvalidGraphArgument` if `graph` is not a [`Graph`].
///
/// # Example
///
/// ```rust
/// use bookingmx_core::graph::{get_nearby_cities, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_city("Zapopan").unwrap();
/// graph.add_city("Tala").unwrap();
/// graph.add_edge("Zapopan", "Tala", 35.0).unwrap();
///
/// let nearby = get_nearby_cities(&graph, Some("Tala"), None).unwrap();
/// assert_eq!(nearby[0].city, "Zapopan");
///
/// assert!(get_nearby_cities(&graph, None, Some(50.0)).unwrap().is_empty());
/// assert!(get_nearby_cities(&"not a graph", Some("Tala"), None).is_err());
/// ```
pub fn get_nearby_cities(
    graph: &dyn Any,
    destination: Option<&str>,
    max_distance: Option<f64>,
) -> Result<Vec<NearbyCity>> {
    let graph = graph
        .downcast_ref::<Graph>()
        .ok_or(Error::InvalidGraphArgument)?;

    let Some(destination) = destination else {
        return Ok(Vec::new());
    };

    Ok(graph.nearby_cities(
        destination,
        max_distance.unwrap_or(DEFAULT_MAX_DISTANCE_KM),
    ))
}
