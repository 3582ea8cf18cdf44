//! Graph value types: dataset input, adjacency entries and query results.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An undirected edge as it appears in a dataset, before it is added to a graph.
///
/// # Example
///
/// ```rust
/// use bookingmx_core::graph::EdgeInput;
///
/// let edge = EdgeInput::new("Guadalajara", "Zapopan", 12.0);
/// assert_eq!(edge.from, "Guadalajara");
/// assert_eq!(edge.distance, 12.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeInput {
    /// First endpoint.
    pub from: String,
    /// Second endpoint.
    pub to: String,
    /// Road distance in kilometers.
    pub distance: f64,
}

impl EdgeInput {
    /// Creates a new edge input.
    #[must_use]
    pub fn new(from: &str, to: &str, distance: f64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            distance,
        }
    }
}

/// A dataset of cities and the edges between them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphData {
    /// City names, in insertion order.
    pub cities: Vec<String>,
    /// Edges, in insertion order.
    pub edges: Vec<EdgeInput>,
}

impl GraphData {
    /// Creates a dataset from cities and edges.
    #[must_use]
    pub fn new(cities: Vec<String>, edges: Vec<EdgeInput>) -> Self {
        Self { cities, edges }
    }

    /// Decodes a dataset from JSON text.
    ///
    /// Only the shape is checked here; run [`GraphData::validate`] for the
    /// dataset rules.
    ///
    /// # Errors
    ///
    /// Returns `Error::Dataset` if the text is not a `{cities, edges}` object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Dataset(e.to_string()))
    }
}

/// An adjacency-list entry: a direct neighbor and the distance to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Neighbor {
    /// Neighboring city.
    pub to: String,
    /// Distance in kilometers.
    pub distance: f64,
}

/// A city reported by the nearby-city query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NearbyCity {
    /// Neighboring city.
    pub city: String,
    /// Distance to the destination in kilometers.
    pub distance: f64,
}

impl From<Neighbor> for NearbyCity {
    fn from(neighbor: Neighbor) -> Self {
        Self {
            city: neighbor.to,
            distance: neighbor.distance,
        }
    }
}
