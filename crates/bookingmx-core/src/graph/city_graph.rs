//! Undirected city graph backed by adjacency lists.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};

use super::types::{EdgeInput, GraphData, NearbyCity, Neighbor};
use super::{is_valid_city_name, is_valid_distance};

/// Undirected, weighted graph of cities.
///
/// Each city maps to its neighbor list in edge insertion order. Adding an
/// edge inserts it on both endpoints with the same distance. Cities and
/// edges are never removed.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// City -> neighbors, in insertion order.
    adjacency: HashMap<String, Vec<Neighbor>>,
    /// Number of `add_edge` calls that succeeded.
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a dataset without validating it first.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Graph::add_city`] or [`Graph::add_edge`] error.
    pub fn from_data(data: &GraphData) -> Result<Self> {
        build_graph(&data.cities, &data.edges)
    }

    /// Adds a city. Adding a city that already exists is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCity` if the name is empty or whitespace-only.
    pub fn add_city(&mut self, name: &str) -> Result<()> {
        if !is_valid_city_name(name) {
            return Err(Error::InvalidCity(name.to_string()));
        }
        self.adjacency.entry(name.to_string()).or_default();
        Ok(())
    }

    /// Adds an undirected edge between two existing cities.
    ///
    /// Parallel edges are kept; each call appends one entry to both lists.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownCity` if either endpoint was never added, or
    /// `Error::InvalidDistance` if `distance` is negative, NaN or infinite.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: f64) -> Result<()> {
        for city in [from, to] {
            if !self.adjacency.contains_key(city) {
                return Err(Error::UnknownCity(city.to_string()));
            }
        }
        if !is_valid_distance(distance) {
            return Err(Error::InvalidDistance(distance));
        }

        self.push_neighbor(from, to, distance);
        self.push_neighbor(to, from, distance);
        self.edge_count += 1;
        Ok(())
    }

    fn push_neighbor(&mut self, city: &str, to: &str, distance: f64) {
        if let Some(list) = self.adjacency.get_mut(city) {
            list.push(Neighbor {
                to: to.to_string(),
                distance,
            });
        }
    }

    /// Returns a copy of a city's neighbor list, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownCity` if the city was never added.
    pub fn neighbors(&self, city: &str) -> Result<Vec<Neighbor>> {
        self.adjacency
            .get(city)
            .cloned()
            .ok_or_else(|| Error::UnknownCity(city.to_string()))
    }

    /// Returns direct neighbors of `destination` within `max_distance`,
    /// nearest first.
    ///
    /// Neighbors at equal distance keep their insertion order. An unknown
    /// destination yields an empty result.
    #[must_use]
    pub fn nearby_cities(&self, destination: &str, max_distance: f64) -> Vec<NearbyCity> {
        let Some(list) = self.adjacency.get(destination) else {
            return Vec::new();
        };

        let mut nearby: Vec<NearbyCity> = list
            .iter()
            .filter(|n| n.distance <= max_distance)
            .cloned()
            .map(NearbyCity::from)
            .collect();
        // Stable: ties keep insertion order.
        nearby.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        nearby
    }

    /// Returns true if the city has been added.
    #[must_use]
    pub fn has_city(&self, city: &str) -> bool {
        self.adjacency.contains_key(city)
    }

    /// Returns the number of cities.
    #[must_use]
    pub fn city_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges added.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterates over city names in no particular order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }
}

/// Builds a graph from raw cities and edges.
///
/// Cities are added in order, then edges in order. No validation pass runs
/// first: use [`super::validate_graph_data`] when a readable rejection
/// reason is needed. On error the partial graph is dropped.
///
/// # Errors
///
/// Propagates the first [`Graph::add_city`] or [`Graph::add_edge`] error.
pub fn build_graph<S: AsRef<str>>(cities: &[S], edges: &[EdgeInput]) -> Result<Graph> {
    let mut graph = Graph::new();
    for city in cities {
        graph.add_city(city.as_ref())?;
    }
    for edge in edges {
        graph.add_edge(&edge.from, &edge.to, edge.distance)?;
    }
    debug!(
        cities = graph.city_count(),
        edges = graph.edge_count(),
        "built city graph"
    );
    Ok(graph)
}
