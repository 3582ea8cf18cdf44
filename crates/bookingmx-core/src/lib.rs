//! # `BookingMX` Core
//!
//! Undirected, weighted graph of cities and road distances, with dataset
//! validation and a nearby-city query used by the booking front end to
//! suggest alternative destinations.
//!
//! ## Quick Start
//!
//! ```rust
//! use bookingmx_core::graph::{build_graph, EdgeInput};
//!
//! fn main() -> Result<(), bookingmx_core::Error> {
//!     let graph = build_graph(
//!         &["Guadalajara", "Zapopan", "Tlaquepaque"],
//!         &[
//!             EdgeInput::new("Guadalajara", "Zapopan", 12.0),
//!             EdgeInput::new("Guadalajara", "Tlaquepaque", 10.0),
//!         ],
//!     )?;
//!
//!     let nearby = graph.nearby_cities("Guadalajara", 50.0);
//!     assert_eq!(nearby[0].city, "Tlaquepaque");
//!     assert_eq!(nearby[1].city, "Zapopan");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::float_cmp, clippy::uninlined_format_args))]

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{
    build_graph, get_nearby_cities, sample_data, validate_graph_data, EdgeInput, Graph, GraphData,
    GraphValidation, NearbyCity, Neighbor, DEFAULT_MAX_DISTANCE_KM,
};
