//! Pre-flight validation of graph datasets.
//!
//! Validation never fails: it reports the first broken rule as a
//! [`GraphValidation::Invalid`] reason meant for the end user. Rules are
//! checked in this order:
//!
//! 1. `cities` and `edges` are arrays
//! 2. no duplicate cities
//! 3. every city is a non-blank string
//! 4. every edge endpoint is a listed city
//! 5. every edge distance is finite and non-negative

use std::collections::HashSet;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::types::GraphData;
use super::{is_valid_city_name, is_valid_distance};

const REASON_NOT_ARRAYS: &str = "cities/edges must be arrays";
const REASON_DUPLICATE: &str = "duplicate cities";
const REASON_INVALID_CITY: &str = "invalid city entry";
const REASON_UNKNOWN_CITY: &str = "edge references unknown city";
const REASON_INVALID_DISTANCE: &str = "invalid distance";

/// Outcome of validating a dataset.
///
/// Serializes as `{"ok":true}` or `{"ok":false,"reason":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphValidation {
    /// The dataset can be built into a graph.
    Valid,
    /// The dataset breaks a rule.
    Invalid {
        /// Human-readable reason.
        reason: String,
    },
}

impl GraphValidation {
    fn invalid(reason: &str) -> Self {
        Self::Invalid {
            reason: reason.to_string(),
        }
    }

    /// Returns true for [`GraphValidation::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the rejection reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { reason } => Some(reason),
        }
    }
}

impl Serialize for GraphValidation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Valid => {
                let mut s = serializer.serialize_struct("GraphValidation", 1)?;
                s.serialize_field("ok", &true)?;
                s.end()
            }
            Self::Invalid { reason } => {
                let mut s = serializer.serialize_struct("GraphValidation", 2)?;
                s.serialize_field("ok", &false)?;
                s.serialize_field("reason", reason)?;
                s.end()
            }
        }
    }
}

/// Validates an untyped `{cities, edges}` JSON dataset.
///
/// Edge entries that are missing, `null` or lack endpoints are reported as
/// referencing an unknown city.
///
/// # Example
///
/// ```rust
/// use bookingmx_core::graph::validate_graph_data;
/// use serde_json::json;
///
/// let outcome = validate_graph_data(&json!({"cities": ["A", "A"], "edges": []}));
/// assert_eq!(outcome.reason(), Some("duplicate cities"));
/// ```
#[must_use]
pub fn validate_graph_data(data: &Value) -> GraphValidation {
    let cities = data.get("cities").and_then(Value::as_array);
    let edges = data.get("edges").and_then(Value::as_array);
    let (Some(cities), Some(edges)) = (cities, edges) else {
        return GraphValidation::invalid(REASON_NOT_ARRAYS);
    };

    // Keyed by canonical JSON so non-string entries are compared too.
    let mut seen = HashSet::with_capacity(cities.len());
    if !cities.iter().all(|c| seen.insert(c.to_string())) {
        return GraphValidation::invalid(REASON_DUPLICATE);
    }

    let mut city_set = HashSet::with_capacity(cities.len());
    for city in cities {
        match city.as_str() {
            Some(name) if is_valid_city_name(name) => {
                city_set.insert(name);
            }
            _ => return GraphValidation::invalid(REASON_INVALID_CITY),
        }
    }

    for edge in edges {
        let endpoint = |key: &str| edge.get(key).and_then(Value::as_str);
        let known = |name: Option<&str>| name.is_some_and(|n| city_set.contains(n));
        if !known(endpoint("from")) || !known(endpoint("to")) {
            return GraphValidation::invalid(REASON_UNKNOWN_CITY);
        }
        let distance = edge.get("distance").and_then(Value::as_f64);
        if !distance.is_some_and(is_valid_distance) {
            return GraphValidation::invalid(REASON_INVALID_DISTANCE);
        }
    }

    GraphValidation::Valid
}

impl GraphData {
    /// Validates this dataset with the same rules and reasons as
    /// [`validate_graph_data`].
    #[must_use]
    pub fn validate(&self) -> GraphValidation {
        let mut city_set = HashSet::with_capacity(self.cities.len());
        if !self.cities.iter().all(|c| city_set.insert(c.as_str())) {
            return GraphValidation::invalid(REASON_DUPLICATE);
        }
        if !self.cities.iter().all(|c| is_valid_city_name(c)) {
            return GraphValidation::invalid(REASON_INVALID_CITY);
        }

        for edge in &self.edges {
            if !city_set.contains(edge.from.as_str()) || !city_set.contains(edge.to.as_str()) {
                return GraphValidation::invalid(REASON_UNKNOWN_CITY);
            }
            if !is_valid_distance(edge.distance) {
                return GraphValidation::invalid(REASON_INVALID_DISTANCE);
            }
        }

        GraphValidation::Valid
    }
}
