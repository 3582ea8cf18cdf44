//! Bundled sample dataset: cities around Guadalajara, Jalisco.

use super::types::{EdgeInput, GraphData};

/// Returns the sample dataset shipped with the front end.
#[must_use]
pub fn sample_data() -> GraphData {
    let cities = [
        "Guadalajara",
        "Tlaquepaque",
        "Zapopan",
        "Tepatitlán",
        "Lagos de Moreno",
        "Tala",
        "Tequila",
    ];
    let edges = vec![
        EdgeInput::new("Guadalajara", "Zapopan", 12.0),
        EdgeInput::new("Guadalajara", "Tlaquepaque", 10.0),
        EdgeInput::new("Guadalajara", "Tepatitlán", 78.0),
        EdgeInput::new("Guadalajara", "Tequila", 60.0),
        EdgeInput::new("Zapopan", "Tala", 35.0),
        EdgeInput::new("Tepatitlán", "Lagos de Moreno", 85.0),
    ];

    GraphData::new(cities.iter().map(ToString::to_string).collect(), edges)
}
