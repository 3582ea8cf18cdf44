//! City graph commands: validate, neighbors, nearby.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context};
use bookingmx_core::{
    get_nearby_cities, sample_data, validate_graph_data, Graph, GraphData, GraphValidation,
};
use colored::Colorize;
use serde_json::Value;
use tracing::{debug, info};

use crate::output::{self, Format};

/// Reads a dataset file as untyped JSON, or the bundled sample when no path
/// is given.
fn load_value(path: Option<&Path>) -> anyhow::Result<Value> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading dataset {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
        }
        None => {
            debug!("using bundled sample dataset");
            Ok(serde_json::to_value(sample_data())?)
        }
    }
}

/// Validates the dataset and builds the graph, reporting the validation
/// reason instead of a construction error when the data is bad.
fn load_graph(path: Option<&Path>) -> anyhow::Result<Graph> {
    let value = load_value(path)?;
    if let GraphValidation::Invalid { reason } = validate_graph_data(&value) {
        bail!("invalid dataset: {reason}");
    }
    let data: GraphData = serde_json::from_value(value)?;
    let graph = Graph::from_data(&data)?;
    info!(
        cities = graph.city_count(),
        edges = graph.edge_count(),
        "city graph loaded"
    );
    Ok(graph)
}

pub fn validate(path: Option<&Path>, format: Format) -> anyhow::Result<ExitCode> {
    let value = load_value(path)?;
    let outcome = validate_graph_data(&value);

    match format {
        Format::Json => output::print_json(&outcome)?,
        Format::Table => match &outcome {
            GraphValidation::Valid => println!("{} dataset is valid", "✓".green()),
            GraphValidation::Invalid { reason } => {
                println!("{} dataset is invalid: {}", "✗".red(), reason);
            }
        },
    }

    Ok(if outcome.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

pub fn neighbors(path: Option<&Path>, city: &str, format: Format) -> anyhow::Result<ExitCode> {
    let graph = load_graph(path)?;
    let neighbors = graph.neighbors(city)?;

    match format {
        Format::Json => output::print_json(&neighbors)?,
        Format::Table => output::neighbors_table(city, &neighbors),
    }
    Ok(ExitCode::SUCCESS)
}

pub fn nearby(
    path: Option<&Path>,
    destination: &str,
    max_km: f64,
    format: Format,
) -> anyhow::Result<ExitCode> {
    let graph = load_graph(path)?;
    let nearby = get_nearby_cities(&graph, Some(destination), Some(max_km))?;

    match format {
        Format::Json => output::print_json(&nearby)?,
        Format::Table => output::nearby_table(destination, max_km, &nearby),
    }
    Ok(ExitCode::SUCCESS)
}
