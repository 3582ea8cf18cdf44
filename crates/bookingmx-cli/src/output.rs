//! Terminal rendering for command results.

use bookingmx_client::Reservation;
use bookingmx_core::{NearbyCity, Neighbor};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
}

impl Format {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

fn km(distance: f64) -> String {
    format!("{distance} km")
}

pub fn neighbors_table(city: &str, neighbors: &[Neighbor]) {
    if neighbors.is_empty() {
        println!("{} has no direct neighbors.", city.green());
        return;
    }
    let mut table = new_table(&["Neighbor", "Distance"]);
    for n in neighbors {
        table.add_row(vec![n.to.clone(), km(n.distance)]);
    }
    println!("{} {}", "Neighbors of".bold(), city.green());
    println!("{table}");
}

pub fn nearby_table(destination: &str, max_km: f64, nearby: &[NearbyCity]) {
    if nearby.is_empty() {
        println!(
            "No cities within {} of {}.",
            km(max_km),
            destination.green()
        );
        return;
    }
    let mut table = new_table(&["City", "Distance"]);
    for n in nearby {
        table.add_row(vec![n.city.clone(), km(n.distance)]);
    }
    println!(
        "{} {} (max {})",
        "Nearby".bold(),
        destination.green(),
        km(max_km)
    );
    println!("{table}");
}

pub fn reservations_table(reservations: &[Reservation]) {
    if reservations.is_empty() {
        println!("No reservations found.");
        return;
    }
    let mut table = new_table(&["ID", "Guest", "Hotel", "Check-in", "Check-out", "Status"]);
    for r in reservations {
        let status = if r.is_active() {
            "ACTIVE".green().to_string()
        } else {
            "CANCELED".red().to_string()
        };
        table.add_row(vec![
            r.id.to_string(),
            r.guest_name.clone(),
            r.hotel_name.clone(),
            r.check_in.to_string(),
            r.check_out.to_string(),
            status,
        ]);
    }
    println!("{table}");
}
