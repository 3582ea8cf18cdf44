//! `bookingmx` - nearby-city search and reservation management from the terminal.

mod graph_commands;
mod output;
mod reservation_commands;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// BookingMX - nearby cities and reservations
#[derive(Parser, Debug)]
#[command(name = "bookingmx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a cities/edges dataset
    Validate {
        #[command(flatten)]
        data: DataArgs,
    },
    /// List the direct neighbors of a city, in insertion order
    Neighbors {
        /// City name
        city: String,
        #[command(flatten)]
        data: DataArgs,
    },
    /// List cities directly connected to a destination, nearest first
    Nearby {
        /// Destination city
        destination: String,
        /// Maximum distance in kilometers
        #[arg(long, default_value_t = bookingmx_core::DEFAULT_MAX_DISTANCE_KM)]
        max_km: f64,
        #[command(flatten)]
        data: DataArgs,
    },
    /// Manage reservations on the reservations API
    Reservations {
        #[command(flatten)]
        server: ServerArgs,
        #[command(subcommand)]
        action: ReservationAction,
    },
}

#[derive(Args, Debug)]
struct DataArgs {
    /// JSON dataset `{"cities": [...], "edges": [...]}` (default: bundled sample)
    #[arg(short, long, env = "BOOKINGMX_DATA")]
    data: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ServerArgs {
    /// TOML config file with `base_url` and `timeout_secs`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reservations collection URL (overrides config and environment)
    #[arg(long)]
    base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
enum ReservationAction {
    /// List all reservations
    List,
    /// Create a reservation
    Create(ReservationFields),
    /// Update a reservation
    Update {
        /// Reservation id
        id: String,
        #[command(flatten)]
        fields: ReservationFields,
    },
    /// Cancel a reservation
    Cancel {
        /// Reservation id
        id: String,
    },
}

#[derive(Args, Debug)]
struct ReservationFields {
    /// Guest full name
    #[arg(long)]
    guest: String,
    /// Hotel name
    #[arg(long)]
    hotel: String,
    /// Check-in date (YYYY-MM-DD)
    #[arg(long)]
    check_in: NaiveDate,
    /// Check-out date (YYYY-MM-DD)
    #[arg(long)]
    check_out: NaiveDate,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let format = output::Format::from_json_flag(cli.json);

    match cli.command {
        Command::Validate { data } => graph_commands::validate(data.data.as_deref(), format),
        Command::Neighbors { city, data } => {
            graph_commands::neighbors(data.data.as_deref(), &city, format)
        }
        Command::Nearby {
            destination,
            max_km,
            data,
        } => graph_commands::nearby(data.data.as_deref(), &destination, max_km, format),
        Command::Reservations { server, action } => {
            reservation_commands::run(&server, action, format).await
        }
    }
}
