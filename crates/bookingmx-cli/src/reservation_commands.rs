//! Reservation commands backed by the reservations API.

use std::process::ExitCode;

use anyhow::Context;
use bookingmx_client::{ClientConfig, Reservation, ReservationClient, ReservationRequest};
use chrono::Local;
use colored::Colorize;
use tracing::info;

use crate::output::{self, Format};
use crate::{ReservationAction, ReservationFields, ServerArgs};

impl ReservationFields {
    /// Builds the request and applies the server's date rules locally.
    fn into_request(self) -> anyhow::Result<ReservationRequest> {
        let request =
            ReservationRequest::new(&self.guest, &self.hotel, self.check_in, self.check_out);
        request.validate_dates(Local::now().date_naive())?;
        Ok(request)
    }
}

fn client_config(server: &ServerArgs) -> anyhow::Result<ClientConfig> {
    let mut config =
        ClientConfig::load(server.config.as_deref()).context("loading client configuration")?;
    if let Some(base_url) = &server.base_url {
        config.base_url.clone_from(base_url);
    }
    Ok(config)
}

fn print_one(verb: &str, reservation: &Reservation, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Json => output::print_json(reservation)?,
        Format::Table => {
            println!("{} reservation {}", verb.green(), reservation.id);
            output::reservations_table(std::slice::from_ref(reservation));
        }
    }
    Ok(())
}

pub async fn run(
    server: &ServerArgs,
    action: ReservationAction,
    format: Format,
) -> anyhow::Result<ExitCode> {
    // Requests are checked before any network setup.
    let action = match action {
        ReservationAction::Create(fields) => PreparedAction::Create(fields.into_request()?),
        ReservationAction::Update { id, fields } => PreparedAction::Update(id, fields.into_request()?),
        ReservationAction::List => PreparedAction::List,
        ReservationAction::Cancel { id } => PreparedAction::Cancel(id),
    };

    let config = client_config(server)?;
    info!(base_url = %config.base_url, "using reservations API");
    let client = ReservationClient::new(&config)?;

    match action {
        PreparedAction::List => {
            let reservations = client.list().await?;
            match format {
                Format::Json => output::print_json(&reservations)?,
                Format::Table => output::reservations_table(&reservations),
            }
        }
        PreparedAction::Create(request) => {
            let created = client.create(&request).await?;
            print_one("Created", &created, format)?;
        }
        PreparedAction::Update(id, request) => {
            let updated = client.update(&id, &request).await?;
            print_one("Updated", &updated, format)?;
        }
        PreparedAction::Cancel(id) => {
            let canceled = client.cancel(&id).await?;
            print_one("Canceled", &canceled, format)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

enum PreparedAction {
    List,
    Create(ReservationRequest),
    Update(String, ReservationRequest),
    Cancel(String),
}
