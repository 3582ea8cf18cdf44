//! # `BookingMX` Client
//!
//! Typed async client for the reservations REST API: list, create, update
//! and cancel reservations.
//!
//! ```rust,no_run
//! use bookingmx_client::{ClientConfig, ReservationClient};
//!
//! # async fn run() -> bookingmx_client::Result<()> {
//! let client = ReservationClient::new(&ClientConfig::load(None)?)?;
//! for reservation in client.list().await? {
//!     println!("{} at {}", reservation.guest_name, reservation.hotel_name);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::ReservationClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use model::{Reservation, ReservationRequest, ReservationStatus};
