//! Reservation records exchanged with the reservations API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// Booked and modifiable.
    Active,
    /// Canceled; the server rejects further updates.
    Canceled,
}

/// A reservation as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Server-assigned identifier.
    pub id: i64,
    /// Guest full name.
    pub guest_name: String,
    /// Hotel name.
    pub hotel_name: String,
    /// Check-in date.
    pub check_in: NaiveDate,
    /// Check-out date.
    pub check_out: NaiveDate,
    /// Current status.
    pub status: ReservationStatus,
}

impl Reservation {
    /// Returns true if the reservation has not been canceled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }
}

/// Body of create and update requests.
///
/// Serializes as `{"guestName", "hotelName", "checkIn", "checkOut"}` with
/// `YYYY-MM-DD` dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    /// Guest full name.
    pub guest_name: String,
    /// Hotel name.
    pub hotel_name: String,
    /// Check-in date.
    pub check_in: NaiveDate,
    /// Check-out date.
    pub check_out: NaiveDate,
}

impl ReservationRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(
        guest_name: &str,
        hotel_name: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            guest_name: guest_name.to_string(),
            hotel_name: hotel_name.to_string(),
            check_in,
            check_out,
        }
    }

    /// Checks the date rules the server enforces, relative to `today`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidReservation` if check-out is not after check-in,
    /// or check-in is before `today`.
    pub fn validate_dates(&self, today: NaiveDate) -> Result<()> {
        if self.check_out <= self.check_in {
            return Err(Error::InvalidReservation(
                "Check-out must be after check-in".to_string(),
            ));
        }
        if self.check_in < today {
            return Err(Error::InvalidReservation(
                "Check-in must be in the future".to_string(),
            ));
        }
        Ok(())
    }
}
