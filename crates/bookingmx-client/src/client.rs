//! HTTP client for the reservations collection.

use std::fmt::Display;
use std::time::Duration;

use reqwest::{Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::model::{Reservation, ReservationRequest};

const LIST_FAILED: &str = "Failed to fetch reservations";
const CREATE_FAILED: &str = "Create failed";
const UPDATE_FAILED: &str = "Update failed";
const CANCEL_FAILED: &str = "Cancel failed";

/// Error body returned by the server on rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for the reservations REST resource.
///
/// `list` and `create` target the collection URL; `update` and `cancel`
/// append the reservation id as one percent-encoded path segment.
#[derive(Debug, Clone)]
pub struct ReservationClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ReservationClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the base URL cannot be parsed or cannot
    /// take path segments, or `Error::Http` if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {:?}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base URL cannot take path segments: {}",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { base_url, http })
    }

    /// Returns the collection URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn item_url(&self, id: &dyn Display) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base URLs are rejected in `new`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&id.to_string());
        }
        url
    }

    /// Fetches all reservations.
    ///
    /// # Errors
    ///
    /// Returns `Error::Fetch` ("Failed to fetch reservations") on a
    /// non-success status, or a transport/decoding error.
    pub async fn list(&self) -> Result<Vec<Reservation>> {
        debug!(url = %self.base_url, "GET reservations");
        let resp = self.http.get(self.base_url.clone()).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            warn!(%status, "listing reservations failed");
            return Err(Error::Fetch {
                status: status.as_u16(),
                message: LIST_FAILED.to_string(),
            });
        }

        Ok(resp.json().await?)
    }

    /// Creates a reservation.
    ///
    /// # Errors
    ///
    /// Returns `Error::Fetch` with the server's message (or "Create failed")
    /// on a non-success status.
    pub async fn create(&self, payload: &ReservationRequest) -> Result<Reservation> {
        self.send_json(Method::POST, self.base_url.clone(), Some(payload), CREATE_FAILED)
            .await
    }

    /// Replaces the reservation identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Fetch` with the server's message (or "Update failed")
    /// on a non-success status.
    pub async fn update(
        &self,
        id: impl Display,
        payload: &ReservationRequest,
    ) -> Result<Reservation> {
        let url = self.item_url(&id);
        self.send_json(Method::PUT, url, Some(payload), UPDATE_FAILED)
            .await
    }

    /// Cancels the reservation identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Fetch` with the server's message (or "Cancel failed")
    /// on a non-success status.
    pub async fn cancel(&self, id: impl Display) -> Result<Reservation> {
        let url = self.item_url(&id);
        self.send_json(Method::DELETE, url, None, CANCEL_FAILED)
            .await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        payload: Option<&ReservationRequest>,
        default_message: &str,
    ) -> Result<T> {
        debug!(%method, %url, "reservations request");
        let mut req = self.http.request(method, url);
        if let Some(payload) = payload {
            req = req.json(payload);
        }
        let resp = req.send().await?;

        if !resp.status().is_success() {
            return Err(failure(resp, default_message).await);
        }

        Ok(resp.json().await?)
    }
}

/// Builds a `Fetch` error from a rejected response, preferring the server's
/// `message` field.
async fn failure(resp: Response, default_message: &str) -> Error {
    let status = resp.status();
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| default_message.to_string());

    warn!(%status, %message, "reservations request rejected");
    Error::Fetch {
        status: status.as_u16(),
        message,
    }
}
