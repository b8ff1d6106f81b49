//! HTTP client for the itinerary planning service
//!
//! This module provides the two request/response exchanges the client
//! performs: planning an itinerary and rendering it to PDF. Calls are
//! single-shot — no retries, no cancellation — and failures surface as
//! [`TripAiError::Api`] carrying the server's `detail` message where one
//! is available.

use crate::config::TripAiConfig;
use crate::error::TripAiError;
use crate::models::{ItineraryRequest, ItineraryResponse, PdfRequest};
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Fallback text substituted when the backend omits the itinerary field
pub const NO_ITINERARY_PLACEHOLDER: &str = "No itinerary returned.";

/// Error body the planning service sends on non-success responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: Option<String>,
}

/// Client for the itinerary planning service
pub struct ItineraryApiClient {
    /// HTTP client
    client: Client,
    /// Service base URL without a trailing slash
    base_url: String,
}

impl ItineraryApiClient {
    /// Create a new planning API client from configuration.
    ///
    /// A timeout is applied only when one is configured; by default the
    /// client waits for as long as the backend takes to respond.
    pub fn new(config: &TripAiConfig) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("TripAI/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = config.api.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request a generated itinerary for the given trip parameters.
    ///
    /// Returns the itinerary markdown text, substituting
    /// [`NO_ITINERARY_PLACEHOLDER`] when the response omits the field.
    #[instrument(skip(self, request))]
    pub async fn plan_itinerary(
        &self,
        request: &ItineraryRequest,
    ) -> Result<String, TripAiError> {
        let url = format!("{}/plan-itinerary", self.base_url);
        debug!(url = %url, "Requesting itinerary");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Itinerary request failed to send");
                TripAiError::api(e.to_string())
            })?;

        let response = Self::check_status(response).await?;

        let body: ItineraryResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse itinerary response");
            TripAiError::api("Invalid response from planning service")
        })?;

        let itinerary = body
            .itinerary
            .unwrap_or_else(|| NO_ITINERARY_PLACEHOLDER.to_string());

        info!(chars = itinerary.len(), "Itinerary received");
        Ok(itinerary)
    }

    /// Render the given itinerary text to PDF bytes.
    ///
    /// The text is re-sent verbatim; the response body is treated as an
    /// opaque binary blob.
    #[instrument(skip(self, itinerary_text))]
    pub async fn generate_pdf(&self, itinerary_text: &str) -> Result<Vec<u8>, TripAiError> {
        let url = format!("{}/generate-pdf", self.base_url);
        debug!(url = %url, chars = itinerary_text.len(), "Requesting PDF");

        let request = PdfRequest {
            itinerary_text: itinerary_text.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "PDF request failed to send");
                TripAiError::api(e.to_string())
            })?;

        let response = Self::check_status(response).await?;

        let bytes = response.bytes().await.map_err(|e| {
            warn!(error = %e, "Failed to read PDF response body");
            TripAiError::api("Invalid response from planning service")
        })?;

        info!(bytes = bytes.len(), "PDF received");
        Ok(bytes.to_vec())
    }

    /// Map a non-success response to an [`TripAiError::Api`].
    ///
    /// The message precedence is the server's JSON `detail` field, then
    /// the HTTP status text, then a generic fallback.
    async fn check_status(response: Response) -> Result<Response, TripAiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let fallback = status
            .canonical_reason()
            .unwrap_or("Server error")
            .to_string();
        let detail = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        let message = detail.unwrap_or(fallback);

        warn!(status = %status, message = %message, "Planning service error");
        Err(TripAiError::api(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let mut config = TripAiConfig::default();
        config.api.base_url = "http://localhost:8000/".to_string();

        let client = ItineraryApiClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_error_body_parsing() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"detail":"upstream timeout"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("upstream timeout"));

        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_none());
    }
}
