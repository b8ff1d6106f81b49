//! Planner session state and request lifecycle
//!
//! A [`PlannerSession`] owns everything the original page script kept in
//! globals: the API client, the in-memory copy of the last itinerary
//! text, the status line, and the interactive controls. Each lifecycle
//! is a straight sequence — status update, network call, render or
//! error, control restoration — with the restoration guaranteed on every
//! path, parse failures included.

use crate::api::ItineraryApiClient;
use crate::error::TripAiError;
use crate::form::TripForm;
use crate::models::StatusMessage;
use crate::render::render_markdown_lite;
use tracing::{debug, info, instrument};

const SUBMIT_LABEL: &str = "Generate Itinerary";
const SUBMIT_BUSY_LABEL: &str = "Generating…";
const DOWNLOAD_LABEL: &str = "Download PDF";
const DOWNLOAD_BUSY_LABEL: &str = "Preparing PDF…";

/// Enabled state and label of an interactive control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub enabled: bool,
    pub label: String,
}

impl ControlState {
    fn idle(label: &str) -> Self {
        Self {
            enabled: true,
            label: label.to_string(),
        }
    }

    fn busy(label: &str) -> Self {
        Self {
            enabled: false,
            label: label.to_string(),
        }
    }
}

/// Session-scoped client state for one planning page lifetime
pub struct PlannerSession {
    api: ItineraryApiClient,
    /// Last successfully generated itinerary text; cleared on a failed
    /// generation, left intact on a failed PDF export
    current_itinerary: Option<String>,
    status: StatusMessage,
    submit: ControlState,
    download: ControlState,
    /// The download control only becomes visible once an itinerary has
    /// been rendered
    download_visible: bool,
}

impl PlannerSession {
    /// Create a new session around an API client
    #[must_use]
    pub fn new(api: ItineraryApiClient) -> Self {
        Self {
            api,
            current_itinerary: None,
            status: StatusMessage::info("Ready"),
            submit: ControlState::idle(SUBMIT_LABEL),
            download: ControlState::idle(DOWNLOAD_LABEL),
            download_visible: false,
        }
    }

    /// Request an itinerary for the given form and render it to HTML.
    ///
    /// On success the raw markdown text is retained for a later PDF
    /// export; on failure the stored text is cleared and the error
    /// message lands in the status line.
    #[instrument(skip(self, form))]
    pub async fn generate_itinerary(&mut self, form: &TripForm) -> Result<String, TripAiError> {
        let payload = form.build_payload();

        self.status = StatusMessage::info("Requesting itinerary...");
        self.submit = ControlState::busy(SUBMIT_BUSY_LABEL);

        let result = self.api.plan_itinerary(&payload).await;

        // Restore the control whether the call succeeded or not; the
        // response-parsing step already ran inside the call.
        self.submit = ControlState::idle(SUBMIT_LABEL);

        match result {
            Ok(text) => {
                let html = render_markdown_lite(&text);
                self.current_itinerary = Some(text);
                self.download_visible = true;
                self.status = StatusMessage::success("Itinerary generated successfully!");
                info!("Itinerary rendered");
                Ok(html)
            }
            Err(e) => {
                self.current_itinerary = None;
                self.status = StatusMessage::error(format!("Error: {}", e.user_message()));
                Err(e)
            }
        }
    }

    /// Render the held itinerary text to PDF bytes.
    ///
    /// Aborts without a network call when no itinerary is held. A failed
    /// export keeps the rendered itinerary so the user can retry.
    #[instrument(skip(self))]
    pub async fn export_pdf(&mut self) -> Result<Vec<u8>, TripAiError> {
        let Some(itinerary_text) = self.current_itinerary.clone() else {
            debug!("PDF export requested without an itinerary");
            return Err(TripAiError::MissingItinerary);
        };

        self.status = StatusMessage::info("Requesting PDF...");
        self.download = ControlState::busy(DOWNLOAD_BUSY_LABEL);

        let result = self.api.generate_pdf(&itinerary_text).await;

        self.download = ControlState::idle(DOWNLOAD_LABEL);

        match result {
            Ok(bytes) => {
                self.status = StatusMessage::success("PDF generated successfully!");
                Ok(bytes)
            }
            Err(e) => {
                self.status = StatusMessage::error(format!("Error: {}", e.user_message()));
                Err(e)
            }
        }
    }

    /// The itinerary text held for PDF export, if any
    #[must_use]
    pub fn current_itinerary(&self) -> Option<&str> {
        self.current_itinerary.as_deref()
    }

    /// The current status line
    #[must_use]
    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    /// Submit control state
    #[must_use]
    pub fn submit_control(&self) -> &ControlState {
        &self.submit
    }

    /// Download control state
    #[must_use]
    pub fn download_control(&self) -> &ControlState {
        &self.download
    }

    /// Whether the download control has been revealed
    #[must_use]
    pub fn download_visible(&self) -> bool {
        self.download_visible
    }
}
