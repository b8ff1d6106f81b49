//! `TripAI` - AI-assisted trip itinerary planning client
//!
//! This library provides the core functionality for capturing trip
//! parameters, requesting generated itineraries from the planning
//! service, rendering the result, and exporting it as a PDF.

pub mod api;
pub mod config;
pub mod download;
pub mod error;
pub mod form;
pub mod models;
pub mod render;
pub mod session;

// Re-export core types for public API
pub use api::{ItineraryApiClient, NO_ITINERARY_PLACEHOLDER};
pub use config::TripAiConfig;
pub use error::TripAiError;
pub use form::{TripForm, default_trip_dates};
pub use models::{ItineraryRequest, StatusKind, StatusMessage};
pub use render::render_markdown_lite;
pub use session::PlannerSession;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripAiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
