//! Data models for trip requests and API responses
//!
//! This module contains the wire types exchanged with the itinerary
//! planning service and the transient status state shown to the user.
//! JSON field names are the external contract and must not change.

use serde::{Deserialize, Serialize};

/// Flight leg parameters for an itinerary request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightRequest {
    /// Departure airport code (IATA, uppercased by the form layer)
    pub departure_airport_code: String,
    /// Arrival airport code (IATA, uppercased by the form layer)
    pub arrival_airport_code: String,
    /// Outbound date as a plain `YYYY-MM-DD` string
    pub outbound_date: String,
    /// Return date as a plain `YYYY-MM-DD` string
    pub return_date: String,
}

/// Hotel search parameters for an itinerary request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotelRequest {
    /// Destination city
    pub city: String,
    /// Check-in date as a plain `YYYY-MM-DD` string
    pub check_in_date: String,
    /// Check-out date as a plain `YYYY-MM-DD` string
    pub check_out_date: String,
    /// Comma-separated star ratings, e.g. "4,5"
    pub hotel_class: String,
}

/// Sightseeing query for an itinerary request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SightsRequest {
    /// What to see, e.g. "Paris museums"
    pub query: String,
}

/// Complete request payload for the plan-itinerary endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItineraryRequest {
    pub flight_request: FlightRequest,
    pub hotel_request: HotelRequest,
    pub sights_request: SightsRequest,
}

/// Success body of the plan-itinerary endpoint
///
/// The backend may omit the field entirely; callers substitute a fixed
/// placeholder rather than failing.
#[derive(Debug, Clone, Deserialize)]
pub struct ItineraryResponse {
    pub itinerary: Option<String>,
}

/// Request payload for the generate-pdf endpoint
///
/// Carries the exact text previously rendered, re-sent verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PdfRequest {
    pub itinerary_text: String,
}

/// Severity of a status line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusKind::Info => write!(f, "info"),
            StatusKind::Success => write!(f, "success"),
            StatusKind::Error => write!(f, "error"),
        }
    }
}

/// Transient status feedback, overwritten on every lifecycle transition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    /// Create an informational status
    #[must_use]
    pub fn info<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    /// Create a success status
    #[must_use]
    pub fn success<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    /// Create an error status
    #[must_use]
    pub fn error<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> ItineraryRequest {
        ItineraryRequest {
            flight_request: FlightRequest {
                departure_airport_code: "FRA".to_string(),
                arrival_airport_code: "CDG".to_string(),
                outbound_date: "2026-08-15".to_string(),
                return_date: "2026-08-20".to_string(),
            },
            hotel_request: HotelRequest {
                city: "Paris".to_string(),
                check_in_date: "2026-08-15".to_string(),
                check_out_date: "2026-08-20".to_string(),
                hotel_class: "4,5".to_string(),
            },
            sights_request: SightsRequest {
                query: "Paris museums".to_string(),
            },
        }
    }

    #[test]
    fn test_request_wire_field_names() {
        let json = serde_json::to_value(sample_request()).unwrap();

        assert_eq!(json["flight_request"]["departure_airport_code"], "FRA");
        assert_eq!(json["flight_request"]["arrival_airport_code"], "CDG");
        assert_eq!(json["flight_request"]["outbound_date"], "2026-08-15");
        assert_eq!(json["flight_request"]["return_date"], "2026-08-20");
        assert_eq!(json["hotel_request"]["city"], "Paris");
        assert_eq!(json["hotel_request"]["check_in_date"], "2026-08-15");
        assert_eq!(json["hotel_request"]["check_out_date"], "2026-08-20");
        assert_eq!(json["hotel_request"]["hotel_class"], "4,5");
        assert_eq!(json["sights_request"]["query"], "Paris museums");
    }

    #[test]
    fn test_itinerary_response_missing_field() {
        let response: ItineraryResponse = serde_json::from_str("{}").unwrap();
        assert!(response.itinerary.is_none());

        let response: ItineraryResponse =
            serde_json::from_str(r##"{"itinerary": "# Day 1"}"##).unwrap();
        assert_eq!(response.itinerary.as_deref(), Some("# Day 1"));
    }

    #[test]
    fn test_pdf_request_wire_field_name() {
        let request = PdfRequest {
            itinerary_text: "# Day 1".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["itinerary_text"], "# Day 1");
    }

    #[test]
    fn test_status_message_constructors() {
        assert_eq!(StatusMessage::info("x").kind, StatusKind::Info);
        assert_eq!(StatusMessage::success("x").kind, StatusKind::Success);
        assert_eq!(StatusMessage::error("x").kind, StatusKind::Error);
        assert_eq!(StatusMessage::error("boom").text, "boom");
    }
}
