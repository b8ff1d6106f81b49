//! Trip form capture and payload construction
//!
//! Mirrors the submission form of the planning UI: raw string fields in,
//! a structured [`ItineraryRequest`] out. Apart from uppercasing the two
//! airport codes and substituting the hotel-class default, every field
//! passes through unmodified — date ordering and cross-field consistency
//! are not checked here (the backend owns semantic validation).

use crate::models::{FlightRequest, HotelRequest, ItineraryRequest, SightsRequest};
use chrono::{Duration, NaiveDate};

/// Hotel class filter applied when the field is left empty
pub const DEFAULT_HOTEL_CLASS: &str = "4,5";

/// Raw trip parameters as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripForm {
    pub departure_airport_code: String,
    pub arrival_airport_code: String,
    pub outbound_date: String,
    pub return_date: String,
    pub city: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub hotel_class: String,
    pub sights_query: String,
}

impl TripForm {
    /// Build the request payload for the plan-itinerary endpoint.
    ///
    /// Airport codes are forced to uppercase; an empty hotel class falls
    /// back to [`DEFAULT_HOTEL_CLASS`]. All other fields are carried over
    /// byte-identical.
    #[must_use]
    pub fn build_payload(&self) -> ItineraryRequest {
        let hotel_class = if self.hotel_class.is_empty() {
            DEFAULT_HOTEL_CLASS.to_string()
        } else {
            self.hotel_class.clone()
        };

        ItineraryRequest {
            flight_request: FlightRequest {
                departure_airport_code: self.departure_airport_code.to_uppercase(),
                arrival_airport_code: self.arrival_airport_code.to_uppercase(),
                outbound_date: self.outbound_date.clone(),
                return_date: self.return_date.clone(),
            },
            hotel_request: HotelRequest {
                city: self.city.clone(),
                check_in_date: self.check_in_date.clone(),
                check_out_date: self.check_out_date.clone(),
                hotel_class,
            },
            sights_request: SightsRequest {
                query: self.sights_query.clone(),
            },
        }
    }
}

/// Prefilled date pair for a trip form
///
/// The outbound date doubles as the hotel check-in and the return date as
/// the check-out, matching the form's prefill behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripDates {
    pub outbound: NaiveDate,
    pub inbound: NaiveDate,
}

impl TripDates {
    /// Format a date the way the wire contract expects it
    #[must_use]
    pub fn format(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

/// Compute the default trip dates relative to `today`.
///
/// Evaluated once at program start, like the original form prefill; the
/// standard offsets are 7 days out, 12 days back.
#[must_use]
pub fn default_trip_dates(today: NaiveDate, outbound_offset_days: i64, return_offset_days: i64) -> TripDates {
    TripDates {
        outbound: today + Duration::days(outbound_offset_days),
        inbound: today + Duration::days(return_offset_days),
    }
}
