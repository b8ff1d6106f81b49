//! `TripAI` command line entry point
//!
//! Captures trip parameters, requests an itinerary from the planning
//! service, prints the rendered HTML to stdout, and optionally exports
//! the result as `Itinerary.pdf`.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tripai::config::TripAiConfig;
use tripai::download;
use tripai::form::{TripDates, TripForm, default_trip_dates};
use tripai::models::{StatusKind, StatusMessage};
use tripai::{ItineraryApiClient, PlannerSession};

/// TripAI - AI-assisted trip itinerary planning client
#[derive(Parser)]
#[command(
    name = "tripai",
    about = "AI-assisted trip itinerary planning client CLI",
    version
)]
struct Cli {
    /// Departure airport code (IATA), e.g. FRA
    #[arg(long)]
    departure_airport_code: String,

    /// Arrival airport code (IATA), e.g. CDG
    #[arg(long)]
    arrival_airport_code: String,

    /// Outbound flight date (YYYY-MM-DD), defaults to a week from today
    #[arg(long)]
    outbound_date: Option<String>,

    /// Return flight date (YYYY-MM-DD), defaults to twelve days from today
    #[arg(long)]
    return_date: Option<String>,

    /// Destination city for the hotel search
    #[arg(long)]
    city: String,

    /// Hotel check-in date (YYYY-MM-DD), defaults to the outbound date
    #[arg(long)]
    check_in_date: Option<String>,

    /// Hotel check-out date (YYYY-MM-DD), defaults to the return date
    #[arg(long)]
    check_out_date: Option<String>,

    /// Comma-separated hotel star ratings, e.g. 4,5
    #[arg(long)]
    hotel_class: Option<String>,

    /// What to see, e.g. "Paris museums"
    #[arg(long)]
    sights_query: String,

    /// Also export the generated itinerary as Itinerary.pdf
    #[arg(long)]
    pdf: bool,

    /// Directory to save the PDF into
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Assemble the trip form, filling the blank date fields from the
    /// prefill computed once at startup.
    fn into_form(self, dates: TripDates, default_hotel_class: &str) -> TripForm {
        let outbound = TripDates::format(dates.outbound);
        let inbound = TripDates::format(dates.inbound);

        TripForm {
            departure_airport_code: self.departure_airport_code,
            arrival_airport_code: self.arrival_airport_code,
            outbound_date: self.outbound_date.unwrap_or_else(|| outbound.clone()),
            return_date: self.return_date.unwrap_or_else(|| inbound.clone()),
            city: self.city,
            check_in_date: self.check_in_date.unwrap_or(outbound),
            check_out_date: self.check_out_date.unwrap_or(inbound),
            hotel_class: self
                .hotel_class
                .unwrap_or_else(|| default_hotel_class.to_string()),
            sights_query: self.sights_query,
        }
    }
}

fn init_logging(config: &TripAiConfig, verbose: bool) {
    let default_level = if verbose {
        "tripai=debug,info".to_string()
    } else {
        config.logging.level.clone()
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.logging.format == "json" {
        fmt.json().init();
    } else {
        fmt.init();
    }
}

fn print_status(status: &StatusMessage) {
    eprintln!("[{}] {}", status.kind, status.text);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TripAiConfig::load_from_path(cli.config.clone())
        .with_context(|| "Failed to load configuration")?;

    init_logging(&config, cli.verbose);

    // Prefill dates are computed once at startup, not re-evaluated later
    let today = Utc::now().date_naive();
    let dates = default_trip_dates(
        today,
        config.defaults.outbound_offset_days,
        config.defaults.return_offset_days,
    );

    let want_pdf = cli.pdf;
    let output_dir = cli.output_dir.clone();
    let form = cli.into_form(dates, &config.defaults.hotel_class);

    let api = ItineraryApiClient::new(&config)?;
    let mut session = PlannerSession::new(api);

    let html = match session.generate_itinerary(&form).await {
        Ok(html) => {
            print_status(session.status());
            html
        }
        Err(e) => {
            print_status(session.status());
            return Err(e.into());
        }
    };

    println!("{html}");

    if want_pdf {
        let bytes = match session.export_pdf().await {
            Ok(bytes) => {
                print_status(session.status());
                bytes
            }
            Err(e) => {
                if matches!(session.status().kind, StatusKind::Error) {
                    print_status(session.status());
                } else {
                    print_status(&StatusMessage::error(format!("Error: {}", e.user_message())));
                }
                return Err(e.into());
            }
        };

        let path = download::save_pdf(&bytes, &output_dir)?;
        eprintln!("Saved {}", path.display());
    }

    Ok(())
}
