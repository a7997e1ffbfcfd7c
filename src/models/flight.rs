//! Flight model

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Flight record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Flight {
    pub id: i32,
    /// City the flight departs from
    pub city_origin: String,
    /// City the flight arrives at
    pub destination: String,
    /// Departure date (YYYY-MM-DD)
    pub departure_date: NaiveDate,
    /// Departure time (HH:MM:SS)
    #[schema(value_type = String, example = "08:00:00")]
    pub departure_time: NaiveTime,
    #[schema(value_type = String, example = "199.99")]
    pub price: Decimal,
}

/// Create or fully replace a flight.
///
/// Every field is optional at the wire level so that a missing field is
/// reported as a validation failure rather than a decoding error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateFlight {
    pub city_origin: Option<String>,
    pub destination: Option<String>,
    /// Departure date (YYYY-MM-DD)
    pub departure_date: Option<NaiveDate>,
    /// Departure time (HH:MM or HH:MM:SS)
    #[schema(value_type = Option<String>, example = "08:00")]
    pub departure_time: Option<NaiveTime>,
    #[schema(value_type = Option<String>, example = "199.99")]
    pub price: Option<Decimal>,
}

/// Updates carry the same fields as creation
pub type UpdateFlight = CreateFlight;

/// Validated flight fields, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct NewFlight {
    pub city_origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub price: Decimal,
}

/// Single-column flight lookup key
#[derive(Debug, Clone, PartialEq)]
pub enum FlightField {
    CityOrigin(String),
    Destination(String),
    DepartureDate(NaiveDate),
    DepartureTime(NaiveTime),
    Price(Decimal),
}

impl FlightField {
    /// Column holding this field
    pub fn column(&self) -> &'static str {
        match self {
            FlightField::CityOrigin(_) => "city_origin",
            FlightField::Destination(_) => "destination",
            FlightField::DepartureDate(_) => "departure_date",
            FlightField::DepartureTime(_) => "departure_time",
            FlightField::Price(_) => "price",
        }
    }

    /// Human readable label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            FlightField::CityOrigin(_) => "city origin",
            FlightField::Destination(_) => "destination",
            FlightField::DepartureDate(_) => "departure date",
            FlightField::DepartureTime(_) => "departure time",
            FlightField::Price(_) => "price",
        }
    }

    pub fn value(&self) -> String {
        match self {
            FlightField::CityOrigin(v) | FlightField::Destination(v) => v.clone(),
            FlightField::DepartureDate(d) => d.to_string(),
            FlightField::DepartureTime(t) => t.to_string(),
            FlightField::Price(p) => p.to_string(),
        }
    }
}

/// Query parameters for flight search. Values are kept as text so an empty
/// filter can be told apart from an absent one. Unknown keys are rejected
/// so a misspelt filter cannot widen the result set.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(deny_unknown_fields)]
pub struct FlightSearchQuery {
    #[serde(alias = "origin")]
    pub city_origin: Option<String>,
    pub destination: Option<String>,
    /// Departure date (YYYY-MM-DD)
    #[serde(alias = "date")]
    pub departure_date: Option<String>,
    /// Departure time (HH:MM or HH:MM:SS)
    #[serde(alias = "time")]
    pub departure_time: Option<String>,
    pub price: Option<String>,
}

/// Parsed search filter; every present field must match exactly
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightFilter {
    pub fields: Vec<FlightField>,
}

impl FlightFilter {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
