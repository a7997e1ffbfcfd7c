//! Hotel model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Hotel record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Hotel {
    pub id: i32,
    pub hotel_name: String,
    pub city: String,
    /// Check-in date (YYYY-MM-DD)
    pub checkin_date: NaiveDate,
    #[schema(value_type = String, example = "120.00")]
    pub price_per_night: Decimal,
}

/// Create or fully replace a hotel
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateHotel {
    pub hotel_name: Option<String>,
    pub city: Option<String>,
    /// Check-in date (YYYY-MM-DD)
    pub checkin_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, example = "120.00")]
    pub price_per_night: Option<Decimal>,
}

pub type UpdateHotel = CreateHotel;

/// Validated hotel fields
#[derive(Debug, Clone, PartialEq)]
pub struct NewHotel {
    pub hotel_name: String,
    pub city: String,
    pub checkin_date: NaiveDate,
    pub price_per_night: Decimal,
}

/// Single-column hotel lookup key
#[derive(Debug, Clone, PartialEq)]
pub enum HotelField {
    Name(String),
    City(String),
    CheckinDate(NaiveDate),
    PricePerNight(Decimal),
}

impl HotelField {
    pub fn column(&self) -> &'static str {
        match self {
            HotelField::Name(_) => "hotel_name",
            HotelField::City(_) => "city",
            HotelField::CheckinDate(_) => "checkin_date",
            HotelField::PricePerNight(_) => "price_per_night",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HotelField::Name(_) => "name",
            HotelField::City(_) => "city",
            HotelField::CheckinDate(_) => "check-in date",
            HotelField::PricePerNight(_) => "price per night",
        }
    }

    pub fn value(&self) -> String {
        match self {
            HotelField::Name(v) | HotelField::City(v) => v.clone(),
            HotelField::CheckinDate(d) => d.to_string(),
            HotelField::PricePerNight(p) => p.to_string(),
        }
    }
}
