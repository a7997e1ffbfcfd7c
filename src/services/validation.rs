//! Field checks shared by the create and update paths

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{CreateFlight, CreateHotel, NewFlight, NewHotel},
};

/// Turns a raw request payload into the fields that may be written.
///
/// Checks run in declaration order and the first failure is reported.
pub trait Validate {
    type Output;

    fn validate(&self) -> AppResult<Self::Output>;
}

/// Present and not blank once trimmed. The value is kept as supplied.
pub fn require_text(value: Option<&str>, message: &str) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

pub fn require<T: Copy>(value: Option<T>, message: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::Validation(message.to_string()))
}

/// Present and strictly greater than zero
pub fn require_positive(value: Option<Decimal>, message: &str) -> AppResult<Decimal> {
    match value {
        Some(v) if v > Decimal::ZERO => Ok(v),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

impl Validate for CreateFlight {
    type Output = NewFlight;

    fn validate(&self) -> AppResult<NewFlight> {
        Ok(NewFlight {
            city_origin: require_text(self.city_origin.as_deref(), "City origin field cannot be empty")?,
            destination: require_text(self.destination.as_deref(), "Destination field cannot be empty")?,
            departure_date: require(self.departure_date, "Departure date field cannot be empty")?,
            departure_time: require(self.departure_time, "Departure time field cannot be empty")?,
            price: require_positive(self.price, "Price must be greater than zero")?,
        })
    }
}

impl Validate for CreateHotel {
    type Output = NewHotel;

    fn validate(&self) -> AppResult<NewHotel> {
        Ok(NewHotel {
            hotel_name: require_text(self.hotel_name.as_deref(), "Hotel name cannot be empty")?,
            city: require_text(self.city.as_deref(), "City field cannot be empty")?,
            checkin_date: require(self.checkin_date, "Check-in date field cannot be empty")?,
            price_per_night: require_positive(
                self.price_per_night,
                "Price per night must be greater than zero",
            )?,
        })
    }
}
