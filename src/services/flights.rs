//! Flights service

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use super::validation::Validate;
use crate::{
    error::{AppError, AppResult},
    models::{CreateFlight, Flight, FlightField, FlightFilter, FlightSearchQuery, UpdateFlight},
    repository::FlightStore,
};

#[derive(Clone)]
pub struct FlightsService {
    store: Arc<dyn FlightStore>,
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Flight with ID {} not found.", id))
}

impl FlightsService {
    pub fn new(store: Arc<dyn FlightStore>) -> Self {
        Self { store }
    }

    /// Validate and insert a new flight
    pub async fn create(&self, data: &CreateFlight) -> AppResult<Flight> {
        let fields = data.validate()?;
        let flight = self.store.save(None, &fields).await?;
        tracing::info!(flight_id = flight.id, "Flight created");
        Ok(flight)
    }

    /// Delete a flight, returning a confirmation message
    pub async fn delete(&self, id: i32) -> AppResult<String> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }
        self.store.delete_by_id(id).await?;
        tracing::info!(flight_id = id, "Flight deleted");
        Ok(format!("Flight with ID {} successfully deleted.", id))
    }

    /// Replace every field of an existing flight
    pub async fn update(&self, id: i32, data: &UpdateFlight) -> AppResult<String> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }
        let fields = data.validate()?;
        self.store.save(Some(id), &fields).await?;
        tracing::info!(flight_id = id, "Flight updated");
        Ok(format!("Flight with ID {} successfully updated.", id))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Flight> {
        self.store.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// First flight whose field equals the given value
    pub async fn get_by_field(&self, field: FlightField) -> AppResult<Flight> {
        self.store.find_by_field(&field).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "Flight with {} {} not found.",
                field.label(),
                field.value()
            ))
        })
    }

    pub async fn list(&self) -> AppResult<Vec<Flight>> {
        self.store.list().await
    }

    /// Exact-match search over the supplied filters.
    ///
    /// Absent filters are ignored; a blank filter matches nothing.
    pub async fn search(&self, query: &FlightSearchQuery) -> AppResult<Vec<Flight>> {
        match parse_filter(query)? {
            Some(filter) => {
                if filter.is_empty() {
                    tracing::debug!("Flight search without filters");
                }
                self.store.search(&filter).await
            }
            None => Ok(Vec::new()),
        }
    }
}

/// `Ok(None)` when one of the filters was supplied blank
fn parse_filter(query: &FlightSearchQuery) -> AppResult<Option<FlightFilter>> {
    let raw = [
        &query.city_origin,
        &query.destination,
        &query.departure_date,
        &query.departure_time,
        &query.price,
    ];
    if raw.iter().any(|v| v.as_deref().is_some_and(|s| s.trim().is_empty())) {
        return Ok(None);
    }

    let mut fields = Vec::new();
    if let Some(v) = &query.city_origin {
        fields.push(FlightField::CityOrigin(v.clone()));
    }
    if let Some(v) = &query.destination {
        fields.push(FlightField::Destination(v.clone()));
    }
    if let Some(v) = &query.departure_date {
        let date = NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid departure_date (use YYYY-MM-DD)".to_string()))?;
        fields.push(FlightField::DepartureDate(date));
    }
    if let Some(v) = &query.departure_time {
        let time = v
            .trim()
            .parse::<NaiveTime>()
            .map_err(|_| AppError::Validation("Invalid departure_time (use HH:MM)".to_string()))?;
        fields.push(FlightField::DepartureTime(time));
    }
    if let Some(v) = &query.price {
        let price = v
            .trim()
            .parse::<Decimal>()
            .map_err(|_| AppError::Validation("Invalid price".to_string()))?;
        fields.push(FlightField::Price(price));
    }

    Ok(Some(FlightFilter { fields }))
}
