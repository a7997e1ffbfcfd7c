//! Flight API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{CreateFlight, Flight, FlightField, FlightSearchQuery, UpdateFlight},
    AppState,
};

use super::MessageResponse;

type IdPath = WithRejection<Path<i32>, AppError>;

/// List all flights
#[utoipa::path(
    get,
    path = "/flights",
    tag = "flights",
    responses(
        (status = 200, description = "Flight list", body = Vec<Flight>)
    )
)]
pub async fn list_flights(State(state): State<AppState>) -> AppResult<Json<Vec<Flight>>> {
    let flights = state.services.flights.list().await?;
    Ok(Json(flights))
}

/// Search flights by exact field values
#[utoipa::path(
    get,
    path = "/flights/search",
    tag = "flights",
    params(FlightSearchQuery),
    responses(
        (status = 200, description = "Matching flights", body = Vec<Flight>),
        (status = 400, description = "Malformed filter", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_flights(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<FlightSearchQuery>, AppError>,
) -> AppResult<Json<Vec<Flight>>> {
    let flights = state.services.flights.search(&query).await?;
    Ok(Json(flights))
}

/// Get flight by ID
#[utoipa::path(
    get,
    path = "/flights/{id}",
    tag = "flights",
    params(("id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Flight details", body = Flight),
        (status = 404, description = "Flight not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_flight(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> AppResult<Json<Flight>> {
    let flight = state.services.flights.get_by_id(id).await?;
    Ok(Json(flight))
}

/// Create a flight
#[utoipa::path(
    post,
    path = "/flights",
    tag = "flights",
    request_body = CreateFlight,
    responses(
        (status = 201, description = "Flight created", body = Flight),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_flight(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateFlight>, AppError>,
) -> AppResult<(StatusCode, Json<Flight>)> {
    let flight = state.services.flights.create(&data).await?;
    Ok((StatusCode::CREATED, Json(flight)))
}

/// Replace every field of a flight
#[utoipa::path(
    put,
    path = "/flights/{id}",
    tag = "flights",
    params(("id" = i32, Path, description = "Flight ID")),
    request_body = CreateFlight,
    responses(
        (status = 200, description = "Flight updated", body = MessageResponse),
        (status = 404, description = "Flight not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_flight(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(data), _): WithRejection<Json<UpdateFlight>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    let message = state.services.flights.update(id, &data).await?;
    Ok(Json(MessageResponse { message }))
}

/// Delete a flight
#[utoipa::path(
    delete,
    path = "/flights/{id}",
    tag = "flights",
    params(("id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Flight deleted", body = MessageResponse),
        (status = 404, description = "Flight not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_flight(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> AppResult<Json<MessageResponse>> {
    let message = state.services.flights.delete(id).await?;
    Ok(Json(MessageResponse { message }))
}

/// Get the first flight leaving from a city
#[utoipa::path(
    get,
    path = "/flights/city/{city_origin}",
    tag = "flights",
    params(("city_origin" = String, Path, description = "Origin city")),
    responses(
        (status = 200, description = "Flight details", body = Flight),
        (status = 404, description = "No matching flight", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_flight_by_city_origin(
    State(state): State<AppState>,
    WithRejection(Path(city_origin), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<Flight>> {
    let flight = state
        .services
        .flights
        .get_by_field(FlightField::CityOrigin(city_origin))
        .await?;
    Ok(Json(flight))
}

/// Get the first flight arriving at a city
#[utoipa::path(
    get,
    path = "/flights/destination/{destination}",
    tag = "flights",
    params(("destination" = String, Path, description = "Destination city")),
    responses(
        (status = 200, description = "Flight details", body = Flight),
        (status = 404, description = "No matching flight", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_flight_by_destination(
    State(state): State<AppState>,
    WithRejection(Path(destination), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<Flight>> {
    let flight = state
        .services
        .flights
        .get_by_field(FlightField::Destination(destination))
        .await?;
    Ok(Json(flight))
}

/// Get the first flight departing on a date
#[utoipa::path(
    get,
    path = "/flights/date/{departure_date}",
    tag = "flights",
    params(("departure_date" = String, Path, description = "Departure date (YYYY-MM-DD)")),
    responses(
        (status = 200, description = "Flight details", body = Flight),
        (status = 404, description = "No matching flight", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_flight_by_departure_date(
    State(state): State<AppState>,
    WithRejection(Path(date), _): WithRejection<Path<NaiveDate>, AppError>,
) -> AppResult<Json<Flight>> {
    let flight = state
        .services
        .flights
        .get_by_field(FlightField::DepartureDate(date))
        .await?;
    Ok(Json(flight))
}

/// Get the first flight departing at a time of day
#[utoipa::path(
    get,
    path = "/flights/time/{departure_time}",
    tag = "flights",
    params(("departure_time" = String, Path, description = "Departure time (HH:MM)")),
    responses(
        (status = 200, description = "Flight details", body = Flight),
        (status = 404, description = "No matching flight", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_flight_by_departure_time(
    State(state): State<AppState>,
    WithRejection(Path(time), _): WithRejection<Path<NaiveTime>, AppError>,
) -> AppResult<Json<Flight>> {
    let flight = state
        .services
        .flights
        .get_by_field(FlightField::DepartureTime(time))
        .await?;
    Ok(Json(flight))
}

/// Get the first flight with a given price
#[utoipa::path(
    get,
    path = "/flights/price/{price}",
    tag = "flights",
    params(("price" = String, Path, description = "Exact price")),
    responses(
        (status = 200, description = "Flight details", body = Flight),
        (status = 404, description = "No matching flight", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_flight_by_price(
    State(state): State<AppState>,
    WithRejection(Path(price), _): WithRejection<Path<Decimal>, AppError>,
) -> AppResult<Json<Flight>> {
    let flight = state.services.flights.get_by_field(FlightField::Price(price)).await?;
    Ok(Json(flight))
}
