//! Hotel API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{CreateHotel, Hotel, HotelField, UpdateHotel},
    AppState,
};

use super::MessageResponse;

/// List all hotels
#[utoipa::path(
    get,
    path = "/hotels",
    tag = "hotels",
    responses(
        (status = 200, description = "Hotel list", body = Vec<Hotel>)
    )
)]
pub async fn list_hotels(State(state): State<AppState>) -> AppResult<Json<Vec<Hotel>>> {
    let hotels = state.services.hotels.list().await?;
    Ok(Json(hotels))
}

/// Get hotel by ID
#[utoipa::path(
    get,
    path = "/hotels/{id}",
    tag = "hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel details", body = Hotel),
        (status = 404, description = "Hotel not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<Hotel>> {
    let hotel = state.services.hotels.get_by_id(id).await?;
    Ok(Json(hotel))
}

/// Register a hotel
#[utoipa::path(
    post,
    path = "/hotels",
    tag = "hotels",
    request_body = CreateHotel,
    responses(
        (status = 201, description = "Hotel created", body = Hotel),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateHotel>, AppError>,
) -> AppResult<(StatusCode, Json<Hotel>)> {
    let hotel = state.services.hotels.create(&data).await?;
    Ok((StatusCode::CREATED, Json(hotel)))
}

/// Replace every field of a hotel
#[utoipa::path(
    put,
    path = "/hotels/{id}",
    tag = "hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = CreateHotel,
    responses(
        (status = 200, description = "Hotel updated", body = MessageResponse),
        (status = 404, description = "Hotel not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_hotel(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateHotel>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    let message = state.services.hotels.update(id, &data).await?;
    Ok(Json(MessageResponse { message }))
}

/// Delete a hotel
#[utoipa::path(
    delete,
    path = "/hotels/{id}",
    tag = "hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel deleted", body = MessageResponse),
        (status = 404, description = "Hotel not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_hotel(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    let message = state.services.hotels.delete(id).await?;
    Ok(Json(MessageResponse { message }))
}

#[utoipa::path(
    get,
    path = "/hotels/name/{hotel_name}",
    tag = "hotels",
    params(("hotel_name" = String, Path, description = "Hotel name")),
    responses(
        (status = 200, description = "Hotel details", body = Hotel),
        (status = 404, description = "No matching hotel", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_hotel_by_name(
    State(state): State<AppState>,
    WithRejection(Path(name), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<Hotel>> {
    let hotel = state.services.hotels.get_by_field(HotelField::Name(name)).await?;
    Ok(Json(hotel))
}

#[utoipa::path(
    get,
    path = "/hotels/city/{city}",
    tag = "hotels",
    params(("city" = String, Path, description = "City")),
    responses(
        (status = 200, description = "Hotel details", body = Hotel),
        (status = 404, description = "No matching hotel", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_hotel_by_city(
    State(state): State<AppState>,
    WithRejection(Path(city), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<Hotel>> {
    let hotel = state.services.hotels.get_by_field(HotelField::City(city)).await?;
    Ok(Json(hotel))
}

#[utoipa::path(
    get,
    path = "/hotels/checkin/{checkin_date}",
    tag = "hotels",
    params(("checkin_date" = String, Path, description = "Check-in date (YYYY-MM-DD)")),
    responses(
        (status = 200, description = "Hotel details", body = Hotel),
        (status = 404, description = "No matching hotel", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_hotel_by_checkin_date(
    State(state): State<AppState>,
    WithRejection(Path(date), _): WithRejection<Path<NaiveDate>, AppError>,
) -> AppResult<Json<Hotel>> {
    let hotel = state
        .services
        .hotels
        .get_by_field(HotelField::CheckinDate(date))
        .await?;
    Ok(Json(hotel))
}

#[utoipa::path(
    get,
    path = "/hotels/ppn/{price_per_night}",
    tag = "hotels",
    params(("price_per_night" = String, Path, description = "Exact price per night")),
    responses(
        (status = 200, description = "Hotel details", body = Hotel),
        (status = 404, description = "No matching hotel", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_hotel_by_price_per_night(
    State(state): State<AppState>,
    WithRejection(Path(price), _): WithRejection<Path<Decimal>, AppError>,
) -> AppResult<Json<Hotel>> {
    let hotel = state
        .services
        .hotels
        .get_by_field(HotelField::PricePerNight(price))
        .await?;
    Ok(Json(hotel))
}
