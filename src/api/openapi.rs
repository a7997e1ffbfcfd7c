//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{flights, health, hotels};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Airline Booking API",
        version = "0.1.0",
        description = "Flights and hotels REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Flights
        flights::list_flights,
        flights::search_flights,
        flights::get_flight,
        flights::create_flight,
        flights::update_flight,
        flights::delete_flight,
        flights::get_flight_by_city_origin,
        flights::get_flight_by_destination,
        flights::get_flight_by_departure_date,
        flights::get_flight_by_departure_time,
        flights::get_flight_by_price,
        // Hotels
        hotels::list_hotels,
        hotels::get_hotel,
        hotels::create_hotel,
        hotels::update_hotel,
        hotels::delete_hotel,
        hotels::get_hotel_by_name,
        hotels::get_hotel_by_city,
        hotels::get_hotel_by_checkin_date,
        hotels::get_hotel_by_price_per_night,
    ),
    components(
        schemas(
            crate::models::flight::Flight,
            crate::models::flight::CreateFlight,
            crate::models::flight::FlightSearchQuery,
            crate::models::hotel::Hotel,
            crate::models::hotel::CreateHotel,
            crate::api::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "flights", description = "Flight management"),
        (name = "hotels", description = "Hotel management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
