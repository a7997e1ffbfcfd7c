//! API handlers and routing

pub mod flights;
pub mod health;
pub mod hotels;
pub mod openapi;

use axum::{routing::get, Router};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::AppState;

/// Outcome message returned by update and delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Flights
        .route(
            "/flights",
            get(flights::list_flights).post(flights::create_flight),
        )
        .route("/flights/search", get(flights::search_flights))
        .route(
            "/flights/:id",
            get(flights::get_flight)
                .put(flights::update_flight)
                .delete(flights::delete_flight),
        )
        .route("/flights/city/:city_origin", get(flights::get_flight_by_city_origin))
        .route("/flights/destination/:destination", get(flights::get_flight_by_destination))
        .route("/flights/date/:departure_date", get(flights::get_flight_by_departure_date))
        .route("/flights/time/:departure_time", get(flights::get_flight_by_departure_time))
        .route("/flights/price/:price", get(flights::get_flight_by_price))
        // Hotels
        .route("/hotels", get(hotels::list_hotels).post(hotels::create_hotel))
        .route(
            "/hotels/:id",
            get(hotels::get_hotel)
                .put(hotels::update_hotel)
                .delete(hotels::delete_hotel),
        )
        .route("/hotels/name/:hotel_name", get(hotels::get_hotel_by_name))
        .route("/hotels/city/:city", get(hotels::get_hotel_by_city))
        .route("/hotels/checkin/:checkin_date", get(hotels::get_hotel_by_checkin_date))
        .route("/hotels/ppn/:price_per_night", get(hotels::get_hotel_by_price_per_night))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{
        error::AppError,
        repository::{
            memory::{MemoryFlightStore, MemoryHotelStore},
            MockDatabaseProbe,
        },
        services::Services,
    };

    fn app_with_probe(probe: MockDatabaseProbe) -> Router {
        let services = Services::with_stores(
            Arc::new(MemoryFlightStore::default()),
            Arc::new(MemoryHotelStore::default()),
            Arc::new(probe),
        );
        create_router(AppState {
            services: Arc::new(services),
        })
    }

    fn app() -> Router {
        app_with_probe(MockDatabaseProbe::new())
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    fn nyc_lax() -> Value {
        json!({
            "city_origin": "NYC",
            "destination": "LAX",
            "departure_date": "2024-06-01",
            "departure_time": "08:00",
            "price": 199.99
        })
    }

    #[tokio::test]
    async fn test_health() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness() {
        let mut probe = MockDatabaseProbe::new();
        probe.expect_ping().times(1).returning(|| Ok(()));
        let app = app_with_probe(probe);
        let (status, body) = send(&app, Method::GET, "/api/v1/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");

        let mut probe = MockDatabaseProbe::new();
        probe
            .expect_ping()
            .returning(|| Err(AppError::Internal("connection refused".into())));
        let app = app_with_probe(probe);
        let (status, _) = send(&app, Method::GET, "/api/v1/ready", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_flight_lifecycle() {
        let app = app();

        let (status, created) = send(&app, Method::POST, "/api/v1/flights", Some(nyc_lax())).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_i64().unwrap();
        assert_eq!(created["city_origin"], "NYC");
        assert_eq!(created["departure_time"], "08:00:00");
        assert_eq!(created["price"], "199.99");

        let (status, fetched) = send(&app, Method::GET, &format!("/api/v1/flights/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let mut replacement = nyc_lax();
        replacement["destination"] = json!("SFO");
        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/v1/flights/{}", id),
            Some(replacement),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].as_str().unwrap().contains("successfully updated"));

        let (status, body) = send(&app, Method::GET, "/api/v1/flights/destination/SFO", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"].as_i64(), Some(id));

        let (status, body) = send(&app, Method::DELETE, &format!("/api/v1/flights/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], format!("Flight with ID {} successfully deleted.", id));

        let (status, _) = send(&app, Method::GET, &format!("/api/v1/flights/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_flight_rejects_blank_origin() {
        let app = app();
        let mut data = nyc_lax();
        data["city_origin"] = json!("");

        let (status, body) = send(&app, Method::POST, "/api/v1/flights", Some(data)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "City origin field cannot be empty");

        let (_, list) = send(&app, Method::GET, "/api/v1/flights", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_unknown_flight() {
        let app = app();

        let (status, body) = send(&app, Method::DELETE, "/api/v1/flights/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Flight with ID 999 not found.");

        let (status, _) = send(&app, Method::PUT, "/api/v1/flights/999", Some(nyc_lax())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::GET, "/api/v1/flights/city/NYC", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_requests() {
        let app = app();

        let (status, _) = send(&app, Method::GET, "/api/v1/flights/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut data = nyc_lax();
        data["departure_date"] = json!("tomorrow");
        let (status, body) = send(&app, Method::POST, "/api/v1/flights", Some(data)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BadValue");
    }

    #[tokio::test]
    async fn test_flight_field_lookups_and_search() {
        let app = app();
        send(&app, Method::POST, "/api/v1/flights", Some(nyc_lax())).await;
        let mut other = nyc_lax();
        other["city_origin"] = json!("BOS");
        other["departure_time"] = json!("17:30");
        send(&app, Method::POST, "/api/v1/flights", Some(other)).await;

        for uri in [
            "/api/v1/flights/date/2024-06-01",
            "/api/v1/flights/time/17:30",
            "/api/v1/flights/price/199.99",
        ] {
            let (status, _) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
        }

        let (_, all) = send(&app, Method::GET, "/api/v1/flights/search", None).await;
        assert_eq!(all.as_array().unwrap().len(), 2);

        let (_, hits) = send(&app, Method::GET, "/api/v1/flights/search?city_origin=BOS", None).await;
        let hits = hits.as_array().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["city_origin"], "BOS");

        let (status, hits) = send(&app, Method::GET, "/api/v1/flights/search?destination=", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(hits, json!([]));
    }

    #[tokio::test]
    async fn test_search_filter_names() {
        let app = app();
        send(&app, Method::POST, "/api/v1/flights", Some(nyc_lax())).await;

        let (status, hits) = send(&app, Method::GET, "/api/v1/flights/search?origin=BOS", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(hits, json!([]));

        let (status, hits) = send(
            &app,
            Method::GET,
            "/api/v1/flights/search?origin=NYC&date=2024-06-01&time=08:00",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(hits.as_array().unwrap().len(), 1);

        let (status, body) = send(&app, Method::GET, "/api/v1/flights/search?orign=BOS", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BadValue");
    }

    #[tokio::test]
    async fn test_hotel_lifecycle() {
        let app = app();
        let data = json!({
            "hotel_name": "Grand Hotel",
            "city": "Rome",
            "checkin_date": "2024-07-10",
            "price_per_night": "120.50"
        });

        let (status, created) = send(&app, Method::POST, "/api/v1/hotels", Some(data.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_i64().unwrap();

        let mut second = data.clone();
        second["hotel_name"] = json!("Hotel Milano");
        second["city"] = json!("Milan");
        let (_, other) = send(&app, Method::POST, "/api/v1/hotels", Some(second)).await;

        let (status, all) = send(&app, Method::GET, "/api/v1/hotels", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all, json!([created.clone(), other]));

        for uri in [
            "/api/v1/hotels/name/Grand%20Hotel",
            "/api/v1/hotels/city/Rome",
            "/api/v1/hotels/checkin/2024-07-10",
            "/api/v1/hotels/ppn/120.50",
        ] {
            let (status, body) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body["id"].as_i64(), Some(id));
        }

        let mut invalid = data.clone();
        invalid["price_per_night"] = json!(0);
        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/v1/hotels/{}", id),
            Some(invalid),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Price per night must be greater than zero");

        let (status, body) = send(&app, Method::PUT, &format!("/api/v1/hotels/{}", id), Some(data)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].as_str().unwrap().contains("was updated"));

        let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/hotels/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, Method::DELETE, &format!("/api/v1/hotels/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], format!("Hotel with id {} not found.", id));
    }
}
