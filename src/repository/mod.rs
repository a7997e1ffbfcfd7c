//! Repository layer for database operations

pub mod flights;
pub mod hotels;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Flight, FlightField, FlightFilter, Hotel, HotelField, NewFlight, NewHotel},
};

pub use flights::FlightsRepository;
pub use hotels::HotelsRepository;

/// Flight persistence gateway
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FlightStore: Send + Sync {
    /// Insert when `id` is `None`, otherwise overwrite the row with that id
    async fn save(&self, id: Option<i32>, data: &NewFlight) -> AppResult<Flight>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Flight>>;

    /// First flight (lowest id) whose column equals the given value
    async fn find_by_field(&self, field: &FlightField) -> AppResult<Option<Flight>>;

    /// Removing an absent row is a no-op
    async fn delete_by_id(&self, id: i32) -> AppResult<()>;

    async fn list(&self) -> AppResult<Vec<Flight>>;

    async fn search(&self, filter: &FlightFilter) -> AppResult<Vec<Flight>>;
}

/// Hotel persistence gateway
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelStore: Send + Sync {
    async fn save(&self, id: Option<i32>, data: &NewHotel) -> AppResult<Hotel>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Hotel>>;

    async fn find_by_field(&self, field: &HotelField) -> AppResult<Option<Hotel>>;

    async fn delete_by_id(&self, id: i32) -> AppResult<()>;

    async fn list(&self) -> AppResult<Vec<Hotel>>;
}

/// Connectivity check used by the readiness endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub flights: FlightsRepository,
    pub hotels: HotelsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            flights: FlightsRepository::new(pool.clone()),
            hotels: HotelsRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl DatabaseProbe for Repository {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
