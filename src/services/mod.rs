//! Business logic services

pub mod flights;
pub mod hotels;
pub mod validation;

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    repository::{DatabaseProbe, FlightStore, HotelStore, Repository},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub flights: flights::FlightsService,
    pub hotels: hotels::HotelsService,
    probe: Arc<dyn DatabaseProbe>,
}

impl Services {
    /// Create all services backed by the PostgreSQL repository
    pub fn new(repository: Repository) -> Self {
        Self::with_stores(
            Arc::new(repository.flights.clone()),
            Arc::new(repository.hotels.clone()),
            Arc::new(repository),
        )
    }

    pub fn with_stores(
        flights: Arc<dyn FlightStore>,
        hotels: Arc<dyn HotelStore>,
        probe: Arc<dyn DatabaseProbe>,
    ) -> Self {
        Self {
            flights: flights::FlightsService::new(flights),
            hotels: hotels::HotelsService::new(hotels),
            probe,
        }
    }

    /// Fails when the database cannot be reached
    pub async fn ready(&self) -> AppResult<()> {
        self.probe
            .ping()
            .await
            .map_err(|e| AppError::Unavailable(e.to_string()))
    }
}
