//! Hotels service

use std::sync::Arc;

use super::validation::Validate;
use crate::{
    error::{AppError, AppResult},
    models::{CreateHotel, Hotel, HotelField, UpdateHotel},
    repository::HotelStore,
};

#[derive(Clone)]
pub struct HotelsService {
    store: Arc<dyn HotelStore>,
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Hotel with id {} not found.", id))
}

impl HotelsService {
    pub fn new(store: Arc<dyn HotelStore>) -> Self {
        Self { store }
    }

    /// Validate and register a new hotel
    pub async fn create(&self, data: &CreateHotel) -> AppResult<Hotel> {
        let fields = data.validate()?;
        let hotel = self.store.save(None, &fields).await?;
        tracing::info!(hotel_id = hotel.id, "Hotel created");
        Ok(hotel)
    }

    pub async fn delete(&self, id: i32) -> AppResult<String> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }
        self.store.delete_by_id(id).await?;
        tracing::info!(hotel_id = id, "Hotel deleted");
        Ok(format!("Hotel with id {} was deleted.", id))
    }

    pub async fn update(&self, id: i32, data: &UpdateHotel) -> AppResult<String> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }
        let fields = data.validate()?;
        self.store.save(Some(id), &fields).await?;
        tracing::info!(hotel_id = id, "Hotel updated");
        Ok(format!("Hotel with id {} was updated.", id))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Hotel> {
        self.store.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn get_by_field(&self, field: HotelField) -> AppResult<Hotel> {
        self.store.find_by_field(&field).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "Hotel with {} {} not found.",
                field.label(),
                field.value()
            ))
        })
    }

    pub async fn list(&self) -> AppResult<Vec<Hotel>> {
        self.store.list().await
    }
}
