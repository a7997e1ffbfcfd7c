//! Hotels repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::HotelStore;
use crate::{
    error::{AppError, AppResult},
    models::{Hotel, HotelField, NewHotel},
};

#[derive(Clone)]
pub struct HotelsRepository {
    pool: Pool<Postgres>,
}

impl HotelsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelStore for HotelsRepository {
    async fn save(&self, id: Option<i32>, data: &NewHotel) -> AppResult<Hotel> {
        match id {
            None => {
                let row = sqlx::query_as::<_, Hotel>(
                    r#"
                    INSERT INTO hotels (hotel_name, city, checkin_date, price_per_night)
                    VALUES ($1, $2, $3, $4)
                    RETURNING *
                    "#,
                )
                .bind(&data.hotel_name)
                .bind(&data.city)
                .bind(data.checkin_date)
                .bind(data.price_per_night)
                .fetch_one(&self.pool)
                .await?;
                Ok(row)
            }
            Some(id) => sqlx::query_as::<_, Hotel>(
                r#"
                UPDATE hotels
                SET hotel_name = $1, city = $2, checkin_date = $3, price_per_night = $4
                WHERE id = $5
                RETURNING *
                "#,
            )
            .bind(&data.hotel_name)
            .bind(&data.city)
            .bind(data.checkin_date)
            .bind(data.price_per_night)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel with id {} not found.", id))),
        }
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Hotel>> {
        let row = sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_field(&self, field: &HotelField) -> AppResult<Option<Hotel>> {
        let query = format!(
            "SELECT * FROM hotels WHERE {} = $1 ORDER BY id LIMIT 1",
            field.column()
        );
        let builder = sqlx::query_as::<_, Hotel>(&query);
        let builder = match field {
            HotelField::Name(v) | HotelField::City(v) => builder.bind(v),
            HotelField::CheckinDate(d) => builder.bind(d),
            HotelField::PricePerNight(p) => builder.bind(p),
        };
        let row = builder.fetch_optional(&self.pool).await?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Hotel>> {
        let rows = sqlx::query_as::<_, Hotel>("SELECT * FROM hotels ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
