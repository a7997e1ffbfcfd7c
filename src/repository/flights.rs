//! Flights repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::FlightStore;
use crate::{
    error::{AppError, AppResult},
    models::{Flight, FlightField, FlightFilter, NewFlight},
};

#[derive(Clone)]
pub struct FlightsRepository {
    pool: Pool<Postgres>,
}

impl FlightsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Build the search statement. Placeholders follow the order of
/// `filter.fields`, which is also the order values are bound in.
fn search_sql(filter: &FlightFilter) -> String {
    let conditions: Vec<String> = filter
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| format!("{} = ${}", field.column(), i + 1))
        .collect();

    if conditions.is_empty() {
        "SELECT * FROM flights ORDER BY id".to_string()
    } else {
        format!(
            "SELECT * FROM flights WHERE {} ORDER BY id",
            conditions.join(" AND ")
        )
    }
}

macro_rules! bind_field {
    ($builder:expr, $field:expr) => {
        match $field {
            FlightField::CityOrigin(v) => $builder.bind(v),
            FlightField::Destination(v) => $builder.bind(v),
            FlightField::DepartureDate(d) => $builder.bind(d),
            FlightField::DepartureTime(t) => $builder.bind(t),
            FlightField::Price(p) => $builder.bind(p),
        }
    };
}

#[async_trait]
impl FlightStore for FlightsRepository {
    async fn save(&self, id: Option<i32>, data: &NewFlight) -> AppResult<Flight> {
        match id {
            None => {
                let row = sqlx::query_as::<_, Flight>(
                    r#"
                    INSERT INTO flights (city_origin, destination, departure_date, departure_time, price)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING *
                    "#,
                )
                .bind(&data.city_origin)
                .bind(&data.destination)
                .bind(data.departure_date)
                .bind(data.departure_time)
                .bind(data.price)
                .fetch_one(&self.pool)
                .await?;
                Ok(row)
            }
            Some(id) => sqlx::query_as::<_, Flight>(
                r#"
                UPDATE flights
                SET city_origin = $1, destination = $2, departure_date = $3,
                    departure_time = $4, price = $5
                WHERE id = $6
                RETURNING *
                "#,
            )
            .bind(&data.city_origin)
            .bind(&data.destination)
            .bind(data.departure_date)
            .bind(data.departure_time)
            .bind(data.price)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Flight with ID {} not found.", id))),
        }
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Flight>> {
        let row = sqlx::query_as::<_, Flight>("SELECT * FROM flights WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_field(&self, field: &FlightField) -> AppResult<Option<Flight>> {
        let query = format!(
            "SELECT * FROM flights WHERE {} = $1 ORDER BY id LIMIT 1",
            field.column()
        );
        let builder = sqlx::query_as::<_, Flight>(&query);
        let row = bind_field!(builder, field)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM flights WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Flight>> {
        let rows = sqlx::query_as::<_, Flight>("SELECT * FROM flights ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn search(&self, filter: &FlightFilter) -> AppResult<Vec<Flight>> {
        let query = search_sql(filter);

        let mut builder = sqlx::query_as::<_, Flight>(&query);
        for field in &filter.fields {
            builder = bind_field!(builder, field);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }
}
