//! In-memory stores backing the service and router tests

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{FlightStore, HotelStore};
use crate::{
    error::{AppError, AppResult},
    models::{Flight, FlightField, FlightFilter, Hotel, HotelField, NewFlight, NewHotel},
};

fn flight_matches(field: &FlightField, flight: &Flight) -> bool {
    match field {
        FlightField::CityOrigin(v) => &flight.city_origin == v,
        FlightField::Destination(v) => &flight.destination == v,
        FlightField::DepartureDate(d) => &flight.departure_date == d,
        FlightField::DepartureTime(t) => &flight.departure_time == t,
        FlightField::Price(p) => &flight.price == p,
    }
}

fn hotel_matches(field: &HotelField, hotel: &Hotel) -> bool {
    match field {
        HotelField::Name(v) => &hotel.hotel_name == v,
        HotelField::City(v) => &hotel.city == v,
        HotelField::CheckinDate(d) => &hotel.checkin_date == d,
        HotelField::PricePerNight(p) => &hotel.price_per_night == p,
    }
}

struct Table<T> {
    next_id: i32,
    rows: BTreeMap<i32, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

#[derive(Default)]
pub struct MemoryFlightStore {
    table: Mutex<Table<Flight>>,
}

impl MemoryFlightStore {
    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl FlightStore for MemoryFlightStore {
    async fn save(&self, id: Option<i32>, data: &NewFlight) -> AppResult<Flight> {
        let mut table = self.table.lock().unwrap();
        let id = match id {
            Some(id) if !table.rows.contains_key(&id) => {
                return Err(AppError::NotFound(format!("Flight with ID {} not found.", id)));
            }
            Some(id) => id,
            None => {
                let id = table.next_id;
                table.next_id += 1;
                id
            }
        };
        let flight = Flight {
            id,
            city_origin: data.city_origin.clone(),
            destination: data.destination.clone(),
            departure_date: data.departure_date,
            departure_time: data.departure_time,
            price: data.price,
        };
        table.rows.insert(id, flight.clone());
        Ok(flight)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Flight>> {
        Ok(self.table.lock().unwrap().rows.get(&id).cloned())
    }

    async fn find_by_field(&self, field: &FlightField) -> AppResult<Option<Flight>> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.values().find(|f| flight_matches(field, f)).cloned())
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        self.table.lock().unwrap().rows.remove(&id);
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Flight>> {
        Ok(self.table.lock().unwrap().rows.values().cloned().collect())
    }

    async fn search(&self, filter: &FlightFilter) -> AppResult<Vec<Flight>> {
        let table = self.table.lock().unwrap();
        Ok(table
            .rows
            .values()
            .filter(|f| filter.fields.iter().all(|field| flight_matches(field, f)))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryHotelStore {
    table: Mutex<Table<Hotel>>,
}

impl MemoryHotelStore {
    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl HotelStore for MemoryHotelStore {
    async fn save(&self, id: Option<i32>, data: &NewHotel) -> AppResult<Hotel> {
        let mut table = self.table.lock().unwrap();
        let id = match id {
            Some(id) if !table.rows.contains_key(&id) => {
                return Err(AppError::NotFound(format!("Hotel with id {} not found.", id)));
            }
            Some(id) => id,
            None => {
                let id = table.next_id;
                table.next_id += 1;
                id
            }
        };
        let hotel = Hotel {
            id,
            hotel_name: data.hotel_name.clone(),
            city: data.city.clone(),
            checkin_date: data.checkin_date,
            price_per_night: data.price_per_night,
        };
        table.rows.insert(id, hotel.clone());
        Ok(hotel)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Hotel>> {
        Ok(self.table.lock().unwrap().rows.get(&id).cloned())
    }

    async fn find_by_field(&self, field: &HotelField) -> AppResult<Option<Hotel>> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.values().find(|h| hotel_matches(field, h)).cloned())
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        self.table.lock().unwrap().rows.remove(&id);
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Hotel>> {
        Ok(self.table.lock().unwrap().rows.values().cloned().collect())
    }
}
