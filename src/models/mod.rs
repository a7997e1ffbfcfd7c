//! Data models for flights and hotels

pub mod flight;
pub mod hotel;

pub use flight::{
    CreateFlight, Flight, FlightField, FlightFilter, FlightSearchQuery, NewFlight, UpdateFlight,
};
pub use hotel::{CreateHotel, Hotel, HotelField, NewHotel, UpdateHotel};
