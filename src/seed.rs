// Sample inventory shipped with the crate (stored in the samples directory)
use crate::catalog::Catalog;
use crate::error::Result;
use crate::inventory::{Flight, Hotel, Room};

pub const SAMPLE_FLIGHTS_JSON: &str = include_str!("../samples/flights.json");
pub const SAMPLE_HOTELS_JSON: &str = include_str!("../samples/hotels.json");
pub const SAMPLE_ROOMS_JSON: &str = include_str!("../samples/rooms.json");

// Shanghai -> Beijing flights for the selection step
pub fn flights() -> Result<Catalog<Flight>> {
    Catalog::from_json(SAMPLE_FLIGHTS_JSON)
}

pub fn hotels() -> Result<Catalog<Hotel>> {
    Catalog::from_json(SAMPLE_HOTELS_JSON)
}

// Room types offered on the room step, whichever hotel was opened
pub fn rooms() -> Result<Catalog<Room>> {
    Catalog::from_json(SAMPLE_ROOMS_JSON)
}
