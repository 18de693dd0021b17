// Bookable inventory: flights, hotels and rooms as they appear in the seed data
use serde::{Deserialize, Serialize};

// Common shape of everything a step can list and select
pub trait Bookable {
    fn id(&self) -> &str;

    // Human-readable name shown on the card
    fn display_label(&self) -> &str;

    // Non-negative price in the currency's minor unit
    fn unit_price(&self) -> u32;

    // Label shown in the bottom bar once the entity is selected
    fn summary_label(&self) -> String {
        self.display_label().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub airline_code: String,
    pub flight_number: String,
    // HH:MM, zero padded, same day
    pub departure_time: String,
    pub arrival_time: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    // "XhYYm"
    pub duration: String,
    pub price: u32,
    pub cabin_class: String,
    pub stops: u32,
    pub baggage: String,
    pub meal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats_left: Option<u32>,
}

impl Flight {
    pub fn is_non_stop(&self) -> bool {
        self.stops == 0
    }

    // Remaining seats, but only once they drop to the warning threshold.
    // A sold-out count shows no badge.
    pub fn seats_warning(&self, threshold: u32) -> Option<u32> {
        self.seats_left.filter(|&left| left > 0 && left <= threshold)
    }
}

impl Bookable for Flight {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_label(&self) -> &str {
        &self.flight_number
    }

    fn unit_price(&self) -> u32 {
        self.price
    }

    fn summary_label(&self) -> String {
        format!("{} · {} 出发", self.flight_number, self.departure_time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotelAmenity {
    Wifi,
    Parking,
    Breakfast,
}

impl HotelAmenity {
    pub fn label(&self) -> &'static str {
        match self {
            HotelAmenity::Wifi => "免费WiFi",
            HotelAmenity::Parking => "免费停车",
            HotelAmenity::Breakfast => "含早餐",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    // 0.0 - 5.0
    pub rating: f32,
    pub reviews: u32,
    pub price_per_night: u32,
    pub image: String,
    pub amenities: Vec<HotelAmenity>,
    #[serde(default)]
    pub featured: bool,
}

impl Hotel {
    pub fn has_amenity(&self, amenity: HotelAmenity) -> bool {
        self.amenities.contains(&amenity)
    }
}

impl Bookable for Hotel {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_label(&self) -> &str {
        &self.name
    }

    fn unit_price(&self) -> u32 {
        self.price_per_night
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomAmenity {
    Wifi,
    Tv,
    Ac,
    Bathroom,
}

impl RoomAmenity {
    pub fn label(&self) -> &'static str {
        match self {
            RoomAmenity::Wifi => "WiFi",
            RoomAmenity::Tv => "电视",
            RoomAmenity::Ac => "空调",
            RoomAmenity::Bathroom => "独立卫浴",
        }
    }
}

// A room type of whichever hotel the room step was opened for.
// Rooms carry no hotel id; the seed data never links the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(rename = "size")]
    pub size_m2: u32,
    pub max_guests: u32,
    pub bed_type: String,
    pub price_per_night: u32,
    pub image: String,
    pub amenities: Vec<RoomAmenity>,
    pub breakfast: bool,
    pub cancellable: bool,
}

impl Bookable for Room {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_label(&self) -> &str {
        &self.name
    }

    fn unit_price(&self) -> u32 {
        self.price_per_night
    }
}
