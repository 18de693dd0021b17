// Main library file for the travel booking engine:
// flight search -> flight selection -> hotel list -> room selection over static inventory

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod flow;
pub mod inventory;
pub mod logging;
pub mod ranking;
pub mod seed;
pub mod selection;
pub mod steps;

// Re-export key types for convenience
pub use catalog::Catalog;
pub use config::EngineConfig;
pub use error::{BookingError, Result};
pub use filter::{filter, filter_with, FilterCriteria, Searchable};
pub use flow::{Navigator, RecordingNavigator, Step, StepController, Transition};
pub use inventory::{Bookable, Flight, Hotel, HotelAmenity, Room, RoomAmenity};
pub use ranking::{rank, rank_by, Rankable, SortKey};
pub use selection::{SelectionSummary, SelectionTracker};
pub use steps::{
    FlightSearchStep, FlightSelectionStep, HotelListStep, RoomSelectionStep, SearchQuery,
};
