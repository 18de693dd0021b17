// Per-step state for the four pages of the booking flow.
// Each step owns its catalog, view settings and selection; none can see another's.
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::error::{BookingError, Result};
use crate::filter::filter;
use crate::flow::{emit, emit_back, Navigator, Step, StepController, Transition};
use crate::inventory::{Flight, Hotel, Room};
use crate::ranking::{rank, SortKey};
use crate::selection::SelectionSummary;

// Display format used by the date pickers
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y年%m月%d日").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub travelers: u32,
}

// Step 1: the search form
#[derive(Debug, Clone)]
pub struct FlightSearchStep {
    origin: String,
    destination: String,
    departure_date: Option<NaiveDate>,
    return_date: Option<NaiveDate>,
    travelers: u32,
    min_travelers: u32,
    max_travelers: u32,
}

impl FlightSearchStep {
    pub fn new(config: &EngineConfig) -> Self {
        // At least one traveler, even for an unvalidated config
        let min_travelers = config.min_travelers.max(1);
        Self {
            origin: String::new(),
            destination: String::new(),
            departure_date: None,
            return_date: None,
            travelers: min_travelers,
            min_travelers,
            // clamp() panics on inverted bounds
            max_travelers: config.max_travelers.max(min_travelers),
        }
    }

    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.origin = origin.into();
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    pub fn set_departure_date(&mut self, date: Option<NaiveDate>) {
        self.departure_date = date;
    }

    pub fn set_return_date(&mut self, date: Option<NaiveDate>) {
        self.return_date = date;
    }

    pub fn travelers(&self) -> u32 {
        self.travelers
    }

    pub fn set_travelers(&mut self, travelers: u32) {
        self.travelers = travelers.clamp(self.min_travelers, self.max_travelers);
    }

    pub fn increment_travelers(&mut self) {
        self.set_travelers(self.travelers.saturating_add(1));
    }

    pub fn decrement_travelers(&mut self) {
        self.set_travelers(self.travelers.saturating_sub(1));
    }

    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            departure_date: self.departure_date,
            return_date: self.return_date,
            travelers: self.travelers,
        }
    }

    // Inputs are passed through as entered; nothing here is validated
    pub fn submit(&self, navigator: &mut dyn Navigator) -> (SearchQuery, Transition) {
        let query = self.query();
        info!(
            origin = %query.origin,
            destination = %query.destination,
            departure_date = ?query.departure_date,
            return_date = ?query.return_date,
            travelers = query.travelers,
            "searching"
        );

        let transition = emit(
            navigator,
            Transition {
                from: Step::FlightSearch,
                to: Step::FlightSearch.next(),
                payload: None,
            },
        );
        (query, transition)
    }
}

// Step 2: ranked flight list with a single selection
#[derive(Debug, Clone)]
pub struct FlightSelectionStep {
    controller: StepController<Flight>,
    sort_key: SortKey,
    low_seats_threshold: u32,
}

impl FlightSelectionStep {
    pub fn new(catalog: Catalog<Flight>, config: &EngineConfig) -> Self {
        Self {
            controller: StepController::new(Step::FlightSelection, catalog),
            sort_key: config.default_sort_key,
            low_seats_threshold: config.low_seats_threshold,
        }
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    // Unknown keys are rejected and the current key is kept
    pub fn set_sort_key(&mut self, key: &str) -> Result<()> {
        self.sort_key = key.parse()?;
        Ok(())
    }

    pub fn view(&self) -> Result<Vec<Flight>> {
        rank(self.controller.tracker().catalog(), self.sort_key)
    }

    pub fn seats_warning(&self, flight: &Flight) -> Option<u32> {
        flight.seats_warning(self.low_seats_threshold)
    }

    pub fn select(&mut self, id: &str) -> Result<()> {
        self.controller.select(id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.controller.tracker().is_selected(id)
    }

    pub fn selected(&self) -> Option<&Flight> {
        self.controller.tracker().current()
    }

    pub fn summary(&self) -> Option<SelectionSummary> {
        self.controller.summary()
    }

    pub fn can_advance(&self) -> bool {
        self.controller.can_advance()
    }

    pub fn advance(&self, navigator: &mut dyn Navigator) -> Result<Transition> {
        self.controller.advance(navigator)
    }

    pub fn back(&self, navigator: &mut dyn Navigator) -> Transition {
        self.controller.back(navigator)
    }
}

// Step 3: searchable hotel list. No selection; picking a hotel opens its rooms.
#[derive(Debug, Clone)]
pub struct HotelListStep {
    catalog: Catalog<Hotel>,
    query: String,
}

impl HotelListStep {
    pub fn new(catalog: Catalog<Hotel>) -> Self {
        Self {
            catalog,
            query: String::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn view(&self) -> Vec<Hotel> {
        filter(&self.catalog, &self.query)
    }

    // "找到 N 家酒店"
    pub fn result_count(&self) -> usize {
        self.view().len()
    }

    // Any hotel in the catalog can be opened, whether or not the current query shows it
    pub fn open_hotel(&self, hotel_id: &str, navigator: &mut dyn Navigator) -> Result<Transition> {
        if !self.catalog.contains(hotel_id) {
            warn!(hotel_id, "open on unknown hotel");
            return Err(BookingError::NotFound(format!(
                "no hotel with id '{}'",
                hotel_id
            )));
        }

        Ok(emit(
            navigator,
            Transition {
                from: Step::HotelList,
                to: Step::HotelList.next(),
                payload: Some(hotel_id.to_string()),
            },
        ))
    }

    // The query is kept; only the navigation layer discards the step
    pub fn back(&self, navigator: &mut dyn Navigator) -> Transition {
        emit_back(navigator, Step::HotelList)
    }
}

// Step 4: room types with a single selection.
// The hotel id is only carried for display; rooms are not checked against it.
#[derive(Debug, Clone)]
pub struct RoomSelectionStep {
    controller: StepController<Room>,
    hotel_id: Option<String>,
}

impl RoomSelectionStep {
    pub fn new(catalog: Catalog<Room>, hotel_id: Option<String>) -> Self {
        Self {
            controller: StepController::new(Step::RoomSelection, catalog),
            hotel_id,
        }
    }

    // Enter from the transition emitted by HotelListStep::open_hotel
    pub fn from_transition(catalog: Catalog<Room>, transition: &Transition) -> Self {
        Self::new(catalog, transition.payload.clone())
    }

    pub fn hotel_id(&self) -> Option<&str> {
        self.hotel_id.as_deref()
    }

    pub fn route(&self) -> String {
        Step::RoomSelection.route(self.hotel_id())
    }

    pub fn room_count(&self) -> usize {
        self.controller.tracker().catalog().len()
    }

    // Rooms are listed in catalog order
    pub fn view(&self) -> &[Room] {
        self.controller.tracker().catalog().items()
    }

    pub fn select(&mut self, id: &str) -> Result<()> {
        self.controller.select(id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.controller.tracker().is_selected(id)
    }

    pub fn selected(&self) -> Option<&Room> {
        self.controller.tracker().current()
    }

    pub fn summary(&self) -> Option<SelectionSummary> {
        self.controller.summary()
    }

    pub fn can_advance(&self) -> bool {
        self.controller.can_advance()
    }

    pub fn advance(&self, navigator: &mut dyn Navigator) -> Result<Transition> {
        self.controller.advance(navigator)
    }

    pub fn back(&self, navigator: &mut dyn Navigator) -> Transition {
        self.controller.back(navigator)
    }
}
