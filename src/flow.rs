// Step ordering and the can-advance / advance gate between steps
use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::{BookingError, Result};
use crate::inventory::Bookable;
use crate::selection::{SelectionSummary, SelectionTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    FlightSearch,
    FlightSelection,
    HotelList,
    RoomSelection,
}

impl Step {
    // Flow order
    pub const ALL: [Step; 4] = [
        Step::FlightSearch,
        Step::FlightSelection,
        Step::HotelList,
        Step::RoomSelection,
    ];

    // None once the flow hands off to booking confirmation
    pub fn next(&self) -> Option<Step> {
        match self {
            Step::FlightSearch => Some(Step::FlightSelection),
            Step::FlightSelection => Some(Step::HotelList),
            Step::HotelList => Some(Step::RoomSelection),
            Step::RoomSelection => None,
        }
    }

    // Target of the page's back button. The hotel list returns to the
    // search form, not to flight selection.
    pub fn back(&self) -> Option<Step> {
        match self {
            Step::FlightSearch => None,
            Step::FlightSelection => Some(Step::FlightSearch),
            Step::HotelList => Some(Step::FlightSearch),
            Step::RoomSelection => Some(Step::HotelList),
        }
    }

    // Page path the navigation layer routes to; the room step is scoped to a hotel
    pub fn route(&self, hotel_id: Option<&str>) -> String {
        match self {
            Step::FlightSearch => "/".to_string(),
            Step::FlightSelection => "/flights".to_string(),
            Step::HotelList => "/hotels".to_string(),
            Step::RoomSelection => format!("/hotels/{}/rooms", hotel_id.unwrap_or(":hotelId")),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::FlightSearch => "搜索航班",
            Step::FlightSelection => "选择航班",
            Step::HotelList => "酒店列表",
            Step::RoomSelection => "选择房型",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::FlightSearch => "flight_search",
            Step::FlightSelection => "flight_selection",
            Step::HotelList => "hotel_list",
            Step::RoomSelection => "room_selection",
        };
        f.write_str(name)
    }
}

// Signal handed to the navigation collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: Step,
    pub to: Option<Step>,
    // Selected entity id, or the hotel id when opening a hotel's rooms
    pub payload: Option<String>,
}

// Whatever performs the actual page change. Fire and forget: the core
// assumes nothing about what happens after the call.
pub trait Navigator {
    fn navigate(&mut self, transition: Transition);
}

// Keeps every transition in order
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    transitions: Vec<Transition>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&Transition> {
        self.transitions.last()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }
}

// Emit a transition and log it
pub(crate) fn emit(navigator: &mut dyn Navigator, transition: Transition) -> Transition {
    info!(
        from = %transition.from,
        to = ?transition.to,
        payload = ?transition.payload,
        "step transition"
    );
    navigator.navigate(transition.clone());
    transition
}

// Emit the back-button transition of a step. Carries no payload.
pub(crate) fn emit_back(navigator: &mut dyn Navigator, from: Step) -> Transition {
    emit(
        navigator,
        Transition {
            from,
            to: from.back(),
            payload: None,
        },
    )
}

// One selection tracker bound to the step it belongs to
#[derive(Debug, Clone)]
pub struct StepController<T> {
    step: Step,
    tracker: SelectionTracker<T>,
}

impl<T: Bookable> StepController<T> {
    pub fn new(step: Step, catalog: Catalog<T>) -> Self {
        Self {
            step,
            tracker: SelectionTracker::new(catalog),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn tracker(&self) -> &SelectionTracker<T> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut SelectionTracker<T> {
        &mut self.tracker
    }

    pub fn select(&mut self, id: &str) -> Result<()> {
        self.tracker.select(id)
    }

    pub fn summary(&self) -> Option<SelectionSummary> {
        self.tracker.summary()
    }

    pub fn can_advance(&self) -> bool {
        self.tracker.current().is_some()
    }

    // Hand the selected id to the next step. The tracker is left as is;
    // tearing the step down belongs to the navigation layer.
    pub fn advance(&self, navigator: &mut dyn Navigator) -> Result<Transition> {
        let Some(current) = self.tracker.current() else {
            warn!(step = %self.step, "advance without a selection");
            return Err(BookingError::PreconditionFailed(format!(
                "nothing selected on step {}",
                self.step
            )));
        };

        let transition = Transition {
            from: self.step,
            to: self.step.next(),
            payload: Some(current.id().to_string()),
        };
        Ok(emit(navigator, transition))
    }

    // Leaves the selection untouched, same as advance
    pub fn back(&self, navigator: &mut dyn Navigator) -> Transition {
        emit_back(navigator, self.step)
    }
}
