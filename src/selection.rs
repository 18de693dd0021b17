// Selection tracker: at most one chosen entity per step
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::{BookingError, Result};
use crate::inventory::Bookable;

// What the bottom bar shows for the current choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    pub id: String,
    pub label: String,
    pub price: u32,
}

// Tracks the selected id against the step's full catalog. The selection is
// by id only, so re-sorting or re-filtering the visible list never clears
// it; an entity that is filtered out of view stays selected.
#[derive(Debug, Clone)]
pub struct SelectionTracker<T> {
    catalog: Catalog<T>,
    selected: Option<String>,
}

impl<T: Bookable> SelectionTracker<T> {
    pub fn new(catalog: Catalog<T>) -> Self {
        Self {
            catalog,
            selected: None,
        }
    }

    pub fn catalog(&self) -> &Catalog<T> {
        &self.catalog
    }

    // Replace the current selection. Unknown ids leave it unchanged.
    pub fn select(&mut self, id: &str) -> Result<()> {
        if !self.catalog.contains(id) {
            warn!(id, "select on unknown id");
            return Err(BookingError::NotFound(format!("no entity with id '{}'", id)));
        }

        debug!(id, previous = ?self.selected, "entity selected");
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn current(&self) -> Option<&T> {
        self.selected
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn summary(&self) -> Option<SelectionSummary> {
        self.current().map(|item| SelectionSummary {
            id: item.id().to_string(),
            label: item.summary_label(),
            price: item.unit_price(),
        })
    }
}
