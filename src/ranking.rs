// Ranking engine: orders a copy of a catalog by a user-chosen sort key
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{BookingError, Result};
use crate::inventory::{Bookable, Flight};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Price,
    // Departure clock time, flights only
    Time,
    // Flight duration label, flights only
    Duration,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Price, SortKey::Time, SortKey::Duration];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Time => "time",
            SortKey::Duration => "duration",
        }
    }

    // Tab caption on the flight selection page
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Price => "价格优先",
            SortKey::Time => "时间优先",
            SortKey::Duration => "时长优先",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "price" => Ok(SortKey::Price),
            "time" => Ok(SortKey::Time),
            "duration" => Ok(SortKey::Duration),
            other => Err(BookingError::InvalidArgument(format!(
                "unknown sort key '{}'",
                other
            ))),
        }
    }
}

// Entities the ranking engine can order. Every kind ranks by price; the
// schedule keys only exist for kinds that override the accessors.
pub trait Rankable: Bookable {
    fn supports(key: SortKey) -> bool {
        key == SortKey::Price
    }

    fn departure_time(&self) -> Option<&str> {
        None
    }

    fn duration_label(&self) -> Option<&str> {
        None
    }
}

impl Rankable for Flight {
    fn supports(_key: SortKey) -> bool {
        true
    }

    fn departure_time(&self) -> Option<&str> {
        Some(&self.departure_time)
    }

    fn duration_label(&self) -> Option<&str> {
        Some(&self.duration)
    }
}

impl Rankable for crate::inventory::Hotel {}

impl Rankable for crate::inventory::Room {}

// Return the entities ordered ascending by `key`. The input is never touched
// and ties keep their input order (the sort is stable).
//
// `Time` and `Duration` compare the raw strings byte by byte. That is only a
// correct ordering while every value shares the fixed-width formats "HH:MM"
// and "XhYYm"; "10h05m" sorts before "2h30m".
pub fn rank<T: Rankable + Clone>(items: &[T], key: SortKey) -> Result<Vec<T>> {
    if !T::supports(key) {
        warn!(sort_key = %key, "sort key not supported for this catalog");
        return Err(BookingError::InvalidArgument(format!(
            "sort key '{}' is not available for this entity kind",
            key
        )));
    }

    let mut ranked = items.to_vec();
    match key {
        SortKey::Price => ranked.sort_by_key(|item| item.unit_price()),
        SortKey::Time => ranked.sort_by(|a, b| a.departure_time().cmp(&b.departure_time())),
        SortKey::Duration => ranked.sort_by(|a, b| a.duration_label().cmp(&b.duration_label())),
    }

    debug!(sort_key = %key, size = ranked.len(), "catalog ranked");
    Ok(ranked)
}

// Parse the key first; unknown keys fail with InvalidArgument
pub fn rank_by<T: Rankable + Clone>(items: &[T], key: &str) -> Result<Vec<T>> {
    let key = key.parse::<SortKey>().map_err(|e| {
        warn!(sort_key = key, "rejected unknown sort key");
        e
    })?;
    rank(items, key)
}
