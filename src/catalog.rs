// Immutable, ordered collection of one entity kind
use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{BookingError, Result};
use crate::inventory::Bookable;

// Cloning a catalog shares the underlying items; nothing can mutate them after load.
#[derive(Debug)]
pub struct Catalog<T> {
    items: Arc<[T]>,
}

impl<T> Clone for Catalog<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: Bookable> Catalog<T> {
    // Build a catalog, rejecting any repeated id
    pub fn new(items: Vec<T>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(BookingError::DuplicateId(item.id().to_string()));
            }
        }

        debug!(size = items.len(), "catalog loaded");
        Ok(Self {
            items: items.into(),
        })
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    // Index of the entity in catalog order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

impl<T: Bookable + DeserializeOwned> Catalog<T> {
    // Parse a JSON array of entities
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<T> = serde_json::from_str(json)?;
        Self::new(items)
    }
}

impl<T> Catalog<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Deref for Catalog<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
