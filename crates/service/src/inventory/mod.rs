//! The inventory store: an ordered item -> quantity mapping with add/remove,
//! JSON load/save, and simple reports (see `report`).

mod report;

use std::path::Path;

use chrono::Local;
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::quantity::{parse_quantity, Quantity};
use crate::storage::json_map_store::{JsonMapFile, MapRead};

pub use configs::{DEFAULT_DATA_FILE, DEFAULT_LOW_STOCK_THRESHOLD};

/// What `load` found at the given path.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded { items: usize },
    /// No file; the store is now empty.
    Missing,
    /// The file is not a JSON object of integers; the store is now empty.
    Malformed(serde_json::Error),
}

/// In-memory inventory. Iteration follows insertion order; an item removed
/// and added again goes to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    items: IndexMap<String, Quantity>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    /// Entries in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> + '_ {
        self.items.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Increase the stock of `item` by `qty`, creating the entry if needed.
    ///
    /// An empty `item` is ignored. On success a timestamped
    /// `"<time>: Added <qty> of <item>"` line is pushed to `logs` when given.
    /// Negative quantities are accepted as-is.
    pub fn add(&mut self, item: &str, qty: Quantity, logs: Option<&mut Vec<String>>) -> Result<(), ServiceError> {
        if item.is_empty() {
            return Ok(());
        }
        let mut scratch = Vec::new();
        let logs = logs.unwrap_or(&mut scratch);

        let total = self
            .get_quantity(item)
            .checked_add(qty)
            .ok_or_else(|| ServiceError::invalid_quantity(item, qty))?;
        self.items.insert(item.to_string(), total);

        let line = format!("{}: Added {} of {}", Local::now().format("%Y-%m-%d %H:%M:%S%.6f"), qty, item);
        debug!(item, qty, total, "stock added");
        logs.push(line);
        Ok(())
    }

    /// `add` for an untyped quantity. The item check comes first, so an empty
    /// item is a no-op whatever `raw_qty` holds.
    pub fn add_raw(&mut self, item: &str, raw_qty: &str, logs: Option<&mut Vec<String>>) -> Result<(), ServiceError> {
        if item.is_empty() {
            return Ok(());
        }
        let qty = parse_quantity(raw_qty).map_err(|_| {
            debug!(item, raw_qty, "rejected non-integer quantity");
            ServiceError::NotANumber { item: item.to_string(), qty: raw_qty.to_string() }
        })?;
        self.add(item, qty, logs)
    }

    /// Decrease the stock of `item` by `qty` and return what `get_quantity`
    /// now reports. The entry is deleted once it reaches zero or below.
    pub fn remove(&mut self, item: &str, qty: Quantity) -> Result<Quantity, ServiceError> {
        let current = self.items.get(item).copied().ok_or_else(|| ServiceError::not_found(item))?;
        let left = current
            .checked_sub(qty)
            .ok_or_else(|| ServiceError::invalid_quantity(item, qty))?;

        if left <= 0 {
            self.items.shift_remove(item);
            debug!(item, qty, "stock exhausted, entry removed");
            return Ok(0);
        }
        if let Some(slot) = self.items.get_mut(item) {
            *slot = left;
        }
        debug!(item, qty, left, "stock removed");
        Ok(left)
    }

    /// `remove` for an untyped quantity. A missing item is reported before the
    /// quantity is looked at.
    pub fn remove_raw(&mut self, item: &str, raw_qty: &str) -> Result<Quantity, ServiceError> {
        if !self.contains(item) {
            return Err(ServiceError::not_found(item));
        }
        let qty = parse_quantity(raw_qty).map_err(|_| ServiceError::invalid_quantity(item, raw_qty))?;
        self.remove(item, qty)
    }

    /// Stored quantity, or 0 for an unknown item.
    pub fn get_quantity(&self, item: &str) -> Quantity {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Replace the whole mapping with the contents of `path`.
    ///
    /// A missing or undecodable file empties the store and is reported through
    /// the returned outcome. Other I/O failures leave the store untouched.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadOutcome, ServiceError> {
        let path = path.as_ref();
        let outcome = match JsonMapFile::<Quantity>::new(path).read()? {
            MapRead::Found(items) => {
                let count = items.len();
                self.items = items;
                info!(path = %path.display(), items = count, "inventory loaded");
                LoadOutcome::Loaded { items: count }
            }
            MapRead::Missing => {
                self.items.clear();
                info!(path = %path.display(), "inventory file not found, starting empty");
                LoadOutcome::Missing
            }
            MapRead::Malformed(e) => {
                self.items.clear();
                info!(path = %path.display(), error = %e, "inventory file could not be decoded, starting empty");
                LoadOutcome::Malformed(e)
            }
        };
        Ok(outcome)
    }

    /// Write the whole mapping to `path`, overwriting it.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ServiceError> {
        let path = path.as_ref();
        JsonMapFile::<Quantity>::new(path).write(&self.items)?;
        info!(path = %path.display(), items = self.items.len(), "inventory saved");
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<(S, Quantity)> for InventoryStore {
    fn from_iter<I: IntoIterator<Item = (S, Quantity)>>(iter: I) -> Self {
        Self { items: iter.into_iter().map(|(k, v)| (k.into(), v)).collect() }
    }
}
