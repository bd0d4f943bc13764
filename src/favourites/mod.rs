//! The user's favourites: an insertion-ordered set of listings keyed by id.

pub mod drag;

pub use drag::{DragItem, DropEvent, DropOutcome, DropZone};

use crate::models::{PropertyId, PropertyRecord};
use tracing::debug;

/// Insertion-ordered, id-deduplicated collection of saved listings
///
/// Every operation is total. Each call completes before returning, so callers
/// only ever observe the set before or after a mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavouritesSet {
    records: Vec<PropertyRecord>,
}

impl FavouritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` unless its id is already present.
    ///
    /// Returns `true` when the set changed.
    pub fn add(&mut self, record: PropertyRecord) -> bool {
        if self.contains(record.id) {
            debug!(id = %record.id, "already a favourite");
            return false;
        }
        debug!(id = %record.id, "added to favourites");
        self.records.push(record);
        true
    }

    /// Remove the record with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: PropertyId) -> Option<PropertyRecord> {
        let position = self.records.iter().position(|record| record.id == id)?;
        debug!(%id, "removed from favourites");
        Some(self.records.remove(position))
    }

    pub fn clear(&mut self) {
        debug!(count = self.records.len(), "cleared favourites");
        self.records.clear();
    }

    pub fn contains(&self, id: PropertyId) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyRecord> {
        self.records.iter()
    }

    pub fn ids(&self) -> Vec<PropertyId> {
        self.records.iter().map(|record| record.id).collect()
    }

    /// Apply a completed drag. Drops go through [`add`](Self::add) and
    /// [`remove`](Self::remove) like any click.
    pub fn apply_drop(&mut self, event: DropEvent) -> DropOutcome {
        drag::apply(self, event)
    }
}

impl<'a> IntoIterator for &'a FavouritesSet {
    type Item = &'a PropertyRecord;
    type IntoIter = std::slice::Iter<'a, PropertyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
