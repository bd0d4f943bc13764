//! The listing store and the sources that fill it.
//!
//! A [`ListingStore`] is built once from a [`ListingSource`] and is read-only
//! afterwards. Records keep the order the source produced them in.

pub mod json;
pub mod sample;
pub mod traits;

pub use json::JsonFileSource;
pub use sample::SampleSource;
pub use traits::ListingSource;

use crate::error::ListingError;
use crate::models::{PropertyId, PropertyRecord};
use crate::search::{filter, SearchCriteria};
use std::collections::HashMap;
use tracing::{debug, info};

/// Immutable, ordered set of listings with id lookup
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    records: Vec<PropertyRecord>,
    index: HashMap<PropertyId, usize>,
}

impl ListingStore {
    /// Build a store, rejecting datasets with repeated ids.
    pub fn new(records: Vec<PropertyRecord>) -> Result<Self, ListingError> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id, position).is_some() {
                return Err(ListingError::DuplicateId(record.id));
            }
        }
        debug!("Indexed {} listings", records.len());
        Ok(Self { records, index })
    }

    /// Load and index everything a source provides.
    pub async fn load(source: &dyn ListingSource) -> anyhow::Result<Self> {
        let records = source.load().await?;
        let store = Self::new(records)?;
        info!(
            "Listing store ready: {} properties from {}",
            store.len(),
            source.source_name()
        );
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve a property by id; unknown ids are `None`.
    pub fn find_by_id(&self, id: PropertyId) -> Option<&PropertyRecord> {
        self.index.get(&id).map(|&position| &self.records[position])
    }

    /// Records matching `criteria`, in store order.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&PropertyRecord> {
        filter(&self.records, criteria)
    }
}
