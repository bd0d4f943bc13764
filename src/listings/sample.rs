use crate::listings::json::parse_listings;
use crate::listings::traits::ListingSource;
use crate::models::PropertyRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

const SAMPLE_LISTINGS: &str = include_str!("../../data/properties.json");

/// Built-in listing set used when no data file is supplied
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleSource;

impl SampleSource {
    pub fn new() -> Self {
        Self
    }

    /// Parse the embedded dataset without going through the async trait
    pub fn listings(&self) -> Result<Vec<PropertyRecord>> {
        parse_listings(SAMPLE_LISTINGS).context("Embedded sample listings are malformed")
    }
}

#[async_trait]
impl ListingSource for SampleSource {
    async fn load(&self) -> Result<Vec<PropertyRecord>> {
        info!("📋 Using built-in sample listings");
        self.listings()
    }

    fn source_name(&self) -> &'static str {
        "Sample"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_listings_parse_with_unique_ids() {
        let records = SampleSource::new().listings().unwrap();
        assert_eq!(records.len(), 7);

        let ids: HashSet<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn sample_listings_cover_the_postcode_areas() {
        let records = SampleSource::new().listings().unwrap();
        for area in ["BR1", "BR5", "BR6", "SW19", "E14", "NW1"] {
            assert!(
                records.iter().any(|r| r.postcode.starts_with(area)),
                "no listing in {area}"
            );
        }
    }
}
