use crate::error::ListingError;
use crate::listings::traits::ListingSource;
use crate::models::PropertyRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Listing source backed by a `properties.json` file
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Parse a listing document: either a bare array or `{ "properties": [...] }`
pub fn parse_listings(json: &str) -> Result<Vec<PropertyRecord>, ListingError> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Document {
        Bare(Vec<PropertyRecord>),
        Wrapped { properties: Vec<PropertyRecord> },
    }

    let document: Document = serde_json::from_str(json)?;
    Ok(match document {
        Document::Bare(records) => records,
        Document::Wrapped { properties } => properties,
    })
}

#[async_trait]
impl ListingSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<PropertyRecord>> {
        info!("Loading listings from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ListingError::Io {
                path: self.path.clone(),
                source,
            })?;

        debug!("Read {} bytes of listing JSON", json.len());

        let records = parse_listings(&json)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        info!("Loaded {} listings from file", records.len());
        Ok(records)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}
