use crate::models::PropertyRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all listing data sources
/// A source supplies the full ordered dataset once, at startup
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load every listing from the source, in display order
    async fn load(&self) -> Result<Vec<PropertyRecord>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
