use async_trait::async_trait;

use crate::entities::BirdRecord;
use crate::error::Result;

/// Corpus Supplier Interface
///
/// Supplies the full, ordered set of records once at startup. Implementations
/// report unreachable storage or undecodable data as
/// [`Error::Ingestion`](crate::error::Error::Ingestion).
///
/// Records are returned as found; filtering blank names is the consumer's
/// responsibility.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Load every record in source order
    async fn load_records(&self) -> Result<Vec<BirdRecord>>;

    /// Identifier of this source implementation (e.g. "blob")
    fn source_name(&self) -> &str;
}
