//! Local file record source

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use birdsearch_domain::entities::BirdRecord;
use birdsearch_domain::error::{Error, Result};
use birdsearch_domain::ports::providers::RecordSource;

use crate::record_source::csv_decoder;

/// Record source reading the corpus CSV from disk
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    async fn load_records(&self) -> Result<Vec<BirdRecord>> {
        info!(path = %self.path.display(), "Loading bird data from file");

        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            Error::ingestion_with_source(format!("Failed to read {}", self.path.display()), e)
        })?;

        let records = csv_decoder::decode_bytes(&bytes, &self.path.display().to_string())?;
        info!(count = records.len(), "Loaded bird records from file");
        Ok(records)
    }

    fn source_name(&self) -> &str {
        "file"
    }
}
