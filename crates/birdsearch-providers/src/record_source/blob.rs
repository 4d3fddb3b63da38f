//! Blob Storage Record Source
//!
//! Downloads the corpus CSV from an HTTP blob store:
//!
//! ```text
//! GET {url}/{container}/{file}[?{sas_token}]
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info};

use birdsearch_domain::entities::BirdRecord;
use birdsearch_domain::error::{Error, Result};
use birdsearch_domain::ports::providers::RecordSource;

use crate::embedding::helpers::constructor;
use crate::record_source::csv_decoder;
use crate::utils::HttpResponseUtils;

/// Record source backed by a CSV blob
pub struct BlobRecordSource {
    url: String,
    container_name: String,
    file_name: String,
    sas_token: Option<String>,
    timeout: Duration,
    http_client: Client,
}

impl BlobRecordSource {
    /// Create a new blob record source
    ///
    /// `sas_token` may be given with or without its leading `?`.
    pub fn new(
        url: String,
        container_name: String,
        file_name: String,
        sas_token: Option<String>,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        let sas_token = sas_token
            .map(|t| t.trim().trim_start_matches('?').to_string())
            .filter(|t| !t.is_empty());

        Self {
            url: constructor::validate_url(&url),
            container_name: container_name.trim().trim_matches('/').to_string(),
            file_name: file_name.trim().trim_start_matches('/').to_string(),
            sas_token,
            timeout,
            http_client,
        }
    }

    /// Blob location without credentials, for logging
    pub fn blob_url(&self) -> String {
        format!("{}/{}/{}", self.url, self.container_name, self.file_name)
    }

    fn request_url(&self) -> String {
        match &self.sas_token {
            Some(token) => format!("{}?{token}", self.blob_url()),
            None => self.blob_url(),
        }
    }

    async fn download(&self) -> Result<Vec<u8>> {
        let response = self
            .http_client
            .get(self.request_url())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Error::network_with_source("Blob download failed", e))?;

        HttpResponseUtils::check_and_read(response, "Blob storage").await
    }
}

#[async_trait]
impl RecordSource for BlobRecordSource {
    async fn load_records(&self) -> Result<Vec<BirdRecord>> {
        let blob = self.blob_url();
        info!(blob = %blob, "Loading bird data from blob");

        let bytes = self.download().await.map_err(|e| {
            error!(blob = %blob, error = %e, "Error loading bird data from blob storage");
            Error::ingestion_with_source(format!("Failed to download {blob}"), e)
        })?;

        let records = csv_decoder::decode_bytes(&bytes, &self.file_name)?;
        info!(count = records.len(), "Loaded bird records from blob storage");
        Ok(records)
    }

    fn source_name(&self) -> &str {
        "blob"
    }
}
