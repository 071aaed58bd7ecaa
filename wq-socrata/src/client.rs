//! Native HTTP client for the Socrata resource (feature `api`).

use crate::endpoint::Endpoint;
use crate::error::{Result, SocrataError};
use crate::record::RawRecord;
use log::{info, warn};
use reqwest::Client;
use std::time::Duration;

/// Default request timeout for the native client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Issues the single GET that loads the dataset. No retries.
#[derive(Debug, Clone)]
pub struct WaterQualityClient {
    client: Client,
    endpoint: Endpoint,
}

impl WaterQualityClient {
    /// Build a client with a request timeout.
    pub fn new(endpoint: Endpoint, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    /// Reuse an existing reqwest client.
    pub fn with_client(client: Client, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Fetch the raw response body.
    pub async fn fetch_body(&self) -> Result<String> {
        let url = self.endpoint.url();
        info!("Fetching water quality records from {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Request failed for {}: {}", url, e);
            SocrataError::HttpRequest(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Bad response status for {}: {}", url, status);
            return Err(SocrataError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetch and decode the records.
    pub async fn fetch_records(&self) -> Result<Vec<RawRecord>> {
        let body = self.fetch_body().await?;
        let records = RawRecord::parse_response(&body)?;
        info!("Received {} records", records.len());
        Ok(records)
    }
}
