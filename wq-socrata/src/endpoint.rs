//! Location of the published dataset.

use serde::{Deserialize, Serialize};

/// Water quality measurements published on datos.gov.co.
pub const DEFAULT_BASE_URL: &str = "https://www.datos.gov.co/resource/syfm-bqhq.json";

/// Cap on records per request; there is no pagination.
pub const DEFAULT_LIMIT: u32 = 1000;

/// A Socrata resource plus the `$limit` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub base_url: String,
    pub limit: u32,
}

impl Endpoint {
    pub fn new(base_url: impl Into<String>, limit: u32) -> Self {
        Self {
            base_url: base_url.into(),
            limit,
        }
    }

    /// Full request URL, e.g. `<base>?$limit=1000`.
    pub fn url(&self) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{}$limit={}", self.base_url, separator, self.limit)
    }

    /// Host part of the base URL, e.g. `www.datos.gov.co`.
    pub fn host(&self) -> &str {
        let rest = self
            .base_url
            .split_once("://")
            .map_or(self.base_url.as_str(), |(_, rest)| rest);
        rest.split(['/', '?']).next().unwrap_or(rest)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_LIMIT)
    }
}
