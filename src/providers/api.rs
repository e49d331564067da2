use crate::core::{
    AggregateSource, DependencyRow, Endpoint, FetchError, HealthStatus, Overview,
};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

/// HTTP client for the aggregate-reporting service.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("observatorio/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// GETs `url` bypassing intermediate caches and decodes the body as `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: &str,
    ) -> Result<T, FetchError> {
        debug!("Requesting {} data from {}", endpoint, url);

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "Request to {} failed", url);
                FetchError::RequestFailure(endpoint)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "{} request returned a failure status", endpoint);
            return Err(FetchError::RequestFailure(endpoint));
        }

        let response_text = response.text().await.map_err(|e| {
            debug!(error = %e, "Failed to read {} response body", endpoint);
            FetchError::RequestFailure(endpoint)
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            error!(
                error = ?e,
                response = %response_text,
                "Failed to parse {} response", endpoint
            );
            FetchError::InvalidPayload {
                endpoint,
                reason: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl AggregateSource for ApiClient {
    async fn fetch_overview(&self, year: Option<u32>) -> Result<Overview, FetchError> {
        let url = match year {
            Some(year) => format!("{}?year={}", self.url(Endpoint::Overview), year),
            None => self.url(Endpoint::Overview),
        };
        let overview: Overview = self.get_json(Endpoint::Overview, &url).await?;
        debug!(
            countries = overview.country_ranking.len(),
            "Fetched overview"
        );
        Ok(overview)
    }

    async fn fetch_dependency(&self) -> Result<Vec<DependencyRow>, FetchError> {
        let url = self.url(Endpoint::Dependency);
        let rows: Vec<DependencyRow> = self.get_json(Endpoint::Dependency, &url).await?;
        debug!(rows = rows.len(), "Fetched dependency rows");
        Ok(rows)
    }

    async fn health(&self) -> Result<HealthStatus, FetchError> {
        let url = self.url(Endpoint::Health);
        self.get_json(Endpoint::Health, &url).await
    }
}
