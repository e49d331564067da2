//! Read-only access to the aggregate-reporting service

use super::model::{DependencyRow, Overview};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Overview,
    Dependency,
    Health,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Overview => "/api/kpis/overview",
            Endpoint::Dependency => "/api/kpis/dependency",
            Endpoint::Health => "/api/health",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Endpoint::Overview => "overview",
                Endpoint::Dependency => "dependency",
                Endpoint::Health => "health",
            }
        )
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    /// Unreachable service or a non-2xx status; both look the same to callers.
    #[error("Error {0}")]
    RequestFailure(Endpoint),

    #[error("Invalid {endpoint} payload: {reason}")]
    InvalidPayload { endpoint: Endpoint, reason: String },
}

impl FetchError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            FetchError::RequestFailure(endpoint) => *endpoint,
            FetchError::InvalidPayload { endpoint, .. } => *endpoint,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[async_trait]
pub trait AggregateSource: Send + Sync {
    /// Trade KPIs, restricted to `year` when given.
    async fn fetch_overview(&self, year: Option<u32>) -> Result<Overview, FetchError>;

    async fn fetch_dependency(&self) -> Result<Vec<DependencyRow>, FetchError>;

    async fn health(&self) -> Result<HealthStatus, FetchError>;
}
