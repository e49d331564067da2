//! Core data types and abstractions

pub mod aggregate;
pub mod config;
pub mod format;
pub mod log;
pub mod model;
pub mod view;

// Re-export main types for cleaner imports
pub use aggregate::{AggregateSource, Endpoint, FetchError, HealthStatus};
pub use model::{CountryRank, DependencyRow, Overview};
pub use view::{DashboardView, DependencyOrder, KpiCard};
