use super::ui;
use crate::core::AggregateSource;
use anyhow::{Result, bail};
use tracing::info;

/// Probes the reporting service and reports whether it is up.
pub async fn run(source: &dyn AggregateSource) -> Result<()> {
    let status = source.health().await?;
    info!(status = %status.status, "Health check response");

    if !status.is_ok() {
        bail!("Service reported status '{}'", status.status);
    }

    println!(
        "{} {}",
        ui::style_text("Servicio:", ui::StyleType::Label),
        ui::style_text(&status.status, ui::StyleType::PositiveValue)
    );
    Ok(())
}
