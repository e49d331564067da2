use super::{dependency, kpis, ranking, ui};
use crate::core::{
    AggregateSource, DashboardView, DependencyOrder, DependencyRow, FetchError, Overview,
};
use anyhow::{Context, Result, anyhow};
use futures::future::join;
use tracing::debug;

pub const PAGE_TITLE: &str = "Observatorio Ecuador–China";

/// Result of fetching both datasets, tagged by which request failed.
#[derive(Debug)]
pub enum JoinOutcome {
    Ready {
        overview: Overview,
        dependency: Vec<DependencyRow>,
    },
    OverviewFailed(FetchError),
    DependencyFailed(FetchError),
    BothFailed {
        overview: FetchError,
        dependency: FetchError,
    },
}

impl JoinOutcome {
    pub fn from_results(
        overview: Result<Overview, FetchError>,
        dependency: Result<Vec<DependencyRow>, FetchError>,
    ) -> Self {
        match (overview, dependency) {
            (Ok(overview), Ok(dependency)) => JoinOutcome::Ready {
                overview,
                dependency,
            },
            (Err(e), Ok(_)) => JoinOutcome::OverviewFailed(e),
            (Ok(_), Err(e)) => JoinOutcome::DependencyFailed(e),
            (Err(overview), Err(dependency)) => JoinOutcome::BothFailed {
                overview,
                dependency,
            },
        }
    }

    /// Both datasets, or an error if either request failed.
    pub fn into_result(self) -> Result<(Overview, Vec<DependencyRow>)> {
        let err = match self {
            JoinOutcome::Ready {
                overview,
                dependency,
            } => return Ok((overview, dependency)),
            JoinOutcome::OverviewFailed(e) | JoinOutcome::DependencyFailed(e) => anyhow!(e),
            JoinOutcome::BothFailed {
                overview,
                dependency,
            } => anyhow!("{overview}; {dependency}"),
        };
        Err(err).context("Could not load the dashboard")
    }
}

/// Issues both requests concurrently and waits for both to finish.
pub async fn fetch_both(source: &dyn AggregateSource, year: Option<u32>) -> JoinOutcome {
    let (overview, dependency) =
        join(source.fetch_overview(year), source.fetch_dependency()).await;
    let outcome = JoinOutcome::from_results(overview, dependency);
    match &outcome {
        JoinOutcome::Ready { .. } => debug!("Both datasets fetched"),
        JoinOutcome::OverviewFailed(e) | JoinOutcome::DependencyFailed(e) => {
            debug!(endpoint = %e.endpoint(), error = %e, "Dashboard fetch failed")
        }
        JoinOutcome::BothFailed {
            overview,
            dependency,
        } => debug!(
            overview = %overview,
            dependency = %dependency,
            "Both dashboard fetches failed"
        ),
    }
    outcome
}

pub async fn load(
    source: &dyn AggregateSource,
    year: Option<u32>,
    order: DependencyOrder,
) -> Result<DashboardView> {
    let (overview, dependency) = fetch_both(source, year).await.into_result()?;
    Ok(DashboardView::assemble(overview, dependency, order))
}

/// Whole page as text; separators are `line_width` wide.
pub fn render_page(view: &DashboardView, bar_width: usize, line_width: usize) -> String {
    [
        ui::style_text(PAGE_TITLE, ui::StyleType::Title),
        kpis::render_kpi_cards(&view.kpis),
        ui::separator(line_width),
        ranking::render_ranking_chart(&view.ranking, bar_width),
        ui::separator(line_width),
        dependency::render_dependency_table(&view.dependency),
    ]
    .join("\n\n")
}

pub async fn run(
    source: &dyn AggregateSource,
    year: Option<u32>,
    order: DependencyOrder,
    bar_width: usize,
    as_json: bool,
) -> Result<()> {
    let pb = ui::new_spinner("Cargando tablero...");
    let view = load(source, year, order).await;
    pb.finish_and_clear();

    let view = view?;
    if as_json {
        let json = serde_json::to_string_pretty(&view).context("Failed to serialize dashboard")?;
        println!("{json}");
    } else {
        println!("{}", render_page(&view, bar_width, ui::terminal_width()));
    }
    Ok(())
}
