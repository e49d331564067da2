//! Shapes fetched aggregates into what each widget consumes

use super::model::{CountryRank, DependencyRow, Overview};
use serde::Serialize;

/// Rows shown in the dependency table.
pub const TOP_DEPENDENCIES: usize = 10;

pub const EXPORTS_LABEL: &str = "Exportaciones FOB";
pub const IMPORTS_LABEL: &str = "Importaciones FOB";
pub const BALANCE_LABEL: &str = "Balanza Comercial";
pub const LOGISTICS_LABEL: &str = "Costo Logístico";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: f64,
}

/// How dependency rows are ordered before truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DependencyOrder {
    /// Descending by `share_china`.
    #[default]
    ByShare,
    /// Upstream order, untouched.
    AsReceived,
}

/// Exports, imports, balance, logistics cost. Always four, always this order.
pub fn kpi_cards(overview: &Overview) -> [KpiCard; 4] {
    [
        KpiCard {
            label: EXPORTS_LABEL,
            value: overview.total_exports_fob,
        },
        KpiCard {
            label: IMPORTS_LABEL,
            value: overview.total_imports_fob,
        },
        KpiCard {
            label: BALANCE_LABEL,
            value: overview.trade_balance,
        },
        KpiCard {
            label: LOGISTICS_LABEL,
            value: overview.logistics_cost,
        },
    ]
}

pub fn ranking_series(overview: &Overview) -> &[CountryRank] {
    &overview.country_ranking
}

/// Stable sort, highest share first.
pub fn sort_by_share_desc(rows: &mut [DependencyRow]) {
    rows.sort_by(|a, b| b.share_china.total_cmp(&a.share_china));
}

pub fn top_dependencies(mut rows: Vec<DependencyRow>, order: DependencyOrder) -> Vec<DependencyRow> {
    if order == DependencyOrder::ByShare {
        sort_by_share_desc(&mut rows);
    }
    rows.truncate(TOP_DEPENDENCIES);
    rows
}

/// Everything one dashboard render needs.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub kpis: [KpiCard; 4],
    pub ranking: Vec<CountryRank>,
    pub dependency: Vec<DependencyRow>,
}

impl DashboardView {
    pub fn assemble(
        overview: Overview,
        dependency: Vec<DependencyRow>,
        order: DependencyOrder,
    ) -> Self {
        Self {
            kpis: kpi_cards(&overview),
            ranking: overview.country_ranking,
            dependency: top_dependencies(dependency, order),
        }
    }
}
