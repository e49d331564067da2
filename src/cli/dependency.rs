use super::ui;
use crate::core::format::format_share;
use crate::core::view::{self, TOP_DEPENDENCIES};
use crate::core::{AggregateSource, DependencyOrder, DependencyRow};
use anyhow::Result;
use comfy_table::Cell;

pub const TABLE_TITLE: &str = "Dependencia China >50%";

/// `(hs10, share)` text for at most the first ten rows.
pub fn table_rows(rows: &[DependencyRow]) -> Vec<(String, String)> {
    rows.iter()
        .take(TOP_DEPENDENCIES)
        .map(|row| (row.hs10.clone(), format_share(row.share_china)))
        .collect()
}

pub fn render_dependency_table(rows: &[DependencyRow]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("HS10"), ui::header_cell("Share China")]);

    for (row, (code, share)) in rows.iter().zip(table_rows(rows)) {
        table.add_row(vec![Cell::new(code), ui::share_cell(row.share_china, share)]);
    }

    format!(
        "{}\n{}",
        ui::style_text(TABLE_TITLE, ui::StyleType::Title),
        table
    )
}

pub async fn run(source: &dyn AggregateSource, order: DependencyOrder) -> Result<()> {
    let pb = ui::new_spinner("Consultando dependencia...");
    let rows = source.fetch_dependency().await;
    pb.finish_and_clear();

    let rows = view::top_dependencies(rows?, order);
    println!("{}", render_dependency_table(&rows));
    Ok(())
}
