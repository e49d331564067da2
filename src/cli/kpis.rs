use super::ui;
use crate::core::format::format_number;
use crate::core::{AggregateSource, KpiCard, view};
use anyhow::Result;

/// Plain `label: value` text for one card.
pub fn format_kpi_card(card: &KpiCard) -> String {
    format!("{}: {}", card.label, format_number(card.value))
}

/// One line per card, in the order given.
pub fn render_kpi_cards(cards: &[KpiCard]) -> String {
    cards
        .iter()
        .map(|card| {
            let value_style = if card.value < 0.0 {
                ui::StyleType::NegativeValue
            } else {
                ui::StyleType::PositiveValue
            };
            ui::style_text(&format_kpi_card(card), value_style)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn run(source: &dyn AggregateSource, year: Option<u32>) -> Result<()> {
    let pb = ui::new_spinner("Consultando indicadores...");
    let overview = source.fetch_overview(year).await;
    pb.finish_and_clear();

    let overview = overview?;
    println!("{}", render_kpi_cards(&view::kpi_cards(&overview)));
    Ok(())
}
