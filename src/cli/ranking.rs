use super::ui;
use crate::core::format::format_number;
use crate::core::{AggregateSource, CountryRank, view};
use anyhow::Result;
use comfy_table::{Cell, Color};

pub const CHART_TITLE: &str = "Ranking de países";
const BAR_GLYPH: &str = "█";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub length: usize,
    /// Value shown next to the bar.
    pub value: String,
}

/// One bar per country, input order, scaled against the largest magnitude.
pub fn chart_bars(series: &[CountryRank], width: usize) -> Vec<ChartBar> {
    let max = series
        .iter()
        .map(|c| c.fob.abs())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    series
        .iter()
        .map(|country| {
            let magnitude = country.fob.abs();
            let length = if max > 0.0 && magnitude.is_finite() && magnitude > 0.0 {
                ((magnitude / max) * width as f64).round().max(1.0).min(width as f64) as usize
            } else {
                0
            };
            ChartBar {
                label: country.country_name.clone(),
                length,
                value: format_number(country.fob),
            }
        })
        .collect()
}

pub fn render_ranking_chart(series: &[CountryRank], width: usize) -> String {
    let mut output = format!("{}\n", ui::style_text(CHART_TITLE, ui::StyleType::Title));

    if series.is_empty() {
        output.push_str(&ui::style_text("Sin datos", ui::StyleType::Subtle));
        return output;
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("País"),
        ui::header_cell("FOB"),
        ui::header_cell(""),
    ]);

    for (bar, country) in chart_bars(series, width).into_iter().zip(series) {
        let color = if country.fob < 0.0 {
            Color::Red
        } else {
            Color::Blue
        };
        table.add_row(vec![
            Cell::new(bar.label),
            ui::number_cell(bar.value),
            Cell::new(BAR_GLYPH.repeat(bar.length)).fg(color),
        ]);
    }

    output.push_str(&table.to_string());
    output
}

pub async fn run(source: &dyn AggregateSource, year: Option<u32>, width: usize) -> Result<()> {
    let pb = ui::new_spinner("Consultando ranking...");
    let overview = source.fetch_overview(year).await;
    pb.finish_and_clear();

    let overview = overview?;
    println!(
        "{}",
        render_ranking_chart(view::ranking_series(&overview), width)
    );
    Ok(())
}
