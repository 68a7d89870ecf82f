use anyhow::Result;
use cnc_quote::catalog::Catalog;
use cnc_quote::config::Config;
use cnc_quote::pricing::{ComparisonSummary, PlasmaComparison, QuoteCalculator, QuoteResult};
use cnc_quote::render;
use colored::Colorize;
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct ComparisonReport<'a> {
    quotes: &'a [QuoteResult],
    summary: Option<ComparisonSummary>,
}

/// Execute the compare command
pub fn execute(
    cfg: &Config,
    plasma: bool,
    plasma_unit: Option<String>,
    sort_by_area: bool,
    json: bool,
) -> Result<()> {
    let comparison = if plasma {
        PlasmaComparison::WhereSupported {
            plasma_unit: plasma_unit.clone(),
        }
    } else {
        PlasmaComparison::Excluded
    };
    info!(?comparison, "Comparing all configurations");

    let calculator = QuoteCalculator::new(cfg.pricing.clone());
    let mut quotes = calculator
        .compute_all_quotes(Catalog::standard(), &comparison)
        .map_err(|e| super::json_error(json, e))?;

    if sort_by_area {
        sort_quotes_by_area(&mut quotes);
    }

    let summary = ComparisonSummary::from_quotes(&quotes);

    if json {
        let report = ComparisonReport {
            quotes: &quotes,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Price Comparison - All Configurations".green().bold());
    println!(
        "Base profit = {}, profit per ft² = {}",
        render::format_money(calculator.rates().base_profit, &cfg.display.currency_symbol),
        render::format_money(calculator.rates().profit_rate, &cfg.display.currency_symbol)
    );
    if plasma {
        let unit = plasma_unit.as_deref().unwrap_or("default plasma unit");
        println!(
            "{} {} (plasma-capable machines only)",
            "Plasma included:".yellow(),
            unit
        );
    }

    println!("{}", render::comparison_table(&quotes, &cfg.display));

    if let Some(summary) = summary {
        println!("{}", render::summary_line(&summary, &cfg.display).bold());
    }

    Ok(())
}

/// Stable sort, so equal areas keep catalog order
fn sort_quotes_by_area(quotes: &mut [QuoteResult]) {
    quotes.sort_by(|a, b| a.area.total_cmp(&b.area));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_area_is_stable() {
        let quotes = QuoteCalculator::new(Default::default())
            .compute_all_quotes(Catalog::standard(), &PlasmaComparison::Excluded)
            .unwrap();
        let mut sorted = quotes.clone();
        sort_quotes_by_area(&mut sorted);

        assert!(sorted.windows(2).all(|w| w[0].area <= w[1].area));
        // "400 x 4 ft" (5.25 ft²) sorts after "2 x 2 ft" (4 ft²)
        let pos = |id: &str| sorted.iter().position(|q| q.config_id == id).unwrap();
        assert!(pos("2 x 2 ft") < pos("400 x 4 ft"));
    }
}
