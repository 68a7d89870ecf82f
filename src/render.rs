//! Terminal rendering of catalog entries, quotes and comparisons.
//!
//! Rounding happens only here; the engine always works on unrounded values.

use crate::catalog::Catalog;
use crate::config::DisplayConfig;
use crate::frame::FrameCutList;
use crate::pricing::{ComparisonSummary, QuoteResult};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Round `value` up to the next multiple of `increment`.
///
/// A non-positive increment leaves the value untouched.
pub fn round_up_to(value: f64, increment: f64) -> f64 {
    if !increment.is_finite() || increment <= 0.0 {
        return value;
    }
    (value / increment).ceil() * increment
}

/// Two-decimal currency with thousands separators, e.g. `$1,234.50`
pub fn format_money(value: f64, symbol: &str) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}{}.{:02}", sign, symbol, grouped, fraction)
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    table
}

pub fn catalog_table(catalog: &Catalog) -> Table {
    let mut table = new_table(&[
        "CONFIGURATION",
        "WORK AREA (FT)",
        "AREA (FT²)",
        "EXTRUSION (FT)",
        "STEEL (FT)",
        "PLASMA",
    ]);

    for config in catalog.list_configurations() {
        let plasma = if config.plasma_capable {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(&config.id),
            Cell::new(format!("{:.2} x {:.2}", config.width, config.length)),
            Cell::new(format!("{:.2}", config.area())),
            Cell::new(format!("{:.2}", config.extrusion_length)),
            Cell::new(format!("{:.3}", config.steel_quantity)),
            plasma,
        ]);
    }

    table
}

/// Cost breakdown for a single quote
pub fn quote_table(quote: &QuoteResult, display: &DisplayConfig) -> Table {
    let money = |v: f64| format_money(v, &display.currency_symbol);
    let mut table = new_table(&["ITEM", "AMOUNT"]);

    table.add_row(vec![
        Cell::new("Nominal area"),
        Cell::new(format!("{:.2} ft²", quote.area)),
    ]);
    table.add_row(vec![Cell::new("Extrusion cost"), Cell::new(money(quote.extrusion_cost))]);
    table.add_row(vec![Cell::new("Steel cost"), Cell::new(money(quote.steel_cost))]);
    if let Some(plasma_cost) = quote.plasma_cost {
        table.add_row(vec![Cell::new("Plasma unit"), Cell::new(money(plasma_cost))]);
    }
    table.add_row(vec![
        Cell::new("Material subtotal"),
        Cell::new(money(quote.material_subtotal)),
    ]);
    table.add_row(vec![Cell::new("Profit"), Cell::new(money(quote.profit))]);
    table.add_row(vec![
        Cell::new("Margin"),
        Cell::new(format!("{:.1}%", quote.margin_percent())),
    ]);
    table.add_row(vec![
        Cell::new("Total").fg(Color::Green),
        Cell::new(money(quote.total)).fg(Color::Green),
    ]);
    if display.round_to > 0.0 {
        table.add_row(vec![
            Cell::new(format!("Quoted price (rounded up to {})", money(display.round_to))),
            Cell::new(money(round_up_to(quote.total, display.round_to))),
        ]);
    }

    table
}

pub fn parts_table(quote: &QuoteResult, display: &DisplayConfig) -> Table {
    let mut table = new_table(&["PART", "QUANTITY", "UNIT COST", "LINE COST"]);

    for part in &quote.parts {
        table.add_row(vec![
            Cell::new(&part.name),
            Cell::new(format!("{:.2} {}", part.quantity, part.unit)),
            Cell::new(format_money(part.unit_cost, &display.currency_symbol)),
            Cell::new(format_money(part.line_cost, &display.currency_symbol)),
        ]);
    }

    table
}

/// Extrusion and steel tables for a frame cut list
pub fn cut_list_tables(cut_list: &FrameCutList) -> (Table, Table) {
    let mut extrusions = new_table(&["DESCRIPTION", "PROFILE", "LENGTH (MM)", "LENGTH (IN)", "QTY"]);
    for piece in &cut_list.extrusions {
        extrusions.add_row(vec![
            Cell::new(piece.description),
            Cell::new(piece.profile),
            Cell::new(piece.length_mm),
            Cell::new(format!("{:.2}", piece.length_in())),
            Cell::new(piece.quantity),
        ]);
    }

    let mut steel = new_table(&["DESCRIPTION", "SIZE", "LENGTH (IN)", "LENGTH (FT)", "QTY"]);
    for piece in &cut_list.steel {
        steel.add_row(vec![
            Cell::new(piece.description),
            Cell::new(piece.size),
            Cell::new(format!("{:.2}", piece.length_in)),
            Cell::new(format!("{:.3}", piece.length_ft())),
            Cell::new(piece.quantity),
        ]);
    }

    (extrusions, steel)
}

pub fn comparison_table(quotes: &[QuoteResult], display: &DisplayConfig) -> Table {
    let money = |v: f64| format_money(v, &display.currency_symbol);
    let mut table = new_table(&[
        "CONFIGURATION",
        "AREA (FT²)",
        "PLASMA",
        "MATERIALS",
        "PROFIT",
        "TOTAL",
        "QUOTED",
    ]);

    for quote in quotes {
        table.add_row(vec![
            Cell::new(&quote.config_id),
            Cell::new(format!("{:.2}", quote.area)),
            Cell::new(if quote.includes_plasma() { "yes" } else { "-" }),
            Cell::new(money(quote.material_subtotal)),
            Cell::new(money(quote.profit)),
            Cell::new(money(quote.total)),
            Cell::new(money(round_up_to(quote.total, display.round_to))),
        ]);
    }

    table
}

/// One-line lowest / highest / average summary
pub fn summary_line(summary: &ComparisonSummary, display: &DisplayConfig) -> String {
    let money = |v: f64| format_money(v, &display.currency_symbol);
    format!(
        "Lowest: {}  Highest: {}  Average: {}",
        money(summary.lowest),
        money(summary.highest),
        money(summary.average)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{PartKind, PartLine};

    fn sample_quote() -> QuoteResult {
        QuoteResult {
            config_id: "4 x 8 test".to_string(),
            area: 32.0,
            extrusion_cost: 40.0,
            steel_cost: 75.0,
            plasma_cost: None,
            material_subtotal: 115.0,
            profit: 320.0,
            total: 435.0,
            parts: vec![
                PartLine {
                    kind: PartKind::Extrusion,
                    name: "Extrusion".to_string(),
                    quantity: 20.0,
                    unit: "ft",
                    unit_cost: 2.0,
                    line_cost: 40.0,
                },
                PartLine {
                    kind: PartKind::Steel,
                    name: "Steel frame".to_string(),
                    quantity: 50.0,
                    unit: "ft",
                    unit_cost: 1.5,
                    line_cost: 75.0,
                },
            ],
        }
    }

    #[test]
    fn test_round_up_to() {
        assert_eq!(round_up_to(435.0, 10.0), 440.0);
        assert_eq!(round_up_to(440.0, 10.0), 440.0);
        assert_eq!(round_up_to(1201.5, 100.0), 1300.0);
        assert_eq!(round_up_to(435.25, 0.0), 435.25);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(435.0, "$"), "$435.00");
        assert_eq!(format_money(1234.5, "$"), "$1,234.50");
        assert_eq!(format_money(1_234_567.891, "$"), "$1,234,567.89");
        assert_eq!(format_money(-12.5, "€"), "-€12.50");
        assert_eq!(format_money(0.0, "$"), "$0.00");
    }

    #[test]
    fn test_quote_table_shows_rounded_price() {
        let rendered = quote_table(&sample_quote(), &DisplayConfig::default()).to_string();
        assert!(rendered.contains("$435.00"));
        assert!(rendered.contains("$440.00"));
        assert!(!rendered.contains("Plasma unit"));
    }

    #[test]
    fn test_parts_table_keeps_order() {
        let rendered = parts_table(&sample_quote(), &DisplayConfig::default()).to_string();
        let extrusion = rendered.find("Extrusion").unwrap();
        let steel = rendered.find("Steel frame").unwrap();
        assert!(extrusion < steel);
    }

    #[test]
    fn test_summary_line() {
        let summary = ComparisonSummary {
            lowest: 100.0,
            highest: 2500.0,
            average: 1300.0,
        };
        assert_eq!(
            summary_line(&summary, &DisplayConfig::default()),
            "Lowest: $100.00  Highest: $2,500.00  Average: $1,300.00"
        );
    }
}
