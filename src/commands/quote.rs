use anyhow::{Context, Result};
use chrono::Local;
use cnc_quote::catalog::Catalog;
use cnc_quote::config::Config;
use cnc_quote::frame::INCHES_PER_FOOT;
use cnc_quote::pricing::{PricingOptions, QuoteCalculator, QuoteResult};
use cnc_quote::render;
use colored::Colorize;
use serde::Serialize;
use tracing::info;

/// `quote --json` output: the quote plus its header fields
#[derive(Serialize)]
struct QuoteReport<'a> {
    customer: Option<&'a str>,
    date: String,
    #[serde(flatten)]
    quote: &'a QuoteResult,
}

/// Execute the quote command
///
/// A named plasma unit implies the plasma option.
pub fn execute(
    cfg: &Config,
    id: &str,
    plasma: bool,
    plasma_unit: Option<String>,
    customer: Option<&str>,
    json: bool,
) -> Result<()> {
    info!(config = id, plasma, "Computing quote");

    let machine = Catalog::standard()
        .get_configuration(id)
        .map_err(|e| super::json_error(json, e))
        .context("Run `cnc-quote list` to see the available configurations")?;

    let options = PricingOptions {
        include_plasma: plasma || plasma_unit.is_some(),
        plasma_unit,
    };

    let calculator = QuoteCalculator::new(cfg.pricing.clone());
    let quote = calculator
        .compute_quote(machine, &options)
        .map_err(|e| super::json_error(json, e))?;
    let today = Local::now();

    if json {
        let report = QuoteReport {
            customer,
            date: today.format("%Y-%m-%d").to_string(),
            quote: &quote,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let cut_list = machine.cut_list();

    println!("{}", "QUOTE".green().bold());
    println!();
    if let Some(customer) = customer {
        println!("  {}: {}", "Customer".cyan(), customer);
    }
    println!("  {}: {}", "Date".cyan(), today.format("%B %d, %Y"));
    println!("  {}: {}", "Configuration".cyan(), machine.id);
    println!(
        "  {}: {:.2} ft x {:.2} ft",
        "Actual working area".cyan(),
        cut_list.actual_width_in / INCHES_PER_FOOT,
        cut_list.actual_length_in / INCHES_PER_FOOT
    );
    println!();

    println!("{}", "Summary:".bold());
    println!("{}", render::quote_table(&quote, &cfg.display));
    println!();

    println!("{}", "Parts List:".bold());
    println!("{}", render::parts_table(&quote, &cfg.display));

    info!(config = id, total = quote.total, "Quote completed");
    Ok(())
}
