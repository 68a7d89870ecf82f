use anyhow::Result;
use cnc_quote::config::Config;
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration after file and environment layering
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying effective configuration");

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
///
/// Loading already validated the configuration; this reports what was loaded
pub fn validate(path: &Path, cfg: &Config) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Source".cyan(), describe_source(path));
    println!("  {}: {}/ft", "Extrusion Rate".cyan(), cfg.pricing.extrusion_rate);
    println!("  {}: {}/ft", "Steel Rate".cyan(), cfg.pricing.steel_rate);
    println!("  {}: {}/ft²", "Profit Rate".cyan(), cfg.pricing.profit_rate);
    println!("  {}: {}", "Base Profit".cyan(), cfg.pricing.base_profit);
    println!("  {}: {}", "Plasma Unit Cost".cyan(), cfg.pricing.plasma_unit_cost);
    println!("  {}: {}", "Named Plasma Units".cyan(), cfg.pricing.plasma_units.len());
    for unit in &cfg.pricing.plasma_units {
        println!("    {} → {}", unit.name, unit.cost);
    }

    info!("Configuration validation successful");
    Ok(())
}

fn describe_source(path: &Path) -> String {
    if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_missing_source() {
        let described = describe_source(Path::new("definitely-missing-cnc-quote.toml"));
        assert!(described.ends_with("(not found, using defaults)"));
    }
}
