use anyhow::Result;
use cnc_quote::catalog::Catalog;
use cnc_quote::render;
use colored::Colorize;

/// Execute the list command
pub fn execute() -> Result<()> {
    let catalog = Catalog::standard();

    println!("{}", "Machine Configurations:".green().bold());
    println!("{}", render::catalog_table(catalog));
    println!(
        "{}",
        format!("{} configurations. Dimensions are nominal working area.", catalog.len()).dimmed()
    );

    Ok(())
}
