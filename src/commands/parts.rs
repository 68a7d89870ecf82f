use anyhow::{Context, Result};
use cnc_quote::catalog::Catalog;
use cnc_quote::render;
use colored::Colorize;

/// Execute the parts command
///
/// Prints the extrusion and steel stock needed to build the frame
pub fn execute(id: &str) -> Result<()> {
    let machine = Catalog::standard()
        .get_configuration(id)
        .context("Run `cnc-quote list` to see the available configurations")?;
    let cut_list = machine.cut_list();
    let (extrusions, steel) = render::cut_list_tables(&cut_list);

    println!("{} {}", "Frame cut list:".green().bold(), machine.id);
    println!();

    println!("{}", "Extrusions:".bold());
    println!("{}", extrusions);
    println!("  Total extrusion stock: {:.2} ft", cut_list.extrusion_length_ft());
    println!();

    println!("{}", "Steel frame:".bold());
    println!("{}", steel);
    println!("  Total steel tube: {:.3} ft", cut_list.steel_length_ft());
    println!();

    println!(
        "{}",
        "Stock lengths are bought new; reusing donor kit extrusions lowers the real cost.".dimmed()
    );

    Ok(())
}
