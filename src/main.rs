use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cnc_quote::{config, init_tracing};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Configuration is needed before tracing so the log level can come from it
    let cfg = config::load_config(&args.config)?;
    init_tracing(&cfg.logging.level);

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::List => commands::list::execute()?,
        cli::Commands::Quote {
            id,
            plasma,
            plasma_unit,
            customer,
            json,
        } => {
            commands::quote::execute(&cfg, &id, plasma, plasma_unit, customer.as_deref(), json)?;
        }
        cli::Commands::Compare {
            plasma,
            plasma_unit,
            sort_by_area,
            json,
        } => {
            commands::compare::execute(&cfg, plasma, plasma_unit, sort_by_area, json)?;
        }
        cli::Commands::Parts { id } => commands::parts::execute(&id)?,
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config, &cfg)?,
        },
        cli::Commands::Version => {
            println!("CNC Quote v{}", env!("CARGO_PKG_VERSION"));
            println!("Rust {}", env!("CARGO_PKG_RUST_VERSION"));
        }
    }

    Ok(())
}
