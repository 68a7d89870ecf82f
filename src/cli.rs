use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cnc-quote", version, about = "CNC router / plasma machine quoting tool")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the predefined machine configurations (default)
    List,

    /// Quote a single machine configuration
    Quote {
        /// Configuration id, e.g. "2 x 4 ft"
        id: String,

        /// Include the default plasma unit
        #[arg(short, long)]
        plasma: bool,

        /// Include a named plasma unit from the configuration file
        #[arg(long)]
        plasma_unit: Option<String>,

        /// Customer name printed on the quote
        #[arg(long)]
        customer: Option<String>,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare every configuration side by side
    Compare {
        /// Include the plasma unit on every plasma-capable machine
        #[arg(short, long)]
        plasma: bool,

        /// Named plasma unit to use with --plasma
        #[arg(long, requires = "plasma")]
        plasma_unit: Option<String>,

        /// Sort rows by working area instead of catalog order
        #[arg(long)]
        sort_by_area: bool,

        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the frame cut list for a configuration
    Parts {
        /// Configuration id
        id: String,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to List if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_list() {
        let cli = Cli {
            config: PathBuf::from("config.toml"),
            command: None,
        };

        assert!(matches!(cli.get_command(), Commands::List));
    }

    #[test]
    fn test_cli_parsing_quote_with_plasma() {
        let args = vec!["cnc-quote", "quote", "2 x 4 ft", "--plasma", "--customer", "Acme"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Quote {
                id,
                plasma,
                customer,
                json,
                ..
            } => {
                assert_eq!(id, "2 x 4 ft");
                assert!(plasma);
                assert_eq!(customer.as_deref(), Some("Acme"));
                assert!(!json);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_compare() {
        let args = vec!["cnc-quote", "compare", "--sort-by-area", "-c", "shop.toml"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.config, PathBuf::from("shop.toml"));
        match cli.get_command() {
            Commands::Compare {
                plasma,
                sort_by_area,
                ..
            } => {
                assert!(!plasma);
                assert!(sort_by_area);
            }
            _ => panic!("Expected Compare command"),
        }
    }

    #[test]
    fn test_compare_plasma_unit_requires_plasma() {
        let args = vec!["cnc-quote", "compare", "--plasma-unit", "Cut 50"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_parsing_config_show() {
        let args = vec!["cnc-quote", "config", "show"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Config { action } => {
                assert!(matches!(action, ConfigCommands::Show));
            }
            _ => panic!("Expected Config command"),
        }
    }
}
