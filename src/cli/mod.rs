//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Roster using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Roster - Employee Directory Search & Export
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
#[command(author = "Roster Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "roster.toml", env = "ROSTER_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ROSTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the directory and render matching employees as a table
    Search(commands::search::SearchArgs),

    /// Export matching employees as an Excel spreadsheet
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_search() {
        let cli = Cli::parse_from(["roster", "search"]);
        assert_eq!(cli.config, "roster.toml");
        assert!(matches!(cli.command, Commands::Search(_)));
    }

    #[test]
    fn test_cli_parse_search_with_criteria() {
        let cli = Cli::parse_from(["roster", "search", "--empid", "1042", "--name", "Smith"]);
        if let Commands::Search(args) = cli.command {
            assert_eq!(args.empid, "1042");
            assert_eq!(args.name, "Smith");
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["roster", "export", "--name", "Smith"]);
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["roster", "--config", "custom.toml", "search"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["roster", "--log-level", "debug", "search"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["roster", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["roster", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
