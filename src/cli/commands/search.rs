//! Search command implementation
//!
//! This module implements the `search` command: query the directory with the
//! given criteria and render the matching employees as a console table.

use crate::adapters::directory::DirectoryClient;
use crate::config::load_config;
use crate::core::table::render_table;
use crate::domain::SearchCriteria;
use clap::Args;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Employee ID filter (empty = no filter)
    #[arg(long, default_value = "")]
    pub empid: String,

    /// Name filter (empty = no filter)
    #[arg(long, default_value = "")]
    pub name: String,
}

impl SearchArgs {
    /// Execute the search command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting search command");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let criteria = SearchCriteria::new(&self.empid, &self.name);
        if criteria.is_empty() {
            tracing::debug!("No criteria given, searching all employees");
        }

        let client = DirectoryClient::new(config.directory);

        println!("🔍 Searching employees...");

        match client.search(&criteria).await {
            Ok(employees) if employees.is_empty() => {
                println!();
                println!("ℹ️  No employees found matching your search criteria.");
                Ok(0)
            }
            Ok(employees) => {
                println!();
                print!("{}", render_table(&employees));
                println!();
                println!("✅ Found {} employee(s).", employees.len());
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Search failed");
                eprintln!("❌ Error searching for employees. Please try again.");
                eprintln!("   Error: {e}");
                Ok(super::error_exit_code(&e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_args_defaults() {
        let args = SearchArgs {
            empid: String::new(),
            name: String::new(),
        };

        assert!(args.empid.is_empty());
        assert!(args.name.is_empty());
    }

    #[test]
    fn test_criteria_built_from_args_is_trimmed() {
        let args = SearchArgs {
            empid: " 1042 ".to_string(),
            name: " Smith ".to_string(),
        };

        let criteria = SearchCriteria::new(&args.empid, &args.name);
        assert_eq!(criteria.empid(), "1042");
        assert_eq!(criteria.name(), "Smith");
    }
}
