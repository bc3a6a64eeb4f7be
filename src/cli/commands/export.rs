//! Export command implementation
//!
//! This module implements the `export` command: request a spreadsheet export
//! of the employees matching the criteria, normalize the response shape, and
//! write the date-stamped file.

use crate::adapters::directory::DirectoryClient;
use crate::config::load_config;
use crate::core::export::{normalize_export_response, save_spreadsheet};
use crate::domain::{Result, RosterError, SearchCriteria};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Employee ID filter (empty = no filter)
    #[arg(long, default_value = "")]
    pub empid: String,

    /// Name filter (empty = no filter)
    #[arg(long, default_value = "")]
    pub name: String,

    /// Output directory (overrides export.output_dir from the config)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let criteria = SearchCriteria::new(&self.empid, &self.name);
        let output_dir = PathBuf::from(
            self.output
                .clone()
                .unwrap_or_else(|| config.export.output_dir.clone()),
        );
        let fallback_enabled = config.export.fallback_enabled;
        let client = DirectoryClient::new(config.directory);

        println!("📥 Preparing Excel download...");

        match run_export(&client, &criteria, fallback_enabled, &output_dir).await {
            Ok(path) => {
                println!();
                println!("✅ Excel file downloaded successfully!");
                println!("   Saved to: {}", path.display());
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                match e {
                    RosterError::Export(_) => {
                        eprintln!("❌ Error processing Excel file.");
                    }
                    _ => {
                        eprintln!("❌ Error downloading Excel file. Please try again.");
                    }
                }
                eprintln!("   Error: {e}");
                Ok(super::error_exit_code(&e))
            }
        }
    }
}

/// Fetch, normalize, and save; returns the written path
async fn run_export(
    client: &DirectoryClient,
    criteria: &SearchCriteria,
    fallback_enabled: bool,
    output_dir: &std::path::Path,
) -> Result<PathBuf> {
    let response = if fallback_enabled {
        client.export_with_fallback(criteria).await?
    } else {
        client.export(criteria).await?
    };

    let file = normalize_export_response(response)?;
    save_spreadsheet(output_dir, &file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_args_defaults() {
        let args = ExportArgs {
            empid: String::new(),
            name: String::new(),
            output: None,
        };

        assert!(args.empid.is_empty());
        assert!(args.name.is_empty());
        assert!(args.output.is_none());
    }

    #[test]
    fn test_export_args_with_overrides() {
        let args = ExportArgs {
            empid: "1042".to_string(),
            name: "Smith".to_string(),
            output: Some("exports".to_string()),
        };

        assert_eq!(args.empid, "1042");
        assert_eq!(args.name, "Smith");
        assert_eq!(args.output, Some("exports".to_string()));
    }
}
