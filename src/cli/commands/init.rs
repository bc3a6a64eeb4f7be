//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "roster.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Roster configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Generate configuration content
        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        // Write to file
        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} and set your directory endpoint", self.output);
                println!("  2. Validate configuration: roster validate-config");
                println!("  3. Search the directory: roster search --name Smith");
                println!("  4. Export to Excel: roster export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Roster Configuration File
# Employee Directory Search & Export

[application]
log_level = "info"

[directory]
endpoint = "https://directory.example.com/employees"
timeout_seconds = 30
tls_verify = true

[export]
output_dir = "."
fallback_enabled = true

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Roster Configuration File
# Employee Directory Search & Export
#
# This file contains all configuration options with examples and explanations.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Application name (used in logging)
name = "roster"

# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Directory Endpoint Configuration
# ============================================================================
[directory]
# URL of the employee-directory endpoint. Search and export both POST to
# this URL; the export fallback issues a GET against it.
endpoint = "https://directory.example.com/employees"

# Request timeout in seconds
timeout_seconds = 30

# TLS certificate verification. Disable only against development endpoints
# with self-signed certificates.
tls_verify = true

# The endpoint can also come from the environment:
# endpoint = "${ROSTER_ENDPOINT}"

# ============================================================================
# Export Configuration
# ============================================================================
[export]
# Directory the date-stamped spreadsheet (employee_data_<date>.xlsx) is
# written into. Created if missing.
output_dir = "exports"

# Retry a failed export POST as a plain GET with the criteria in the query
# string. Only connectivity failures and 404s trigger the fallback.
fallback_enabled = true

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable JSON file logging in addition to console output
local_enabled = false

# Log file directory
local_path = "logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}
