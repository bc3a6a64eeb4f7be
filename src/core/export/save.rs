//! Saving normalized spreadsheet payloads to disk
//!
//! The only naming policy is the date-stamped file name
//! `employee_data_<ISO-date>.xlsx`; the date is the current UTC day.

use super::SpreadsheetFile;
use crate::domain::{Result, RosterError};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds the date-stamped export file name for the given date
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roster::core::export::export_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
/// assert_eq!(export_file_name(date), "employee_data_2026-08-07.xlsx");
/// ```
pub fn export_file_name(date: NaiveDate) -> String {
    format!("employee_data_{}.xlsx", date.format("%Y-%m-%d"))
}

/// Writes the spreadsheet into `output_dir` under today's date-stamped name
///
/// Creates the output directory if it does not exist. Returns the final path
/// written to.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written.
pub fn save_spreadsheet(output_dir: &Path, file: &SpreadsheetFile) -> Result<PathBuf> {
    if output_dir.exists() && !output_dir.is_dir() {
        return Err(RosterError::Io(format!(
            "Output path exists but is not a directory: {}",
            output_dir.display()
        )));
    }
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
    }

    let path = output_dir.join(export_file_name(chrono::Utc::now().date_naive()));
    fs::write(&path, &file.bytes)?;

    tracing::info!(
        path = %path.display(),
        bytes = file.bytes.len(),
        content_type = file.content_type,
        "Spreadsheet saved"
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::SPREADSHEET_CONTENT_TYPE;
    use tempfile::TempDir;

    fn sample_file() -> SpreadsheetFile {
        SpreadsheetFile {
            bytes: vec![0x50, 0x4b, 0x03, 0x04],
            content_type: SPREADSHEET_CONTENT_TYPE,
        }
    }

    #[test]
    fn test_export_file_name_is_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(export_file_name(date), "employee_data_2025-01-09.xlsx");
    }

    #[test]
    fn test_save_writes_payload_bytes() {
        let dir = TempDir::new().unwrap();
        let file = sample_file();

        let path = save_spreadsheet(dir.path(), &file).unwrap();
        assert_eq!(fs::read(&path).unwrap(), file.bytes);
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("employee_data_"));
        assert_eq!(path.extension().unwrap(), "xlsx");
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("exports").join("2026");

        let path = save_spreadsheet(&nested, &sample_file()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_rejects_file_as_output_dir() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let err = save_spreadsheet(&blocker, &sample_file()).unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }
}
