//! Employee domain model
//!
//! This module defines the employee record as returned by the directory
//! endpoint. Every field is optional; absent fields render as `N/A`.

use serde::{Deserialize, Serialize};

/// Placeholder rendered for absent fields
pub const NOT_AVAILABLE: &str = "N/A";

/// An employee record from the directory
///
/// The endpoint makes no guarantees about which fields are present, so every
/// field is optional. Use the `*_display` accessors for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee ID
    #[serde(default)]
    pub empid: Option<String>,

    /// Full name
    #[serde(default)]
    pub name: Option<String>,

    /// Department
    #[serde(default)]
    pub department: Option<String>,

    /// Position / job title
    #[serde(default)]
    pub position: Option<String>,

    /// Email address
    #[serde(default)]
    pub email: Option<String>,

    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,

    /// Hire date (opaque string, endpoint-defined format)
    #[serde(default)]
    pub hire_date: Option<String>,
}

impl Employee {
    /// Employee ID, or `N/A` when absent
    pub fn empid_display(&self) -> &str {
        self.empid.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Name, or `N/A` when absent
    pub fn name_display(&self) -> &str {
        self.name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Department, or `N/A` when absent
    pub fn department_display(&self) -> &str {
        self.department.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Position, or `N/A` when absent
    pub fn position_display(&self) -> &str {
        self.position.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Email, or `N/A` when absent
    pub fn email_display(&self) -> &str {
        self.email.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Phone, or `N/A` when absent
    pub fn phone_display(&self) -> &str {
        self.phone.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Hire date, or `N/A` when absent
    pub fn hire_date_display(&self) -> &str {
        self.hire_date.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = serde_json::json!({
            "empid": "1042",
            "name": "Jane Smith",
            "department": "Engineering",
            "position": "Engineer",
            "email": "jane@example.com",
            "phone": "555-0142",
            "hire_date": "2021-03-15"
        });

        let employee: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(employee.empid_display(), "1042");
        assert_eq!(employee.hire_date_display(), "2021-03-15");
    }

    #[test]
    fn test_deserialize_partial_record() {
        let json = serde_json::json!({"name": "Jane Smith"});

        let employee: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(employee.name_display(), "Jane Smith");
        assert_eq!(employee.empid_display(), NOT_AVAILABLE);
        assert_eq!(employee.department_display(), NOT_AVAILABLE);
        assert_eq!(employee.position_display(), NOT_AVAILABLE);
        assert_eq!(employee.email_display(), NOT_AVAILABLE);
        assert_eq!(employee.phone_display(), NOT_AVAILABLE);
        assert_eq!(employee.hire_date_display(), NOT_AVAILABLE);
    }

    #[test]
    fn test_deserialize_empty_record() {
        let employee: Employee = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(employee, Employee::default());
    }
}
