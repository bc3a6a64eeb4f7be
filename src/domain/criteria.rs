//! Search criteria domain model
//!
//! Free-text filter terms for directory queries. Both fields are optional in
//! the sense that an empty string means "no filter"; the wire format always
//! carries both keys so the endpoint sees a stable request shape.

use serde::Serialize;

/// Search criteria for directory queries
///
/// Construction trims surrounding whitespace from both terms, matching what
/// the directory endpoint expects.
///
/// # Examples
///
/// ```
/// use roster::domain::SearchCriteria;
///
/// let criteria = SearchCriteria::new("  1042 ", "Smith");
/// assert_eq!(criteria.empid(), "1042");
/// assert_eq!(criteria.name(), "Smith");
/// assert!(!criteria.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchCriteria {
    empid: String,
    name: String,
}

impl SearchCriteria {
    /// Creates criteria from raw terms, trimming surrounding whitespace
    pub fn new(empid: impl AsRef<str>, name: impl AsRef<str>) -> Self {
        Self {
            empid: empid.as_ref().trim().to_string(),
            name: name.as_ref().trim().to_string(),
        }
    }

    /// Employee ID filter term (empty = no filter)
    pub fn empid(&self) -> &str {
        &self.empid
    }

    /// Name filter term (empty = no filter)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when neither term is set
    pub fn is_empty(&self) -> bool {
        self.empid.is_empty() && self.name.is_empty()
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self::new("", "")
    }
}
