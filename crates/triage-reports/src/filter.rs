//! Report list filtering

use serde::{Deserialize, Serialize};
use triage_core::{Department, Report};

/// Department and free-text filter over the report list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    /// Keep only reports assigned to this department
    #[serde(default)]
    pub department: Option<Department>,

    /// Case-insensitive substring over name, email, phone, and description
    #[serde(default)]
    pub search: Option<String>,
}

impl ReportFilter {
    /// Filter by department
    pub fn department(department: Department) -> Self {
        Self {
            department: Some(department),
            search: None,
        }
    }

    /// Add a search term; blank terms are ignored
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() { None } else { Some(term) };
        self
    }

    /// Whether no criteria are set
    pub fn is_empty(&self) -> bool {
        self.department.is_none() && self.search.is_none()
    }

    /// Keep the matching reports, preserving order
    pub fn apply(&self, reports: Vec<Report>) -> Vec<Report> {
        let needle = self.search.as_ref().map(|s| s.to_lowercase());

        reports
            .into_iter()
            .filter(|r| self.department.map_or(true, |d| r.assigned_department == Some(d)))
            .filter(|r| needle.as_deref().map_or(true, |n| r.matches_search(n)))
            .collect()
    }
}
