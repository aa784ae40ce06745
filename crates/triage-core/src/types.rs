//! Report records as stored by the reporting backend

use crate::department::Department;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Workflow state of a report.
///
/// Rows from the backend may carry `null` or labels other than `"Assigned"`
/// (`"New"`, `""`); all of those read as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ReportStatus {
    /// Not yet routed to a department
    #[default]
    Pending,
    /// Routed to a department, automatically or by staff
    Assigned,
}

/// A citizen-submitted issue report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Backend row identifier
    pub id: i64,

    /// Reporter name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Reporter email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Reporter phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Free-text issue description (nullable column)
    #[serde(default)]
    pub description: Option<String>,

    /// Department the report is routed to; `null` and `""` mean unassigned
    #[serde(default, deserialize_with = "blank_as_unassigned")]
    pub assigned_department: Option<Department>,

    /// Workflow state
    #[serde(default)]
    pub status: ReportStatus,

    /// Submission time
    pub created_at: DateTime<Utc>,

    /// Whether staff have opened the report
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_read: bool,
}

impl<'de> Deserialize<'de> for ReportStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(match label.as_deref().map(str::trim) {
            Some(label) if label.eq_ignore_ascii_case("assigned") => ReportStatus::Assigned,
            _ => ReportStatus::Pending,
        })
    }
}

fn blank_as_unassigned<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Department>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(name) if !name.trim().is_empty() => name
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl Report {
    /// Create an unassigned, unread report
    pub fn new(id: i64, description: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            email: None,
            phone: None,
            description: Some(description.into()),
            assigned_department: None,
            status: ReportStatus::Pending,
            created_at,
            is_read: false,
        }
    }

    /// Record an assignment on this report
    pub fn assign(&mut self, department: Department) {
        self.assigned_department = Some(department);
        self.status = ReportStatus::Assigned;
    }

    /// Whether a department has already been set
    pub fn is_assigned(&self) -> bool {
        self.assigned_department.is_some()
    }

    /// Case-insensitive substring search over the reporter fields and description.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        [&self.name, &self.email, &self.phone, &self.description]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_deserialization_with_nulls() {
        let json = r#"{
            "id": 7,
            "description": null,
            "assigned_department": null,
            "status": "Pending",
            "created_at": "2024-05-01T10:00:00Z",
            "is_read": false
        }"#;

        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.id, 7);
        assert!(report.description.is_none());
        assert!(!report.is_assigned());
        assert_eq!(report.status, ReportStatus::Pending);
    }

    #[test]
    fn test_lenient_backend_rows() {
        let json = r#"[
            {"id": 1, "status": null, "assigned_department": "", "created_at": "2024-05-01T10:00:00Z", "is_read": null},
            {"id": 2, "status": "New", "assigned_department": null, "created_at": "2024-05-01T10:00:00Z"},
            {"id": 3, "status": "", "created_at": "2024-05-01T10:00:00Z"},
            {"id": 4, "status": "Assigned", "assigned_department": "IT Support", "created_at": "2024-05-01T10:00:00Z", "is_read": true}
        ]"#;

        let reports: Vec<Report> = serde_json::from_str(json).unwrap();
        for report in &reports[..3] {
            assert_eq!(report.status, ReportStatus::Pending, "report {}", report.id);
            assert!(!report.is_assigned(), "report {}", report.id);
            assert!(!report.is_read, "report {}", report.id);
        }
        assert_eq!(reports[3].status, ReportStatus::Assigned);
        assert_eq!(reports[3].assigned_department, Some(Department::ItSupport));
        assert!(reports[3].is_read);
    }

    #[test]
    fn test_unknown_department_is_rejected() {
        let json = r#"{"id": 1, "assigned_department": "Finance", "created_at": "2024-05-01T10:00:00Z"}"#;
        assert!(serde_json::from_str::<Report>(json).is_err());
    }

    #[test]
    fn test_assign_sets_status() {
        let mut report = Report::new(1, "broken pipe", Utc::now());
        report.assign(Department::Maintenance);

        assert_eq!(report.assigned_department, Some(Department::Maintenance));
        assert_eq!(report.status, ReportStatus::Assigned);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["assigned_department"], "Maintenance");
        assert_eq!(json["status"], "Assigned");
    }

    #[test]
    fn test_matches_search() {
        let mut report = Report::new(1, "Street light is out", Utc::now());
        report.email = Some("Jane@Example.org".to_string());

        assert!(report.matches_search("light"));
        assert!(report.matches_search("jane@"));
        assert!(!report.matches_search("payroll"));
    }
}
