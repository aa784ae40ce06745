//! Persistence seam for report records

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use triage_core::{Department, Error, Report, Result};

/// Storage backend holding report records.
///
/// Implementations own write concurrency; the triage service issues one
/// write per report and never holds state between calls.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// All reports, newest first
    async fn list_reports(&self) -> Result<Vec<Report>>;

    /// Fetch one report
    async fn get_report(&self, id: i64) -> Result<Report>;

    /// Set the assigned department and move the report to `Assigned`
    async fn assign_department(&self, id: i64, department: Department) -> Result<()>;

    /// Flag a report as read
    async fn mark_read(&self, id: i64) -> Result<()>;

    /// Remove a report
    async fn delete_report(&self, id: i64) -> Result<()>;
}

/// In-process report store
#[derive(Debug, Default)]
pub struct InMemoryReportStore {
    reports: RwLock<HashMap<i64, Report>>,
}

impl InMemoryReportStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with reports; later duplicates of an id win
    pub fn with_reports(reports: impl IntoIterator<Item = Report>) -> Self {
        Self {
            reports: RwLock::new(reports.into_iter().map(|r| (r.id, r)).collect()),
        }
    }

    /// Insert or replace a report
    pub async fn insert(&self, report: Report) {
        self.reports.write().await.insert(report.id, report);
    }

    /// All reports, newest first
    pub async fn snapshot(&self) -> Vec<Report> {
        let mut reports: Vec<Report> = self.reports.read().await.values().cloned().collect();
        sort_newest_first(&mut reports);
        reports
    }

    /// Number of stored reports
    pub async fn len(&self) -> usize {
        self.reports.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.reports.read().await.is_empty()
    }
}

/// Sort by `created_at` descending, breaking ties by id descending
pub fn sort_newest_first(reports: &mut [Report]) {
    reports.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn list_reports(&self) -> Result<Vec<Report>> {
        Ok(self.snapshot().await)
    }

    async fn get_report(&self, id: i64) -> Result<Report> {
        self.reports
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    async fn assign_department(&self, id: i64, department: Department) -> Result<()> {
        let mut reports = self.reports.write().await;
        let report = reports.get_mut(&id).ok_or(Error::NotFound(id))?;
        report.assign(department);
        Ok(())
    }

    async fn mark_read(&self, id: i64) -> Result<()> {
        let mut reports = self.reports.write().await;
        let report = reports.get_mut(&id).ok_or(Error::NotFound(id))?;
        report.is_read = true;
        Ok(())
    }

    async fn delete_report(&self, id: i64) -> Result<()> {
        self.reports
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(Error::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use triage_core::ReportStatus;

    fn report(id: i64, minutes: i64) -> Report {
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        Report::new(id, format!("report {}", id), base + Duration::minutes(minutes))
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = InMemoryReportStore::with_reports([report(1, 0), report(2, 30), report(3, 10)]);

        let ids: Vec<_> = store.list_reports().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[tokio::test]
    async fn test_assign_and_mark_read() {
        let store = InMemoryReportStore::with_reports([report(1, 0)]);

        store.assign_department(1, Department::Security).await.unwrap();
        store.mark_read(1).await.unwrap();

        let stored = store.get_report(1).await.unwrap();
        assert_eq!(stored.assigned_department, Some(Department::Security));
        assert_eq!(stored.status, ReportStatus::Assigned);
        assert!(stored.is_read);
    }

    #[tokio::test]
    async fn test_missing_report() {
        let store = InMemoryReportStore::new();

        assert!(matches!(store.get_report(9).await, Err(Error::NotFound(9))));
        assert!(matches!(
            store.assign_department(9, Department::Logistics).await,
            Err(Error::NotFound(9))
        ));
        assert!(matches!(store.delete_report(9).await, Err(Error::NotFound(9))));
    }

    #[tokio::test]
    async fn test_insert_replaces_by_id() {
        let store = InMemoryReportStore::new();
        assert!(store.is_empty().await);

        store.insert(report(1, 0)).await;
        let mut replacement = report(1, 0);
        replacement.description = Some("flooded warehouse".to_string());
        store.insert(replacement).await;

        assert!(!store.is_empty().await);
        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.get_report(1).await.unwrap().description.as_deref(),
            Some("flooded warehouse")
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryReportStore::with_reports([report(1, 0), report(2, 5)]);
        store.delete_report(1).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert!(store.get_report(1).await.is_err());
    }
}
