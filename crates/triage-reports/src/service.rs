//! Report triage workflow

use crate::filter::ReportFilter;
use crate::metrics::{self, AssignmentSource};
use crate::store::ReportStore;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};
use triage_classifiers::Classifier;
use triage_core::{Department, Report, Result};

/// Outcome of one auto-assignment pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TriageSummary {
    /// Reports examined
    pub scanned: usize,
    /// Reports newly routed to a department
    pub assigned: usize,
    /// Unassigned reports no keyword matched
    pub unmatched: usize,
    /// Reports that already had a department
    pub already_assigned: usize,
    /// Assignments the store rejected
    pub failed: usize,
    /// Reports not yet opened by staff
    pub unread: usize,
}

/// Routes reports to departments and exposes the staff-facing operations
pub struct TriageService<S> {
    store: S,
    classifier: Arc<dyn Classifier>,
}

impl<S: ReportStore> TriageService<S> {
    /// Create a service over a store and classifier
    pub fn new(store: S, classifier: Arc<dyn Classifier>) -> Self {
        Self { store, classifier }
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Classify every unassigned report and persist the matches.
    ///
    /// Reports that already carry a department are left alone. A rejected
    /// write is logged and counted, then the pass moves on to the next report.
    pub async fn auto_assign(&self) -> Result<TriageSummary> {
        let reports = self.store.list_reports().await?;
        let mut summary = TriageSummary {
            scanned: reports.len(),
            ..Default::default()
        };

        for report in &reports {
            if !report.is_read {
                summary.unread += 1;
            }

            if report.is_assigned() {
                summary.already_assigned += 1;
                continue;
            }

            let classification = self.classifier.classify_detailed(report.description.as_deref());
            metrics::record_classify_latency(classification.latency_us);

            let Some(department) = classification.department else {
                debug!(report_id = report.id, "No department matched");
                metrics::record_unmatched();
                summary.unmatched += 1;
                continue;
            };

            match self.store.assign_department(report.id, department).await {
                Ok(()) => {
                    debug!(report_id = report.id, %department, "Auto-assigned report");
                    metrics::record_assignment(AssignmentSource::Auto, department);
                    summary.assigned += 1;
                }
                Err(e) => {
                    warn!(
                        report_id = report.id,
                        %department,
                        "Error assigning department to report: {}",
                        e
                    );
                    metrics::record_failure(AssignmentSource::Auto);
                    summary.failed += 1;
                }
            }
        }

        info!(
            scanned = summary.scanned,
            assigned = summary.assigned,
            unmatched = summary.unmatched,
            failed = summary.failed,
            "Auto-assignment pass complete"
        );

        Ok(summary)
    }

    /// Route a report to a department chosen by staff, replacing any
    /// existing assignment
    pub async fn assign(&self, id: i64, department: Department) -> Result<()> {
        match self.store.assign_department(id, department).await {
            Ok(()) => {
                info!(report_id = id, %department, "Report assigned");
                metrics::record_assignment(AssignmentSource::Manual, department);
                Ok(())
            }
            Err(e) => {
                metrics::record_failure(AssignmentSource::Manual);
                Err(e)
            }
        }
    }

    /// Manual assignment from a department name as entered in the dashboard
    pub async fn assign_by_name(&self, id: i64, department: &str) -> Result<()> {
        let department: Department = department.parse()?;
        self.assign(id, department).await
    }

    /// Flag a report as read
    pub async fn mark_read(&self, id: i64) -> Result<()> {
        self.store.mark_read(id).await
    }

    /// Remove a report
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.store.delete_report(id).await?;
        info!(report_id = id, "Report deleted");
        Ok(())
    }

    /// Reports matching a filter, newest first
    pub async fn reports(&self, filter: &ReportFilter) -> Result<Vec<Report>> {
        let reports = self.store.list_reports().await?;
        Ok(filter.apply(reports))
    }

    /// Number of reports staff have not opened
    pub async fn unread_count(&self) -> Result<usize> {
        let reports = self.store.list_reports().await?;
        Ok(reports.iter().filter(|r| !r.is_read).count())
    }
}
