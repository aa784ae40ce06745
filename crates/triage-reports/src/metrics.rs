//! Triage metrics

use triage_core::Department;

/// Counter of persisted assignments, labelled by source and department
pub const REPORTS_ASSIGNED: &str = "triage_reports_assigned_total";
/// Counter of assignment writes the store rejected
pub const ASSIGNMENT_FAILURES: &str = "triage_assignment_failures_total";
/// Counter of unassigned reports no keyword matched
pub const REPORTS_UNMATCHED: &str = "triage_reports_unmatched_total";
/// Histogram of classification latency
pub const CLASSIFY_LATENCY: &str = "triage_classify_latency_us";

/// How a department ended up on a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentSource {
    Auto,
    Manual,
}

impl AssignmentSource {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
        }
    }
}

/// Register metric descriptions with the installed recorder
pub fn describe() {
    metrics::describe_counter!(REPORTS_ASSIGNED, "Reports routed to a department");
    metrics::describe_counter!(ASSIGNMENT_FAILURES, "Department assignments the store rejected");
    metrics::describe_counter!(REPORTS_UNMATCHED, "Unassigned reports with no keyword match");
    metrics::describe_histogram!(
        CLASSIFY_LATENCY,
        metrics::Unit::Microseconds,
        "Description classification latency in microseconds"
    );
}

pub(crate) fn record_assignment(source: AssignmentSource, department: Department) {
    metrics::counter!(
        REPORTS_ASSIGNED,
        "source" => source.as_str(),
        "department" => department.as_str()
    )
    .increment(1);
}

pub(crate) fn record_failure(source: AssignmentSource) {
    metrics::counter!(ASSIGNMENT_FAILURES, "source" => source.as_str()).increment(1);
}

pub(crate) fn record_unmatched() {
    metrics::counter!(REPORTS_UNMATCHED).increment(1);
}

pub(crate) fn record_classify_latency(latency_us: u64) {
    metrics::histogram!(CLASSIFY_LATENCY).record(latency_us as f64);
}
