//! Triage Reports
//!
//! The staff-facing report workflow around the department classifier:
//! auto-assigning unassigned reports, manual routing, read tracking,
//! deletion, and list filtering. Storage sits behind the [`ReportStore`]
//! trait; [`InMemoryReportStore`] backs tests and the command-line tool.

pub mod filter;
pub mod metrics;
pub mod service;
pub mod store;

pub use filter::ReportFilter;
pub use service::{TriageService, TriageSummary};
pub use store::{sort_newest_first, InMemoryReportStore, ReportStore};
