//! Triage Core
//!
//! Types shared across the triage workspace:
//! - The closed [`Department`] enumeration reports are routed to
//! - Report records as stored by the reporting backend
//! - Error types and result handling

pub mod department;
pub mod error;
pub mod types;

pub use department::Department;
pub use error::{Error, Result};
pub use types::{Report, ReportStatus};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::department::Department;
    pub use crate::error::{Error, Result};
    pub use crate::types::{Report, ReportStatus};
}
