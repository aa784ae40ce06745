//! Triage Classifiers
//!
//! Routes citizen issue reports to departments by keyword scoring over the
//! report description.
//!
//! The keyword table is configuration: an editable, versioned YAML resource
//! validated into an immutable [`KeywordTable`] and injected into each
//! [`KeywordClassifier`]. Classification is pure and total, so one
//! classifier can be shared across threads behind an `Arc`.

pub mod classifier;
pub mod config;
pub mod department;
pub mod keywords;
pub mod preprocess;
pub mod registry;

pub use classifier::{Classification, Classifier, DepartmentScores};
pub use config::{KeywordConfig, MatchStrategy, RegistryConfig, BUILTIN_KEYWORDS_YAML};
pub use department::KeywordClassifier;
pub use keywords::{KeywordRule, KeywordTable};
pub use preprocess::Preprocessor;
pub use registry::{ClassifierRegistry, DEFAULT_CLASSIFIER};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{Classification, Classifier};
    pub use crate::config::{KeywordConfig, MatchStrategy};
    pub use crate::department::KeywordClassifier;
    pub use crate::keywords::KeywordTable;
    pub use triage_core::Department;
}
