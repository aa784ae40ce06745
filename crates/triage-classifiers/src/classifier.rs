//! Classifier trait and common types

use triage_core::Department;

/// Trait for department classifiers.
///
/// Classification is total: every input, including `None`, yields either a
/// department or "no match".
pub trait Classifier: Send + Sync {
    /// Classify a report description, returning the scores behind the decision
    fn classify_detailed(&self, description: Option<&str>) -> Classification;

    /// Classify a report description
    fn classify(&self, description: Option<&str>) -> Option<Department> {
        self.classify_detailed(description).department
    }

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Result of classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Winning department, `None` when nothing matched
    pub department: Option<Department>,

    /// Per-department keyword hit counts
    pub scores: DepartmentScores,

    /// Latency in microseconds
    pub latency_us: u64,
}

/// Keyword hit counts for every department
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepartmentScores([u64; Department::COUNT]);

impl DepartmentScores {
    /// Score for one department
    pub fn get(&self, department: Department) -> u64 {
        self.0[department.index()]
    }

    pub(crate) fn add(&mut self, department: Department, hits: u64) {
        let slot = &mut self.0[department.index()];
        *slot = slot.saturating_add(hits);
    }

    /// Scores in tie-break order
    pub fn iter(&self) -> impl Iterator<Item = (Department, u64)> + '_ {
        Department::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Sum of all department scores
    pub fn total(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, s| acc.saturating_add(*s))
    }

    /// Department with the strictly highest score.
    ///
    /// Equal top scores resolve to the department listed first in
    /// [`Department::ALL`]. A top score of zero is no match.
    pub fn best(&self) -> Option<Department> {
        let mut best = None;
        let mut top = 0;

        for (department, score) in self.iter() {
            if score > top {
                best = Some(department);
                top = score;
            }
        }

        best
    }
}
