//! Keyword-scoring department classifier

use crate::classifier::{Classification, Classifier, DepartmentScores};
use crate::config::MatchStrategy;
use crate::keywords::KeywordTable;
use crate::preprocess::Preprocessor;
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::trace;
use triage_core::{Department, Error, Result};

/// Routes report descriptions to departments by counting keyword hits.
///
/// Every keyword of a department that occurs inside a token (or inside the
/// whole text, under [`MatchStrategy::WholeText`]) adds one to that
/// department's score. Several keywords hitting the same token each count,
/// and a keyword listed twice counts twice. The highest score wins, ties go
/// to the earlier department in [`Department::ALL`], and zero is no match.
pub struct KeywordClassifier {
    name: String,
    table: Arc<KeywordTable>,
    strategy: MatchStrategy,
    preprocessor: Preprocessor,
    matcher: KeywordMatcher,
}

impl KeywordClassifier {
    /// Create a classifier over a keyword table, using the table's strategy
    pub fn new(table: Arc<KeywordTable>) -> Result<Self> {
        let matcher = KeywordMatcher::build(&table)?;

        Ok(Self {
            name: "keywords".to_string(),
            strategy: table.strategy(),
            table,
            preprocessor: Preprocessor::new()?,
            matcher,
        })
    }

    /// Create a classifier over the built-in keyword table
    pub fn builtin() -> Result<Self> {
        Self::new(KeywordTable::builtin())
    }

    /// Override the matching strategy
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the name reported by [`Classifier::name`]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Keyword table in use
    pub fn table(&self) -> &Arc<KeywordTable> {
        &self.table
    }

    /// Active matching strategy
    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Classify plain text
    pub fn classify_text(&self, text: &str) -> Option<Department> {
        self.scores(text).best()
    }

    /// Per-department keyword hit counts for a description
    pub fn scores(&self, text: &str) -> DepartmentScores {
        let normalized = self.preprocessor.normalize(text);
        let mut scores = DepartmentScores::default();
        let mut hits = Vec::new();

        match self.strategy {
            MatchStrategy::Tokenized => {
                for token in self.preprocessor.tokens(&normalized) {
                    self.matcher.score(token, &mut scores, &mut hits);
                }
            }
            MatchStrategy::WholeText => {
                self.matcher.score(&normalized, &mut scores, &mut hits);
            }
        }

        scores
    }
}

impl Classifier for KeywordClassifier {
    fn classify_detailed(&self, description: Option<&str>) -> Classification {
        let start = Instant::now();

        let scores = self.scores(description.unwrap_or_default());
        let department = scores.best();

        trace!(
            classifier = %self.name,
            ?department,
            total = scores.total(),
            "Scored description"
        );

        Classification {
            department,
            scores,
            latency_us: start.elapsed().as_micros() as u64,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Aho-Corasick automaton over the distinct keywords of a table.
///
/// A keyword shared by several departments (or repeated within one) is a
/// single pattern whose owner list carries one entry per occurrence.
struct KeywordMatcher {
    automaton: AhoCorasick,
    owners: Vec<Vec<Department>>,
}

impl KeywordMatcher {
    fn build(table: &KeywordTable) -> Result<Self> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut patterns: Vec<&str> = Vec::new();
        let mut owners: Vec<Vec<Department>> = Vec::new();

        for rule in table.rules() {
            for keyword in rule.keywords() {
                let id = *index.entry(keyword.as_str()).or_insert_with(|| {
                    patterns.push(keyword.as_str());
                    owners.push(Vec::new());
                    patterns.len() - 1
                });
                owners[id].push(rule.department());
            }
        }

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| Error::config(format!("Failed to build keyword matcher: {}", e)))?;

        Ok(Self { automaton, owners })
    }

    /// Add one point per (keyword occurrence in table) found anywhere in
    /// `haystack`. Repeats of a keyword inside the haystack count once.
    fn score(&self, haystack: &str, scores: &mut DepartmentScores, hits: &mut Vec<usize>) {
        hits.clear();
        hits.extend(
            self.automaton
                .find_overlapping_iter(haystack)
                .map(|m| m.pattern().as_usize()),
        );
        hits.sort_unstable();
        hits.dedup();

        for &id in hits.iter() {
            for &department in &self.owners[id] {
                scores.add(department, 1);
            }
        }
    }
}
