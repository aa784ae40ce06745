//! Immutable department keyword table

use crate::config::{KeywordConfig, MatchStrategy};
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};
use triage_core::{Department, Error, Result};

static BUILTIN: OnceLock<Arc<KeywordTable>> = OnceLock::new();

/// Keywords that route a description to one department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    department: Department,
    keywords: Vec<String>,
}

impl KeywordRule {
    /// Department this rule scores for
    pub fn department(&self) -> Department {
        self.department
    }

    /// Lowercase keywords, in configured order
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Validated keyword table, one rule per department in tie-break order.
///
/// Tables are never mutated after construction; share them with `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    version: String,
    strategy: MatchStrategy,
    rules: Vec<KeywordRule>,
}

impl KeywordTable {
    /// Build a table from configuration.
    ///
    /// Keywords are trimmed and lowercased. Every department must be present
    /// and empty keywords are rejected, since they would match any token.
    pub fn from_config(config: &KeywordConfig) -> Result<Self> {
        let mut rules = Vec::with_capacity(Department::COUNT);

        for department in Department::ALL {
            let raw = config.departments.get(&department).ok_or_else(|| {
                Error::config(format!("keyword table is missing department '{}'", department))
            })?;

            let mut keywords = Vec::with_capacity(raw.len());
            for keyword in raw {
                let keyword = keyword.trim().to_lowercase();
                if keyword.is_empty() {
                    return Err(Error::config(format!(
                        "empty keyword in department '{}'",
                        department
                    )));
                }
                keywords.push(keyword);
            }

            rules.push(KeywordRule { department, keywords });
        }

        Ok(Self {
            version: config.version.clone(),
            strategy: config.strategy,
            rules,
        })
    }

    /// The table shipped with the crate, built once per process
    pub fn builtin() -> Arc<Self> {
        BUILTIN
            .get_or_init(|| {
                let table = KeywordConfig::builtin()
                    .and_then(|config| Self::from_config(&config))
                    .expect("built-in keyword table is valid");
                Arc::new(table)
            })
            .clone()
    }

    /// Version label from the configuration
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Configured matching strategy
    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Rules in tie-break order
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Keywords for one department
    pub fn keywords(&self, department: Department) -> &[String] {
        self.rules[department.index()].keywords()
    }

    /// Total number of keyword entries across departments
    pub fn keyword_count(&self) -> usize {
        self.rules.iter().map(|rule| rule.keywords.len()).sum()
    }

    /// Export as an editable configuration
    pub fn to_config(&self) -> KeywordConfig {
        let departments: BTreeMap<Department, Vec<String>> = self
            .rules
            .iter()
            .map(|rule| (rule.department, rule.keywords.clone()))
            .collect();

        KeywordConfig {
            version: self.version.clone(),
            strategy: self.strategy,
            departments,
        }
    }
}
