//! Configuration for keyword tables and the classifier registry

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use triage_core::{Department, Error, Result};

/// Keyword table shipped with the crate
pub const BUILTIN_KEYWORDS_YAML: &str = include_str!("../config/departments.yaml");

/// How description text is matched against keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Split the normalized text on whitespace and test each token for
    /// substring containment of each keyword. A token can score several
    /// keywords of the same department.
    #[default]
    Tokenized,

    /// Test the whole normalized text once per keyword. Multi-word keywords
    /// and matches spanning token boundaries can only hit under this mode.
    WholeText,
}

/// Editable keyword table definition (for YAML/JSON config files)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Version label of this keyword list
    #[serde(default = "default_version")]
    pub version: String,

    /// Matching strategy
    #[serde(default)]
    pub strategy: MatchStrategy,

    /// Keywords by department
    pub departments: BTreeMap<Department, Vec<String>>,
}

fn default_version() -> String {
    "1".to_string()
}

impl KeywordConfig {
    /// The keyword table shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_KEYWORDS_YAML)
    }

    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from file; `.json` files are parsed as JSON, everything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read keyword table {}: {}", path.display(), e))
        })?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Named keyword tables for per-deployment customization
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Keyword tables by name
    #[serde(default)]
    pub tables: HashMap<String, KeywordConfig>,
}

impl RegistryConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read registry config {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }
}
