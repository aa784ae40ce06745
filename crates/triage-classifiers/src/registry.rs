//! Classifier registry initialization and management

use crate::config::RegistryConfig;
use crate::department::KeywordClassifier;
use crate::keywords::KeywordTable;
use crate::Classifier;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use triage_core::{Error, Result};

/// Name of the classifier built from the shipped keyword table
pub const DEFAULT_CLASSIFIER: &str = "default";

/// Registry of keyword classifiers by deployment or tenant name
pub struct ClassifierRegistry {
    classifiers: HashMap<String, Arc<dyn Classifier>>,
}

impl ClassifierRegistry {
    /// Create a registry holding only the built-in classifier
    pub fn new() -> Result<Self> {
        let mut classifiers: HashMap<String, Arc<dyn Classifier>> = HashMap::new();
        classifiers.insert(
            DEFAULT_CLASSIFIER.to_string(),
            Arc::new(KeywordClassifier::builtin()?.with_name(DEFAULT_CLASSIFIER)),
        );

        Ok(Self { classifiers })
    }

    /// Build a registry from configuration; named tables are added next to
    /// the built-in one and may replace it under the name `default`
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let mut registry = Self::new()?;

        info!("Initializing classifier registry with {} tables", config.tables.len());

        for (name, table_config) in &config.tables {
            let table = KeywordTable::from_config(table_config).map_err(|e| {
                Error::config(format!("Invalid keyword table '{}': {}", name, e))
            })?;

            if name == DEFAULT_CLASSIFIER {
                warn!("Keyword table 'default' overrides the built-in table");
            }

            info!(
                table = %name,
                version = %table.version(),
                keywords = table.keyword_count(),
                "Loaded keyword table"
            );

            let classifier = KeywordClassifier::new(Arc::new(table))?.with_name(name.clone());
            registry.register(name.clone(), Arc::new(classifier));
        }

        Ok(registry)
    }

    /// Load registry from configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = RegistryConfig::from_file(path)?;
        Self::from_config(&config)
    }

    /// Add or replace a classifier
    pub fn register(&mut self, name: impl Into<String>, classifier: Arc<dyn Classifier>) {
        self.classifiers.insert(name.into(), classifier);
    }

    /// Look up a classifier by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Classifier>> {
        self.classifiers.get(name).cloned()
    }

    /// Look up a classifier, falling back to the default one
    pub fn get_or_default(&self, name: &str) -> Arc<dyn Classifier> {
        match self.get(name) {
            Some(classifier) => classifier,
            None => self.default_classifier(),
        }
    }

    /// The classifier registered as `default`
    pub fn default_classifier(&self) -> Arc<dyn Classifier> {
        self.classifiers[DEFAULT_CLASSIFIER].clone()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.classifiers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get the number of registered classifiers
    pub fn count(&self) -> usize {
        self.classifiers.len()
    }
}
