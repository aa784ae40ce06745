use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use triage_classifiers::{Classifier, KeywordClassifier, KeywordConfig, KeywordTable, MatchStrategy};
use triage_core::Report;
use triage_reports::{InMemoryReportStore, TriageService, TriageSummary};

/// Build the classifier from an optional keyword file and strategy override
pub fn build_classifier(
    config: Option<&Path>,
    strategy: Option<MatchStrategy>,
) -> Result<KeywordClassifier> {
    let table = match config {
        Some(path) => {
            let config = KeywordConfig::from_file(path)?;
            let table = KeywordTable::from_config(&config)
                .with_context(|| format!("invalid keyword table {}", path.display()))?;
            info!(
                path = %path.display(),
                version = %table.version(),
                keywords = table.keyword_count(),
                "Loaded keyword table"
            );
            Arc::new(table)
        }
        None => KeywordTable::builtin(),
    };

    let classifier = KeywordClassifier::new(table)?;
    Ok(match strategy {
        Some(strategy) => classifier.with_strategy(strategy),
        None => classifier,
    })
}

/// Classify one description; optionally append the score table
pub fn classify(classifier: &KeywordClassifier, text: &str, show_scores: bool) -> String {
    let result = classifier.classify_detailed(Some(text));

    let mut out = match result.department {
        Some(department) => department.to_string(),
        None => "no match".to_string(),
    };
    out.push('\n');

    if show_scores {
        for (department, score) in result.scores.iter() {
            let _ = writeln!(out, "  {:<16} {}", department.as_str(), score);
        }
    }

    out
}

/// Run one auto-assignment pass over a JSON array of reports and return the
/// updated array, newest first
pub async fn triage(
    classifier: Arc<KeywordClassifier>,
    reports_json: &str,
) -> Result<(String, TriageSummary)> {
    let reports: Vec<Report> =
        serde_json::from_str(reports_json).context("reports must be a JSON array of report records")?;

    let service = TriageService::new(InMemoryReportStore::with_reports(reports), classifier);
    let summary = service.auto_assign().await?;

    let updated = service.store().snapshot().await;
    let json = serde_json::to_string_pretty(&updated)?;

    Ok((json, summary))
}

/// YAML for the keyword table the classifier runs with
pub fn keywords(classifier: &KeywordClassifier) -> Result<String> {
    let mut config = classifier.table().to_config();
    config.strategy = classifier.strategy();
    Ok(config.to_yaml()?)
}
