//! Text normalization ahead of keyword scoring

use regex::Regex;
use triage_core::{Error, Result};

/// Lowercases descriptions and strips punctuation.
///
/// Characters that are neither word characters (Unicode letters, digits,
/// `_`) nor whitespace are removed outright, so `repair-technician` becomes
/// the single token `repairtechnician`.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    non_word: Regex,
}

impl Preprocessor {
    /// Create a new preprocessor
    pub fn new() -> Result<Self> {
        Ok(Self {
            non_word: Regex::new(r"[^\w\s]")
                .map_err(|e| Error::internal(format!("Failed to compile punctuation regex: {}", e)))?,
        })
    }

    /// Lowercase and strip non-word characters
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        self.non_word.replace_all(&lowered, "").into_owned()
    }

    /// Whitespace-separated tokens of already-normalized text
    pub fn tokens<'a>(&self, normalized: &'a str) -> impl Iterator<Item = &'a str> {
        normalized.split_whitespace()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new().expect("Failed to create preprocessor")
    }
}
