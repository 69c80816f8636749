use crate::frequency::DEFAULT_LIMIT;
use crate::normalizer::MatchMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for building an [`Analyzer`](crate::analyzer::Analyzer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub mode: MatchMode,
    /// Maximum rows in any frequency table.
    pub limit: usize,
    pub nfkc: bool,
    /// JSON dictionary; the built-in one is used when unset.
    pub dictionary: Option<PathBuf>,
    /// Newline-separated stop words; the built-in English list when unset.
    pub stopwords: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { mode: MatchMode::Exact, limit: DEFAULT_LIMIT, nfkc: false, dictionary: None, stopwords: None }
    }
}
