use crate::config::AnalyzerConfig;
use crate::dictionary::CategoryDictionary;
use crate::frequency::{rank_frequency, FrequencyTable};
use crate::load::{load_dictionary, load_stopwords};
use crate::matcher::{categorize, CompiledDictionary};
use crate::normalizer::{MatchMode, Normalizer};
use crate::stopwords::{filter_stop_words, StopWordSet};
use crate::tabulate::{tabulate, Row};
use crate::tokenizer::{tokenize_with, TokenizerOptions};
use anyhow::{bail, Result};
use serde::Serialize;

/// Output of a categorization run.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub rows: Vec<Row>,
    /// Most frequent words among those no category claimed.
    pub miscellaneous_top: FrequencyTable,
}

/// Holds the read-only state shared by every analysis: stop words and the
/// compiled dictionary. Build once, then analyze any number of inputs.
#[derive(Debug)]
pub struct Analyzer {
    stopwords: StopWordSet,
    dictionary: CompiledDictionary,
    tokenizer: TokenizerOptions,
    limit: usize,
}

impl Analyzer {
    /// Load stop words and dictionary as configured (built-ins when unset).
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let stopwords = match &config.stopwords {
            Some(path) => load_stopwords(path)?,
            None => StopWordSet::english(),
        };
        let dictionary = match &config.dictionary {
            Some(path) => load_dictionary(path)?,
            None => CategoryDictionary::builtin()?,
        };
        Ok(Self::from_parts(stopwords, &dictionary, config.mode)
            .with_limit(config.limit)
            .with_tokenizer(TokenizerOptions { nfkc: config.nfkc }))
    }

    pub fn from_parts(stopwords: StopWordSet, dictionary: &CategoryDictionary, mode: MatchMode) -> Self {
        Self {
            stopwords,
            dictionary: CompiledDictionary::compile(dictionary, Normalizer::new(mode)),
            tokenizer: TokenizerOptions::default(),
            limit: crate::frequency::DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_tokenizer(mut self, opts: TokenizerOptions) -> Self {
        self.tokenizer = opts;
        self
    }

    pub fn dictionary(&self) -> &CompiledDictionary { &self.dictionary }

    /// Most frequent content words in `text`.
    pub fn top_words(&self, text: &str) -> Result<FrequencyTable> {
        ensure_not_blank(text)?;
        let tokens = tokenize_with(text, self.tokenizer);
        let words = filter_stop_words(&tokens, &self.stopwords, true);
        let table = rank_frequency(&words, self.limit);
        tracing::info!(tokens = tokens.len(), kept = words.len(), ranked = table.len(), "ranked word frequencies");
        Ok(table)
    }

    /// Bucket every content word of `text` into its category.
    pub fn categorize(&self, text: &str) -> Result<CategoryReport> {
        ensure_not_blank(text)?;
        let tokens = tokenize_with(text, self.tokenizer);
        let words = filter_stop_words(&tokens, &self.stopwords, false);
        let result = categorize(&words, &self.dictionary);
        let rows = tabulate(&result, &self.dictionary);
        let miscellaneous_top = rank_frequency(result.miscellaneous_tokens(), self.limit);
        tracing::info!(
            tokens = result.total_tokens(),
            rows = rows.len(),
            unmatched = result.miscellaneous().len(),
            mode = ?self.dictionary.normalizer().mode(),
            "categorized messages"
        );
        Ok(CategoryReport { rows, miscellaneous_top })
    }
}

fn ensure_not_blank(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("please enter some messages to analyze");
    }
    Ok(())
}
