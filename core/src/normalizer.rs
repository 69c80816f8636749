use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How tokens and keywords are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Lowercase exact comparison.
    #[default]
    Exact,
    /// Both sides reduced with the Snowball English stemmer.
    Stemmed,
}

/// Reduces a token to the form used for keyword comparison.
pub enum Normalizer {
    Identity,
    Stemmed(Stemmer),
}

impl Normalizer {
    pub fn new(mode: MatchMode) -> Self {
        match mode {
            MatchMode::Exact => Normalizer::Identity,
            MatchMode::Stemmed => Normalizer::Stemmed(Stemmer::create(Algorithm::English)),
        }
    }

    pub fn mode(&self) -> MatchMode {
        match self {
            Normalizer::Identity => MatchMode::Exact,
            Normalizer::Stemmed(_) => MatchMode::Stemmed,
        }
    }

    pub fn normalize(&self, token: &str) -> String {
        match self {
            Normalizer::Identity => token.to_string(),
            Normalizer::Stemmed(stemmer) => stemmer.stem(token).into_owned(),
        }
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Normalizer({:?})", self.mode())
    }
}
