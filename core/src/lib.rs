pub mod analyzer;
pub mod config;
pub mod dictionary;
pub mod export;
pub mod frequency;
pub mod load;
pub mod matcher;
pub mod normalizer;
pub mod stopwords;
pub mod tabulate;
pub mod tokenizer;

pub use analyzer::{Analyzer, CategoryReport};
pub use config::AnalyzerConfig;
pub use dictionary::{Category, CategoryDictionary, MISCELLANEOUS};
pub use frequency::{FrequencyTable, WordCount};
pub use matcher::{Assignment, CategorizationResult, CompiledDictionary};
pub use normalizer::{MatchMode, Normalizer};
pub use stopwords::StopWordSet;
pub use tabulate::Row;
