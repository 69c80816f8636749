use crate::dictionary::MISCELLANEOUS;
use crate::matcher::{CategorizationResult, CompiledDictionary};
use serde::Serialize;

pub const WORD_SEPARATOR: &str = ", ";

/// One output line: a category and its distinct matched words, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub category: String,
    pub words: Vec<String>,
}

impl Row {
    pub fn joined_words(&self) -> String { self.words.join(WORD_SEPARATOR) }
}

/// Rows for every non-empty category in declaration order, Miscellaneous last.
pub fn tabulate(result: &CategorizationResult, dict: &CompiledDictionary) -> Vec<Row> {
    let mut rows: Vec<Row> = dict
        .names()
        .iter()
        .enumerate()
        .filter_map(|(idx, name)| {
            let words = result.words(idx)?;
            if words.is_empty() { return None; }
            Some(Row { category: name.clone(), words: words.iter().cloned().collect() })
        })
        .collect();
    if !result.miscellaneous().is_empty() {
        rows.push(Row {
            category: MISCELLANEOUS.to_string(),
            words: result.miscellaneous().iter().cloned().collect(),
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Category, CategoryDictionary};
    use crate::matcher::categorize;
    use crate::normalizer::{MatchMode, Normalizer};

    #[test]
    fn skips_empty_rows_and_puts_misc_last() {
        let d = CategoryDictionary::new(vec![
            Category { name: "Alpha".into(), keywords: vec!["zulu".into(), "yankee".into()] },
            Category { name: "Empty".into(), keywords: vec!["never".into()] },
            Category { name: "Omega".into(), keywords: vec!["apple".into()] },
        ])
        .unwrap();
        let c = CompiledDictionary::compile(&d, Normalizer::new(MatchMode::Exact));
        let tokens: Vec<String> = ["stray", "zulu", "apple", "yankee", "zulu", "other"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rows = tabulate(&categorize(&tokens, &c), &c);
        let cats: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(cats, vec!["Alpha", "Omega", "Miscellaneous"]);
        assert_eq!(rows[0].joined_words(), "yankee, zulu");
        assert_eq!(rows[2].words, vec!["other", "stray"]);
    }

    #[test]
    fn nothing_in_nothing_out() {
        let d = CategoryDictionary::new(vec![Category { name: "A".into(), keywords: vec!["a".into()] }]).unwrap();
        let c = CompiledDictionary::compile(&d, Normalizer::new(MatchMode::Exact));
        assert!(tabulate(&categorize(&[], &c), &c).is_empty());
    }
}
