use crate::dictionary::{CategoryDictionary, MISCELLANEOUS};
use crate::normalizer::Normalizer;
use crate::tokenizer::tokenize;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

/// Where a single token lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assignment {
    /// Index into the dictionary's declaration order.
    Category(usize),
    Miscellaneous,
}

/// A dictionary with its keywords normalized once and folded into an inverted
/// index (keyword -> earliest declared category).
#[derive(Debug)]
pub struct CompiledDictionary {
    names: Vec<String>,
    index: HashMap<String, usize>,
    unmatchable: Vec<(usize, String)>,
    normalizer: Normalizer,
}

impl CompiledDictionary {
    pub fn compile(dict: &CategoryDictionary, normalizer: Normalizer) -> Self {
        let mut names = Vec::with_capacity(dict.len());
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut unmatchable = Vec::new();
        let mut shadowed = 0usize;

        for (idx, cat) in dict.categories().iter().enumerate() {
            names.push(cat.name.trim().to_string());
            for keyword in &cat.keywords {
                let key = normalizer.normalize(&keyword.trim().to_lowercase());
                // single tokens never contain whitespace, punctuation or digits
                if tokenize(&key) != [key.as_str()] {
                    unmatchable.push((idx, keyword.clone()));
                }
                match index.entry(key) {
                    Entry::Vacant(slot) => { slot.insert(idx); }
                    Entry::Occupied(prev) => {
                        if *prev.get() != idx { shadowed += 1; }
                    }
                }
            }
        }

        tracing::debug!(
            categories = names.len(),
            keys = index.len(),
            shadowed,
            unmatchable = unmatchable.len(),
            mode = ?normalizer.mode(),
            "compiled category dictionary"
        );
        Self { names, index, unmatchable, normalizer }
    }

    /// First category (in declaration order) whose normalized keywords contain
    /// the normalized token, or Miscellaneous.
    pub fn match_token(&self, token: &str) -> Assignment {
        let key = self.normalizer.normalize(token);
        match self.index.get(&key) {
            Some(&idx) => Assignment::Category(idx),
            None => Assignment::Miscellaneous,
        }
    }

    pub fn name_of(&self, assignment: Assignment) -> &str {
        match assignment {
            Assignment::Category(idx) => &self.names[idx],
            Assignment::Miscellaneous => MISCELLANEOUS,
        }
    }

    pub fn names(&self) -> &[String] { &self.names }

    pub fn normalizer(&self) -> &Normalizer { &self.normalizer }

    /// Keywords that no single token can ever equal (multi-word phrases, or
    /// entries containing punctuation or digits), as (category, keyword).
    pub fn unmatchable_keywords(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.unmatchable.iter().map(|(idx, kw)| (self.names[*idx].as_str(), kw.as_str()))
    }
}

/// Matched original tokens per category, plus the Miscellaneous bucket.
#[derive(Debug, Clone, Default)]
pub struct CategorizationResult {
    buckets: Vec<BTreeSet<String>>,
    miscellaneous: BTreeSet<String>,
    /// Every token that fell through, in input order with repeats.
    miscellaneous_tokens: Vec<String>,
    total: usize,
}

impl CategorizationResult {
    /// Distinct words assigned to the category at `idx`.
    pub fn words(&self, idx: usize) -> Option<&BTreeSet<String>> { self.buckets.get(idx) }

    pub fn miscellaneous(&self) -> &BTreeSet<String> { &self.miscellaneous }

    pub fn miscellaneous_tokens(&self) -> &[String] { &self.miscellaneous_tokens }

    /// Number of tokens categorized, repeats included.
    pub fn total_tokens(&self) -> usize { self.total }

    pub fn category_count(&self) -> usize { self.buckets.len() }

    /// Which bucket holds `word`, if it was seen at all.
    pub fn assignment_of(&self, word: &str) -> Option<Assignment> {
        if let Some(idx) = self.buckets.iter().position(|b| b.contains(word)) {
            return Some(Assignment::Category(idx));
        }
        self.miscellaneous.contains(word).then_some(Assignment::Miscellaneous)
    }
}

/// Assign every token to exactly one bucket.
pub fn categorize(tokens: &[String], dict: &CompiledDictionary) -> CategorizationResult {
    let mut result = CategorizationResult {
        buckets: vec![BTreeSet::new(); dict.names.len()],
        ..Default::default()
    };
    for token in tokens {
        match dict.match_token(token) {
            Assignment::Category(idx) => { result.buckets[idx].insert(token.clone()); }
            Assignment::Miscellaneous => {
                result.miscellaneous.insert(token.clone());
                result.miscellaneous_tokens.push(token.clone());
            }
        }
        result.total += 1;
    }
    result
}
