use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
}

pub type FrequencyTable = Vec<WordCount>;

/// Count tokens and return the `limit` most frequent, highest first.
/// Equal counts keep the order in which the words first appeared.
pub fn rank_frequency(tokens: &[String], limit: usize) -> FrequencyTable {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut table: Vec<WordCount> = Vec::new();
    for token in tokens {
        match slots.get(token.as_str()).copied() {
            Some(i) => table[i].count += 1,
            None => {
                slots.insert(token.as_str(), table.len());
                table.push(WordCount { word: token.clone(), count: 1 });
            }
        }
    }
    // stable: ties stay in first-occurrence order
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table.truncate(limit);
    table
}
