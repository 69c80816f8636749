use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// English stop words, matching the widely used NLTK `english` corpus list.
    static ref ENGLISH: HashSet<&'static str> = {
        let words: &[&str] = &[
            "i","me","my","myself","we","our","ours","ourselves",
            "you","you're","you've","you'll","you'd","your","yours","yourself","yourselves",
            "he","him","his","himself","she","she's","her","hers","herself",
            "it","it's","its","itself","they","them","their","theirs","themselves",
            "what","which","who","whom","this","that","that'll","these","those",
            "am","is","are","was","were","be","been","being",
            "have","has","had","having","do","does","did","doing",
            "a","an","the","and","but","if","or","because","as","until","while",
            "of","at","by","for","with","about","against","between","into","through",
            "during","before","after","above","below","to","from","up","down","in","out",
            "on","off","over","under","again","further","then","once",
            "here","there","when","where","why","how","all","any","both","each","few",
            "more","most","other","some","such","no","nor","not","only","own","same",
            "so","than","too","very","s","t","can","will","just","don","don't",
            "should","should've","now","d","ll","m","o","re","ve","y",
            "ain","aren","aren't","couldn","couldn't","didn","didn't","doesn","doesn't",
            "hadn","hadn't","hasn","hasn't","haven","haven't","isn","isn't","ma",
            "mightn","mightn't","mustn","mustn't","needn","needn't","shan","shan't",
            "shouldn","shouldn't","wasn","wasn't","weren","weren't","won","won't",
            "wouldn","wouldn't"
        ];
        words.iter().copied().collect()
    };
}

/// Immutable set of lowercase words excluded from analysis.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// The built-in English list.
    pub fn english() -> Self {
        Self { words: ENGLISH.iter().map(|w| w.to_string()).collect() }
    }

    pub fn empty() -> Self { Self::default() }

    /// Build from a custom list; entries are trimmed and lowercased, blanks skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a newline-separated list. Lines starting with `#` are comments.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines().filter(|l| !l.trim_start().starts_with('#')))
    }

    pub fn contains(&self, token: &str) -> bool { self.words.contains(token) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

/// Drop stop words from `tokens`, keeping order.
///
/// With `drop_single_chars` set, tokens of one character or less are dropped
/// as well. Word-frequency ranking uses it; categorization does not.
pub fn filter_stop_words(tokens: &[String], stopwords: &StopWordSet, drop_single_chars: bool) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| !stopwords.contains(t))
        .filter(|t| !drop_single_chars || t.chars().count() > 1)
        .cloned()
        .collect()
}
