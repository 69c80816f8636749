use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").expect("valid regex");
    static ref DIGITS: Regex = Regex::new(r"\d+").expect("valid regex");
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Apply NFKC compatibility normalization before cleaning (ligatures, full-width forms).
    pub nfkc: bool,
}

/// Split raw message text into lowercase word tokens.
///
/// Lines are joined with a single space, punctuation and digit runs are
/// removed, and the remainder is lowercased and split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with(text, TokenizerOptions::default())
}

pub fn tokenize_with(text: &str, opts: TokenizerOptions) -> Vec<String> {
    let joined = text.lines().collect::<Vec<_>>().join(" ");
    let joined = if opts.nfkc { joined.nfkc().collect::<String>() } else { joined };
    let cleaned = NON_WORD.replace_all(&joined, "");
    let cleaned = DIGITS.replace_all(&cleaned, "");
    cleaned
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
