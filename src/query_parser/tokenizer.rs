//! Whitespace tokenizer with stop word removal.
//!
//! Words are split on every single whitespace character, so consecutive,
//! leading or trailing separators produce empty words. Each word is
//! stripped of every character outside
//! `[A-Za-z0-9]`, then filtered against a fixed English stop word list.
//! Casing is left untouched, so the stop word test is case-sensitive:
//! `the` is dropped, `The` is kept.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("valid regex literal"));

static STOP_WORDS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
        "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
        "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
        "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
        "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been",
        "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the",
        "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
        "with", "about", "against", "between", "into", "through", "during", "before", "after",
        "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
        "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
        "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
        "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
        "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve",
        "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn",
        "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
        "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
        "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
        "wouldn't",
    ]
    .into_iter()
    .collect()
});

/// Removes every non `[A-Za-z0-9]` character, keeping the rest in order.
/// The result may be empty.
pub fn clean_word(word: &str) -> String {
    NON_ALPHANUMERIC.replace_all(word, "").into_owned()
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Turns raw text into the ordered list of terms used for indexing and querying.
/// Duplicates are kept. Empty words, and words that clean down to the empty
/// string, are not stop words and survive as empty terms.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(char::is_whitespace)
        .map(clean_word)
        .filter(|word| !is_stop_word(word))
        .collect()
}
