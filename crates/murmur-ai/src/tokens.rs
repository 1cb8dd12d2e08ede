//! Word splitting and negation detection shared by both scoring methods.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Negators, including apostrophe-less forms left behind by normalisation.
static NEGATORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "not", "no", "never", "none", "nope", "nothing", "nowhere", "neither", "nor",
        "without", "cannot", "aint", "arent", "cant", "couldnt", "darent", "didnt", "doesnt",
        "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neednt", "shant",
        "shouldnt", "wasnt", "werent", "wont", "wouldnt",
    ]
    .into_iter()
    .collect()
});

/// A word with surrounding punctuation removed, plus its lowercase form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub raw: &'a str,
    pub lower: String,
}

impl Token<'_> {
    /// All-caps emphasis: at least one letter and no lowercase letters.
    pub fn is_shouting(&self) -> bool {
        self.raw.chars().any(char::is_alphabetic) && !self.raw.chars().any(char::is_lowercase)
    }
}

/// Split on whitespace and strip leading/trailing punctuation from each word.
///
/// Words that end up shorter than two characters are dropped.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| w.chars().count() > 1)
        .map(|raw| Token {
            raw,
            lower: raw.to_lowercase(),
        })
        .collect()
}

/// Whether a lowercased word negates what follows it.
pub fn is_negator(lower: &str) -> bool {
    NEGATORS.contains(lower) || lower.contains("n't")
}
