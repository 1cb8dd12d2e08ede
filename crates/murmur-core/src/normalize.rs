//! Text normalisation for post bodies.
//!
//! Reduces raw post text to a canonical plain-text form used as scoring input.
//!
//! # Steps
//!
//! Each step operates on the output of the previous one:
//!
//! 1. Drop URL tokens: anything starting with `http`, `https`, or `www` up to whitespace
//! 2. Drop mentions (`@name`)
//! 3. Drop hashtags (`#tag`), including the tag text
//! 4. Collapse whitespace runs into a single space
//! 5. Drop everything that is not a word character or whitespace
//! 6. Trim
//!
//! A word character is a letter, a number, or `_`. Combining marks are not word
//! characters, so decomposed accents (`e` + U+0301) lose the mark while
//! precomposed letters (`é`) are kept.

use std::sync::LazyLock;

use regex::Regex;

static URLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+|https\S+").expect("valid url pattern"));
static MENTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[\p{L}\p{N}_]+").expect("valid mention pattern"));
static HASHTAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[\p{L}\p{N}_]+").expect("valid hashtag pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("valid symbol pattern"));

/// Normalise raw post text.
///
/// Total over all inputs: empty or degenerate text yields an empty string.
///
/// Punctuation is removed *after* whitespace is collapsed, so `"a - b"`
/// becomes `"a  b"` (two spaces).
pub fn normalize(raw: &str) -> String {
    let text = URLS.replace_all(raw, "");
    let text = MENTIONS.replace_all(&text, "");
    let text = HASHTAGS.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = NON_WORD.replace_all(&text, "");
    text.trim().to_string()
}
