//! Lexicon and rule-based compound sentiment.
//!
//! Each word found in the valence lexicon contributes its valence, adjusted by
//! the words around it:
//!
//! - boosters/dampeners ("very", "barely") up to three words back, decaying with distance
//! - ALL-CAPS emphasis when the text mixes case
//! - negators up to three words back flip and dampen the valence
//! - "but" halves what came before it and amplifies what follows
//!
//! Exclamation and question marks then push the sum further from zero, and the
//! sum is squashed into [-1, 1].

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use murmur_core::{SentimentLabel, SentimentScore};

use crate::lexicon::ValenceLexicon;
use crate::scorer::SentimentMethod;
use crate::tokens::{Token, is_negator, tokenize};

const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
/// Added to a word's magnitude when it is written in caps amid mixed-case text.
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
/// Normalisation constant approximating the maximum expected sum.
const ALPHA: f64 = 15.0;
const BOOSTER_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

static BOOSTERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let up = [
        "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly",
        "deeply", "effing", "enormously", "entirely", "especially", "exceptionally",
        "extremely", "fabulously", "flipping", "fricking", "frickin", "friggin", "fully",
        "fucking", "greatly", "hella", "highly", "hugely", "incredibly", "intensely",
        "majorly", "more", "most", "particularly", "purely", "quite", "really", "remarkably",
        "so", "substantially", "thoroughly", "totally", "tremendously", "uber",
        "unbelievably", "unusually", "utterly", "very",
    ];
    let down = [
        "almost", "barely", "hardly", "just", "kinda", "less", "little", "marginally",
        "occasionally", "partly", "scarcely", "slightly", "somewhat", "sorta",
    ];
    up.into_iter()
        .map(|w| (w, B_INCR))
        .chain(down.into_iter().map(|w| (w, B_DECR)))
        .collect()
});

/// Method A: compound score in [-1, 1], labelled with a ±0.05 dead band.
#[derive(Debug, Clone)]
pub struct CompoundMethod {
    lexicon: Arc<ValenceLexicon>,
}

impl CompoundMethod {
    pub fn new(lexicon: Arc<ValenceLexicon>) -> Self {
        Self { lexicon }
    }

    /// Compound score for `text`, rounded to four decimal places.
    pub fn compound(&self, text: &str) -> f64 {
        let words = tokenize(text);
        if words.is_empty() {
            return 0.0;
        }

        let shouting = words.iter().filter(|w| w.is_shouting()).count();
        let cap_diff = shouting > 0 && shouting < words.len();

        let mut sentiments: Vec<f64> = (0..words.len())
            .map(|i| self.valence_at(&words, i, cap_diff))
            .collect();
        apply_but_rule(&words, &mut sentiments);

        let mut sum: f64 = sentiments.iter().sum();
        if sum != 0.0 {
            sum += punctuation_emphasis(text).copysign(sum);
        }
        round4(squash(sum))
    }

    /// Adjusted valence of the word at `i`, or 0 if it carries none.
    fn valence_at(&self, words: &[Token<'_>], i: usize, cap_diff: bool) -> f64 {
        let word = &words[i];
        if BOOSTERS.contains_key(word.lower.as_str()) {
            return 0.0;
        }
        if word.lower == "kind" && words.get(i + 1).is_some_and(|next| next.lower == "of") {
            return 0.0;
        }
        let Some(mut valence) = self.lexicon.valence(&word.lower) else {
            return 0.0;
        };

        if cap_diff && word.is_shouting() {
            valence += C_INCR.copysign(valence);
        }

        for (back, decay) in BOOSTER_DECAY.iter().enumerate().map(|(b, d)| (b + 1, d)) {
            if i < back {
                break;
            }
            let prev = &words[i - back];
            if self.lexicon.contains(&prev.lower) {
                continue;
            }
            valence += booster_scalar(prev, valence, cap_diff) * decay;
            if is_negator(&prev.lower) {
                valence *= N_SCALAR;
            }
        }

        valence
    }
}

impl SentimentMethod for CompoundMethod {
    fn name(&self) -> &'static str {
        "compound"
    }

    fn score(&self, text: &str) -> SentimentScore {
        let value = self.compound(text);
        SentimentScore {
            label: SentimentLabel::from_compound(value),
            value,
        }
    }
}

/// Boost contributed by a preceding word, signed to match `valence`.
fn booster_scalar(prev: &Token<'_>, valence: f64, cap_diff: bool) -> f64 {
    let Some(&boost) = BOOSTERS.get(prev.lower.as_str()) else {
        return 0.0;
    };
    let mut scalar = if valence < 0.0 { -boost } else { boost };
    if cap_diff && prev.is_shouting() {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

fn apply_but_rule(words: &[Token<'_>], sentiments: &mut [f64]) {
    let Some(but) = words.iter().position(|w| w.lower == "but") else {
        return;
    };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < but {
            *s *= 0.5;
        } else if i > but {
            *s *= 1.5;
        }
    }
}

/// Magnitude added for `!` (up to four) and repeated `?`.
fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.chars().filter(|&c| c == '!').count().min(4);
    let questions = text.chars().filter(|&c| c == '?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    exclamations as f64 * 0.292 + question_amp
}

fn squash(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
