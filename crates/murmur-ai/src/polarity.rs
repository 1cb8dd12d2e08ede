//! Pattern-based polarity: the mean of per-word assessments.
//!
//! Every sentiment word in the polarity lexicon yields one assessment. A modifier
//! directly in front ("very good") multiplies it by the modifier's intensity, and a
//! negator up to three words back ("not a good") multiplies it by -0.5.

use std::sync::Arc;

use murmur_core::{SentimentLabel, SentimentScore};

use crate::lexicon::PolarityLexicon;
use crate::scorer::SentimentMethod;
use crate::tokens::{is_negator, tokenize};

const NEGATION_SCALAR: f64 = -0.5;
const NEGATION_WINDOW: usize = 3;

/// Method B: polarity in [-1, 1], labelled by sign alone.
#[derive(Debug, Clone)]
pub struct PolarityMethod {
    lexicon: Arc<PolarityLexicon>,
}

impl PolarityMethod {
    pub fn new(lexicon: Arc<PolarityLexicon>) -> Self {
        Self { lexicon }
    }

    pub fn polarity(&self, text: &str) -> f64 {
        let words = tokenize(text);
        let mut assessments = Vec::new();
        let mut negated_at: Option<usize> = None;
        let mut intensity = 1.0;

        for (i, word) in words.iter().enumerate() {
            if is_negator(&word.lower) {
                negated_at = Some(i);
                intensity = 1.0;
                continue;
            }
            let Some(entry) = self.lexicon.get(&word.lower) else {
                intensity = 1.0;
                continue;
            };

            if entry.is_modifier() {
                let modifies_next = words
                    .get(i + 1)
                    .is_some_and(|next| self.lexicon.get(&next.lower).is_some());
                if modifies_next {
                    intensity *= entry.intensity;
                    continue;
                }
                if entry.polarity == 0.0 {
                    intensity = 1.0;
                    continue;
                }
            }

            let mut p = entry.polarity * intensity;
            if negated_at.is_some_and(|n| i - n <= NEGATION_WINDOW) {
                p *= NEGATION_SCALAR;
                negated_at = None;
            }
            assessments.push(p.clamp(-1.0, 1.0));
            intensity = 1.0;
        }

        if assessments.is_empty() {
            return 0.0;
        }
        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

impl SentimentMethod for PolarityMethod {
    fn name(&self) -> &'static str {
        "polarity"
    }

    fn score(&self, text: &str) -> SentimentScore {
        let value = self.polarity(text);
        SentimentScore {
            label: SentimentLabel::from_polarity(value),
            value,
        }
    }
}
