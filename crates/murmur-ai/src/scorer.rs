//! The sentiment scorer: two independent methods applied to the same text.

use murmur_core::SentimentScore;

use crate::compound::CompoundMethod;
use crate::lexicon::Lexicons;
use crate::polarity::PolarityMethod;

/// A stateless scoring method producing a continuous score and its label.
///
/// Implementations must be referentially transparent: the same text always
/// yields the same score, and calls share no mutable state.
pub trait SentimentMethod: Send + Sync {
    fn name(&self) -> &'static str;

    fn score(&self, text: &str) -> SentimentScore;
}

/// Both readings for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub lexicon: SentimentScore,
    pub polarity: SentimentScore,
}

/// Holds a fixed pair of methods: a lexicon/compound method and a polarity method.
pub struct SentimentScorer<A = CompoundMethod, B = PolarityMethod> {
    lexicon: A,
    polarity: B,
}

impl SentimentScorer {
    /// Build the default scorer from lexicons loaded at startup.
    pub fn from_lexicons(lexicons: &Lexicons) -> Self {
        Self::new(
            CompoundMethod::new(lexicons.valence.clone()),
            PolarityMethod::new(lexicons.polarity.clone()),
        )
    }
}

impl<A: SentimentMethod, B: SentimentMethod> SentimentScorer<A, B> {
    pub fn new(lexicon: A, polarity: B) -> Self {
        Self { lexicon, polarity }
    }

    /// Score text under both methods. Never fails; empty text is neutral.
    pub fn score(&self, text: &str) -> Sentiment {
        Sentiment {
            lexicon: self.lexicon.score(text),
            polarity: self.polarity.score(text),
        }
    }

    /// Names of the two methods, lexicon first.
    pub fn method_names(&self) -> (&'static str, &'static str) {
        (self.lexicon.name(), self.polarity.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use murmur_core::{SentimentLabel, normalize};

    fn scorer() -> SentimentScorer {
        SentimentScorer::from_lexicons(&Lexicons::load_default().unwrap())
    }

    #[test]
    fn great_match_scenario() {
        let text = normalize("Great match today! #IPL @someone https://x.co");
        assert_eq!(text, "Great match today");

        let s = scorer().score(&text);
        assert!(s.lexicon.value > 0.05, "compound {}", s.lexicon.value);
        assert_eq!(s.lexicon.label, SentimentLabel::Positive);
        assert!(s.polarity.value > 0.0, "polarity {}", s.polarity.value);
        assert_eq!(s.polarity.label, SentimentLabel::Positive);
    }

    #[test]
    fn celebratory_post_is_positive_under_both() {
        let s = scorer().score("Congrats we won the final thanks");
        assert_eq!(s.lexicon.label, SentimentLabel::Positive);
        assert_eq!(s.polarity.label, SentimentLabel::Positive);
    }

    #[test]
    fn empty_text_is_neutral_under_both() {
        let s = scorer().score("");
        assert_eq!(s.lexicon, SentimentScore::neutral());
        assert_eq!(s.polarity, SentimentScore::neutral());
    }

    #[test]
    fn negative_text() {
        let s = scorer().score("worst performance ever so disappointing");
        assert_eq!(s.lexicon.label, SentimentLabel::Negative);
        assert_eq!(s.polarity.label, SentimentLabel::Negative);
    }

    #[test]
    fn labels_follow_scores() {
        let scorer = scorer();
        for text in [
            "good",
            "not good",
            "meh whatever",
            "I hate this but the ending was great",
            "very very bad",
        ] {
            let s = scorer.score(text);
            assert_eq!(s.lexicon.label, SentimentLabel::from_compound(s.lexicon.value));
            assert_eq!(s.polarity.label, SentimentLabel::from_polarity(s.polarity.value));
        }
    }

    #[test]
    fn scoring_is_repeatable() {
        let scorer = scorer();
        let a = scorer.score("what a brilliant catch");
        let b = scorer.score("what a brilliant catch");
        assert_eq!(a, b);
    }

    #[test]
    fn method_names() {
        assert_eq!(scorer().method_names(), ("compound", "polarity"));
    }
}
