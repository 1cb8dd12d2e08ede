//! Annotated records: a fetched post plus its normalised text and two sentiment readings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::post::{EngagementCounts, Post};

/// Dead band around zero for compound (lexicon) scores.
pub const COMPOUND_THRESHOLD: f64 = 0.05;

/// Discrete sentiment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// Label for a compound score: `>= 0.05` positive, `<= -0.05` negative.
    pub fn from_compound(score: f64) -> Self {
        if score >= COMPOUND_THRESHOLD {
            Self::Positive
        } else if score <= -COMPOUND_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Label for a polarity score: the sign alone decides, zero is neutral.
    pub fn from_polarity(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else if score < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sentiment label: {0:?} (expected positive, negative or neutral)")]
pub struct ParseLabelError(pub String);

impl FromStr for SentimentLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" | "pos" => Ok(Self::Positive),
            "negative" | "neg" => Ok(Self::Negative),
            "neutral" | "neu" => Ok(Self::Neutral),
            _ => Err(ParseLabelError(s.to_string())),
        }
    }
}

/// A continuous sentiment score paired with its derived label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub label: SentimentLabel,
    pub value: f64,
}

impl SentimentScore {
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            value: 0.0,
        }
    }
}

/// A post annotated with normalised text and both sentiment readings.
///
/// Immutable after construction: all fields are exposed through accessors only.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRecord {
    post: Post,
    normalized_text: String,
    lexicon: SentimentScore,
    polarity: SentimentScore,
}

impl AnnotatedRecord {
    pub fn new(
        post: Post,
        normalized_text: String,
        lexicon: SentimentScore,
        polarity: SentimentScore,
    ) -> Self {
        Self {
            post,
            normalized_text,
            lexicon,
            polarity,
        }
    }

    pub fn id(&self) -> &str {
        &self.post.id
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.post.created_at
    }

    pub fn author_id(&self) -> Option<&str> {
        self.post.author_id.as_deref()
    }

    /// Raw text as fetched.
    pub fn text(&self) -> &str {
        &self.post.text
    }

    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    pub fn metrics(&self) -> EngagementCounts {
        self.post.metrics
    }

    pub fn lexicon_label(&self) -> SentimentLabel {
        self.lexicon.label
    }

    pub fn lexicon_score(&self) -> f64 {
        self.lexicon.value
    }

    pub fn polarity_label(&self) -> SentimentLabel {
        self.polarity.label
    }

    pub fn polarity_score(&self) -> f64 {
        self.polarity.value
    }

    pub fn post(&self) -> &Post {
        &self.post
    }
}
