//! Sentiment lexicons, loaded once at startup and shared by the scoring methods.
//!
//! Two tab-separated formats are supported:
//!
//! - **valence**: `word<TAB>mean[<TAB>...]` on a -4..4 scale. Extra columns are
//!   ignored, so a standard VADER lexicon file loads as-is.
//! - **polarity**: `word<TAB>polarity<TAB>intensity`, polarity in -1..1. An
//!   intensity other than 1.0 marks the word as a modifier of the next word.
//!
//! Blank lines and lines starting with `#` are skipped. Words are lowercased.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

const DEFAULT_VALENCE: &str = include_str!("../data/valence.tsv");
const DEFAULT_POLARITY: &str = include_str!("../data/polarity.tsv");

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Word → valence mapping for the compound method.
#[derive(Debug, Clone, Default)]
pub struct ValenceLexicon {
    words: HashMap<String, f64>,
}

impl ValenceLexicon {
    /// Parse a valence lexicon from its text form.
    pub fn parse(text: &str) -> Result<Self, LexiconError> {
        let mut words = HashMap::new();
        for (line, cols) in entries(text) {
            let word = cols[0];
            let value = cols
                .get(1)
                .ok_or_else(|| parse_error(line, format!("missing valence for {word:?}")))?;
            let value: f64 = value
                .parse()
                .map_err(|_| parse_error(line, format!("invalid valence {value:?}")))?;
            words.insert(word.to_lowercase(), value);
        }
        Ok(Self { words })
    }

    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        Self::parse(&read(path)?)
    }

    /// Valence of a lowercased word, if it carries sentiment.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Polarity and modifier intensity of a single word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityEntry {
    pub polarity: f64,
    pub intensity: f64,
}

impl PolarityEntry {
    /// Modifiers scale the word that follows them rather than being assessed.
    pub fn is_modifier(&self) -> bool {
        self.intensity != 1.0
    }
}

/// Word → polarity mapping for the pattern-based polarity method.
#[derive(Debug, Clone, Default)]
pub struct PolarityLexicon {
    words: HashMap<String, PolarityEntry>,
}

impl PolarityLexicon {
    pub fn parse(text: &str) -> Result<Self, LexiconError> {
        let mut words = HashMap::new();
        for (line, cols) in entries(text) {
            let word = cols[0];
            if cols.len() < 3 {
                return Err(parse_error(
                    line,
                    format!("expected word, polarity and intensity for {word:?}"),
                ));
            }
            let polarity: f64 = cols[1]
                .parse()
                .map_err(|_| parse_error(line, format!("invalid polarity {:?}", cols[1])))?;
            let intensity: f64 = cols[2]
                .parse()
                .map_err(|_| parse_error(line, format!("invalid intensity {:?}", cols[2])))?;
            words.insert(
                word.to_lowercase(),
                PolarityEntry {
                    polarity,
                    intensity,
                },
            );
        }
        Ok(Self { words })
    }

    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        Self::parse(&read(path)?)
    }

    pub fn get(&self, word: &str) -> Option<PolarityEntry> {
        self.words.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Both lexicons, shared by reference into the scoring methods.
#[derive(Debug, Clone)]
pub struct Lexicons {
    pub valence: Arc<ValenceLexicon>,
    pub polarity: Arc<PolarityLexicon>,
}

impl Lexicons {
    /// Load the embedded default lexicons.
    pub fn load_default() -> Result<Self, LexiconError> {
        Self::load(None, None)
    }

    /// Load lexicons, replacing either default with a file when a path is given.
    pub fn load(
        valence_path: Option<&Path>,
        polarity_path: Option<&Path>,
    ) -> Result<Self, LexiconError> {
        let valence = match valence_path {
            Some(path) => ValenceLexicon::from_path(path)?,
            None => ValenceLexicon::parse(DEFAULT_VALENCE)?,
        };
        let polarity = match polarity_path {
            Some(path) => PolarityLexicon::from_path(path)?,
            None => PolarityLexicon::parse(DEFAULT_POLARITY)?,
        };
        info!(
            valence_words = valence.len(),
            polarity_words = polarity.len(),
            "loaded sentiment lexicons"
        );
        Ok(Self {
            valence: Arc::new(valence),
            polarity: Arc::new(polarity),
        })
    }
}

// ── Parsing helpers ──

/// Yield `(line_number, columns)` for every non-comment, non-blank line.
fn entries(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines().enumerate().filter_map(|(i, line)| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        let cols: Vec<&str> = trimmed.split('\t').map(str::trim).collect();
        Some((i + 1, cols))
    })
}

fn parse_error(line: usize, reason: String) -> LexiconError {
    LexiconError::Parse { line, reason }
}

fn read(path: &Path) -> Result<String, LexiconError> {
    std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })
}
