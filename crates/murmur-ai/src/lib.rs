//! Sentiment scoring: lexicon loading, the compound and polarity methods, and
//! the record builder that annotates fetched posts.

mod builder;
mod compound;
mod lexicon;
mod polarity;
mod scorer;
mod tokens;

pub use builder::{build, build_all};
pub use compound::CompoundMethod;
pub use lexicon::{LexiconError, Lexicons, PolarityEntry, PolarityLexicon, ValenceLexicon};
pub use polarity::PolarityMethod;
pub use scorer::{Sentiment, SentimentMethod, SentimentScorer};
