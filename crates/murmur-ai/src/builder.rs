//! Record builder: turns fetched posts into annotated records.

use murmur_core::{AnnotatedRecord, Post, normalize};
use rayon::prelude::*;
use tracing::debug;

use crate::scorer::{SentimentMethod, SentimentScorer};

/// Annotate a single post. Never fails: text that normalises to nothing
/// still yields a record, with neutral scores.
pub fn build<A, B>(scorer: &SentimentScorer<A, B>, post: Post) -> AnnotatedRecord
where
    A: SentimentMethod,
    B: SentimentMethod,
{
    let normalized = normalize(&post.text);
    let sentiment = scorer.score(&normalized);
    AnnotatedRecord::new(post, normalized, sentiment.lexicon, sentiment.polarity)
}

/// Annotate a batch of posts, one record per post, in input order.
///
/// Posts are scored in parallel; scoring shares no mutable state, and the
/// indexed collect keeps the output aligned with the input.
pub fn build_all<A, B>(scorer: &SentimentScorer<A, B>, posts: Vec<Post>) -> Vec<AnnotatedRecord>
where
    A: SentimentMethod,
    B: SentimentMethod,
{
    let count = posts.len();
    let records: Vec<AnnotatedRecord> = posts
        .into_par_iter()
        .map(|post| build(scorer, post))
        .collect();
    debug!(count, "annotated posts");
    records
}
