//! Fetch-and-analyze: one best-effort search, annotation, and session replacement.

use chrono::Utc;
use murmur_ai::{SentimentMethod, SentimentScorer, build_all};
use murmur_core::PostSource;
use tracing::{info, warn};

use crate::error::AnalysisError;
use crate::session::AnalysisSession;

/// Non-error outcomes of a fetch-and-analyze run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// The session now holds this many freshly analysed records.
    Analyzed { count: usize },
    /// The search succeeded but matched nothing; the session is unchanged.
    NoMatches,
}

/// Search `source` once, annotate the posts, and replace the session's dataset.
///
/// On failure or an empty result the session keeps whatever it held before.
pub async fn fetch_and_analyze<S, A, B>(
    source: &S,
    scorer: &SentimentScorer<A, B>,
    session: &AnalysisSession,
    keyword: &str,
    max_results: u8,
) -> Result<AnalysisOutcome, AnalysisError>
where
    S: PostSource,
    A: SentimentMethod,
    B: SentimentMethod,
{
    info!(keyword, max_results, "fetching posts");
    let posts = source
        .search(keyword, max_results)
        .await
        .map_err(|e| AnalysisError::Fetch(Box::new(e)))?;

    if posts.is_empty() {
        warn!(keyword, "no posts matched");
        return Ok(AnalysisOutcome::NoMatches);
    }

    let records = build_all(scorer, posts);
    let count = records.len();
    session.replace(records, keyword, Utc::now());
    info!(keyword, count, "analysed posts");
    Ok(AnalysisOutcome::Analyzed { count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use murmur_ai::Lexicons;
    use murmur_core::Post;
    use std::sync::Mutex;

    #[derive(Debug, thiserror::Error)]
    #[error("unauthorized")]
    struct Unauthorized;

    /// Serves canned responses in order and records each request.
    struct FakeSource {
        responses: Mutex<Vec<Result<Vec<Post>, Unauthorized>>>,
        requests: Mutex<Vec<(String, u8)>>,
    }

    impl FakeSource {
        fn new(responses: Vec<Result<Vec<Post>, Unauthorized>>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().rev().collect()),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PostSource for FakeSource {
        type Error = Unauthorized;

        async fn search(&self, keyword: &str, max_results: u8) -> Result<Vec<Post>, Unauthorized> {
            self.requests
                .lock()
                .unwrap()
                .push((keyword.to_string(), max_results));
            self.responses.lock().unwrap().pop().unwrap_or(Ok(Vec::new()))
        }
    }

    fn scorer() -> SentimentScorer {
        SentimentScorer::from_lexicons(&Lexicons::load_default().unwrap())
    }

    fn posts() -> Vec<Post> {
        vec![
            Post::new("1", "Great match today! #IPL @someone https://x.co"),
            Post::new("2", "awful batting collapse"),
        ]
    }

    #[tokio::test]
    async fn successful_fetch_replaces_session() {
        let source = FakeSource::new(vec![Ok(posts())]);
        let session = AnalysisSession::new();

        let outcome = fetch_and_analyze(&source, &scorer(), &session, "#IPL", 50)
            .await
            .unwrap();

        assert_eq!(outcome, AnalysisOutcome::Analyzed { count: 2 });
        let snap = session.current();
        assert_eq!(snap.len(), 2);
        assert!(snap.updated_at().is_some());
        assert_eq!(snap.keyword(), "#IPL");
        assert_eq!(snap.records()[0].id(), "1");
        assert_eq!(snap.records()[0].normalized_text(), "Great match today");
        assert_eq!(
            source.requests.lock().unwrap().as_slice(),
            [("#IPL".to_string(), 50)]
        );
    }

    #[tokio::test]
    async fn empty_result_leaves_session_unchanged() {
        let source = FakeSource::new(vec![Ok(posts()), Ok(Vec::new())]);
        let session = AnalysisSession::new();
        let scorer = scorer();

        fetch_and_analyze(&source, &scorer, &session, "#IPL", 50)
            .await
            .unwrap();
        let before = session.current();

        let outcome = fetch_and_analyze(&source, &scorer, &session, "#nothing", 50)
            .await
            .unwrap();
        assert_eq!(outcome, AnalysisOutcome::NoMatches);

        let after = session.current();
        assert_eq!(after.len(), 2);
        assert_eq!(after.updated_at(), before.updated_at());
        assert_eq!(after.keyword(), "#IPL");
    }

    #[tokio::test]
    async fn empty_result_on_fresh_session() {
        let source = FakeSource::new(vec![Ok(Vec::new())]);
        let session = AnalysisSession::new();

        let outcome = fetch_and_analyze(&source, &scorer(), &session, "x", 10)
            .await
            .unwrap();
        assert_eq!(outcome, AnalysisOutcome::NoMatches);
        assert!(session.current().updated_at().is_none());
    }

    #[tokio::test]
    async fn fetch_failure_propagates_and_keeps_session() {
        let source = FakeSource::new(vec![Ok(posts()), Err(Unauthorized)]);
        let session = AnalysisSession::new();
        let scorer = scorer();

        fetch_and_analyze(&source, &scorer, &session, "#IPL", 50)
            .await
            .unwrap();
        let err = fetch_and_analyze(&source, &scorer, &session, "football", 50)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "fetch failed: unauthorized");
        let AnalysisError::Fetch(source_err) = err;
        assert!(source_err.downcast_ref::<Unauthorized>().is_some());
        assert_eq!(session.current().len(), 2);
        assert_eq!(session.current().keyword(), "#IPL");
    }
}
