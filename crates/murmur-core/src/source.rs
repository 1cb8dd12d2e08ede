//! The seam between the analysis pipeline and the remote search service.

use async_trait::async_trait;

use crate::post::Post;

/// Upper bound on posts requested per search.
pub const MAX_RESULTS_LIMIT: u8 = 100;

/// Something that can return recent posts matching a keyword.
///
/// Implementations perform a single best-effort request: no retries,
/// pagination, or rate limiting. Posts are returned in response order.
#[async_trait]
pub trait PostSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn search(&self, keyword: &str, max_results: u8) -> Result<Vec<Post>, Self::Error>;
}
