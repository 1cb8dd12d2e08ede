//! Posts as returned by the remote search collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public engagement counters attached to a post.
///
/// Missing counters on the wire decode to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementCounts {
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
}

/// A short social-media post matching a search keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub author_id: Option<String>,
    /// Raw text exactly as fetched.
    pub text: String,
    pub metrics: EngagementCounts,
}

impl Post {
    /// Convenience constructor for a post with no timestamp, author, or engagement.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: None,
            author_id: None,
            text: text.into(),
            metrics: EngagementCounts::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn post_json_roundtrip() {
        let post = Post {
            id: "1790000000000000001".into(),
            created_at: Some(Utc.with_ymd_and_hms(2026, 4, 12, 18, 30, 0).unwrap()),
            author_id: Some("42".into()),
            text: "Great match today! #IPL".into(),
            metrics: EngagementCounts {
                likes: 10,
                retweets: 4,
                replies: 2,
            },
        };
        let json = serde_json::to_string(&post).unwrap();
        let parsed: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, post);
    }

    #[test]
    fn new_post_has_defaults() {
        let post = Post::new("1", "hi");
        assert!(post.created_at.is_none());
        assert!(post.author_id.is_none());
        assert_eq!(post.metrics, EngagementCounts::default());
    }
}
