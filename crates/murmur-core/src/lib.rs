pub mod normalize;
pub mod post;
pub mod record;
pub mod schema;
pub mod source;

pub use normalize::normalize;
pub use post::{EngagementCounts, Post};
pub use record::{AnnotatedRecord, ParseLabelError, SentimentLabel, SentimentScore};
pub use source::PostSource;
