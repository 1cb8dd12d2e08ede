//! Analysis state and views: the in-memory session, label/search filtering,
//! summaries, CSV export, and the fetch-and-analyze pipeline that ties them together.

mod error;
pub use error::{AnalysisError, StoreError};

pub mod export;
pub mod filter;
pub mod pipeline;
pub mod session;
pub mod summary;

pub use filter::{RecordFilter, view};
pub use pipeline::{AnalysisOutcome, fetch_and_analyze};
pub use session::{AnalysisSession, Snapshot};
pub use summary::{Histogram, LabelCounts, Summary};
