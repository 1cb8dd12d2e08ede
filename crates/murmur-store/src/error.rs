use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no analysed records to export")]
    EmptyDataset,

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a fetch-and-analyze run. The session is left untouched.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("fetch failed: {0}")]
    Fetch(#[source] Box<dyn std::error::Error + Send + Sync>),
}
