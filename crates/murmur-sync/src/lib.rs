//! Remote search: fetches recent posts matching a keyword over HTTP.

pub mod http;

pub use http::{SearchClient, SearchError};
