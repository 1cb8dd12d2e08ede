//! In-memory analysis session: the current dataset and when it was produced.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use murmur_core::AnnotatedRecord;
use parking_lot::RwLock;
use tracing::info;

/// An immutable dataset paired with the keyword it was searched for and its
/// analysis timestamp.
#[derive(Debug, Default)]
pub struct Snapshot {
    records: Vec<AnnotatedRecord>,
    keyword: String,
    updated_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn records(&self) -> &[AnnotatedRecord] {
        &self.records
    }

    /// Search keyword that produced these records; empty before the first replacement.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Absent until the first successful replacement.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Holds the most recently analysed dataset across interactions.
///
/// Replacement swaps in a whole new [`Snapshot`], so readers holding the
/// previous `Arc` keep a complete, consistent view and never see a mix of
/// old and new records or a mismatched timestamp.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    current: RwLock<Arc<Snapshot>>,
}

impl AnalysisSession {
    /// An empty session with no timestamp.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held dataset, its keyword, and timestamp together.
    pub fn replace(
        &self,
        records: Vec<AnnotatedRecord>,
        keyword: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) {
        let snapshot = Arc::new(Snapshot {
            records,
            keyword: keyword.into(),
            updated_at: Some(timestamp),
        });
        info!(
            count = snapshot.len(),
            keyword = %snapshot.keyword,
            at = %timestamp,
            "analysis session replaced"
        );
        *self.current.write() = snapshot;
    }

    /// The current dataset and its timestamp.
    pub fn current(&self) -> Arc<Snapshot> {
        self.current.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use murmur_core::{Post, SentimentScore};
    use std::thread;

    fn records(prefix: &str, n: usize) -> Vec<AnnotatedRecord> {
        (0..n)
            .map(|i| {
                AnnotatedRecord::new(
                    Post::new(format!("{prefix}-{i}"), "text"),
                    "text".into(),
                    SentimentScore::neutral(),
                    SentimentScore::neutral(),
                )
            })
            .collect()
    }

    #[test]
    fn starts_empty_without_timestamp() {
        let session = AnalysisSession::new();
        let snap = session.current();
        assert!(snap.is_empty());
        assert!(snap.updated_at().is_none());
        assert_eq!(snap.keyword(), "");
    }

    #[test]
    fn replace_swaps_records_and_timestamp() {
        let session = AnalysisSession::new();
        let t1 = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap();

        session.replace(records("a", 3), "#IPL", t1);
        let first = session.current();
        assert_eq!(first.len(), 3);
        assert_eq!(first.updated_at(), Some(t1));
        assert_eq!(first.keyword(), "#IPL");

        session.replace(records("b", 1), "football", t2);
        let second = session.current();
        assert_eq!(second.len(), 1);
        assert_eq!(second.records()[0].id(), "b-0");
        assert_eq!(second.updated_at(), Some(t2));
        assert_eq!(second.keyword(), "football");

        // The earlier snapshot is unaffected by the replacement.
        assert_eq!(first.len(), 3);
        assert_eq!(first.records()[0].id(), "a-0");
        assert_eq!(first.keyword(), "#IPL");
    }

    #[test]
    fn replace_with_empty_dataset_keeps_timestamp() {
        let session = AnalysisSession::new();
        let t = Utc.with_ymd_and_hms(2026, 5, 5, 5, 5, 5).unwrap();
        session.replace(Vec::new(), "x", t);
        let snap = session.current();
        assert!(snap.is_empty());
        assert_eq!(snap.updated_at(), Some(t));
    }

    #[test]
    fn concurrent_readers_see_whole_snapshots() {
        let session = Arc::new(AnalysisSession::new());
        let t0 = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        session.replace(records("gen0", 50), "gen0", t0);

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let session = Arc::clone(&session);
                thread::spawn(move || {
                    for _ in 0..2_000 {
                        let snap = session.current();
                        let first = snap.records()[0].id().to_string();
                        let prefix = first.split('-').next().unwrap().to_string();
                        // Every record in a snapshot belongs to the same generation,
                        // and the timestamp matches that generation.
                        assert!(snap.records().iter().all(|r| r.id().starts_with(&prefix)));
                        assert_eq!(snap.keyword(), prefix);
                        let generation: i64 = prefix.trim_start_matches("gen").parse().unwrap();
                        assert_eq!(snap.len(), 50 + generation as usize);
                        assert_eq!(
                            snap.updated_at().unwrap(),
                            t0 + chrono::TimeDelta::seconds(generation)
                        );
                    }
                })
            })
            .collect();

        for generation in 1..200i64 {
            session.replace(
                records(&format!("gen{generation}"), 50 + generation as usize),
                format!("gen{generation}"),
                t0 + chrono::TimeDelta::seconds(generation),
            );
        }

        for reader in readers {
            reader.join().unwrap();
        }
    }
}
