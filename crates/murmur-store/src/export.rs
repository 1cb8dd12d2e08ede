//! CSV export of the full analysed dataset.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use arrow::csv::WriterBuilder;
use chrono::NaiveDateTime;
use murmur_core::AnnotatedRecord;
use murmur_core::schema::records_to_batch;
use tracing::info;

use crate::StoreError;
use crate::session::Snapshot;

/// Write every record as one CSV row, with a header row of column names.
pub fn write_csv<W: Write>(records: &[AnnotatedRecord], writer: W) -> Result<(), StoreError> {
    let batch = records_to_batch(records)?;
    let mut csv = WriterBuilder::new().with_header(true).build(writer);
    csv.write(&batch)?;
    Ok(())
}

/// `murmur_sentiment_{keyword}_{YYYYmmdd_HHMMSS}.csv`, keyword reduced to `[A-Za-z0-9_-]`.
pub fn export_filename(keyword: &str, at: NaiveDateTime) -> String {
    let cleaned: String = keyword
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('_');
    let keyword = if cleaned.is_empty() { "all" } else { cleaned };
    format!(
        "murmur_sentiment_{keyword}_{}.csv",
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Export the snapshot's full dataset into `dir`, returning the written path.
/// The file name embeds the keyword the snapshot was searched for.
///
/// The CSV is rendered in memory first; the file is only created once the
/// whole dataset has been formatted.
pub fn export_csv(
    dir: &Path,
    snapshot: &Snapshot,
    at: NaiveDateTime,
) -> Result<PathBuf, StoreError> {
    if snapshot.is_empty() {
        return Err(StoreError::EmptyDataset);
    }
    let mut buf = Vec::new();
    write_csv(snapshot.records(), &mut buf)?;
    let path = dir.join(export_filename(snapshot.keyword(), at));
    fs::write(&path, buf)?;
    info!(path = %path.display(), rows = snapshot.len(), "exported dataset");
    Ok(path)
}
