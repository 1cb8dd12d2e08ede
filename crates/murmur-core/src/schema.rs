//! Arrow schema for annotated records, used for tabular export.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray, TimestampMillisecondArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use crate::record::AnnotatedRecord;

/// Timezone of `created_at`. Offset form, so formatting needs no tz database.
pub const CREATED_AT_TZ: &str = "+00:00";

/// Column names in export order.
pub const RECORD_COLUMNS: [&str; 12] = [
    "id",
    "created_at",
    "author_id",
    "text",
    "clean_text",
    "likes",
    "retweets",
    "replies",
    "lexicon_sentiment",
    "polarity_sentiment",
    "lexicon_score",
    "polarity_score",
];

/// Schema for a batch of annotated records.
pub fn records_schema() -> Schema {
    Schema::new(vec![
        Field::new("id", DataType::Utf8, false),
        Field::new(
            "created_at",
            DataType::Timestamp(TimeUnit::Millisecond, Some(CREATED_AT_TZ.into())),
            true,
        ),
        Field::new("author_id", DataType::Utf8, true),
        Field::new("text", DataType::Utf8, false),
        Field::new("clean_text", DataType::Utf8, false),
        Field::new("likes", DataType::UInt64, false),
        Field::new("retweets", DataType::UInt64, false),
        Field::new("replies", DataType::UInt64, false),
        Field::new("lexicon_sentiment", DataType::Utf8, false),
        Field::new("polarity_sentiment", DataType::Utf8, false),
        Field::new("lexicon_score", DataType::Float64, false),
        Field::new("polarity_score", DataType::Float64, false),
    ])
}

/// Build a single RecordBatch holding every record, in order.
pub fn records_to_batch(records: &[AnnotatedRecord]) -> Result<RecordBatch, ArrowError> {
    let ids = StringArray::from_iter_values(records.iter().map(|r| r.id()));
    let created = TimestampMillisecondArray::from(
        records
            .iter()
            .map(|r| r.created_at().map(|t| t.timestamp_millis()))
            .collect::<Vec<_>>(),
    )
    .with_timezone(CREATED_AT_TZ);
    let authors = StringArray::from(records.iter().map(|r| r.author_id()).collect::<Vec<_>>());
    let texts = StringArray::from_iter_values(records.iter().map(|r| r.text()));
    let clean = StringArray::from_iter_values(records.iter().map(|r| r.normalized_text()));
    let likes = UInt64Array::from_iter_values(records.iter().map(|r| r.metrics().likes));
    let retweets = UInt64Array::from_iter_values(records.iter().map(|r| r.metrics().retweets));
    let replies = UInt64Array::from_iter_values(records.iter().map(|r| r.metrics().replies));
    let lexicon_labels =
        StringArray::from_iter_values(records.iter().map(|r| r.lexicon_label().as_str()));
    let polarity_labels =
        StringArray::from_iter_values(records.iter().map(|r| r.polarity_label().as_str()));
    let lexicon_scores = Float64Array::from_iter_values(records.iter().map(|r| r.lexicon_score()));
    let polarity_scores =
        Float64Array::from_iter_values(records.iter().map(|r| r.polarity_score()));

    let columns: Vec<ArrayRef> = vec![
        Arc::new(ids),
        Arc::new(created),
        Arc::new(authors),
        Arc::new(texts),
        Arc::new(clean),
        Arc::new(likes),
        Arc::new(retweets),
        Arc::new(replies),
        Arc::new(lexicon_labels),
        Arc::new(polarity_labels),
        Arc::new(lexicon_scores),
        Arc::new(polarity_scores),
    ];

    RecordBatch::try_new(Arc::new(records_schema()), columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Post, SentimentLabel, SentimentScore};
    use arrow::array::Array;
    use chrono::{TimeZone, Utc};

    fn record(id: &str, author: Option<&str>) -> AnnotatedRecord {
        let mut post = Post::new(id, "text");
        post.author_id = author.map(str::to_string);
        post.created_at = Some(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap());
        AnnotatedRecord::new(
            post,
            "text".into(),
            SentimentScore {
                label: SentimentLabel::Positive,
                value: 0.5,
            },
            SentimentScore::neutral(),
        )
    }

    #[test]
    fn schema_matches_column_list() {
        let schema = records_schema();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, RECORD_COLUMNS);
    }

    #[test]
    fn batch_has_one_row_per_record() {
        let batch = records_to_batch(&[record("1", Some("a")), record("2", None)]).unwrap();
        assert_eq!(batch.num_rows(), 2);
        assert_eq!(batch.num_columns(), RECORD_COLUMNS.len());

        let authors = batch
            .column_by_name("author_id")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(authors.value(0), "a");
        assert!(authors.is_null(1));

        let labels = batch
            .column_by_name("lexicon_sentiment")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(labels.value(1), "Positive");
    }

    #[test]
    fn created_at_column_matches_schema_timezone() {
        let batch = records_to_batch(&[record("1", None)]).unwrap();
        let created = batch.column_by_name("created_at").unwrap();
        assert_eq!(
            created.data_type(),
            &DataType::Timestamp(TimeUnit::Millisecond, Some(CREATED_AT_TZ.into()))
        );
        let display = arrow::util::display::ArrayFormatter::try_new(
            created.as_ref(),
            &arrow::util::display::FormatOptions::default(),
        )
        .unwrap();
        assert_eq!(display.value(0).to_string(), "2026-03-01T12:00:00Z");
    }

    #[test]
    fn empty_batch() {
        let batch = records_to_batch(&[]).unwrap();
        assert_eq!(batch.num_rows(), 0);
    }
}
