//! Label and text filtering over an analysed dataset.
//!
//! A record is kept when its lexicon label is one of the allowed labels AND,
//! if a non-empty search term is given, its raw text contains the term
//! case-insensitively. Each record is evaluated on its own; output keeps the
//! input order.

use std::collections::HashSet;

use murmur_core::{AnnotatedRecord, SentimentLabel};

/// A reusable label + search predicate.
#[derive(Debug, Clone)]
pub struct RecordFilter {
    labels: HashSet<SentimentLabel>,
    /// Lowercased search term; `None` when absent or empty.
    needle: Option<String>,
}

impl RecordFilter {
    /// An empty label set matches nothing.
    pub fn new(labels: impl IntoIterator<Item = SentimentLabel>, search: Option<&str>) -> Self {
        Self {
            labels: labels.into_iter().collect(),
            needle: search.filter(|s| !s.is_empty()).map(str::to_lowercase),
        }
    }

    /// Every label allowed, no search term.
    pub fn all() -> Self {
        Self::new(SentimentLabel::ALL, None)
    }

    pub fn matches(&self, record: &AnnotatedRecord) -> bool {
        if !self.labels.contains(&record.lexicon_label()) {
            return false;
        }
        match &self.needle {
            Some(needle) => record.text().to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }

    pub fn apply<'a>(&self, records: &'a [AnnotatedRecord]) -> Vec<&'a AnnotatedRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Derive a view over `records` by lexicon label membership and optional search term.
pub fn view<'a>(
    records: &'a [AnnotatedRecord],
    allowed: &HashSet<SentimentLabel>,
    search: Option<&str>,
) -> Vec<&'a AnnotatedRecord> {
    RecordFilter::new(allowed.iter().copied(), search).apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use murmur_core::{Post, SentimentScore};

    fn record(id: &str, text: &str, label: SentimentLabel) -> AnnotatedRecord {
        AnnotatedRecord::new(
            Post::new(id, text),
            text.into(),
            SentimentScore { label, value: 0.0 },
            SentimentScore::neutral(),
        )
    }

    fn dataset() -> Vec<AnnotatedRecord> {
        vec![
            record("1", "Kohli is on FIRE tonight", SentimentLabel::Positive),
            record("2", "rain delay again", SentimentLabel::Negative),
            record("3", "toss at 7pm", SentimentLabel::Neutral),
            record("4", "what a fire spell by Bumrah", SentimentLabel::Positive),
            record("5", "Fireworks after the win", SentimentLabel::Neutral),
        ]
    }

    fn ids(view: &[&AnnotatedRecord]) -> Vec<String> {
        view.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn empty_label_set_yields_empty_view() {
        let data = dataset();
        assert!(view(&data, &HashSet::new(), None).is_empty());
        assert!(view(&data, &HashSet::new(), Some("fire")).is_empty());
    }

    #[test]
    fn all_labels_no_search_is_identity() {
        let data = dataset();
        let all: HashSet<_> = SentimentLabel::ALL.into_iter().collect();
        let v = view(&data, &all, None);
        assert_eq!(ids(&v), ["1", "2", "3", "4", "5"]);
        assert_eq!(ids(&RecordFilter::all().apply(&data)), ids(&v));
    }

    #[test]
    fn filters_by_lexicon_label() {
        let data = dataset();
        let pos: HashSet<_> = [SentimentLabel::Positive].into_iter().collect();
        assert_eq!(ids(&view(&data, &pos, None)), ["1", "4"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let data = dataset();
        let all: HashSet<_> = SentimentLabel::ALL.into_iter().collect();
        assert_eq!(ids(&view(&data, &all, Some("FiRe"))), ["1", "4", "5"]);
    }

    #[test]
    fn label_and_search_are_conjunctive() {
        let data = dataset();
        let neutral: HashSet<_> = [SentimentLabel::Neutral].into_iter().collect();
        assert_eq!(ids(&view(&data, &neutral, Some("fire"))), ["5"]);
    }

    #[test]
    fn empty_search_term_is_no_op() {
        let data = dataset();
        let neg: HashSet<_> = [SentimentLabel::Negative].into_iter().collect();
        assert_eq!(ids(&view(&data, &neg, Some(""))), ["2"]);
        assert_eq!(ids(&view(&data, &neg, None)), ["2"]);
    }

    #[test]
    fn search_term_is_literal_not_pattern() {
        let data = vec![
            record("1", "price is $5.00 (cheap)", SentimentLabel::Neutral),
            record("2", "price is 5000", SentimentLabel::Neutral),
        ];
        let all: HashSet<_> = SentimentLabel::ALL.into_iter().collect();
        assert_eq!(ids(&view(&data, &all, Some("5.00 ("))), ["1"]);
    }

    #[test]
    fn matches_against_raw_text_not_normalized() {
        let data = vec![AnnotatedRecord::new(
            Post::new("1", "loving #IPL2026"),
            "loving".into(),
            SentimentScore::neutral(),
            SentimentScore::neutral(),
        )];
        let all: HashSet<_> = SentimentLabel::ALL.into_iter().collect();
        assert_eq!(ids(&view(&data, &all, Some("#ipl"))), ["1"]);
    }

    #[test]
    fn empty_dataset() {
        let all: HashSet<_> = SentimentLabel::ALL.into_iter().collect();
        assert!(view(&[], &all, Some("x")).is_empty());
    }
}
