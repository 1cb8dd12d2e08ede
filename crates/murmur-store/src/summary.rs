//! Summary statistics for an analysed dataset: label counts per method and a
//! histogram of compound scores.

use murmur_core::{AnnotatedRecord, SentimentLabel};

/// Default number of histogram bins over [-1, 1].
pub const DEFAULT_BINS: usize = 20;

/// Count of records per label for one method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelCounts {
    fn add(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Share of `label` as a percentage of the total; 0 when empty.
    pub fn percent(&self, label: SentimentLabel) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(label) as f64 / total as f64 * 100.0
    }
}

/// Totals for both scoring methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub lexicon: LabelCounts,
    pub polarity: LabelCounts,
}

impl Summary {
    pub fn from_records(records: &[AnnotatedRecord]) -> Self {
        let mut summary = Summary {
            total: records.len(),
            ..Default::default()
        };
        for r in records {
            summary.lexicon.add(r.lexicon_label());
            summary.polarity.add(r.polarity_label());
        }
        summary
    }
}

/// Equal-width histogram of compound scores over [-1, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    counts: Vec<usize>,
}

impl Histogram {
    /// Bin compound scores. A score of exactly 1.0 lands in the last bin;
    /// out-of-range values are clamped first.
    pub fn of_lexicon_scores(records: &[AnnotatedRecord], bins: usize) -> Self {
        let bins = bins.max(1);
        let mut counts = vec![0; bins];
        let width = 2.0 / bins as f64;
        for r in records {
            let score = r.lexicon_score().clamp(-1.0, 1.0);
            let idx = (((score + 1.0) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Self { counts }
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// `(lower, upper, count)` for each bin, in ascending order.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        let width = 2.0 / self.counts.len() as f64;
        self.counts.iter().enumerate().map(move |(i, &count)| {
            let lower = -1.0 + i as f64 * width;
            (lower, lower + width, count)
        })
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
