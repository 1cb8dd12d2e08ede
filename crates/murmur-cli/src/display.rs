//! Terminal rendering for analysis results: summary metrics, label
//! distributions, the compound-score histogram, and post cards.

use chrono::{DateTime, Local, Utc};
use murmur_core::{AnnotatedRecord, SentimentLabel};
use murmur_store::{Histogram, LabelCounts, Snapshot, Summary};

const BAR_WIDTH: usize = 40;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── Public API ──

/// Print when the session was last updated, if ever.
pub fn print_status(snapshot: &Snapshot) {
    match snapshot.updated_at() {
        Some(at) => println!(
            "Last updated: {} ({} posts for {:?})",
            local_time(at),
            snapshot.len(),
            snapshot.keyword()
        ),
        None => println!("No analysis yet. Run `fetch` to analyze posts."),
    }
}

/// Totals and per-label counts with percentages, for both methods.
pub fn print_summary(summary: &Summary) {
    println!("Sentiment Summary");
    println!("  {:<26} {}", "Total posts", summary.total);
    print_counts("compound", &summary.lexicon);
    print_counts("polarity", &summary.polarity);
    println!();
}

/// Text bar chart of label shares for both methods.
pub fn print_distributions(summary: &Summary) {
    print_distribution("Compound Sentiment Distribution", &summary.lexicon);
    print_distribution("Polarity Sentiment Distribution", &summary.polarity);
}

pub fn print_histogram(histogram: &Histogram) {
    println!("Distribution of Compound Sentiment Scores");
    let max = histogram.max_count();
    for (lower, upper, count) in histogram.bins() {
        println!(
            "  [{:>5.2}, {:>5.2})  {:<width$} {}",
            lower,
            upper,
            bar(count, max),
            count,
            width = BAR_WIDTH
        );
    }
    println!();
}

/// Print posts as cards, at most `limit` of them.
pub fn print_posts(records: &[&AnnotatedRecord], limit: usize) {
    println!("Posts ({})", records.len());
    println!();
    for record in records.iter().take(limit) {
        print_card(record);
    }
    if records.len() > limit {
        println!("... and {} more", records.len() - limit);
    }
}

// ── Rendering helpers ──

fn print_counts(method: &str, counts: &LabelCounts) {
    for label in SentimentLabel::ALL {
        println!(
            "  {:<26} {:<6} ({:.1}%)",
            format!("{label} ({method})"),
            counts.get(label),
            counts.percent(label)
        );
    }
}

fn print_distribution(title: &str, counts: &LabelCounts) {
    println!("{title}");
    let max = SentimentLabel::ALL
        .iter()
        .map(|&l| counts.get(l))
        .max()
        .unwrap_or(0);
    for label in SentimentLabel::ALL {
        let n = counts.get(label);
        println!(
            "  {:<10} {:<width$} {}",
            label.as_str(),
            bar(n, max),
            n,
            width = BAR_WIDTH
        );
    }
    println!();
}

fn print_card(record: &AnnotatedRecord) {
    let author = record.author_id().unwrap_or("-");
    let when = record
        .created_at()
        .map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string());
    let metrics = record.metrics();

    println!("── Author ID: {author} • {when}");
    println!("   {}", record.text());
    println!(
        "   {} (compound {:.3}, polarity {:.3}) • likes {} • retweets {} • replies {}",
        record.lexicon_label(),
        record.lexicon_score(),
        record.polarity_score(),
        metrics.likes,
        metrics.retweets,
        metrics.replies
    );
    println!();
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "#".repeat(count * BAR_WIDTH / max)
}

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(TIME_FORMAT).to_string()
}
