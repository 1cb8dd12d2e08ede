mod display;
mod shell;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use murmur_ai::{Lexicons, SentimentScorer};
use murmur_core::{SentimentLabel, normalize};
use murmur_store::export::export_csv;
use murmur_store::summary::DEFAULT_BINS;
use murmur_store::{
    AnalysisOutcome, AnalysisSession, Histogram, RecordFilter, Summary, fetch_and_analyze,
};
use murmur_sync::SearchClient;
use murmur_sync::http::DEFAULT_API_BASE;
use tracing_subscriber::EnvFilter;

use crate::shell::Shell;

#[derive(Parser)]
#[command(
    name = "murmur",
    version,
    about = "Sentiment analysis of recent social posts matching a keyword"
)]
struct Cli {
    /// Replacement valence lexicon (word<TAB>mean[<TAB>...]).
    #[arg(long, global = true, env = "MURMUR_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Replacement polarity lexicon (word<TAB>polarity<TAB>intensity).
    #[arg(long, global = true, env = "MURMUR_POLARITY_LEXICON")]
    polarity_lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ApiArgs {
    /// API bearer token.
    #[arg(long, env = "MURMUR_BEARER_TOKEN", hide_env_values = true)]
    bearer_token: Option<String>,

    /// API base URL.
    #[arg(long, env = "MURMUR_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[derive(Args)]
struct SearchArgs {
    /// Keyword to search for.
    #[arg(long, short, default_value = "#IPL")]
    keyword: String,

    /// Number of posts to analyze.
    #[arg(
        long,
        short,
        default_value_t = 50,
        value_parser = clap::value_parser!(u8).range(10..=100)
    )]
    count: u8,

    /// Maximum number of post cards to print.
    #[arg(long, default_value_t = 25)]
    list_limit: usize,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch posts once, analyze them, and print the results.
    Analyze {
        #[command(flatten)]
        api: ApiArgs,

        #[command(flatten)]
        search: SearchArgs,

        /// Lexicon labels to list (comma-separated).
        #[arg(long, value_delimiter = ',', default_values_t = SentimentLabel::ALL)]
        labels: Vec<SentimentLabel>,

        /// Only list posts whose text contains this (case-insensitive).
        #[arg(long)]
        search_term: Option<String>,

        /// Write the full dataset as CSV into this directory.
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },
    /// Score a piece of text without fetching anything.
    Score {
        /// Raw text to normalize and score.
        text: String,
    },
    /// Interactive shell keeping one analysis session across commands.
    Shell {
        #[command(flatten)]
        api: ApiArgs,

        #[command(flatten)]
        search: SearchArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("murmur v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let lexicons = Lexicons::load(cli.lexicon.as_deref(), cli.polarity_lexicon.as_deref())
        .context("loading sentiment lexicons")?;
    let scorer = SentimentScorer::from_lexicons(&lexicons);

    match cli.command {
        Command::Analyze {
            api,
            search,
            labels,
            search_term,
            export_dir,
        } => {
            let client = search_client(api)?;
            let session = AnalysisSession::new();
            let outcome =
                fetch_and_analyze(&client, &scorer, &session, &search.keyword, search.count)
                    .await
                    .with_context(|| format!("analyzing posts for {:?}", search.keyword))?;

            match outcome {
                AnalysisOutcome::NoMatches => {
                    println!(
                        "No posts found for {:?}. Try a different keyword.",
                        search.keyword
                    );
                    return Ok(());
                }
                AnalysisOutcome::Analyzed { count } => {
                    println!("Successfully analyzed {count} posts!");
                    println!();
                }
            }

            let snap = session.current();
            display::print_status(&snap);
            println!();

            let summary = Summary::from_records(snap.records());
            display::print_summary(&summary);
            display::print_distributions(&summary);
            display::print_histogram(&Histogram::of_lexicon_scores(snap.records(), DEFAULT_BINS));

            let filter = RecordFilter::new(labels, search_term.as_deref());
            display::print_posts(&filter.apply(snap.records()), search.list_limit);

            if let Some(dir) = export_dir {
                let path = export_csv(&dir, &snap, Local::now().naive_local())
                    .context("exporting dataset")?;
                println!("Exported {} rows to {}", snap.len(), path.display());
            }
        }
        Command::Score { text } => {
            let normalized = normalize(&text);
            let sentiment = scorer.score(&normalized);
            let (lexicon_name, polarity_name) = scorer.method_names();
            println!("  {:<26} {}", "normalized", normalized);
            println!(
                "  {:<26} {:.4} ({})",
                lexicon_name, sentiment.lexicon.value, sentiment.lexicon.label
            );
            println!(
                "  {:<26} {:.4} ({})",
                polarity_name, sentiment.polarity.value, sentiment.polarity.label
            );
        }
        Command::Shell { api, search } => {
            let client = search_client(api)?;
            let mut shell = Shell::new(
                client,
                scorer,
                search.keyword,
                search.count,
                search.list_limit,
            );
            shell.run().await?;
        }
    }

    Ok(())
}

fn search_client(api: ApiArgs) -> anyhow::Result<SearchClient> {
    let Some(token) = api.bearer_token.filter(|t| !t.trim().is_empty()) else {
        bail!("Please enter your API bearer token (--bearer-token or MURMUR_BEARER_TOKEN).");
    };
    SearchClient::new(
        api.api_base,
        token,
        Duration::from_secs(api.timeout_secs),
    )
    .context("building HTTP client")
}
