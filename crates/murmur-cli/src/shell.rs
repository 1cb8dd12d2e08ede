//! Interactive session: one analysis session shared across commands until exit.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use murmur_ai::SentimentScorer;
use murmur_core::SentimentLabel;
use murmur_store::export::export_csv;
use murmur_store::summary::DEFAULT_BINS;
use murmur_store::{
    AnalysisOutcome, AnalysisSession, Histogram, RecordFilter, Summary, fetch_and_analyze,
};
use murmur_sync::SearchClient;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::display;

const HELP: &str = "\
Commands:
  fetch [keyword] [count]     fetch and analyze posts (count 10-100)
  summary                     sentiment summary, distributions, and score histogram
  list [labels] [search...]   list posts; labels: all | none | positive,negative,...
  export [dir]                write the full dataset as CSV (default: current dir)
  status                      show when the data was last updated
  help                        show this help
  quit                        leave the shell";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Fetch {
        keyword: Option<String>,
        count: Option<u8>,
    },
    Summary,
    List {
        labels: Vec<SentimentLabel>,
        search: Option<String>,
    },
    Export {
        dir: Option<PathBuf>,
    },
    Status,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let (cmd, raw_rest) = next_word(line);
        if cmd.is_empty() {
            return Ok(None);
        }
        let rest: Vec<&str> = raw_rest.split_whitespace().collect();

        let command = match cmd.to_ascii_lowercase().as_str() {
            "fetch" | "analyze" => parse_fetch(&rest)?,
            "summary" => Self::Summary,
            "list" | "ls" => parse_list(raw_rest)?,
            "export" => Self::Export {
                dir: rest.first().map(PathBuf::from),
            },
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(format!("unknown command {other:?}; type `help`")),
        };
        Ok(Some(command))
    }
}

/// Split off the first whitespace-delimited word; the remainder keeps its inner spacing.
fn next_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

fn parse_fetch(rest: &[&str]) -> Result<ShellCommand, String> {
    let (keyword_words, count) = match rest.split_last() {
        Some((last, init)) if last.chars().all(|c| c.is_ascii_digit()) => {
            let count: u8 = last
                .parse()
                .ok()
                .filter(|n| (10..=100).contains(n))
                .ok_or_else(|| format!("count must be between 10 and 100, got {last}"))?;
            (init, Some(count))
        }
        _ => (rest, None),
    };
    let keyword = (!keyword_words.is_empty()).then(|| keyword_words.join(" "));
    Ok(ShellCommand::Fetch { keyword, count })
}

fn parse_list(rest: &str) -> Result<ShellCommand, String> {
    let (first, search) = next_word(rest);
    if first.is_empty() {
        return Ok(ShellCommand::List {
            labels: SentimentLabel::ALL.to_vec(),
            search: None,
        });
    }
    let labels = match first.to_ascii_lowercase().as_str() {
        "all" => SentimentLabel::ALL.to_vec(),
        "none" => Vec::new(),
        list => list
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<SentimentLabel>().map_err(|e| e.to_string()))
            .collect::<Result<Vec<_>, _>>()?,
    };
    let search = search.trim_end();
    let search = (!search.is_empty()).then(|| search.to_string());
    Ok(ShellCommand::List { labels, search })
}

pub struct Shell {
    client: SearchClient,
    scorer: SentimentScorer,
    session: AnalysisSession,
    keyword: String,
    count: u8,
    list_limit: usize,
}

impl Shell {
    pub fn new(
        client: SearchClient,
        scorer: SentimentScorer,
        keyword: String,
        count: u8,
        list_limit: usize,
    ) -> Self {
        Self {
            client,
            scorer,
            session: AnalysisSession::new(),
            keyword,
            count,
            list_limit,
        }
    }

    /// Read commands from stdin until `quit` or end of input.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        println!("murmur shell. Type `help` for commands.");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("murmur> ");
            std::io::Write::flush(&mut std::io::stdout())?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            match ShellCommand::parse(&line) {
                Ok(None) => {}
                Ok(Some(ShellCommand::Quit)) => break,
                Ok(Some(cmd)) => {
                    if let Err(e) = self.execute(cmd).await {
                        eprintln!("error: {e:#}");
                    }
                }
                Err(msg) => eprintln!("{msg}"),
            }
        }
        Ok(())
    }

    async fn execute(&mut self, cmd: ShellCommand) -> anyhow::Result<()> {
        match cmd {
            ShellCommand::Fetch { keyword, count } => {
                // Defaults only move to the new keyword once it has produced data.
                let keyword = keyword.unwrap_or_else(|| self.keyword.clone());
                let count = count.unwrap_or(self.count);
                let outcome =
                    fetch_and_analyze(&self.client, &self.scorer, &self.session, &keyword, count)
                        .await
                        .with_context(|| format!("analyzing posts for {keyword:?}"))?;
                match outcome {
                    AnalysisOutcome::Analyzed { count: analyzed } => {
                        self.keyword = keyword;
                        self.count = count;
                        println!("Successfully analyzed {analyzed} posts!");
                    }
                    AnalysisOutcome::NoMatches => {
                        println!("No posts found for {keyword:?}. Try a different keyword.")
                    }
                }
            }
            ShellCommand::Summary => {
                let snap = self.session.current();
                display::print_status(&snap);
                if !snap.is_empty() {
                    let summary = Summary::from_records(snap.records());
                    display::print_summary(&summary);
                    display::print_distributions(&summary);
                    display::print_histogram(&Histogram::of_lexicon_scores(
                        snap.records(),
                        DEFAULT_BINS,
                    ));
                }
            }
            ShellCommand::List { labels, search } => {
                let snap = self.session.current();
                let filter = RecordFilter::new(labels, search.as_deref());
                display::print_posts(&filter.apply(snap.records()), self.list_limit);
            }
            ShellCommand::Export { dir } => {
                let dir = dir.unwrap_or_else(|| PathBuf::from("."));
                let snap = self.session.current();
                let path = export_csv(&dir, &snap, Local::now().naive_local())?;
                println!("Exported {} rows to {}", snap.len(), path.display());
            }
            ShellCommand::Status => display::print_status(&self.session.current()),
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Quit => {}
        }
        Ok(())
    }
}
