//! strands CLI - split long text into a numbered thread

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use strands::{
    intent_url, near_limit, read_text, transcript, Measure, Post, Reservation, ThreadSplitter,
    TieredClipboard, DEFAULT_LIMIT,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log filter when `RUST_LOG` is unset or unusable.
const DEFAULT_LOG_FILTER: &str = "strands=warn";

#[derive(Parser)]
#[command(name = "strands")]
#[command(author, version, about = "Split long text into a thread of bounded posts", long_about = None)]
struct Cli {
    /// Text file to split (reads stdin when absent or `-`)
    file: Option<PathBuf>,

    /// Maximum characters per post, marker included
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// How characters are counted
    #[arg(long, default_value = "chars")]
    measure: MeasureArg,

    /// How room for " i/total" markers is reserved
    #[arg(long, default_value = "static")]
    reservation: ReservationArg,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Copy the whole thread to the clipboard
    #[arg(long)]
    copy_all: bool,

    /// Copy a single post to the clipboard (1-based)
    #[arg(long, value_name = "N", conflicts_with = "copy_all")]
    copy: Option<usize>,

    /// Print a compose link for the first post
    #[arg(long)]
    intent: bool,
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum MeasureArg {
    /// Unicode scalar values
    #[default]
    Chars,
    /// Grapheme clusters
    Graphemes,
}

impl From<MeasureArg> for Measure {
    fn from(arg: MeasureArg) -> Self {
        match arg {
            MeasureArg::Chars => Self::Chars,
            MeasureArg::Graphemes => Self::Graphemes,
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum ReservationArg {
    /// Reserve a fixed worst-case marker width
    #[default]
    Static,
    /// Reserve exactly what the thread's markers need
    Exact,
}

impl From<ReservationArg> for Reservation {
    fn from(arg: ReservationArg) -> Self {
        match arg {
            ReservationArg::Static => Self::Static,
            ReservationArg::Exact => Self::Exact,
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    limit: usize,
    effective: usize,
    total: usize,
    posts: &'a [Post],
    #[serde(skip_serializing_if = "Option::is_none")]
    intent: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .init();

    let cli = Cli::parse();

    let text = read_input(cli.file.as_deref())?;
    let splitter = ThreadSplitter::new(cli.limit)
        .with_measure(cli.measure.into())
        .with_reservation(cli.reservation.into());
    let posts = splitter.split(&text);
    debug!(posts = posts.len(), "thread ready");

    if posts.is_empty() {
        eprintln!("Nothing to split: the input is empty.");
        return Ok(());
    }

    let budget = splitter.budget();
    let intent = cli.intent.then(|| intent_url(&posts[0].text));

    match cli.format {
        OutputFormat::Text => print_thread(
            &posts,
            budget.limit(),
            splitter.measure(),
            intent.as_deref(),
        ),
        OutputFormat::Json => {
            let report = Report {
                limit: budget.limit(),
                effective: budget.effective(),
                total: posts.len(),
                posts: &posts,
                intent,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if cli.copy_all {
        copy(&transcript(&posts), "entire thread");
    } else if let Some(n) = cli.copy {
        let Some(post) = n.checked_sub(1).and_then(|i| posts.get(i)) else {
            bail!("post {n} does not exist (thread has {} posts)", posts.len());
        };
        copy(&post.text, &format!("post {n}"));
    }

    Ok(())
}

/// `RUST_LOG` directives when given, [`DEFAULT_LOG_FILTER`] otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            read_text(path).with_context(|| format!("could not import {}", path.display()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_thread(posts: &[Post], limit: usize, measure: Measure, intent: Option<&str>) {
    let total = posts.len();

    for post in posts {
        let count = post.width(measure);
        let flag = if near_limit(post, limit, measure) { " !" } else { "" };
        println!("--- Post {} / {total} [{count}/{limit}{flag}] ---", post.index() + 1);
        println!("{}", post.text);
        println!();
    }

    if let Some(url) = intent {
        println!("{url}");
    }
}

fn copy(text: &str, what: &str) {
    let mut clipboard = TieredClipboard::system();
    if clipboard.copy(text) {
        eprintln!("Copied {what} to clipboard");
    } else {
        eprintln!("Could not copy {what} to clipboard");
    }
}
