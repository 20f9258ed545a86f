mod reports;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use livescore_core::parse::parse_clock;
use livescore_core::{
    AttemptResult, AttemptSummary, Cutoff, EventCatalog, EventInfo, FormatLookup, RoundRules,
    Scorer, ScoringConfig, TimeLimit,
};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use util::{split_csv, split_results};

#[derive(Debug, Parser)]
#[command(name = "livescore", version = "0.1.0")]
#[command(about = "Score a competitor's attempt results - cutoffs, time limits, best and average")]
struct Args {
    /// Event id (e.g. 333, 333fm, 333mbf)
    #[arg(long)]
    event: Option<String>,

    /// Attempt results (comma-separated): clock times, move counts,
    /// "solved/attempted time", DNF or DNS. Leave an entry blank to skip it
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    results: String,

    /// Number of attempts the cutoff applies to
    #[arg(long, requires = "cutoff_result")]
    cutoff_attempts: Option<usize>,

    /// Result to beat within the cutoff attempts, in the event's format
    #[arg(long, requires = "cutoff_attempts")]
    cutoff_result: Option<String>,

    /// Time limit as a clock time (e.g. 10:00)
    #[arg(long)]
    time_limit: Option<String>,

    /// Round ids sharing a cumulative time limit (comma-separated)
    #[arg(long, requires = "time_limit")]
    cumulative: Option<String>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Scoring configuration JSON overriding the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// List all known events and exit
    #[arg(long)]
    list_events: bool,

    /// Verbose output (debug logging unless RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if maybe_list_events(&args)? {
        return Ok(());
    }

    let config = load_config(args.config.as_deref())?;
    let scorer = Scorer::new(EventCatalog::default_catalog(), config);
    let event = resolve_event(&scorer, args.event.as_deref())?;
    let results = parse_results(&scorer, &args.results, &event.id)?;
    let rules = build_rules(&scorer, &args, &event.id)?;
    let summary = scorer.summarize(&results, &event.id, &rules)?;

    write_report(&args, event, &summary, rules.cutoff.is_some())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn maybe_list_events(args: &Args) -> Result<bool> {
    if !args.list_events {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available events:")?;
    for event in EventCatalog::default_catalog().iter() {
        writeln!(
            output_target.writer(),
            "  {:8} - {} ({})",
            event.id,
            event.name,
            event.format
        )?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn load_config(path: Option<&Path>) -> Result<ScoringConfig> {
    let Some(path) = path else {
        return Ok(*ScoringConfig::default_config());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = ScoringConfig::from_json(&json)
        .with_context(|| format!("invalid scoring config in {}", path.display()))?;
    log::debug!("loaded scoring config from {}: {config:?}", path.display());
    Ok(config)
}

fn resolve_event<L: FormatLookup>(
    scorer: &Scorer<L>,
    event_id: Option<&str>,
) -> Result<&'static EventInfo> {
    let event_id = event_id.context("--event is required unless --list-events is given")?;
    scorer.format_for(event_id)?;
    EventCatalog::default_catalog()
        .get(event_id.trim())
        .with_context(|| format!("unknown event {event_id}"))
}

fn parse_results<L: FormatLookup>(
    scorer: &Scorer<L>,
    input: &str,
    event_id: &str,
) -> Result<Vec<AttemptResult>> {
    split_results(input)
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            scorer
                .parse_attempt_result(entry, event_id)
                .with_context(|| format!("attempt {} ({entry:?}) is not a valid result", index + 1))
        })
        .collect()
}

fn build_rules<L: FormatLookup>(
    scorer: &Scorer<L>,
    args: &Args,
    event_id: &str,
) -> Result<RoundRules> {
    let cutoff = match (args.cutoff_attempts, args.cutoff_result.as_deref()) {
        (Some(number_of_attempts), Some(result)) => {
            let attempt_result = scorer
                .parse_attempt_result(result, event_id)
                .with_context(|| format!("invalid cutoff result {result:?}"))?;
            Some(Cutoff::new(number_of_attempts, attempt_result))
        }
        _ => None,
    };

    let time_limit = args
        .time_limit
        .as_deref()
        .map(|limit| {
            let centiseconds =
                parse_clock(limit).with_context(|| format!("invalid time limit {limit:?}"))?;
            let round_ids = args.cumulative.as_deref().map(split_csv).unwrap_or_default();
            Ok::<_, anyhow::Error>(if round_ids.is_empty() {
                TimeLimit::per_attempt(centiseconds)
            } else {
                TimeLimit::cumulative(centiseconds, round_ids)
            })
        })
        .transpose()?;

    Ok(RoundRules { cutoff, time_limit })
}

fn write_report(
    args: &Args,
    event: &EventInfo,
    summary: &AttemptSummary,
    cutoff_applied: bool,
) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, event, summary)?,
        "markdown" => {
            reports::generate_markdown_report(&mut output_target, event, summary, cutoff_applied)?;
        }
        _ => {
            if summary.attempts.is_empty() {
                writeln!(&mut output_target, "{}", "No attempts entered.".yellow())?;
            } else {
                reports::generate_console_report(
                    &mut output_target,
                    event,
                    summary,
                    cutoff_applied,
                )?;
            }
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
