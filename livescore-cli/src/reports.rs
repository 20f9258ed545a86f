use anyhow::Result;
use colored::Colorize;
use livescore_core::display::format_attempt_result;
use livescore_core::{AttemptSummary, EventInfo, Format, Outcome};
use serde::Serialize;
use std::io::Write;

/// Display strings for a summary, rendered with the event's format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedSummary {
    pub attempts: Vec<String>,
    pub best: String,
    pub average: Option<String>,
}

impl FormattedSummary {
    #[must_use]
    pub fn new(summary: &AttemptSummary) -> Self {
        let format = summary.format;
        Self {
            attempts: summary
                .attempts
                .iter()
                .map(|&value| format_attempt_result(value, format, false))
                .collect(),
            best: format_attempt_result(summary.best, format, false),
            average: summary
                .average
                .map(|value| format_attempt_result(value, format, true)),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    event_id: &'a str,
    event_name: &'a str,
    #[serde(flatten)]
    summary: &'a AttemptSummary,
    formatted: FormattedSummary,
}

fn display_or_dash(text: &str) -> &str {
    if text.is_empty() { "-" } else { text }
}

fn colorize_attempt(value: i32, text: &str) -> String {
    match Outcome::of(value) {
        Outcome::Success(_) => text.normal().to_string(),
        Outcome::Skipped => "-".dimmed().to_string(),
        Outcome::Dnf | Outcome::Dns => text.red().to_string(),
    }
}

pub fn generate_console_report(
    out: &mut dyn Write,
    event: &EventInfo,
    summary: &AttemptSummary,
    cutoff_applied: bool,
) -> Result<()> {
    let formatted = FormattedSummary::new(summary);

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format!("📊 {} ({})", event.name, event.id).bright_cyan().bold()
    )?;
    writeln!(out, "{}", "=".repeat(30).cyan())?;

    for (index, (&value, text)) in summary
        .attempts
        .iter()
        .zip(&formatted.attempts)
        .enumerate()
    {
        writeln!(out, "   Attempt {}: {}", index + 1, colorize_attempt(value, text))?;
    }
    writeln!(out)?;
    writeln!(out, "Best: {}", display_or_dash(&formatted.best).green().bold())?;
    match &formatted.average {
        Some(average) if summary.format != Format::Packed => {
            writeln!(out, "Average: {}", display_or_dash(average).green())?;
        }
        _ => writeln!(out, "Average: {}", "n/a".dimmed())?,
    }
    if cutoff_applied {
        let status = if summary.meets_cutoff {
            "✅ met".green()
        } else {
            "❌ not met".red()
        };
        writeln!(out, "Cutoff: {status}")?;
    }
    if let Some(warning) = &summary.warning {
        writeln!(out)?;
        writeln!(out, "⚠️  {}", warning.yellow())?;
    }
    Ok(())
}

pub fn generate_json_report(
    out: &mut dyn Write,
    event: &EventInfo,
    summary: &AttemptSummary,
) -> Result<()> {
    let report = JsonReport {
        event_id: &event.id,
        event_name: &event.name,
        summary,
        formatted: FormattedSummary::new(summary),
    };
    let json_output = serde_json::to_string_pretty(&report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(
    out: &mut dyn Write,
    event: &EventInfo,
    summary: &AttemptSummary,
    cutoff_applied: bool,
) -> Result<()> {
    let formatted = FormattedSummary::new(summary);

    writeln!(out, "# {} Results\n", event.name)?;
    writeln!(out, "| Attempt | Result |")?;
    writeln!(out, "|---------|--------|")?;
    for (index, text) in formatted.attempts.iter().enumerate() {
        writeln!(out, "| {} | {} |", index + 1, display_or_dash(text))?;
    }
    writeln!(out)?;

    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Best**: {}", display_or_dash(&formatted.best))?;
    if let Some(average) = formatted
        .average
        .as_deref()
        .filter(|_| summary.format != Format::Packed)
    {
        writeln!(out, "- **Average**: {}", display_or_dash(average))?;
    }
    if cutoff_applied {
        let status = if summary.meets_cutoff { "met" } else { "not met" };
        writeln!(out, "- **Cutoff**: {status}")?;
    }
    if let Some(warning) = &summary.warning {
        writeln!(out, "\n> ⚠️ {warning}")?;
    }
    Ok(())
}
