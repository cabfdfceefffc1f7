use crate::report::Report;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    files_checked: usize,
    total_typos: usize,
    warnings: &'a [String],
    #[serde(flatten)]
    report: &'a Report,
}

pub fn render_json(report: &Report, files_checked: usize, warnings: &[String]) -> Result<String> {
    let output = JsonOutput {
        files_checked,
        total_typos: report.typo_count(),
        warnings,
        report,
    };
    serde_json::to_string_pretty(&output).context("Failed to serialize report")
}

pub fn print_warning(message: &str, colored: bool) {
    if colored {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    } else {
        eprintln!("warning: {}", message);
    }
}

/// One-line summary on stderr, so stdout stays pure markdown or JSON.
pub fn print_check_summary(report: &Report, files_checked: usize, colored: bool) {
    let file_word = |n: usize| if n == 1 { "file" } else { "files" };

    if !report.has_typos() {
        if colored {
            eprintln!("{}", "✓ No typos found!".green().bold());
        } else {
            eprintln!("✓ No typos found!");
        }
        return;
    }

    let total = report.typo_count();
    let typo_word = if total == 1 { "typo" } else { "typos" };
    let flagged = report.files.len();

    if colored {
        eprintln!(
            "{} {} {} in {} of {} changed {}",
            "✗".red().bold(),
            total.to_string().red().bold(),
            typo_word,
            flagged,
            files_checked,
            file_word(files_checked)
        );
    } else {
        eprintln!(
            "✗ {} {} in {} of {} changed {}",
            total,
            typo_word,
            flagged,
            files_checked,
            file_word(files_checked)
        );
    }
}
