//! Output formatting for scan results.
//!
//! Supports two output formats:
//! - JSON: one entry per file with its methods or its error
//! - Pretty: colored terminal listing for human readability

use colored::*;
use std::io::Write;

use crate::parser::ExtractedMethod;
use crate::scan::{FileOutcome, ScanReport};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Json,
    Pretty,
}

/// Write the report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &ScanReport) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Write the report as a human-readable listing.
pub fn write_pretty<W: Write>(out: &mut W, path: &str, report: &ScanReport) -> anyhow::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "  {} v{}",
        "treedoc".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(out)?;
    writeln!(out, "  {}{}", "Scanning: ".dimmed(), path)?;
    writeln!(out)?;

    for file in &report.files {
        match &file.outcome {
            FileOutcome::Methods(methods) => {
                writeln!(
                    out,
                    "  {} {}",
                    file.file_path.bold(),
                    format!("({} methods)", methods.len()).dimmed()
                )?;
                for method in methods {
                    write_method(out, method)?;
                }
            }
            FileOutcome::Error(e) => {
                writeln!(out, "  {} {}", file.file_path.bold(), "error".red())?;
                writeln!(out, "      {}", e.red())?;
            }
        }
    }

    writeln!(out)?;
    let summary = format!(
        "{} files, {} methods",
        report.files.len(),
        report.method_count()
    );
    if report.error_count() == 0 {
        writeln!(out, "  {} {}", "✓".green(), summary)?;
    } else {
        writeln!(
            out,
            "  {} {}, {}",
            "✗".red(),
            summary,
            format!("{} errors", report.error_count()).red()
        )?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_method<W: Write>(out: &mut W, method: &ExtractedMethod) -> anyhow::Result<()> {
    let span = format!("{}-{}", method.start_line + 1, method.end_line + 1);
    write!(out, "    {} {}", method.name.green(), span.dimmed())?;
    if let Some(summary) = method.doc_comment.as_deref().and_then(doc_summary) {
        write!(out, "  {}", summary.italic())?;
    }
    writeln!(out)?;
    Ok(())
}

/// First non-empty line of a doc comment, without comment markers or quotes.
pub fn doc_summary(doc: &str) -> Option<String> {
    doc.lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(|c| matches!(c, '/' | '*' | '#' | '!'))
                .trim_end_matches("*/")
                .trim_matches(|c| c == '"' || c == '\'')
                .trim()
        })
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
