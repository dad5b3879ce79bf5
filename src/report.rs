//! Report assembly and rendering.
//!
//! [`ScanReport::assemble`] drains a [`FeatureFiles`] sequence, analyzes each
//! file on its own (so continuation context never leaks between files) and
//! merges the results in discovery order. The rendering functions write the
//! result either as a human-readable listing or as pretty-printed JSON.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    analyzer::{GherkinReport, get_gherkins},
    config::OutputFormat,
    reader::{FeatureFile, FeatureFiles},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Width of the keyword label column in text output.
const LABEL_WIDTH: usize = 10;

/// Analysis of a single feature file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureReport {
    pub path: String,
    pub gherkins: GherkinReport,
}

/// Analysis of every feature file under one root.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub root: String,
    pub files: Vec<FeatureReport>,
    /// All per-file reports merged in file order.
    pub summary: GherkinReport,
    pub skipped_paths: usize,
    pub totals: Totals,
}

/// Counts over a whole scan; `files` counts feature files, `lines` non-blank lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub files: usize,
    pub lines: usize,
    /// Lines that matched a keyword; the rest of `lines` went unclassified.
    pub classified: usize,
    pub features: usize,
    pub scenarios: usize,
    pub states: usize,
    pub actions: usize,
    pub outcomes: usize,
}

impl ScanReport {
    /// Reads every file from `feature_files` and analyzes them in parallel.
    pub fn assemble(root: &Path, mut feature_files: FeatureFiles) -> Self {
        let files: Vec<FeatureFile> = feature_files.by_ref().collect();
        Self::from_files(root, files, feature_files.skipped_count())
    }

    /// Analyzes already loaded `files`, keeping their order.
    pub fn from_files(root: &Path, files: Vec<FeatureFile>, skipped_paths: usize) -> Self {
        let files: Vec<FeatureReport> = files
            .into_par_iter()
            .map(|file| FeatureReport {
                path: file.path.to_string_lossy().into_owned(),
                gherkins: get_gherkins(&file.lines),
            })
            .collect();

        let mut summary = GherkinReport::default();
        for file in &files {
            summary.extend(file.gherkins.clone());
        }

        let totals = Totals {
            files: files.len(),
            lines: summary.files.len(),
            classified: summary.classified_count(),
            features: summary.features.len(),
            scenarios: summary.scenarios.len(),
            states: summary.states.len(),
            actions: summary.actions.len(),
            outcomes: summary.outcomes.len(),
        };

        let root = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());

        Self {
            root: root.to_string_lossy().into_owned(),
            files,
            summary,
            skipped_paths,
            totals,
        }
    }

    /// Path of `file` relative to the scanned root, or the full path when it
    /// lies outside of it.
    pub fn display_path(&self, file: &FeatureReport) -> String {
        Path::new(&file.path)
            .strip_prefix(&self.root)
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|_| file.path.clone())
    }
}

/// Print `report` to stdout in the requested format.
pub fn print_report(report: &ScanReport, format: OutputFormat) -> Result<()> {
    write_report(report, format, &mut io::stdout().lock())
}

pub fn write_report<W: Write>(
    report: &ScanReport,
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(report, writer),
        OutputFormat::Json => write_json(report, writer),
    }
}

/// Write `report` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(report: &ScanReport, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report).context("Failed to serialize report")?;
    writeln!(writer)?;
    Ok(())
}

/// Write `report` as a per-file listing followed by a summary line.
pub fn write_text<W: Write>(report: &ScanReport, writer: &mut W) -> Result<()> {
    if report.files.is_empty() {
        writeln!(
            writer,
            "{} {}",
            "warning:".bold().yellow(),
            format!("No feature files found in {}", report.root).yellow()
        )?;
        return Ok(());
    }

    for file in &report.files {
        writeln!(writer, "{}", report.display_path(file).as_str().bold())?;
        write_bucket(writer, "feature:", &file.gherkins.features)?;
        write_bucket(writer, "scenario:", &file.gherkins.scenarios)?;
        write_bucket(writer, "given:", &file.gherkins.states)?;
        write_bucket(writer, "when:", &file.gherkins.actions)?;
        write_bucket(writer, "then:", &file.gherkins.outcomes)?;
        writeln!(writer)?;
    }

    let totals = report.totals;
    writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Analyzed {}: {}, {}, {}, {}, {}",
            plural(totals.files, "feature file", "feature files"),
            plural(totals.features, "feature", "features"),
            plural(totals.scenarios, "scenario", "scenarios"),
            plural(totals.states, "state", "states"),
            plural(totals.actions, "action", "actions"),
            plural(totals.outcomes, "outcome", "outcomes"),
        )
        .green()
    )?;
    Ok(())
}

fn write_bucket<W: Write>(writer: &mut W, label: &str, items: &[String]) -> Result<()> {
    let label = format!("{:<width$}", label, width = LABEL_WIDTH);
    for item in items {
        writeln!(writer, "  {}{}", label.as_str().cyan(), item)?;
    }
    Ok(())
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
