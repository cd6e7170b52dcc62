//! Output formatting and persistence for analysis results.
//!
//! Supports table and summary rendering, JSON logging, and CSV export.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use crate::analysis::ClassReport;
use crate::gradebook::Gradebook;
use crate::grading::Grade;

/// Formats a score without a trailing `.0` for integral values.
fn format_score(score: f64) -> String {
    format!("{score}")
}

/// Renders the Name/Marks/Grade table, names sorted alphabetically,
/// column widths sized to content.
pub fn render_table(book: &Gradebook) -> String {
    let name_w = book
        .iter()
        .map(|r| r.name.len())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or(0)
        + 2;
    let marks_w = book
        .iter()
        .map(|r| format_score(r.score).len())
        .chain(std::iter::once(7))
        .max()
        .unwrap_or(7)
        + 2;
    let grade_w = "Grade".len() + 2;

    let mut rows: Vec<_> = book.records().to_vec();
    rows.sort_by(|a, b| a.name.cmp(&b.name));

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_w$}{:>marks_w$}{:>grade_w$}\n",
        "Name", "Marks", "Grade"
    ));
    let sep = "-".repeat(name_w + marks_w + grade_w);
    out.push_str(&sep);
    out.push('\n');

    for record in &rows {
        out.push_str(&format!(
            "{:<name_w$}{:>marks_w$}{:>grade_w$}\n",
            record.name,
            format_score(record.score),
            Grade::from_score(record.score).letter()
        ));
    }

    out.push_str(&sep);
    out.push('\n');
    out
}

/// Renders the analysis summary: totals, mean/median, extremes,
/// distribution, and the pass/fail name lists.
pub fn render_summary(report: &ClassReport) -> String {
    let mut out = String::new();
    out.push_str("Analysis Summary:\n");
    out.push_str(&format!("  Total students: {}\n", report.total_students));
    out.push_str(&format!("  Average (mean): {:.2}\n", report.stats.average));
    out.push_str(&format!("  Median: {:.2}\n", report.stats.median));
    out.push_str(&format!(
        "  Highest: {} ({})\n",
        report.stats.highest.name,
        format_score(report.stats.highest.score)
    ));
    out.push_str(&format!(
        "  Lowest : {} ({})\n",
        report.stats.lowest.name,
        format_score(report.stats.lowest.score)
    ));
    out.push_str("  Grade distribution:\n");
    for grade in [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F] {
        out.push_str(&format!(
            "    {}: {}\n",
            grade,
            report.distribution.count(grade)
        ));
    }

    let passed: Vec<_> = report.passed.iter().map(|r| r.name.as_str()).collect();
    let failed: Vec<_> = report.failed.iter().map(|r| r.name.as_str()).collect();
    out.push_str(&format!(
        "  Passed students ({}): {:?}\n",
        passed.len(),
        passed
    ));
    out.push_str(&format!(
        "  Failed students ({}): {:?}\n",
        failed.len(),
        failed
    ));
    out
}

/// Logs a report as pretty-printed JSON.
pub fn print_json(report: &ClassReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Marks")]
    marks: f64,
    #[serde(rename = "Grade")]
    grade: &'static str,
}

/// Writes the gradebook as `Name,Marks,Grade` CSV, one row per student
/// in gradebook order. Grades are recomputed from the scores.
pub fn export_csv(path: impl AsRef<Path>, book: &Gradebook) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), students = book.len(), "Exporting CSV");

    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("failed to create '{}'", path.display()))?;

    for record in book.iter() {
        writer.serialize(ExportRow {
            name: &record.name,
            marks: record.score,
            grade: Grade::from_score(record.score).letter(),
        })?;
    }
    writer.flush()?;

    Ok(())
}
