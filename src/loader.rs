//! Gradebook loading from CSV and manual-entry parsing.

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::{debug, warn};

use crate::gradebook::Gradebook;

/// Loads `name,score` rows from a CSV file into a gradebook.
///
/// The header row is optional: a first row whose second field is not a
/// number is treated as a header and skipped. Rows with a missing,
/// empty, or unparseable score (or an empty name) are skipped with a
/// warning. Extra columns are ignored.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read. Malformed
/// rows are not errors.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Gradebook> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open '{}'", path.display()))?;

    let mut book = Gradebook::new();

    for (index, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("failed to read '{}'", path.display()))?;

        let name = row.get(0).unwrap_or("").trim();
        let raw_score = row.get(1).unwrap_or("").trim();

        let Ok(score) = raw_score.parse::<f64>() else {
            if index == 0 {
                // optional header row
                debug!(row = ?row, "Skipping header row");
            } else {
                warn!(name, raw_score, "Invalid or missing mark, skipping row");
            }
            continue;
        };

        if name.is_empty() {
            warn!(row = index + 1, "Empty student name, skipping row");
            continue;
        }

        book.insert(name, score);
    }

    debug!(path = %path.display(), students = book.len(), "CSV loaded");
    Ok(book)
}

/// Parses one manually entered mark.
///
/// # Errors
///
/// Returns an error naming the input if it is not numeric.
pub fn parse_score(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(score) => Ok(score),
        Err(_) => bail!("'{trimmed}' is not a numeric mark"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_load_csv_with_header() {
        let path = temp_path("gradebook_load_header.csv");
        fs::write(&path, "Name,Marks\nAnn,95\nBob,60.5\n").unwrap();

        let book = load_csv(&path).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.get("Ann"), Some(95.0));
        assert_eq!(book.get("Bob"), Some(60.5));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_csv_without_header() {
        let path = temp_path("gradebook_load_headerless.csv");
        fs::write(&path, "Ann,95\nBob,60\n").unwrap();

        let book = load_csv(&path).unwrap();
        assert_eq!(book.len(), 2);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_csv_skips_malformed_row() {
        let path = temp_path("gradebook_load_malformed.csv");
        fs::write(&path, "Name,Marks\nAnn,95\nBob,abc\nCid,30\n").unwrap();

        let book = load_csv(&path).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.get("Bob"), None);
        assert_eq!(book.get("Cid"), Some(30.0));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_csv_skips_missing_score_and_empty_name() {
        let path = temp_path("gradebook_load_missing.csv");
        fs::write(&path, "Name,Marks\nAnn\n,55\nBob,70\n").unwrap();

        let book = load_csv(&path).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Bob"), Some(70.0));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_csv_ignores_extra_columns() {
        let path = temp_path("gradebook_load_extra.csv");
        fs::write(&path, "Name,Marks,Grade\nAnn,95,A\n").unwrap();

        let book = load_csv(&path).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Ann"), Some(95.0));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_csv_missing_file() {
        let result = load_csv(temp_path("gradebook_does_not_exist.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("78").unwrap(), 78.0);
        assert_eq!(parse_score(" 78.5 ").unwrap(), 78.5);
        assert!(parse_score("abc").is_err());
        assert!(parse_score("").is_err());
    }
}
