//! Assembles one analysis pass into a single serializable report.
//!
//! The report is recomputed from the gradebook every time; grades and
//! counts are never stored between passes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::filter::partition;
use crate::gradebook::{Gradebook, StudentRecord};
use crate::grading::GradeDistribution;
use crate::stats::GradebookStats;

/// Complete result of analyzing one gradebook.
#[derive(Debug, Clone, Serialize)]
pub struct ClassReport {
    pub generated_at: DateTime<Utc>,
    pub total_students: usize,
    pub pass_threshold: f64,
    pub stats: GradebookStats,
    pub distribution: GradeDistribution,
    pub passed: Vec<StudentRecord>,
    pub failed: Vec<StudentRecord>,
}

/// Runs statistics, grading, and the pass/fail filter over a gradebook.
pub fn analyze(book: &Gradebook, pass_threshold: f64) -> ClassReport {
    let (passed, failed) = partition(book, pass_threshold);

    ClassReport {
        generated_at: Utc::now(),
        total_students: book.len(),
        pass_threshold,
        stats: GradebookStats::from_gradebook(book),
        distribution: GradeDistribution::from_gradebook(book),
        passed,
        failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::DEFAULT_PASS_THRESHOLD;

    #[test]
    fn test_analyze_worked_example() {
        let book: Gradebook = vec![
            ("Ann".to_string(), 95.0),
            ("Bob".to_string(), 60.0),
            ("Cid".to_string(), 30.0),
        ]
        .into_iter()
        .collect();

        let report = analyze(&book, DEFAULT_PASS_THRESHOLD);

        assert_eq!(report.total_students, 3);
        assert!((report.stats.average - 61.67).abs() < 0.01);
        assert_eq!(report.stats.median, 60.0);
        assert_eq!(report.distribution.a, 1);
        assert_eq!(report.distribution.c, 1);
        assert_eq!(report.distribution.f, 1);

        let passed: Vec<_> = report.passed.iter().map(|r| r.name.as_str()).collect();
        let failed: Vec<_> = report.failed.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(passed, vec!["Ann", "Bob"]);
        assert_eq!(failed, vec!["Cid"]);
    }

    #[test]
    fn test_analyze_empty_gradebook() {
        let report = analyze(&Gradebook::new(), DEFAULT_PASS_THRESHOLD);

        assert_eq!(report.total_students, 0);
        assert_eq!(report.stats.average, 0.0);
        assert!(report.passed.is_empty());
        assert!(report.failed.is_empty());
        assert_eq!(report.distribution.total(), 0);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let book: Gradebook = vec![("Ann".to_string(), 95.0)].into_iter().collect();
        let report = analyze(&book, DEFAULT_PASS_THRESHOLD);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"total_students\":1"));
        assert!(json.contains("\"Ann\""));
    }
}
