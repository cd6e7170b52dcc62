//! Pass/fail partitioning by a score threshold.

use crate::gradebook::{Gradebook, StudentRecord};

/// Minimum score to be classified as "passed".
pub const DEFAULT_PASS_THRESHOLD: f64 = 40.0;

/// Splits the gradebook into (passed, failed) lists. A score exactly at
/// the threshold passes. Both lists preserve gradebook order.
pub fn partition(book: &Gradebook, threshold: f64) -> (Vec<StudentRecord>, Vec<StudentRecord>) {
    book.iter()
        .cloned()
        .partition(|record| record.score >= threshold)
}
