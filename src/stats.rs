//! Descriptive statistics over a gradebook.

use serde::Serialize;

use crate::gradebook::Gradebook;

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the median of a slice of values. Even counts average the two
/// middle values. Returns 0.0 for empty input.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// A `(name, score)` extreme. Empty gradebooks yield `("", 0.0)`.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ScoreExtreme {
    pub name: String,
    pub score: f64,
}

/// Summary statistics for one gradebook.
#[derive(Debug, Default, Clone, Serialize)]
pub struct GradebookStats {
    pub count: usize,
    pub average: f64,
    pub median: f64,
    pub highest: ScoreExtreme,
    pub lowest: ScoreExtreme,
}

impl GradebookStats {
    /// Ties on the extreme value keep the first-encountered record.
    pub fn from_gradebook(book: &Gradebook) -> Self {
        let scores = book.scores();

        let mut stats = GradebookStats {
            count: book.len(),
            average: mean(&scores),
            median: median(&scores),
            ..Default::default()
        };

        for record in book.iter() {
            if stats.highest.name.is_empty() || record.score > stats.highest.score {
                stats.highest = ScoreExtreme {
                    name: record.name.clone(),
                    score: record.score,
                };
            }
            if stats.lowest.name.is_empty() || record.score < stats.lowest.score {
                stats.lowest = ScoreExtreme {
                    name: record.name.clone(),
                    score: record.score,
                };
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Gradebook {
        vec![
            ("Ann".to_string(), 95.0),
            ("Bob".to_string(), 60.0),
            ("Cid".to_string(), 30.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_matches_sum_over_count() {
        let values = [95.0, 60.0, 30.0];
        assert!((mean(&values) - 185.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(&[95.0, 30.0, 60.0]), 60.0);
    }

    #[test]
    fn test_median_even_count() {
        assert_eq!(median(&[10.0, 40.0, 20.0, 30.0]), 25.0);
    }

    #[test]
    fn test_from_gradebook() {
        let stats = GradebookStats::from_gradebook(&sample_book());

        assert_eq!(stats.count, 3);
        assert!((stats.average - 61.666_666_666_666_664).abs() < 1e-9);
        assert_eq!(stats.median, 60.0);
        assert_eq!(stats.highest.name, "Ann");
        assert_eq!(stats.highest.score, 95.0);
        assert_eq!(stats.lowest.name, "Cid");
        assert_eq!(stats.lowest.score, 30.0);
    }

    #[test]
    fn test_from_gradebook_empty() {
        let stats = GradebookStats::from_gradebook(&Gradebook::new());

        assert_eq!(stats.count, 0);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.median, 0.0);
        assert_eq!(stats.highest, ScoreExtreme::default());
        assert_eq!(stats.lowest, ScoreExtreme::default());
    }

    #[test]
    fn test_ties_keep_first_encountered() {
        let book: Gradebook = vec![("First".to_string(), 80.0), ("Second".to_string(), 80.0)]
            .into_iter()
            .collect();

        let stats = GradebookStats::from_gradebook(&book);
        assert_eq!(stats.highest.name, "First");
        assert_eq!(stats.lowest.name, "First");
    }

    #[test]
    fn test_negative_scores_allowed() {
        let book: Gradebook = vec![("Ann".to_string(), -10.0), ("Bob".to_string(), 110.0)]
            .into_iter()
            .collect();

        let stats = GradebookStats::from_gradebook(&book);
        assert_eq!(stats.lowest.score, -10.0);
        assert_eq!(stats.highest.score, 110.0);
        assert_eq!(stats.average, 50.0);
    }
}
