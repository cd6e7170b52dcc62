//! The gradebook: an ordered collection of student marks.
//!
//! Names are unique keys; inserting a known name updates its score in
//! place so the original position is kept. Iteration order (and thus
//! CSV export order) is insertion order.

use serde::Serialize;

/// One student's entry: a non-empty name and a raw mark.
///
/// Scores are taken as-is; negative or >100 values are accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub name: String,
    pub score: f64,
}

/// An ordered name -> score mapping for one analysis run.
#[derive(Debug, Default, Clone)]
pub struct Gradebook {
    records: Vec<StudentRecord>,
}

impl Gradebook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, or updates the score of an existing name in place.
    pub fn insert(&mut self, name: impl Into<String>, score: f64) {
        let name = name.into();
        match self.records.iter_mut().find(|r| r.name == name) {
            Some(existing) => existing.score = score,
            None => self.records.push(StudentRecord { name, score }),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.score)
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.score).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(String, f64)> for Gradebook {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut book = Gradebook::new();
        for (name, score) in iter {
            book.insert(name, score);
        }
        book
    }
}
