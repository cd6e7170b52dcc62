//! Letter grade assignment and distribution counting.

use std::fmt;

use serde::Serialize;

use crate::gradebook::Gradebook;

/// Letter grade assigned by fixed score thresholds.
///
/// | Range    | Grade |
/// |----------|-------|
/// | >= 90    | A     |
/// | >= 70    | B     |
/// | >= 50    | C     |
/// | >= 33    | D     |
/// | < 33     | F     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Maps a score to its letter grade. Thresholds are inclusive lower
    /// bounds checked in descending order, so exact boundary values take
    /// the higher grade.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => Grade::A,
            s if s >= 70.0 => Grade::B,
            s if s >= 50.0 => Grade::C,
            s if s >= 33.0 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Count of students per letter grade. Derived from the gradebook on
/// each analysis pass, never stored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct GradeDistribution {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub d: usize,
    pub f: usize,
}

impl GradeDistribution {
    pub fn from_gradebook(book: &Gradebook) -> Self {
        let mut dist = GradeDistribution::default();
        for record in book.iter() {
            dist.record(Grade::from_score(record.score));
        }
        dist
    }

    pub fn record(&mut self, grade: Grade) {
        match grade {
            Grade::A => self.a += 1,
            Grade::B => self.b += 1,
            Grade::C => self.c += 1,
            Grade::D => self.d += 1,
            Grade::F => self.f += 1,
        }
    }

    pub fn count(&self, grade: Grade) -> usize {
        match grade {
            Grade::A => self.a,
            Grade::B => self.b,
            Grade::C => self.c,
            Grade::D => self.d,
            Grade::F => self.f,
        }
    }

    pub fn total(&self) -> usize {
        self.a + self.b + self.c + self.d + self.f
    }
}
