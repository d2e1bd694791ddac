//! Letter grades and the score-to-grade mapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A letter grade on the S-to-F scale.
///
/// Each grade carries a fixed grade-point value used in GPA computation.
/// Variants are declared best-first, so the derived ordering ranks `S`
/// before `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    /// Grade-point value of this grade.
    pub fn points(self) -> f64 {
        match self {
            Grade::S => 10.0,
            Grade::A => 9.0,
            Grade::B => 8.0,
            Grade::C => 7.0,
            Grade::D => 6.0,
            Grade::E => 5.0,
            Grade::F => 0.0,
        }
    }

    /// Human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Grade::S => "S - Outstanding",
            Grade::A => "A - Excellent",
            Grade::B => "B - Very Good",
            Grade::C => "C - Good",
            Grade::D => "D - Satisfactory",
            Grade::E => "E - Pass",
            Grade::F => "F - Fail",
        }
    }

    /// Map a numeric score to a grade.
    ///
    /// Thresholds are inclusive lower bounds evaluated highest-first:
    /// 90→S, 80→A, 70→B, 60→C, 50→D, 40→E, anything below fails.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::S
        } else if score >= 80.0 {
            Grade::A
        } else if score >= 70.0 {
            Grade::B
        } else if score >= 60.0 {
            Grade::C
        } else if score >= 50.0 {
            Grade::D
        } else if score >= 40.0 {
            Grade::E
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        };
        write!(f, "{letter}")
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "S" => Ok(Grade::S),
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "E" => Ok(Grade::E),
            "F" => Ok(Grade::F),
            other => Err(format!("unknown grade: {other}")),
        }
    }
}
