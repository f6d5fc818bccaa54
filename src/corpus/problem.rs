use super::error::{EntityKind, RecordError};
use std::fmt;

/// A record that a pass could not decode. Non-fatal under the tolerant policy.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub pass: EntityKind,
    /// 1-based line number inside the raw blob of the pass.
    pub line_number: usize,
    pub error: RecordError,
}

impl Problem {
    pub fn new(pass: EntityKind, line_number: usize, error: RecordError) -> Problem {
        Problem {
            pass,
            line_number,
            error,
        }
    }

    /// Hard problems mean the record could not be reconstructed at all, as
    /// opposed to a malformed record that was merely skipped.
    pub fn is_hard(&self) -> bool {
        matches!(self.error, RecordError::NoLineIds { .. })
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} record at line {}: {}",
            self.pass, self.line_number, self.error
        )
    }
}

/// Outcome of one completed pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PassReport {
    pub pass: EntityKind,
    pub decoded: usize,
    pub problems: Vec<Problem>,
}

impl PassReport {
    pub(crate) fn new(pass: EntityKind) -> PassReport {
        PassReport {
            pass,
            decoded: 0,
            problems: Vec::new(),
        }
    }

    /// Records dropped as malformed (wrong shape, bad field, dangling reference).
    pub fn skipped(&self) -> usize {
        self.problems.iter().filter(|p| !p.is_hard()).count()
    }

    /// Records whose references could not be extracted at all.
    pub fn hard_failures(&self) -> usize {
        self.problems.iter().filter(|p| p.is_hard()).count()
    }
}
