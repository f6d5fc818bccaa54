//! Splits a raw corpus blob into records of a fixed number of fields.

use super::error::RecordError;
use std::iter::Enumerate;
use std::str::Split;

/// The token joining fields inside a Cornell corpus record.
pub const FIELD_SEPARATOR: &str = " +++$+++ ";

/// One line of a blob, split into its fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record<'a> {
    pub line_number: usize,
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    pub fn field(&self, index: usize) -> &'a str {
        self.fields[index]
    }

    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }
}

/// A line whose field count did not match. Nothing is built from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedRecord {
    pub line_number: usize,
    pub expected: usize,
    pub found: usize,
}

impl From<MalformedRecord> for RecordError {
    fn from(value: MalformedRecord) -> Self {
        RecordError::FieldCount {
            expected: value.expected,
            found: value.found,
        }
    }
}

/// Lazy iterator over the records of a blob.
///
/// Empty lines are skipped silently, lines with the wrong number of fields
/// are yielded as [`MalformedRecord`] so the caller can report them and go on.
pub struct Records<'a> {
    lines: Enumerate<Split<'a, char>>,
    separator: &'a str,
    field_count: usize,
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<Record<'a>, MalformedRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, line) = self.lines.next()?;
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                continue;
            }
            let line_number = index + 1;
            let fields: Vec<&'a str> = line.split(self.separator).collect();
            if fields.len() != self.field_count {
                return Some(Err(MalformedRecord {
                    line_number,
                    expected: self.field_count,
                    found: fields.len(),
                }));
            }
            return Some(Ok(Record {
                line_number,
                fields,
            }));
        }
    }
}

pub fn split_records<'a>(raw: &'a str, separator: &'a str, field_count: usize) -> Records<'a> {
    Records {
        lines: raw.split('\n').enumerate(),
        separator,
        field_count,
    }
}
