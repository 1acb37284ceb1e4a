//! Unihan dictionary parsing - builds a stroke-count index of Han characters.

use crate::Result;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::RangeInclusive;
use std::path::Path;

const TOTAL_STROKES: &str = "kTotalStrokes";
const GRADE_LEVEL: &str = "kGradeLevel";

// Hong Kong primary-school grades; a ceiling outside this range disables
// the grade filter entirely.
const GRADE_RANGE: RangeInclusive<u32> = 1..=6;

/// Characters indexed by total stroke count. Built once per run from a
/// Unihan `DictionaryLikeData` file and immutable afterwards.
#[derive(Debug)]
pub struct StrokeTable {
    buckets: HashMap<u32, Vec<char>>,
}

/// Per-character accumulator used while the grade filter is active. A
/// character qualifies only once both properties have been seen.
#[derive(Default)]
struct CharRecord {
    strokes: Option<u32>,
    grade: Option<u32>,
}

impl StrokeTable {
    /// Parse a tab-separated Unihan property file into stroke buckets.
    ///
    /// Each usable line is `U+XXXXX<TAB>property<TAB>value`; lines with any
    /// other shape, unknown properties, or non-numeric values are skipped
    /// without error. When `max_grade` is in 1..=6 only characters with a
    /// recorded `kGradeLevel` at or below the ceiling are kept — a character
    /// that lists strokes but no grade is dropped, matching the original
    /// tool's behavior.
    pub fn load(path: impl AsRef<Path>, max_grade: u32) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let filtered = GRADE_RANGE.contains(&max_grade);

        let mut buckets: HashMap<u32, Vec<char>> = HashMap::new();
        let mut records: HashMap<char, CharRecord> = HashMap::new();

        for line in reader.lines() {
            let line = line?;
            let Some((code, property, value)) = split_fields(&line) else {
                continue;
            };
            if property != TOTAL_STROKES && property != GRADE_LEVEL {
                continue;
            }
            let (Some(ch), Some(value)) = (decode_code_point(code), parse_decimal(value)) else {
                continue;
            };

            if filtered {
                let record = records.entry(ch).or_default();
                if property == TOTAL_STROKES {
                    record.strokes = Some(value);
                } else {
                    record.grade = Some(value);
                }
            } else if property == TOTAL_STROKES {
                buckets.entry(value).or_default().push(ch);
            }
        }

        if filtered {
            for (ch, record) in records {
                if let (Some(strokes), Some(grade)) = (record.strokes, record.grade) {
                    if grade >= 1 && grade <= max_grade {
                        buckets.entry(strokes).or_default().push(ch);
                    }
                }
            }
        }

        Ok(Self { buckets })
    }

    /// All characters with the given stroke count, if any were recorded.
    pub fn bucket(&self, strokes: u32) -> Option<&[char]> {
        self.buckets.get(&strokes).map(Vec::as_slice)
    }

    pub fn stroke_counts(&self) -> impl Iterator<Item = u32> + '_ {
        self.buckets.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_buckets(buckets: HashMap<u32, Vec<char>>) -> Self {
        Self { buckets }
    }
}

fn split_fields(line: &str) -> Option<(&str, &str, &str)> {
    let mut fields = line.split('\t');
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(code), Some(property), Some(value), None) => Some((code, property, value)),
        _ => None,
    }
}

// Property values must look like ^\d+$
fn parse_decimal(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Decode a `U+XXXXX` code-point string (4 to 8 hex digits) to its character:
/// strip the prefix, zero-pad to 8 digits, parse as hex.
pub fn decode_code_point(code: &str) -> Option<char> {
    let hex = code.strip_prefix("U+")?;
    if hex.len() > 8 {
        return None;
    }
    let padded = format!("{hex:0>8}");
    char::from_u32(u32::from_str_radix(&padded, 16).ok()?)
}
