//! Advent of Code 2020 puzzle logic, Day 1: Report Repair.
//!
//! This crate is UI-framework agnostic so client crates can consume it
//! directly: parsing and solving work on plain strings and slices. The
//! expense report is one integer per line; part one multiplies the two
//! entries that sum to 2020, part two the three.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use std::collections::HashSet;

/// The sum both parts of Day 1 search for.
pub const TARGET_SUM: u32 = 2020;

/// Error describing a malformed expense report.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReportError {
    /// A non-blank line did not parse as an unsigned integer.
    #[error("invalid entry on line {line}: {value:?}")]
    InvalidEntry { line: usize, value: String },
}

/// Parse an expense report into entries.
///
/// Lines are trimmed; blank lines are skipped. Line numbers in errors are
/// 1-based and count skipped lines.
///
/// # Errors
///
/// Returns [`ReportError::InvalidEntry`] for the first line that is not an
/// unsigned integer.
pub fn parse_report(input: &str) -> Result<Vec<u32>, ReportError> {
    input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_number, line)| {
            line.parse::<u32>().map_err(|_| ReportError::InvalidEntry {
                line: line_number,
                value: line.to_owned(),
            })
        })
        .collect()
}

/// Find two entries that sum to `target`, in report order.
#[must_use]
pub fn find_pair(entries: &[u32], target: u32) -> Option<(u32, u32)> {
    let mut seen = HashSet::new();
    for &entry in entries {
        if let Some(complement) = target.checked_sub(entry) {
            if seen.contains(&complement) {
                return Some((complement, entry));
            }
        }
        seen.insert(entry);
    }
    None
}

/// Find three entries that sum to `target`, in report order.
#[must_use]
pub fn find_triple(entries: &[u32], target: u32) -> Option<(u32, u32, u32)> {
    for (index, &first) in entries.iter().enumerate() {
        let Some(remainder) = target.checked_sub(first) else {
            continue;
        };
        if let Some((second, third)) = find_pair(&entries[index + 1..], remainder) {
            return Some((first, second, third));
        }
    }
    None
}

/// Product of the pair summing to [`TARGET_SUM`], if any.
#[must_use]
pub fn part_one(entries: &[u32]) -> Option<u64> {
    find_pair(entries, TARGET_SUM).map(|(a, b)| u64::from(a) * u64::from(b))
}

/// Product of the triple summing to [`TARGET_SUM`], if any.
#[must_use]
pub fn part_two(entries: &[u32]) -> Option<u64> {
    find_triple(entries, TARGET_SUM).map(|(a, b, c)| u64::from(a) * u64::from(b) * u64::from(c))
}
