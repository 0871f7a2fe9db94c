//! Small list-transform utilities.
//!
//! Pure functions over slices returning new `Vec`s; the input is never
//! modified, and an empty slice maps to an empty result. Encounter order is
//! preserved everywhere, and [`dedup_longest_first`] breaks length ties by it.

use std::collections::HashSet;

/// Doubles every value.
pub fn double_all(nums: &[i64]) -> Vec<i64> {
    nums.iter().map(|n| n * 2).collect()
}

/// Squares every value.
pub fn square_all(nums: &[i64]) -> Vec<i64> {
    nums.iter().map(|n| n * n).collect()
}

/// Prepends and appends `affix` to every string.
pub fn wrap_each<S: AsRef<str>>(strings: &[S], affix: &str) -> Vec<String> {
    strings
        .iter()
        .map(|s| format!("{affix}{}{affix}", s.as_ref()))
        .collect()
}

/// Keeps only non-negative values.
pub fn drop_negative(nums: &[i64]) -> Vec<i64> {
    nums.iter().filter(|n| **n >= 0).copied().collect()
}

/// Removes values whose last decimal digit (of the absolute value) equals
/// `digit`.
pub fn drop_ending_in(nums: &[i64], digit: u32) -> Vec<i64> {
    nums.iter()
        .filter(|n| n.abs() % 10 != i64::from(digit))
        .copied()
        .collect()
}

/// Removes strings containing `needle` (case-sensitive).
pub fn drop_containing<S: AsRef<str>>(strings: &[S], needle: &str) -> Vec<String> {
    strings
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !s.contains(needle))
        .map(str::to_string)
        .collect()
}

/// Deduplicates (first occurrence wins), then stably sorts by length,
/// longest first. Strings of equal length keep their encounter order.
pub fn dedup_longest_first<S: AsRef<str>>(strings: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique: Vec<&str> = strings
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| seen.insert(*s))
        .collect();
    unique.sort_by_key(|s| std::cmp::Reverse(s.len()));
    unique.into_iter().map(str::to_string).collect()
}

/// Splits every string on single spaces and flattens the pieces into one list.
/// Strings without a space pass through unchanged.
pub fn split_flatten<S: AsRef<str>>(strings: &[S]) -> Vec<String> {
    strings
        .iter()
        .flat_map(|s| s.as_ref().split(' ').map(str::to_string))
        .collect()
}
