//! Pluralization for summary lines.

/// Format count with noun, e.g. `plural_count(3, "field")` -> `"3 fields"`.
///
/// Only handles nouns that pluralize with a trailing `s`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
