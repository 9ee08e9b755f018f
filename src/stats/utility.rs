//! Small aggregation helpers shared by the report passes.

use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value among `values`. Ties resolve to the smallest value,
/// the behavior of taking the first entry of a sorted mode. Returns `None`
/// for empty input.
pub fn mode<T: Ord + Hash>(values: impl Iterator<Item = T>) -> Option<T> {
    let mut counts: HashMap<T, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    counts
        .into_iter()
        .max_by(|(a, count_a), (b, count_b)| count_a.cmp(count_b).then_with(|| b.cmp(a)))
        .map(|(value, _)| value)
}

/// Occurrence count of each distinct value, descending by count. Equal
/// counts order by value so repeated runs print identically.
pub fn value_counts<T: Ord + Hash>(values: impl Iterator<Item = T>) -> Vec<(T, usize)> {
    let mut counts: HashMap<T, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut out: Vec<(T, usize)> = counts.into_iter().collect();
    out.sort_by(|(a, count_a), (b, count_b)| count_b.cmp(count_a).then_with(|| a.cmp(b)));
    out
}

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_picks_most_frequent() {
        assert_eq!(mode([3u32, 1, 3, 2, 3].into_iter()), Some(3));
    }

    #[test]
    fn test_mode_tie_resolves_to_smallest() {
        assert_eq!(mode([2u32, 1, 2, 1].into_iter()), Some(1));
        assert_eq!(mode(["b", "a", "b", "a"].into_iter()), Some("a"));
    }

    #[test]
    fn test_mode_empty_is_none() {
        assert_eq!(mode(std::iter::empty::<u32>()), None);
    }

    #[test]
    fn test_value_counts_descending_then_by_value() {
        let counts = value_counts(["x", "y", "x", "z", "y", "x"].into_iter());
        assert_eq!(counts, vec![("x", 3), ("y", 2), ("z", 1)]);

        let tied = value_counts(["b", "a"].into_iter());
        assert_eq!(tied, vec![("a", 1), ("b", 1)]);
    }

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_normal_values() {
        assert_eq!(mean(&[600.0, 450.0, 900.0]), 650.0);
    }
}
