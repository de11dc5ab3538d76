use itertools::Itertools;
use std::collections::BTreeMap;

pub fn gcd(a: usize, b: usize) -> usize {
    match b {
        0 => a,
        _ => gcd(b, a % b),
    }
}

/// Divides every count by the greatest common divisor of all counts.
///
/// All-zero input comes back unchanged.
pub fn reduce_ratio(counts: &[usize]) -> Vec<usize> {
    let g = counts.iter().fold(0, |g, &c| gcd(g, c));
    match g {
        0 => counts.to_vec(),
        _ => counts.iter().map(|c| c / g).collect(),
    }
}

/// Writes a ratio the textbook way, e.g. `9:3:3:1`.
pub fn format_ratio(ratio: &[usize]) -> String {
    ratio.iter().join(":")
}

/// Writes a count as a share of the total, e.g. `3/4 (75.0%)`.
pub fn format_share(count: usize, total: usize) -> String {
    let percent = match total {
        0 => 0.0,
        _ => 100.0 * count as f64 / total as f64,
    };
    format!("{}/{} ({:.1}%)", count, total, percent)
}

/// Scales the exact counts of a cross to a sample of `n` offspring.
pub fn expected_counts<K: Ord + Clone>(exact: &BTreeMap<K, usize>, n: usize) -> BTreeMap<K, f64> {
    let total: usize = exact.values().sum();
    exact
        .iter()
        .map(|(k, &c)| {
            let e = match total {
                0 => 0.0,
                _ => n as f64 * c as f64 / total as f64,
            };
            (k.clone(), e)
        })
        .collect()
}

/// Pearson's chi-square statistic of `observed` against the proportions in `exact`.
///
/// An observed category that the exact cross cannot produce makes the statistic infinite.
pub fn chi_square<K: Ord + Clone>(
    observed: &BTreeMap<K, usize>,
    exact: &BTreeMap<K, usize>,
) -> f64 {
    if observed
        .iter()
        .any(|(k, &o)| o > 0 && exact.get(k).copied().unwrap_or(0) == 0)
    {
        return f64::INFINITY;
    }
    let n: usize = observed.values().sum();
    expected_counts(exact, n)
        .iter()
        .filter(|(_, e)| **e > 0.0)
        .map(|(k, &e)| {
            let o = observed.get(k).copied().unwrap_or(0) as f64;
            (o - e).powi(2) / e
        })
        .sum()
}

/// Degrees of freedom of a goodness-of-fit test over the categories of `exact`.
pub fn degrees_of_freedom<K>(exact: &BTreeMap<K, usize>) -> usize {
    exact.values().filter(|&&c| c > 0).count().saturating_sub(1)
}
