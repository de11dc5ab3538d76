//! Concrete genotype and gamete types for one- and two-locus crosses.

use crate::error::{GenotypeFault, Result};
use itertools::Itertools;

pub mod dihybrid;
pub mod locus;
pub mod monohybrid;

/// Rewrites a genotype string so each locus reads dominant allele first.
///
/// Consecutive letters form one locus, so `aAbB` becomes `AaBb`. Canonical strings come back
/// unchanged.
pub fn canonicalize(genotype: &str) -> Result<String> {
    let chars: Vec<char> = genotype.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.len() % 2 != 0 {
        return Err(GenotypeFault::OddLength(chars.len()).into());
    }
    chars
        .iter()
        .tuples()
        .map(|(&x, &y)| locus::LocusGenotype::from_chars(x, y).map(|l| l.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_test() {
        assert_eq!(canonicalize("aA").unwrap(), "Aa");
        assert_eq!(canonicalize("Aa").unwrap(), "Aa");
        assert_eq!(canonicalize("aAbB").unwrap(), "AaBb");
        assert_eq!(canonicalize("bbAA").unwrap(), "bbAA");
        assert_eq!(canonicalize("").unwrap(), "");
        assert!(canonicalize("aAb").is_err());
        assert!(canonicalize("Ab").is_err());
    }

    #[test]
    fn canonicalize_is_idempotent() {
        for s in ["AA", "aA", "aa", "bBAa", "AABb", "aabb"] {
            let once = canonicalize(s).unwrap();
            assert_eq!(canonicalize(&once).unwrap(), once);
        }
    }
}
