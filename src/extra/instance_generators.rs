use crate::abstract_genetics::Allele;
use crate::cross::{Mode, Parent};
use crate::error::{GenotypeFault, Result};
use crate::genotypes::locus::LocusGenotype;
use rand::prelude::*;
use std::io;

/// Allele pairs used for locus 1 and locus 2 of generated parents.
pub const LOCUS_PAIRS: [char; 2] = ['a', 'b'];

/// Tokens accepted between the two parents of a cross line.
const CROSS_SIGNS: [&str; 4] = ["x", "X", "×", "*"];

/// A parent with one of `AA`, `Aa`, `aa` chosen uniformly at each locus the mode needs.
pub fn random_parent<R>(rng: &mut R, mode: Mode) -> Parent
where
    R: Rng + ?Sized,
{
    Parent::new(
        LOCUS_PAIRS
            .iter()
            .take(mode.expected_loci())
            .filter_map(|&c| Allele::new(c).ok())
            .map(|pair| LocusGenotype::all(pair)[rng.gen_range(0..3)])
            .collect(),
    )
}

/// Reads a cross written as `P1 x P2`, e.g. `AaBb x aabb`. The sign must stand on its own
/// between whitespace so that `x` can still be used as an allele.
pub fn parse_cross(s: &str) -> Result<(Parent, Parent)> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    let malformed = || GenotypeFault::MalformedCross(s.to_owned());
    let i = tokens
        .iter()
        .position(|t| CROSS_SIGNS.contains(t))
        .ok_or_else(malformed)?;
    let (left, right) = (&tokens[..i], &tokens[i + 1..]);
    if left.is_empty() || right.is_empty() {
        return Err(malformed().into());
    }
    Ok((left.concat().parse()?, right.concat().parse()?))
}

/// Reads one cross per line, skipping blank lines and `#` comments.
pub fn read_crosses<R: io::BufRead>(
    reader: R,
) -> io::Result<Vec<(String, Result<(Parent, Parent)>)>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let s = line.trim();
        if s.is_empty() || s.starts_with('#') {
            continue;
        }
        out.push((s.to_owned(), parse_cross(s)));
    }
    Ok(out)
}
