use crate::abstract_genetics::*;
use crate::error::{CrossError, GenotypeFault, Result};
use std::fmt;
use std::str::FromStr;

/// The unordered pair of alleles an individual carries at one locus.
///
/// Both alleles belong to the same allele pair and are stored in canonical order (dominant
/// first), so `aA` and `Aa` are the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocusGenotype {
    first: Allele,
    second: Allele,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Zygosity {
    HomozygousDominant,
    Heterozygous,
    HomozygousRecessive,
}

impl Zygosity {
    /// Complete dominance: one dominant allele is enough.
    pub fn expression(self) -> Expression {
        match self {
            Zygosity::HomozygousRecessive => Expression::Recessive,
            _ => Expression::Dominant,
        }
    }
}

impl LocusGenotype {
    pub fn new(x: Allele, y: Allele) -> Result<Self> {
        if x.pair() != y.pair() {
            return Err(GenotypeFault::MixedPair(x.symbol(), y.symbol()).into());
        }
        Ok(Self::canonical(x, y))
    }

    pub fn from_chars(x: char, y: char) -> Result<Self> {
        Self::new(Allele::new(x)?, Allele::new(y)?)
    }

    /// Orders without checking the pair; callers guarantee `x` and `y` share one.
    pub(crate) fn canonical(x: Allele, y: Allele) -> Self {
        debug_assert_eq!(x.pair(), y.pair());
        if x <= y {
            Self {
                first: x,
                second: y,
            }
        } else {
            Self {
                first: y,
                second: x,
            }
        }
    }

    /// The three genotypes of an allele pair: `AA`, `Aa`, `aa`.
    pub fn all(pair: Allele) -> [Self; 3] {
        let (d, r) = (pair.dominant(), pair.recessive());
        [
            Self::canonical(d, d),
            Self::canonical(d, r),
            Self::canonical(r, r),
        ]
    }

    pub fn alleles(&self) -> [Allele; 2] {
        [self.first, self.second]
    }

    pub fn pair(&self) -> char {
        self.first.pair()
    }

    pub fn expression(&self) -> Expression {
        self.zygosity().expression()
    }

    pub fn zygosity(&self) -> Zygosity {
        match (self.first.is_dominant(), self.second.is_dominant()) {
            (true, true) => Zygosity::HomozygousDominant,
            (false, false) => Zygosity::HomozygousRecessive,
            _ => Zygosity::Heterozygous,
        }
    }

    /// Textbook phenotype notation for this locus: `A_` when dominant, `aa` otherwise.
    pub fn notation(&self) -> String {
        match self.expression() {
            Expression::Dominant => format!("{}_", self.first.dominant()),
            Expression::Recessive => format!("{}{}", self.second, self.second),
        }
    }
}

impl fmt::Display for LocusGenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

impl FromStr for LocusGenotype {
    type Err = CrossError;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.trim().chars().collect();
        match chars.as_slice() {
            [x, y] => Self::from_chars(*x, *y),
            _ => Err(GenotypeFault::LocusLength(chars.len()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(s: &str) -> LocusGenotype {
        s.parse().unwrap()
    }

    #[test]
    fn canonical_order_is_independent_of_input_order() {
        assert_eq!(g("aA"), g("Aa"));
        assert_eq!(g("aA").to_string(), "Aa");
        assert_eq!(g("AA").to_string(), "AA");
        assert_eq!(g("bb").to_string(), "bb");
    }

    #[test]
    fn mixed_pairs_are_rejected() {
        assert_eq!(
            LocusGenotype::from_chars('A', 'b'),
            Err(GenotypeFault::MixedPair('A', 'b').into())
        );
        assert_eq!(
            "aB".parse::<LocusGenotype>(),
            Err(GenotypeFault::MixedPair('a', 'B').into())
        );
    }

    #[test]
    fn wrong_lengths_are_rejected() {
        for (s, n) in [("A", 1), ("AaB", 3), ("AaBb", 4), ("", 0)] {
            assert_eq!(
                s.parse::<LocusGenotype>(),
                Err(GenotypeFault::LocusLength(n).into())
            );
        }
        assert_eq!(
            "AaBb".parse::<LocusGenotype>().unwrap_err().to_string(),
            "invalid genotype: a locus holds exactly two alleles, found 4"
        );
    }

    #[test]
    fn zygosity_and_expression() {
        assert_eq!(g("AA").zygosity(), Zygosity::HomozygousDominant);
        assert_eq!(g("aA").zygosity(), Zygosity::Heterozygous);
        assert_eq!(g("aa").zygosity(), Zygosity::HomozygousRecessive);
        assert_eq!(g("Aa").expression(), Expression::Dominant);
        assert_eq!(g("aa").expression(), Expression::Recessive);
        assert_eq!(g("AA").expression(), Expression::Dominant);
        assert_eq!(g("Bb").notation(), "B_");
        assert_eq!(g("bb").notation(), "bb");
    }

    #[test]
    fn all_lists_the_three_genotypes_in_order() {
        let a = Allele::new('a').unwrap();
        let v: Vec<String> = LocusGenotype::all(a).iter().map(|x| x.to_string()).collect();
        assert_eq!(v, vec!["AA", "Aa", "aa"]);
    }
}
