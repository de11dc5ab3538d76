use crate::error::{GenotypeFault, Result};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

pub trait Gamete<A: Genotype<Self>>: Sized + Clone + fmt::Debug + fmt::Display {}

/// A diploid genotype that can be crossed.
///
/// Implementors produce their gamete multiset (duplicates included, so each entry carries the
/// same weight) and rebuild an offspring from one gamete of each parent. The offspring must come
/// out in canonical form so that equal genotypes compare and hash equal whichever parent gave
/// which allele.
pub trait Genotype<B: Gamete<Self>>:
    Sized + Clone + Ord + Hash + fmt::Debug + fmt::Display
{
    fn gametes(&self) -> Vec<B>;

    /// Assumes both gametes come from parents sharing allele pairs at every locus.
    fn from_gametes(gx: &B, gy: &B) -> Self;

    fn phenotype(&self) -> Phenotype;

    /// Textbook notation of the phenotype: `A_` or `aa` per locus, e.g. `A_bb`.
    fn phenotype_notation(&self) -> String;
}

/// A single allele. Uppercase letters are dominant, the matching lowercase letter is the
/// recessive counterpart.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Allele(char);

impl Allele {
    pub fn new(symbol: char) -> Result<Self> {
        if symbol.is_ascii_alphabetic() {
            Ok(Self(symbol))
        } else {
            Err(GenotypeFault::NotAnAllele(symbol).into())
        }
    }

    pub fn symbol(self) -> char {
        self.0
    }

    pub fn is_dominant(self) -> bool {
        self.0.is_ascii_uppercase()
    }

    /// The allele pair this allele belongs to, named by its lowercase letter.
    pub fn pair(self) -> char {
        self.0.to_ascii_lowercase()
    }

    pub fn dominant(self) -> Self {
        Self(self.0.to_ascii_uppercase())
    }

    pub fn recessive(self) -> Self {
        Self(self.0.to_ascii_lowercase())
    }
}

/// Dominant before recessive, then by letter.
impl Ord for Allele {
    fn cmp(&self, other: &Self) -> Ordering {
        (!self.is_dominant(), self.0).cmp(&(!other.is_dominant(), other.0))
    }
}

impl PartialOrd for Allele {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<char> for Allele {
    type Error = crate::error::CrossError;

    fn try_from(value: char) -> Result<Self> {
        Allele::new(value)
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a locus shows its dominant or its recessive trait.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Expression {
    Dominant,
    Recessive,
}

impl Expression {
    fn as_str(self) -> &'static str {
        match self {
            Expression::Dominant => "dominant",
            Expression::Recessive => "recessive",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observable trait category of an offspring.
///
/// One-locus crosses give `dominant` or `recessive`; two-locus crosses combine the per-locus
/// outcomes into four categories written `dominant-recessive` and so on.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Phenotype {
    Single(Expression),
    Double(Expression, Expression),
}

impl fmt::Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phenotype::Single(e) => write!(f, "{}", e),
            Phenotype::Double(e1, e2) => write!(f, "{}-{}", e1, e2),
        }
    }
}

impl FromStr for Phenotype {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let expression = |w: &str| match w {
            "dominant" => Ok(Expression::Dominant),
            "recessive" => Ok(Expression::Recessive),
            _ => Err(format!("unknown phenotype {:?}", s)),
        };
        match s.split_once('-') {
            None => Ok(Phenotype::Single(expression(s)?)),
            Some((w1, w2)) => Ok(Phenotype::Double(expression(w1)?, expression(w2)?)),
        }
    }
}

/// Serialized as its label so phenotype maps become plain JSON objects.
impl Serialize for Phenotype {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allele_order_puts_dominant_first() {
        let f = |c: char| Allele::new(c).unwrap();
        assert!(f('A') < f('a'));
        assert!(f('B') < f('a'));
        assert!(f('A') < f('B'));
        assert!(f('a') < f('b'));
        assert_eq!(f('A').cmp(&f('A')), Ordering::Equal);
    }

    #[test]
    fn allele_rejects_non_letters() {
        for c in ['1', '_', ' ', 'é'] {
            assert_eq!(
                Allele::new(c),
                Err(GenotypeFault::NotAnAllele(c).into())
            );
        }
    }

    #[test]
    fn allele_pair_is_case_insensitive() {
        let a = Allele::new('A').unwrap();
        assert_eq!(a.pair(), 'a');
        assert_eq!(a.recessive().pair(), 'a');
        assert_eq!(a.recessive().dominant(), a);
        assert!(!a.recessive().is_dominant());
    }

    #[test]
    fn phenotype_labels_round_trip() {
        use Expression::*;
        for p in [
            Phenotype::Single(Dominant),
            Phenotype::Single(Recessive),
            Phenotype::Double(Dominant, Recessive),
            Phenotype::Double(Recessive, Recessive),
        ] {
            assert_eq!(p.to_string().parse::<Phenotype>(), Ok(p));
        }
        assert_eq!(Phenotype::Double(Recessive, Dominant).to_string(), "recessive-dominant");
        assert!("dominant-".parse::<Phenotype>().is_err());
        assert!("purple".parse::<Phenotype>().is_err());
    }

    #[test]
    fn phenotype_order_matches_textbook_ratio_order() {
        use Expression::*;
        let mut v = vec![
            Phenotype::Double(Recessive, Recessive),
            Phenotype::Double(Recessive, Dominant),
            Phenotype::Double(Dominant, Dominant),
            Phenotype::Double(Dominant, Recessive),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Phenotype::Double(Dominant, Dominant),
                Phenotype::Double(Dominant, Recessive),
                Phenotype::Double(Recessive, Dominant),
                Phenotype::Double(Recessive, Recessive),
            ]
        );
    }
}
