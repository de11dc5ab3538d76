use crate::abstract_genetics::*;
use crate::cross::{Mode, Parent};
use crate::error::{CrossError, GenotypeFault};
use crate::genotypes::locus::LocusGenotype;
use std::fmt;

/// A gamete of a one-locus cross: a single allele.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonohybridGamete(pub Allele);

impl Gamete<MonohybridGenotype> for MonohybridGamete {}

impl fmt::Display for MonohybridGamete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonohybridGenotype(pub LocusGenotype);

impl MonohybridGenotype {
    pub fn locus(&self) -> &LocusGenotype {
        &self.0
    }
}

impl Genotype<MonohybridGamete> for MonohybridGenotype {
    /// The two alleles of the locus; `AA` gives `[A, A]`.
    fn gametes(&self) -> Vec<MonohybridGamete> {
        self.0.alleles().into_iter().map(MonohybridGamete).collect()
    }

    fn from_gametes(gx: &MonohybridGamete, gy: &MonohybridGamete) -> Self {
        Self(LocusGenotype::canonical(gx.0, gy.0))
    }

    fn phenotype(&self) -> Phenotype {
        Phenotype::Single(self.0.expression())
    }

    fn phenotype_notation(&self) -> String {
        self.0.notation()
    }
}

impl TryFrom<&Parent> for MonohybridGenotype {
    type Error = CrossError;

    fn try_from(parent: &Parent) -> Result<Self, Self::Error> {
        match parent.loci() {
            [locus] => Ok(Self(*locus)),
            loci => Err(GenotypeFault::LocusCount {
                mode: Mode::Segregation,
                expected: 1,
                found: loci.len(),
            }
            .into()),
        }
    }
}

impl fmt::Display for MonohybridGenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
