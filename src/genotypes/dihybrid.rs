use crate::abstract_genetics::*;
use crate::cross::{Mode, Parent};
use crate::error::{CrossError, GenotypeFault};
use crate::genotypes::locus::LocusGenotype;
use itertools::iproduct;
use std::fmt;

/// A gamete of a two-locus cross: one allele from locus 1 followed by one from locus 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DihybridGamete(pub Allele, pub Allele);

impl Gamete<DihybridGenotype> for DihybridGamete {}

impl fmt::Display for DihybridGamete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// Two independently assorting loci. No linkage is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DihybridGenotype(pub LocusGenotype, pub LocusGenotype);

impl Genotype<DihybridGamete> for DihybridGenotype {
    /// Every combination of one allele per locus. Always four entries; a homozygous locus
    /// yields repeated gametes, which is what weights them.
    fn gametes(&self) -> Vec<DihybridGamete> {
        iproduct!(self.0.alleles(), self.1.alleles())
            .map(|(a, b)| DihybridGamete(a, b))
            .collect()
    }

    fn from_gametes(gx: &DihybridGamete, gy: &DihybridGamete) -> Self {
        Self(
            LocusGenotype::canonical(gx.0, gy.0),
            LocusGenotype::canonical(gx.1, gy.1),
        )
    }

    fn phenotype(&self) -> Phenotype {
        Phenotype::Double(self.0.expression(), self.1.expression())
    }

    fn phenotype_notation(&self) -> String {
        format!("{}{}", self.0.notation(), self.1.notation())
    }
}

impl TryFrom<&Parent> for DihybridGenotype {
    type Error = CrossError;

    fn try_from(parent: &Parent) -> Result<Self, Self::Error> {
        match parent.loci() {
            [l1, l2] if l1.pair() == l2.pair() => {
                Err(GenotypeFault::RepeatedPair(l1.pair()).into())
            }
            [l1, l2] => Ok(Self(*l1, *l2)),
            loci => Err(GenotypeFault::LocusCount {
                mode: Mode::IndependentAssortment,
                expected: 2,
                found: loci.len(),
            }
            .into()),
        }
    }
}

impl fmt::Display for DihybridGenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}
