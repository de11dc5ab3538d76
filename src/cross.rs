//! The cross engine entry point.
//!
//! [`compute_cross`] validates two [`Parent`]s against a [`Mode`], builds the Punnett square of
//! their gametes and tallies offspring genotypes and phenotypes. The engine holds no state; each
//! call builds a fresh [`CrossResult`].

use crate::error::{CrossError, GenotypeFault, Result};
use crate::genotypes::dihybrid::{DihybridGamete, DihybridGenotype};
use crate::genotypes::locus::LocusGenotype;
use crate::genotypes::monohybrid::{MonohybridGamete, MonohybridGenotype};
use crate::punnett::PunnettSquare;
use crate::solution::CrossResult;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// One locus per parent (law of segregation)
    Segregation,
    /// Two independently assorting loci per parent
    IndependentAssortment,
}

impl Mode {
    pub fn expected_loci(self) -> usize {
        match self {
            Mode::Segregation => 1,
            Mode::IndependentAssortment => 2,
        }
    }

    /// Picks the mode matching the parents' loci. Anything other than two loci on both sides
    /// falls back to segregation, where validation reports the mismatch.
    pub fn infer(parent1: &Parent, parent2: &Parent) -> Self {
        if parent1.n_loci() == 2 && parent2.n_loci() == 2 {
            Mode::IndependentAssortment
        } else {
            Mode::Segregation
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Mode::Segregation => "segregation",
            Mode::IndependentAssortment => "independent-assortment",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "segregation" => Ok(Mode::Segregation),
            "independent-assortment" | "combination" => Ok(Mode::IndependentAssortment),
            other => Err(format!(
                "unknown mode {:?}, expected segregation or independent-assortment",
                other
            )),
        }
    }
}

/// One individual's genotype, one [`LocusGenotype`] per locus in locus order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parent {
    loci: Vec<LocusGenotype>,
}

impl Parent {
    pub fn new(loci: Vec<LocusGenotype>) -> Self {
        Self { loci }
    }

    pub fn loci(&self) -> &[LocusGenotype] {
        &self.loci
    }

    pub fn n_loci(&self) -> usize {
        self.loci.len()
    }
}

/// Reads consecutive letter pairs as loci: `AaBb` is `Aa` at locus 1 and `Bb` at locus 2.
/// Whitespace is ignored.
impl FromStr for Parent {
    type Err = CrossError;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() % 2 != 0 {
            return Err(GenotypeFault::OddLength(chars.len()).into());
        }
        let loci = chars
            .chunks(2)
            .map(|c| LocusGenotype::from_chars(c[0], c[1]))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(loci))
    }
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for locus in &self.loci {
            write!(f, "{}", locus)?;
        }
        Ok(())
    }
}

/// A validated pair of parents, typed by mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypedCross {
    Monohybrid(MonohybridGenotype, MonohybridGenotype),
    Dihybrid(DihybridGenotype, DihybridGenotype),
}

impl TypedCross {
    pub(crate) fn new(parent1: &Parent, parent2: &Parent, mode: Mode) -> Result<Self> {
        let typed = match mode {
            Mode::Segregation => Self::Monohybrid(
                MonohybridGenotype::try_from(parent1)?,
                MonohybridGenotype::try_from(parent2)?,
            ),
            Mode::IndependentAssortment => Self::Dihybrid(
                DihybridGenotype::try_from(parent1)?,
                DihybridGenotype::try_from(parent2)?,
            ),
        };
        check_compatible(parent1, parent2)?;
        Ok(typed)
    }
}

/// Offspring loci must not mix allele pairs, so the parents have to agree locus by locus.
fn check_compatible(parent1: &Parent, parent2: &Parent) -> Result<()> {
    for (i, (l1, l2)) in parent1.loci().iter().zip(parent2.loci()).enumerate() {
        if l1.pair() != l2.pair() {
            return Err(GenotypeFault::MismatchedParents {
                locus: i + 1,
                first: l1.pair(),
                second: l2.pair(),
            }
            .into());
        }
    }
    Ok(())
}

/// Crosses `parent1` with `parent2`.
///
/// Fails with [`CrossError::InvalidGenotype`] when a parent does not carry
/// [`Mode::expected_loci`] loci, uses one allele pair at both loci, or when the parents carry
/// different allele pairs at the same locus. Nothing is computed for invalid input.
///
/// ```
/// use mendel::cross::{compute_cross, Mode};
///
/// let result = compute_cross(&"Aa".parse()?, &"Aa".parse()?, Mode::Segregation)?;
/// assert_eq!(result.total, 4);
/// assert_eq!(result.genotype_counts["Aa"], 2);
/// # Ok::<(), mendel::error::CrossError>(())
/// ```
#[instrument(
    level = "debug",
    skip_all,
    fields(parent1 = %parent1, parent2 = %parent2, mode = %mode)
)]
pub fn compute_cross(parent1: &Parent, parent2: &Parent, mode: Mode) -> Result<CrossResult> {
    let typed = TypedCross::new(parent1, parent2, mode).map_err(|e| {
        debug!(error = %e, "rejected cross");
        e
    })?;
    let result = match typed {
        TypedCross::Monohybrid(x, y) => {
            CrossResult::from_square(mode, &PunnettSquare::<_, MonohybridGamete>::cross(&x, &y))
        }
        TypedCross::Dihybrid(x, y) => {
            CrossResult::from_square(mode, &PunnettSquare::<_, DihybridGamete>::cross(&x, &y))
        }
    };
    debug!(
        gametes1 = ?result.gametes1,
        gametes2 = ?result.gametes2,
        total = result.total,
        "crossed"
    );
    trace!(genotypes = ?result.genotype_counts, phenotypes = ?result.phenotype_counts);
    Ok(result)
}

/// Runs a cross given parent genotype strings such as `"Aa"` or `"AaBb"`. When `mode` is
/// omitted it is inferred from the number of loci.
#[cfg(feature = "python")]
#[pyo3::pyfunction]
#[pyo3(name = "compute_cross", signature = (parent1, parent2, mode = None))]
pub fn compute_cross_python(
    parent1: &str,
    parent2: &str,
    mode: Option<&str>,
) -> crate::solution::PyCrossSolution {
    let parent1: Parent = parent1.parse()?;
    let parent2: Parent = parent2.parse()?;
    let mode = match mode {
        None => Mode::infer(&parent1, &parent2),
        Some(s) => s
            .parse()
            .map_err(pyo3::exceptions::PyValueError::new_err)?,
    };
    let res = compute_cross(&parent1, &parent2, mode)?;
    Ok(res.into_py_tuple())
}
