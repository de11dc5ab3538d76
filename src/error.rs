//! Error type for the cross engine.
//!
//! Every failure is an input-validation failure and surfaces as
//! [`CrossError::InvalidGenotype`]; the attached [`GenotypeFault`] says what
//! was wrong with the input.

use crate::cross::Mode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrossError {
    #[error("invalid genotype: {0}")]
    InvalidGenotype(#[from] GenotypeFault),
}

/// The reason a genotype, parent or cross was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenotypeFault {
    /// A character that is not an ASCII letter was used as an allele
    #[error("'{0}' is not an allele symbol")]
    NotAnAllele(char),

    /// The two alleles of one locus come from different allele pairs
    #[error("alleles '{0}' and '{1}' belong to different allele pairs")]
    MixedPair(char, char),

    /// A genotype string with a dangling allele
    #[error("expected an even number of alleles, found {0}")]
    OddLength(usize),

    /// A single locus written with other than two alleles
    #[error("a locus holds exactly two alleles, found {0}")]
    LocusLength(usize),

    /// The parent carries the wrong number of loci for the mode
    #[error("mode {mode} expects {expected} loci per parent, found {found}")]
    LocusCount {
        mode: Mode,
        expected: usize,
        found: usize,
    },

    /// The same allele pair was used at both loci of one parent
    #[error("both loci use the allele pair '{0}'")]
    RepeatedPair(char),

    /// The parents disagree on which allele pair sits at a locus
    #[error("locus {locus} carries pair '{first}' in one parent and '{second}' in the other")]
    MismatchedParents {
        locus: usize,
        first: char,
        second: char,
    },

    /// A line that is not of the form `P1 x P2`
    #[error("cannot read a cross from {0:?}")]
    MalformedCross(String),
}

impl CrossError {
    /// Convenience for the only error kind there is.
    pub fn fault(&self) -> &GenotypeFault {
        match self {
            CrossError::InvalidGenotype(fault) => fault,
        }
    }
}

pub type Result<T> = std::result::Result<T, CrossError>;

#[cfg(feature = "python")]
impl From<CrossError> for pyo3::PyErr {
    fn from(e: CrossError) -> Self {
        pyo3::exceptions::PyValueError::new_err(e.to_string())
    }
}
