//! Mendelian cross modelling library.
//!
//! Given the genotypes of two parents at one locus (segregation) or two independent loci
//! (independent assortment), the engine enumerates gametes, fills the Punnett square and tallies
//! offspring genotypes and phenotypes.
//! Typical use is as follows:
//! ```
//! use mendel::cross::{compute_cross, Mode, Parent};
//! use mendel::solution::Frequencies;
//!
//! let p1: Parent = "AaBb".parse().unwrap();
//! let p2: Parent = "AaBb".parse().unwrap();
//!
//! let result = compute_cross(&p1, &p2, Mode::IndependentAssortment).unwrap();
//! assert_eq!(result.total, 16);
//! assert_eq!(result.phenotype_ratio(), vec![9, 3, 3, 1]);
//! ```
//#![deny(missing_docs)]

/// Exports the traits and allele types shared by every genotype
pub mod abstract_genetics;
/// Exports the entry point of the cross engine
pub mod cross;
/// Exports the error type
pub mod error;
/// Exports the utility functions for analysing, sampling and parsing crosses
pub mod extra;
/// Exports the concrete one- and two-locus genotypes
pub mod genotypes;
/// Exports the cross table
pub mod punnett;
/// Exports the result types
pub mod solution;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
#[pyo3(name = "mendel")]
fn mendel_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py_extra = PyModule::new(m.py(), "extra")?;

    m.add_function(wrap_pyfunction!(cross::compute_cross_python, m)?)?;

    py_extra.add_function(wrap_pyfunction!(
        extra::sampling::sample_offspring_python,
        &py_extra
    )?)?;

    m.add_submodule(&py_extra)?;
    Ok(())
}
