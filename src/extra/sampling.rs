use crate::abstract_genetics::*;
use crate::cross::{Mode, Parent, TypedCross};
use crate::error::Result;
use crate::genotypes::dihybrid::DihybridGamete;
use crate::genotypes::monohybrid::MonohybridGamete;
use crate::solution::Tally;
use rand::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

/// Breeds `n` offspring of `x` and `y` by drawing one gamete uniformly from each parent's gamete
/// multiset per offspring.
pub fn sample<A, B, R>(rng: &mut R, x: &A, y: &A, n: usize) -> BTreeMap<A, usize>
where
    A: Genotype<B>,
    B: Gamete<A>,
    R: Rng + ?Sized,
{
    let gxs = x.gametes();
    let gys = y.gametes();
    let mut h = BTreeMap::new();
    for _ in 0..n {
        if let (Some(gx), Some(gy)) = (gxs.choose(rng), gys.choose(rng)) {
            *h.entry(A::from_gametes(gx, gy)).or_insert(0) += 1;
        }
    }
    h
}

/// Simulates `n` offspring of a cross. Validation is the same as for
/// [`compute_cross`](crate::cross::compute_cross); the tallies approach its exact ratios as `n`
/// grows.
pub fn sample_offspring<R: Rng + ?Sized>(
    rng: &mut R,
    parent1: &Parent,
    parent2: &Parent,
    mode: Mode,
    n: usize,
) -> Result<Tally> {
    let tally = match TypedCross::new(parent1, parent2, mode)? {
        TypedCross::Monohybrid(x, y) => {
            let counts = sample::<_, MonohybridGamete, R>(rng, &x, &y, n);
            Tally::from_genotypes::<_, MonohybridGamete>(&counts)
        }
        TypedCross::Dihybrid(x, y) => {
            let counts = sample::<_, DihybridGamete, R>(rng, &x, &y, n);
            Tally::from_genotypes::<_, DihybridGamete>(&counts)
        }
    };
    debug!(%parent1, %parent2, %mode, n, "sampled offspring");
    Ok(tally)
}

/// Samples `n` offspring; a `seed` makes the draw reproducible.
#[cfg(feature = "python")]
#[pyo3::pyfunction]
#[pyo3(name = "sample_offspring", signature = (parent1, parent2, n, mode = None, seed = None))]
pub fn sample_offspring_python(
    parent1: &str,
    parent2: &str,
    n: usize,
    mode: Option<&str>,
    seed: Option<u64>,
) -> pyo3::PyResult<(Vec<(String, usize)>, Vec<(String, usize)>, usize)> {
    let parent1: Parent = parent1.parse()?;
    let parent2: Parent = parent2.parse()?;
    let mode = match mode {
        None => Mode::infer(&parent1, &parent2),
        Some(s) => s
            .parse()
            .map_err(pyo3::exceptions::PyValueError::new_err)?,
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let t = sample_offspring(&mut rng, &parent1, &parent2, mode, n)?;
    Ok((
        t.genotype_counts.into_iter().collect(),
        t.phenotype_counts
            .into_iter()
            .map(|(p, n)| (p.to_string(), n))
            .collect(),
        t.total,
    ))
}
