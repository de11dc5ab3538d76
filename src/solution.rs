use crate::abstract_genetics::*;
use crate::cross::Mode;
use crate::extra::analysis;
use crate::genotypes::canonicalize;
use crate::punnett::{self, PunnettSquare};
use serde::Serialize;
use std::collections::BTreeMap;

/// Genotype and phenotype tallies with their shared queries.
///
/// Genotype keys are canonical genotype strings, so maps iterate in a fixed order (`AA`, `Aa`,
/// `aa`). Both maps sum to [`Frequencies::total`].
pub trait Frequencies {
    fn genotype_counts(&self) -> &BTreeMap<String, usize>;

    fn phenotype_counts(&self) -> &BTreeMap<Phenotype, usize>;

    fn total(&self) -> usize;

    /// Textbook notation per phenotype, e.g. `dominant-recessive` is `A_bb`.
    fn phenotype_notation(&self) -> &BTreeMap<Phenotype, String>;

    /// Looks `genotype` up in any allele order; unknown or malformed genotypes count zero.
    fn genotype_count(&self, genotype: &str) -> usize {
        canonicalize(genotype)
            .ok()
            .and_then(|g| self.genotype_counts().get(&g).copied())
            .unwrap_or(0)
    }

    fn phenotype_count(&self, phenotype: &Phenotype) -> usize {
        self.phenotype_counts().get(phenotype).copied().unwrap_or(0)
    }

    /// Genotype counts reduced to lowest terms, e.g. `[1, 2, 1]`.
    fn genotype_ratio(&self) -> Vec<usize> {
        analysis::reduce_ratio(&self.genotype_counts().values().copied().collect::<Vec<_>>())
    }

    /// Phenotype counts reduced to lowest terms, e.g. `[9, 3, 3, 1]`.
    fn phenotype_ratio(&self) -> Vec<usize> {
        analysis::reduce_ratio(&self.phenotype_counts().values().copied().collect::<Vec<_>>())
    }

    fn share(&self, count: usize) -> f64 {
        match self.total() {
            0 => 0.0,
            total => count as f64 / total as f64,
        }
    }
}

/// Counts of offspring without the cross table, as produced by sampling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub genotype_counts: BTreeMap<String, usize>,
    pub phenotype_counts: BTreeMap<Phenotype, usize>,
    pub phenotype_notation: BTreeMap<Phenotype, String>,
    pub total: usize,
}

impl Tally {
    pub fn from_genotypes<A, B>(counts: &BTreeMap<A, usize>) -> Self
    where
        A: Genotype<B>,
        B: Gamete<A>,
    {
        Self {
            genotype_counts: counts.iter().map(|(x, n)| (x.to_string(), *n)).collect(),
            phenotype_counts: punnett::phenotype_counts::<A, B>(counts),
            phenotype_notation: punnett::phenotype_notation::<A, B>(counts),
            total: counts.values().sum(),
        }
    }
}

impl Frequencies for Tally {
    fn genotype_counts(&self) -> &BTreeMap<String, usize> {
        &self.genotype_counts
    }

    fn phenotype_counts(&self) -> &BTreeMap<Phenotype, usize> {
        &self.phenotype_counts
    }

    fn total(&self) -> usize {
        self.total
    }

    fn phenotype_notation(&self) -> &BTreeMap<Phenotype, String> {
        &self.phenotype_notation
    }
}

/// Everything one cross produces. A read-only snapshot; build a new one per cross.
///
/// `table[i][j]` is the offspring of `gametes1[i]` and `gametes2[j]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossResult {
    pub mode: Mode,
    pub gametes1: Vec<String>,
    pub gametes2: Vec<String>,
    pub table: Vec<Vec<String>>,
    pub genotype_counts: BTreeMap<String, usize>,
    pub phenotype_counts: BTreeMap<Phenotype, usize>,
    pub phenotype_notation: BTreeMap<Phenotype, String>,
    pub total: usize,
}

impl CrossResult {
    pub fn from_square<A, B>(mode: Mode, square: &PunnettSquare<A, B>) -> Self
    where
        A: Genotype<B>,
        B: Gamete<A>,
    {
        let Tally {
            genotype_counts,
            phenotype_counts,
            phenotype_notation,
            total,
        } = Tally::from_genotypes::<A, B>(&square.genotype_counts());
        debug_assert_eq!(total, square.total());
        Self {
            mode,
            gametes1: square.rows().iter().map(|g| g.to_string()).collect(),
            gametes2: square.columns().iter().map(|g| g.to_string()).collect(),
            table: square
                .cells()
                .iter()
                .map(|row| row.iter().map(|x| x.to_string()).collect())
                .collect(),
            genotype_counts,
            phenotype_counts,
            phenotype_notation,
            total,
        }
    }

    /// The cross table with genotypes and gametes as text, ready to print.
    pub fn square(&self) -> PunnettSquare<String, String> {
        PunnettSquare::from_parts(
            self.gametes1.clone(),
            self.gametes2.clone(),
            self.table.clone(),
        )
    }

    /// Flattens the result for the Python bindings.
    #[cfg(feature = "python")]
    pub fn into_py_tuple(self) -> PyCrossTuple {
        (
            self.gametes1,
            self.gametes2,
            self.genotype_counts.into_iter().collect(),
            self.phenotype_counts
                .into_iter()
                .map(|(p, n)| (p.to_string(), n))
                .collect(),
            self.total,
        )
    }
}

impl Frequencies for CrossResult {
    fn genotype_counts(&self) -> &BTreeMap<String, usize> {
        &self.genotype_counts
    }

    fn phenotype_counts(&self) -> &BTreeMap<Phenotype, usize> {
        &self.phenotype_counts
    }

    fn total(&self) -> usize {
        self.total
    }

    fn phenotype_notation(&self) -> &BTreeMap<Phenotype, String> {
        &self.phenotype_notation
    }
}

#[cfg(feature = "python")]
pub type PyCrossTuple = (
    Vec<String>,
    Vec<String>,
    Vec<(String, usize)>,
    Vec<(String, usize)>,
    usize,
);

#[cfg(feature = "python")]
pub type PyCrossSolution = pyo3::PyResult<PyCrossTuple>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cross::compute_cross;

    fn cross(p1: &str, p2: &str, mode: Mode) -> CrossResult {
        compute_cross(&p1.parse().unwrap(), &p2.parse().unwrap(), mode).unwrap()
    }

    #[test]
    fn ratios_test() {
        let res = cross("Aa", "Aa", Mode::Segregation);
        assert_eq!(res.genotype_ratio(), vec![1, 2, 1]);
        assert_eq!(res.phenotype_ratio(), vec![3, 1]);
        let res = cross("AaBb", "AaBb", Mode::IndependentAssortment);
        assert_eq!(res.phenotype_ratio(), vec![9, 3, 3, 1]);
        assert_eq!(res.genotype_ratio(), vec![1, 2, 1, 2, 4, 2, 1, 2, 1]);
        let res = cross("AA", "aa", Mode::Segregation);
        assert_eq!(res.genotype_ratio(), vec![1]);
    }

    #[test]
    fn lookups_accept_any_allele_order() {
        let res = cross("Aa", "Aa", Mode::Segregation);
        assert_eq!(res.genotype_count("aA"), 2);
        assert_eq!(res.genotype_count("AA"), 1);
        assert_eq!(res.genotype_count("Bb"), 0);
        assert_eq!(res.genotype_count("A"), 0);
        assert_eq!(res.phenotype_count(&"recessive".parse().unwrap()), 1);
        assert_eq!(res.share(res.genotype_count("Aa")), 0.5);
    }

    #[test]
    fn table_rows_belong_to_first_parent() {
        let res = cross("AA", "aa", Mode::Segregation);
        assert_eq!(res.gametes1, vec!["A", "A"]);
        assert_eq!(res.gametes2, vec!["a", "a"]);
        assert_eq!(res.table, vec![vec!["Aa", "Aa"], vec!["Aa", "Aa"]]);
    }

    #[test]
    fn serializes_with_string_keys() {
        let res = cross("Aa", "aa", Mode::Segregation);
        let v = serde_json::to_value(&res).unwrap();
        assert_eq!(v["mode"], "segregation");
        assert_eq!(v["total"], 4);
        assert_eq!(v["genotype_counts"]["Aa"], 2);
        assert_eq!(v["phenotype_counts"]["dominant"], 2);
        assert_eq!(v["phenotype_counts"]["recessive"], 2);
        let res = cross("AaBb", "aabb", Mode::IndependentAssortment);
        let v = serde_json::to_value(&res).unwrap();
        assert_eq!(v["mode"], "independent-assortment");
        assert_eq!(v["phenotype_counts"]["recessive-dominant"], 4);
        assert_eq!(v["phenotype_notation"]["recessive-dominant"], "aaB_");
        let res = cross("AaBb", "AaBb", Mode::IndependentAssortment);
        let v = serde_json::to_value(&res).unwrap();
        assert_eq!(v["phenotype_notation"]["dominant-dominant"], "A_B_");
        assert_eq!(v["phenotype_notation"]["recessive-recessive"], "aabb");
    }

    #[test]
    fn square_prints_the_table() {
        let res = cross("Aa", "aa", Mode::Segregation);
        assert_eq!(
            res.square().to_string(),
            "   |  a |  a\n A | Aa | Aa\n a | aa | aa\n"
        );
    }

    #[test]
    fn empty_tally_has_zero_share() {
        let t = Tally {
            genotype_counts: BTreeMap::new(),
            phenotype_counts: BTreeMap::new(),
            phenotype_notation: BTreeMap::new(),
            total: 0,
        };
        assert_eq!(t.share(0), 0.0);
        assert!(t.genotype_ratio().is_empty());
    }
}
