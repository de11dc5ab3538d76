use crate::abstract_genetics::*;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt;

/// The cross table of two parents: one row per gamete of the first parent, one column per gamete
/// of the second, and the offspring genotype in every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunnettSquare<A, B> {
    rows: Vec<B>,
    columns: Vec<B>,
    cells: Vec<Vec<A>>,
}

impl<A, B> PunnettSquare<A, B> {
    /// Assembles a square from already computed parts; `cells` has one row per entry of `rows`.
    pub(crate) fn from_parts(rows: Vec<B>, columns: Vec<B>, cells: Vec<Vec<A>>) -> Self {
        debug_assert_eq!(rows.len(), cells.len());
        Self {
            rows,
            columns,
            cells,
        }
    }
}

impl<A: Genotype<B>, B: Gamete<A>> PunnettSquare<A, B> {
    pub fn cross(x: &A, y: &A) -> Self {
        let rows = x.gametes();
        let columns = y.gametes();
        let cells = rows
            .iter()
            .map(|gx| columns.iter().map(|gy| A::from_gametes(gx, gy)).collect())
            .collect();
        Self {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> &[B] {
        &self.rows
    }

    pub fn columns(&self) -> &[B] {
        &self.columns
    }

    pub fn cells(&self) -> &[Vec<A>] {
        &self.cells
    }

    pub fn total(&self) -> usize {
        self.rows.len() * self.columns.len()
    }

    pub fn offspring(&self) -> impl Iterator<Item = &A> {
        self.cells.iter().flatten()
    }

    pub fn genotype_counts(&self) -> BTreeMap<A, usize> {
        self.offspring().cloned().counts().into_iter().collect()
    }

    pub fn phenotype_counts(&self) -> BTreeMap<Phenotype, usize> {
        phenotype_counts::<A, B>(&self.genotype_counts())
    }
}

/// Groups genotype counts by phenotype. Every genotype lands in exactly one bucket.
pub fn phenotype_counts<A, B>(genotype_counts: &BTreeMap<A, usize>) -> BTreeMap<Phenotype, usize>
where
    A: Genotype<B>,
    B: Gamete<A>,
{
    let mut h = BTreeMap::new();
    for (x, n) in genotype_counts {
        *h.entry(x.phenotype()).or_insert(0) += n;
    }
    h
}

/// Textbook notation of every phenotype present. Genotypes sharing a phenotype share its notation.
pub fn phenotype_notation<A, B>(
    genotype_counts: &BTreeMap<A, usize>,
) -> BTreeMap<Phenotype, String>
where
    A: Genotype<B>,
    B: Gamete<A>,
{
    genotype_counts
        .keys()
        .map(|x| (x.phenotype(), x.phenotype_notation()))
        .collect()
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for PunnettSquare<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .flatten()
            .map(|x| x.to_string().len())
            .chain(self.columns.iter().map(|g| g.to_string().len()))
            .chain(self.rows.iter().map(|g| g.to_string().len()))
            .max()
            .unwrap_or(1);
        write!(f, "{:>w$}", "", w = width)?;
        for g in &self.columns {
            write!(f, " | {:>w$}", g.to_string(), w = width)?;
        }
        writeln!(f)?;
        for (g, row) in self.rows.iter().zip(&self.cells) {
            write!(f, "{:>w$}", g.to_string(), w = width)?;
            for x in row {
                write!(f, " | {:>w$}", x.to_string(), w = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cross::Parent;
    use crate::genotypes::dihybrid::*;
    use crate::genotypes::monohybrid::*;

    type MonoSquare = PunnettSquare<MonohybridGenotype, MonohybridGamete>;
    type DiSquare = PunnettSquare<DihybridGenotype, DihybridGamete>;

    fn mono(s: &str) -> MonohybridGenotype {
        MonohybridGenotype::try_from(&s.parse::<Parent>().unwrap()).unwrap()
    }

    fn di(s: &str) -> DihybridGenotype {
        DihybridGenotype::try_from(&s.parse::<Parent>().unwrap()).unwrap()
    }

    #[test]
    fn cells_follow_rows_and_columns() {
        let sq = MonoSquare::cross(&mono("Aa"), &mono("aa"));
        assert_eq!(sq.total(), 4);
        let cells: Vec<Vec<String>> = sq
            .cells()
            .iter()
            .map(|r| r.iter().map(|x| x.to_string()).collect())
            .collect();
        assert_eq!(cells, vec![vec!["Aa", "Aa"], vec!["aa", "aa"]]);
    }

    #[test]
    fn counts_sum_to_total() {
        macro_rules! f {
            ($sq:expr) => {
                let sq = $sq;
                assert_eq!(sq.genotype_counts().values().sum::<usize>(), sq.total());
                assert_eq!(sq.phenotype_counts().values().sum::<usize>(), sq.total());
            };
        }
        f!(MonoSquare::cross(&mono("Aa"), &mono("Aa")));
        f!(MonoSquare::cross(&mono("AA"), &mono("aa")));
        f!(DiSquare::cross(&di("AaBb"), &di("AaBb")));
        f!(DiSquare::cross(&di("AAbb"), &di("aaBb")));
    }

    #[test]
    fn dihybrid_square_has_sixteen_cells() {
        let sq = DiSquare::cross(&di("AaBb"), &di("AaBb"));
        assert_eq!(sq.rows().len(), 4);
        assert_eq!(sq.columns().len(), 4);
        assert_eq!(sq.offspring().count(), 16);
        assert_eq!(sq.genotype_counts()[&di("AaBb")], 4);
        let notation = phenotype_notation::<_, DihybridGamete>(&sq.genotype_counts());
        let v: Vec<&str> = notation.values().map(|s| s.as_str()).collect();
        assert_eq!(v, vec!["A_B_", "A_bb", "aaB_", "aabb"]);
    }

    #[test]
    fn display_test() {
        let sq = MonoSquare::cross(&mono("Aa"), &mono("Aa"));
        assert_eq!(
            sq.to_string(),
            "   |  A |  a\n A | AA | Aa\n a | Aa | aa\n"
        );
    }
}
