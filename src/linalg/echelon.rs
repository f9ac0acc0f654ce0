//! Incremental row echelon forms over ℚ
//!
//! Insertion is the only mutation: a row is reduced against the stored pivot
//! rows (each normalized to leading coefficient 1) and either vanishes, in
//! which case it already lies in the span, or becomes a new pivot row.
//!
//! A pivot row's leading coordinate is unique among pivot rows, and every other
//! entry of a pivot row sits at a larger coordinate. Any nonzero combination of
//! pivot rows therefore has its leading entry on a pivot coordinate, so a
//! reduced row whose leading coordinate is not a pivot is independent.

use super::sparse::SparseVec;
use num_rational::BigRational;
use num_traits::One;
use std::collections::BTreeMap;

type Row = SparseVec<BigRational>;

/// Reduces `row` in place against `pivots`; calls `on_step(pivot, factor)` for every subtraction
fn reduce<P>(
    row: &mut Row,
    pivots: &BTreeMap<usize, P>,
    pivot_row: impl Fn(&P) -> &Row,
    mut on_step: impl FnMut(&P, &BigRational),
) {
    loop {
        let Some((col, value)) = row.leading() else {
            return;
        };
        let Some(pivot) = pivots.get(&col) else {
            return;
        };
        let factor = value.clone();
        row.add_scaled(pivot_row(pivot), &-factor.clone());
        on_step(pivot, &factor);
    }
}

fn normalized(row: &Row) -> Row {
    match row.leading() {
        Some((_, lead)) => row.scaled(&(BigRational::one() / lead.clone())),
        None => row.clone(),
    }
}

/// Span of inserted rows; reports whether an insertion raised the rank
#[derive(Clone, Debug, Default)]
pub struct SparseEchelon {
    pivots: BTreeMap<usize, Row>,
}

impl SparseEchelon {
    pub fn new() -> Self {
        SparseEchelon {
            pivots: BTreeMap::new(),
        }
    }

    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Adds `row`; returns false if it already lies in the span
    pub fn insert(&mut self, mut row: Row) -> bool {
        reduce(&mut row, &self.pivots, |p| p, |_, _| {});
        match row.leading() {
            None => false,
            Some((col, _)) => {
                let row = normalized(&row);
                self.pivots.insert(col, row);
                true
            }
        }
    }

    /// True if `row` lies in the span (no mutation)
    pub fn contains(&self, row: &Row) -> bool {
        let mut row = row.clone();
        reduce(&mut row, &self.pivots, |p| p, |_, _| {});
        row.is_zero()
    }
}

/// Outcome of inserting into a [`TrackedEchelon`]
#[derive(Clone, Debug, PartialEq)]
pub enum Reduction {
    /// The row became basis element `k`
    Independent(usize),
    /// The row equals Σ c_k · (basis element k)
    Dependent(SparseVec<BigRational>),
}

#[derive(Clone, Debug)]
struct TrackedRow {
    row: Row,
    /// pivot row = Σ_k combination[k] · (basis element k)
    combination: Row,
}

/// Echelon form that also expresses dependent rows in the chosen basis
///
/// The basis consists of the independent rows in insertion order.
#[derive(Clone, Debug, Default)]
pub struct TrackedEchelon {
    pivots: BTreeMap<usize, TrackedRow>,
    basis_len: usize,
}

impl TrackedEchelon {
    pub fn new() -> Self {
        TrackedEchelon {
            pivots: BTreeMap::new(),
            basis_len: 0,
        }
    }

    pub fn rank(&self) -> usize {
        self.basis_len
    }

    pub fn insert(&mut self, mut row: Row) -> Reduction {
        let mut combination = Row::new();
        reduce(
            &mut row,
            &self.pivots,
            |p| &p.row,
            |p, factor| combination.add_scaled(&p.combination, factor),
        );

        let Some((col, lead)) = row.leading() else {
            return Reduction::Dependent(combination);
        };

        // row = b_new - combination
        let k = self.basis_len;
        self.basis_len += 1;
        let inverse = BigRational::one() / lead.clone();
        let mut tracked = combination.scaled(&-BigRational::one());
        tracked.add_at(k, BigRational::one());
        self.pivots.insert(
            col,
            TrackedRow {
                row: row.scaled(&inverse),
                combination: tracked.scaled(&inverse),
            },
        );
        Reduction::Independent(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn row(values: &[(usize, i64)]) -> Row {
        SparseVec::from_entries(
            values
                .iter()
                .map(|&(i, x)| (i, BigRational::from_integer(BigInt::from(x)))),
        )
    }

    #[test]
    fn test_rank_increases_only_for_independent_rows() {
        let mut echelon = SparseEchelon::new();
        assert!(echelon.insert(row(&[(0, 1), (1, 2)])));
        assert!(echelon.insert(row(&[(1, 1), (2, 1)])));
        assert!(!echelon.insert(row(&[(0, 2), (1, 5), (2, 1)])));
        assert!(!echelon.insert(row(&[])));
        assert!(echelon.insert(row(&[(2, 3)])));
        assert_eq!(echelon.rank(), 3);
    }

    #[test]
    fn test_contains_does_not_mutate() {
        let mut echelon = SparseEchelon::new();
        echelon.insert(row(&[(0, 2)]));
        assert!(echelon.contains(&row(&[(0, 7)])));
        assert!(!echelon.contains(&row(&[(1, 1)])));
        assert_eq!(echelon.rank(), 1);
    }

    #[test]
    fn test_tracked_dependent_combination() {
        let mut echelon = TrackedEchelon::new();
        let a = row(&[(0, 1), (1, 1)]);
        let b = row(&[(0, 1), (1, -1)]);
        assert_eq!(echelon.insert(a), Reduction::Independent(0));
        assert_eq!(echelon.insert(b), Reduction::Independent(1));

        // (3, 1) = 2a + b
        match echelon.insert(row(&[(0, 3), (1, 1)])) {
            Reduction::Dependent(c) => {
                assert_eq!(c, row(&[(0, 2), (1, 1)]));
            }
            other => panic!("expected dependent row, got {:?}", other),
        }
    }
}
