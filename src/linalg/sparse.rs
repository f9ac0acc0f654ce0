//! Sparse vectors and column-major sparse matrices over exact scalars
//!
//! Vectors are ordered maps from coordinate to nonzero value, so the leading
//! (smallest) coordinate is available in O(log n), which is what row reduction
//! needs. Matrices store one sparse column per basis vector: column `c` is the
//! image of the c-th basis vector.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::collections::BTreeMap;
use std::ops::{Mul, Neg, Sub};

/// Exact scalar usable as a sparse coefficient
pub trait Scalar:
    Clone + PartialEq + Zero + One + Neg<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<T> Scalar for T where
    T: Clone + PartialEq + Zero + One + Neg<Output = T> + Sub<Output = T> + Mul<Output = T>
{
}

/// Sparse vector with no stored zeros
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SparseVec<T> {
    entries: BTreeMap<usize, T>,
}

impl<T: Scalar> SparseVec<T> {
    pub fn new() -> Self {
        SparseVec {
            entries: BTreeMap::new(),
        }
    }

    /// Standard basis vector eᵢ
    pub fn unit(i: usize) -> Self {
        let mut v = Self::new();
        v.entries.insert(i, T::one());
        v
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (usize, T)>) -> Self {
        let mut v = Self::new();
        for (i, x) in entries {
            v.add_at(i, x);
        }
        v
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.entries.get(&i)
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of stored nonzeros
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.entries.iter().map(|(&i, x)| (i, x))
    }

    /// Smallest coordinate with a nonzero value
    pub fn leading(&self) -> Option<(usize, &T)> {
        self.entries.iter().next().map(|(&i, x)| (i, x))
    }

    /// self[i] += value
    pub fn add_at(&mut self, i: usize, value: T) {
        if value.is_zero() {
            return;
        }
        let remove = match self.entries.get_mut(&i) {
            Some(x) => {
                *x = x.clone() + value;
                x.is_zero()
            }
            None => {
                self.entries.insert(i, value);
                false
            }
        };
        if remove {
            self.entries.remove(&i);
        }
    }

    /// self += factor · other
    pub fn add_scaled(&mut self, other: &SparseVec<T>, factor: &T) {
        if factor.is_zero() {
            return;
        }
        for (i, x) in other.iter() {
            self.add_at(i, factor.clone() * x.clone());
        }
    }

    pub fn scaled(&self, factor: &T) -> SparseVec<T> {
        if factor.is_zero() {
            return SparseVec::new();
        }
        SparseVec {
            entries: self
                .entries
                .iter()
                .map(|(&i, x)| (i, factor.clone() * x.clone()))
                .collect(),
        }
    }

    /// Keeps only coordinates in `range`
    pub fn restricted(&self, range: std::ops::Range<usize>) -> SparseVec<T> {
        SparseVec {
            entries: self
                .entries
                .range(range)
                .map(|(&i, x)| (i, x.clone()))
                .collect(),
        }
    }

    pub fn map<U: Scalar>(&self, f: impl Fn(&T) -> U) -> SparseVec<U> {
        SparseVec::from_entries(self.entries.iter().map(|(&i, x)| (i, f(x))))
    }
}

impl SparseVec<BigInt> {
    pub fn to_rational(&self) -> SparseVec<BigRational> {
        self.map(|x| BigRational::from_integer(x.clone()))
    }
}

/// Square sparse matrix stored by columns
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SparseMatrix<T> {
    columns: Vec<SparseVec<T>>,
}

impl<T: Scalar> SparseMatrix<T> {
    pub fn zeros(dim: usize) -> Self {
        SparseMatrix {
            columns: vec![SparseVec::new(); dim],
        }
    }

    pub fn dim(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, c: usize) -> &SparseVec<T> {
        &self.columns[c]
    }

    pub fn column_mut(&mut self, c: usize) -> &mut SparseVec<T> {
        &mut self.columns[c]
    }

    pub fn set_column(&mut self, c: usize, column: SparseVec<T>) {
        self.columns[c] = column;
    }

    pub fn push_column(&mut self, column: SparseVec<T>) {
        self.columns.push(column);
    }

    pub fn nnz(&self) -> usize {
        self.columns.iter().map(SparseVec::nnz).sum()
    }

    /// Matrix–vector product
    pub fn apply(&self, v: &SparseVec<T>) -> SparseVec<T> {
        let mut result = SparseVec::new();
        for (c, x) in v.iter() {
            result.add_scaled(&self.columns[c], x);
        }
        result
    }

    /// Product self · other
    pub fn compose(&self, other: &SparseMatrix<T>) -> SparseMatrix<T> {
        SparseMatrix {
            columns: other.columns.iter().map(|col| self.apply(col)).collect(),
        }
    }

    /// Commutator [self, other] = self·other - other·self
    pub fn commutator(&self, other: &SparseMatrix<T>) -> SparseMatrix<T> {
        let left = self.compose(other);
        let right = other.compose(self);
        let minus_one = -T::one();
        SparseMatrix {
            columns: left
                .columns
                .into_iter()
                .zip(&right.columns)
                .map(|(mut l, r)| {
                    l.add_scaled(r, &minus_one);
                    l
                })
                .collect(),
        }
    }
}

impl SparseMatrix<BigRational> {
    /// Multiplies by the least common multiple of all denominators
    ///
    /// The result is an integer matrix proportional to `self`.
    pub fn to_integer_multiple(&self) -> SparseMatrix<BigInt> {
        let mut common = BigInt::one();
        for col in &self.columns {
            for (_, x) in col.iter() {
                common = common.lcm(x.denom());
            }
        }
        let factor = BigRational::from_integer(common);
        SparseMatrix {
            columns: self
                .columns
                .iter()
                .map(|col| col.map(|x| (x * &factor).to_integer()))
                .collect(),
        }
    }
}
