//! Monomials x₁^{e₁}⋯x_N^{e_N} in the variables of a birational sequence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// Exponent vector of a monomial; multiplication adds exponents
///
/// The derived `Ord` is plain lexicographic order on exponent vectors and only
/// serves set storage. Selection order comes from
/// [`MonomialOrdering`](super::ordering::MonomialOrdering).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Monomial {
    exponents: Vec<u32>,
}

impl Monomial {
    /// The identity monomial 1 in `n` variables
    pub fn one(n: usize) -> Self {
        Monomial {
            exponents: vec![0; n],
        }
    }

    /// The variable xᵢ (0-based) in `n` variables
    pub fn variable(n: usize, i: usize) -> Self {
        let mut exponents = vec![0; n];
        exponents[i] = 1;
        Monomial { exponents }
    }

    pub fn from_exponents(exponents: Vec<u32>) -> Self {
        Monomial { exponents }
    }

    pub fn exponents(&self) -> &[u32] {
        &self.exponents
    }

    pub fn num_variables(&self) -> usize {
        self.exponents.len()
    }

    pub fn is_one(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    pub fn degree(&self) -> u64 {
        self.exponents.iter().map(|&e| e as u64).sum()
    }

    /// Σ eᵢ·wᵢ
    pub fn weighted_degree(&self, weights: &[i64]) -> i64 {
        self.exponents
            .iter()
            .zip(weights)
            .map(|(&e, &w)| e as i64 * w)
            .sum()
    }

    /// Index of the first variable with a nonzero exponent
    pub fn first_nonzero(&self) -> Option<usize> {
        self.exponents.iter().position(|&e| e > 0)
    }

    /// The monomial divided by xᵢ, if xᵢ divides it
    pub fn decremented(&self, i: usize) -> Option<Monomial> {
        if self.exponents.get(i).copied().unwrap_or(0) == 0 {
            return None;
        }
        let mut exponents = self.exponents.clone();
        exponents[i] -= 1;
        Some(Monomial { exponents })
    }

    /// True if `self` divides `other`
    pub fn divides(&self, other: &Monomial) -> bool {
        self.exponents.len() == other.exponents.len()
            && self
                .exponents
                .iter()
                .zip(&other.exponents)
                .all(|(a, b)| a <= b)
    }
}

impl Mul for &Monomial {
    type Output = Monomial;

    fn mul(self, other: &Monomial) -> Monomial {
        debug_assert_eq!(self.exponents.len(), other.exponents.len());
        Monomial {
            exponents: self
                .exponents
                .iter()
                .zip(&other.exponents)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }
        let mut first = true;
        for (i, &e) in self.exponents.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if !first {
                write!(f, "*")?;
            }
            first = false;
            if e == 1 {
                write!(f, "x{}", i + 1)?;
            } else {
                write!(f, "x{}^{}", i + 1, e)?;
            }
        }
        Ok(())
    }
}
