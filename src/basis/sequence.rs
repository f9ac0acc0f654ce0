//! Birational sequences: ordered lists of positive roots
//!
//! The k-th root βₖ of the sequence is the variable xₖ of the monomial ring.
//! A monomial x^e stands for the vector
//!
//! ```text
//! f_{β₁}^{e₁} f_{β₂}^{e₂} ⋯ f_{β_N}^{e_N} · v_λ
//! ```
//!
//! so the last operator acts first. The monomial has weight λ - Σ eₖ βₖ.

use super::monomial::Monomial;
use crate::error::{BasisError, Result};
use crate::lie::root_system::RootSystem;
use crate::lie::weight::{Root, Weight};
use crate::lie::weyl::WeylWord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of positive roots, one per monomial variable
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BirationalSequence {
    rank: usize,
    roots: Vec<Root>,
    /// Index of each root in the positive root list of its root system
    root_indices: Vec<usize>,
    /// Each root written in fundamental weights
    weights: Vec<Weight>,
}

impl BirationalSequence {
    /// Validates that every root is a positive root of `root_system`
    pub fn from_roots(root_system: &RootSystem, roots: Vec<Root>) -> Result<Self> {
        let mut root_indices = Vec::with_capacity(roots.len());
        for root in &roots {
            if root.rank() != root_system.rank() {
                return Err(BasisError::InvalidOperator(format!(
                    "root {} has {} coordinates, expected {}",
                    root,
                    root.rank(),
                    root_system.rank()
                )));
            }
            let index = root_system.positive_root_index(root).ok_or_else(|| {
                BasisError::InvalidOperator(format!(
                    "{} is not a positive root of {}",
                    root,
                    root_system.cartan_type()
                ))
            })?;
            root_indices.push(index);
        }
        let weights = roots.iter().map(|r| root_system.root_to_weight(r)).collect();
        Ok(BirationalSequence {
            rank: root_system.rank(),
            roots,
            root_indices,
            weights,
        })
    }

    /// Roots given by coefficient vectors in simple roots
    pub fn from_coefficients(root_system: &RootSystem, coefficients: &[Vec<i64>]) -> Result<Self> {
        let roots = coefficients.iter().map(|c| Root::new(c.clone())).collect();
        Self::from_roots(root_system, roots)
    }

    /// Roots given by 1-based positions in the positive root list
    pub fn from_indices(root_system: &RootSystem, indices: &[usize]) -> Result<Self> {
        let n = root_system.num_positive_roots();
        let roots = indices
            .iter()
            .map(|&i| {
                if i == 0 || i > n {
                    return Err(BasisError::InvalidOperator(format!(
                        "operator index {} is outside 1..={}",
                        i, n
                    )));
                }
                Ok(root_system.positive_roots()[i - 1].clone())
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_roots(root_system, roots)
    }

    /// All positive roots by ascending height
    pub fn ascending_height(root_system: &RootSystem) -> Self {
        Self::from_positive_indices(root_system, (0..root_system.num_positive_roots()).collect())
    }

    /// All positive roots by descending height (FFLV)
    pub fn descending_height(root_system: &RootSystem) -> Self {
        Self::from_positive_indices(
            root_system,
            (0..root_system.num_positive_roots()).rev().collect(),
        )
    }

    /// βₖ = s_{i₁}⋯s_{iₖ₋₁}(α_{iₖ}) for a reduced word of the longest element
    pub fn lusztig(root_system: &RootSystem, word: &WeylWord) -> Result<Self> {
        if !word.is_longest(root_system) {
            return Err(BasisError::word(
                &word.one_based(),
                "not a reduced word of the longest element",
            ));
        }
        Self::from_roots(root_system, word.roots(root_system))
    }

    /// βₖ = α_{iₖ}, one simple root per letter of a reduced word
    pub fn simple_roots(root_system: &RootSystem, word: &WeylWord) -> Result<Self> {
        let r = root_system.rank();
        let roots = word.letters().iter().map(|&i| Root::simple(r, i)).collect();
        Self::from_roots(root_system, roots)
    }

    /// `indices` are 0-based positions in the positive root list
    fn from_positive_indices(root_system: &RootSystem, root_indices: Vec<usize>) -> Self {
        let positive = root_system.positive_roots();
        let roots: Vec<Root> = root_indices.iter().map(|&i| positive[i].clone()).collect();
        let weights = roots.iter().map(|r| root_system.root_to_weight(r)).collect();
        BirationalSequence {
            rank: root_system.rank(),
            roots,
            root_indices,
            weights,
        }
    }

    /// Rank of the root system the roots belong to
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn roots(&self) -> &[Root] {
        &self.roots
    }

    pub fn root_indices(&self) -> &[usize] {
        &self.root_indices
    }

    /// Root coefficient lists, in sequence order
    pub fn coefficients(&self) -> Vec<Vec<i64>> {
        self.roots.iter().map(|r| r.coefficients().to_vec()).collect()
    }

    /// Heights of the roots, used as variable weights
    pub fn heights(&self) -> Vec<i64> {
        self.roots.iter().map(Root::height).collect()
    }

    /// Roots in fundamental weight coordinates
    pub fn operator_weights(&self) -> &[Weight] {
        &self.weights
    }

    /// Σ eₖ βₖ in simple-root coordinates
    pub fn depth_of(&self, monomial: &Monomial) -> Vec<i64> {
        let mut depth = vec![0; self.rank];
        for (root, &e) in self.roots.iter().zip(monomial.exponents()) {
            if e == 0 {
                continue;
            }
            for (d, &c) in depth.iter_mut().zip(root.coefficients()) {
                *d += c * e as i64;
            }
        }
        depth
    }

    /// λ - Σ eₖ βₖ
    pub fn weight_of(&self, highest_weight: &Weight, monomial: &Monomial) -> Weight {
        let mut weight = highest_weight.clone();
        for (w, &e) in self.weights.iter().zip(monomial.exponents()) {
            if e > 0 {
                weight = &weight - &(e as i64 * w);
            }
        }
        weight
    }
}

impl fmt::Display for BirationalSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, root) in self.roots.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", root)?;
        }
        write!(f, "]")
    }
}
