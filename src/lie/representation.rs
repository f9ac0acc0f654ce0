//! Explicit matrices for the irreducible module V(λ)
//!
//! # Construction
//!
//! V(λ) is built one weight level at a time, starting from the highest weight
//! vector v₀. A weight space V_μ (μ ≠ λ) is spanned by the vectors fᵢb with b a
//! basis vector of V_{μ+αᵢ}. In the irreducible module a vector u of weight
//! μ ≠ λ is zero iff eⱼu = 0 for all j, so u is identified with the tuple of
//! its raising images
//!
//! ```text
//! Φ(u) = (e₁u, …, eᵣu) ∈ ⊕ⱼ V_{μ+αⱼ}
//! eⱼ fᵢ b = fᵢ eⱼ b + δᵢⱼ ⟨wt(b), αᵢ^∨⟩ b
//! ```
//!
//! and the right-hand side only involves levels that already exist. A tracked
//! row echelon form over ℚ picks a basis of each weight space among the
//! candidates fᵢb and expresses every other candidate in it, which yields the
//! columns of fᵢ; the rows Φ(u) of the chosen basis are the columns of eⱼ.
//!
//! Every weight-space dimension is checked against Freudenthal's formula.
//!
//! # Root vectors
//!
//! For a non-simple positive root β with β - αᵢ positive,
//! f_β = [fᵢ, f_{β-αᵢ}] spans the root space g_{-β}. Only the span matters for
//! monomial bases, so each such matrix may be rescaled to integer entries.

use super::character::{depth_to_weight, simple_character_by_depth};
use super::root_system::RootSystem;
use super::weight::Weight;
use crate::error::{BasisError, Result};
use crate::linalg::echelon::{Reduction, TrackedEchelon};
use crate::linalg::sparse::{SparseMatrix, SparseVec};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use std::collections::{BTreeSet, HashMap};
use std::ops::Range;
use tracing::trace;

/// One weight space of the constructed module
#[derive(Clone, Debug)]
pub struct WeightSpace {
    /// Simple-root coordinates of λ - μ
    pub depth: Vec<i64>,
    pub weight: Weight,
    pub start: usize,
    pub dim: usize,
}

impl WeightSpace {
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.dim
    }
}

/// V(λ) with exact matrices of all simple raising and lowering operators
///
/// Basis index 0 is the highest weight vector.
#[derive(Clone, Debug)]
pub struct Representation {
    highest_weight: Weight,
    spaces: Vec<WeightSpace>,
    space_of_depth: HashMap<Vec<i64>, usize>,
    owner: Vec<usize>,
    lowering: Vec<SparseMatrix<BigRational>>,
    raising: Vec<SparseMatrix<BigRational>>,
}

impl Representation {
    pub fn build(root_system: &RootSystem, highest_weight: &Weight) -> Result<Self> {
        let r = root_system.rank();
        let expected = simple_character_by_depth(root_system, highest_weight)?;

        let mut rep = Representation {
            highest_weight: highest_weight.clone(),
            spaces: Vec::new(),
            space_of_depth: HashMap::new(),
            owner: Vec::new(),
            lowering: vec![SparseMatrix::zeros(0); r],
            raising: vec![SparseMatrix::zeros(0); r],
        };
        rep.push_space(vec![0; r], highest_weight.clone(), vec![SparseVec::new()]);

        let mut level = vec![0usize];
        while !level.is_empty() {
            let candidates: BTreeSet<Vec<i64>> = level
                .iter()
                .flat_map(|&s| {
                    let depth = rep.spaces[s].depth.clone();
                    (0..r).map(move |i| {
                        let mut next = depth.clone();
                        next[i] += 1;
                        next
                    })
                })
                .collect();

            let mut next_level = Vec::new();
            for depth in candidates {
                let want = expected.get(&depth).copied().unwrap_or(0) as usize;
                if let Some(space) = rep.build_level(root_system, highest_weight, depth, want)? {
                    next_level.push(space);
                }
            }
            level = next_level;
        }

        trace!(
            highest_weight = %highest_weight,
            dim = rep.dim(),
            spaces = rep.spaces.len(),
            "built representation"
        );
        Ok(rep)
    }

    /// Builds the weight space at `depth` from the level above; returns its index
    fn build_level(
        &mut self,
        root_system: &RootSystem,
        highest_weight: &Weight,
        depth: Vec<i64>,
        want: usize,
    ) -> Result<Option<usize>> {
        let r = depth.len();
        let one = BigRational::one();
        let mut echelon = TrackedEchelon::new();
        let mut images: Vec<(usize, usize, Reduction)> = Vec::new();
        let mut new_rows: Vec<SparseVec<BigRational>> = Vec::new();

        for i in 0..r {
            if depth[i] == 0 {
                continue;
            }
            let mut source = depth.clone();
            source[i] -= 1;
            let Some(&s) = self.space_of_depth.get(&source) else {
                continue;
            };
            let h = BigRational::from_integer(BigInt::from(self.spaces[s].weight.coefficients()[i]));

            for b in self.spaces[s].range() {
                let mut phi = SparseVec::new();
                for j in 0..r {
                    let raised = self.raising[j].column(b);
                    if !raised.is_zero() {
                        phi.add_scaled(&self.lowering[i].apply(raised), &one);
                    }
                }
                phi.add_at(b, h.clone());

                let reduction = echelon.insert(phi.clone());
                if matches!(reduction, Reduction::Independent(_)) {
                    new_rows.push(phi);
                }
                images.push((i, b, reduction));
            }
        }

        if echelon.rank() != want {
            return Err(BasisError::Inconsistent(format!(
                "weight space at depth {:?} of V({}) has dimension {} but Freudenthal gives {}",
                depth,
                highest_weight,
                echelon.rank(),
                want
            )));
        }
        if want == 0 {
            return Ok(None);
        }

        let weight = depth_to_weight(root_system, highest_weight, &depth);
        let space = self.push_space(depth, weight, new_rows);
        let start = self.spaces[space].start;
        for (i, b, reduction) in images {
            let column = match reduction {
                Reduction::Independent(k) => SparseVec::unit(start + k),
                Reduction::Dependent(c) => {
                    SparseVec::from_entries(c.iter().map(|(k, x)| (start + k, x.clone())))
                }
            };
            self.lowering[i].set_column(b, column);
        }
        Ok(Some(space))
    }

    /// Appends a weight space whose basis vectors have the given raising images
    fn push_space(&mut self, depth: Vec<i64>, weight: Weight, rows: Vec<SparseVec<BigRational>>) -> usize {
        let r = depth.len();
        let index = self.spaces.len();
        let start = self.owner.len();

        let neighbours: Vec<Option<Range<usize>>> = (0..r)
            .map(|j| {
                let mut upper = depth.clone();
                upper[j] -= 1;
                self.space_of_depth
                    .get(&upper)
                    .map(|&s| self.spaces[s].range())
            })
            .collect();

        for row in &rows {
            self.owner.push(index);
            for j in 0..r {
                self.lowering[j].push_column(SparseVec::new());
                let column = match &neighbours[j] {
                    Some(range) => row.restricted(range.clone()),
                    None => SparseVec::new(),
                };
                self.raising[j].push_column(column);
            }
        }

        self.space_of_depth.insert(depth.clone(), index);
        self.spaces.push(WeightSpace {
            depth,
            weight,
            start,
            dim: rows.len(),
        });
        index
    }

    pub fn highest_weight(&self) -> &Weight {
        &self.highest_weight
    }

    pub fn dim(&self) -> usize {
        self.owner.len()
    }

    pub fn weight_spaces(&self) -> &[WeightSpace] {
        &self.spaces
    }

    pub fn weight_space(&self, depth: &[i64]) -> Option<&WeightSpace> {
        self.space_of_depth.get(depth).map(|&s| &self.spaces[s])
    }

    /// Weight of the basis vector with the given index
    pub fn weight_of(&self, index: usize) -> &Weight {
        &self.spaces[self.owner[index]].weight
    }

    /// Matrix of the simple lowering operator fᵢ
    pub fn lowering(&self, i: usize) -> &SparseMatrix<BigRational> {
        &self.lowering[i]
    }

    /// Matrix of the simple raising operator eᵢ
    pub fn raising(&self, i: usize) -> &SparseMatrix<BigRational> {
        &self.raising[i]
    }

    /// Matrix spanning the action of g_{-β} for the positive root with this index
    pub fn root_lowering(
        &self,
        root_system: &RootSystem,
        root_index: usize,
        memo: &mut HashMap<usize, SparseMatrix<BigRational>>,
    ) -> SparseMatrix<BigRational> {
        if let Some(matrix) = memo.get(&root_index) {
            return matrix.clone();
        }
        let matrix = match root_system.peel_simple(root_index) {
            Some((i, rest)) => {
                let inner = self.root_lowering(root_system, rest, memo);
                self.lowering[i].commutator(&inner)
            }
            None => {
                let root = &root_system.positive_roots()[root_index];
                let i = root
                    .coefficients()
                    .iter()
                    .position(|&c| c == 1)
                    .unwrap_or(0);
                self.lowering[i].clone()
            }
        };
        memo.insert(root_index, matrix.clone());
        matrix
    }
}
