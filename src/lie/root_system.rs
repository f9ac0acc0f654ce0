//! Root system of a simple Lie algebra
//!
//! Positive roots are generated level by level from the simple roots using
//! root strings: for a positive root β and a simple root αᵢ, the αᵢ-string
//! through β is β - pαᵢ, …, β + qαᵢ with
//!
//! ```text
//! p - q = ⟨β, αᵢ^∨⟩
//! ```
//!
//! so β + αᵢ is a root iff q = p - ⟨β, αᵢ^∨⟩ > 0. Roots of one height are kept
//! in generation order, which makes the "ascending height" birational sequence
//! deterministic.
//!
//! The Weyl group acts through simple reflections
//!
//! ```text
//! sᵢ(μ) = μ - ⟨μ, αᵢ^∨⟩ αᵢ
//! ```
//!
//! on weights (fundamental coordinates) and on roots (simple-root coordinates).

use super::cartan::CartanType;
use super::weight::{Root, Weight};
use crate::error::{BasisError, Result};
use num_bigint::BigUint;
use num_rational::Rational64;
use num_traits::{One, ToPrimitive, Zero};
use std::collections::HashMap;

/// Positive roots, Cartan data and Weyl group actions for one Cartan type
#[derive(Clone, Debug)]
pub struct RootSystem {
    cartan_type: CartanType,
    cartan: Vec<Vec<i64>>,
    form: Vec<Vec<i64>>,
    norms: Vec<i64>,
    positive_roots: Vec<Root>,
    root_index: HashMap<Root, usize>,
    /// Inverse of the transposed Cartan matrix: weight differences → simple-root coordinates
    inverse_cartan_t: Vec<Vec<Rational64>>,
}

impl RootSystem {
    pub fn new(cartan_type: CartanType) -> Self {
        let cartan = cartan_type.cartan_matrix();
        let form = cartan_type.bilinear_form();
        let norms = cartan_type.root_norms();
        let positive_roots = generate_positive_roots(&cartan);
        let root_index = positive_roots
            .iter()
            .enumerate()
            .map(|(i, r)| (r.clone(), i))
            .collect();
        let transposed: Vec<Vec<i64>> = (0..cartan.len())
            .map(|i| cartan.iter().map(|row| row[i]).collect())
            .collect();
        let inverse_cartan_t = invert(&transposed);

        RootSystem {
            cartan_type,
            cartan,
            form,
            norms,
            positive_roots,
            root_index,
            inverse_cartan_t,
        }
    }

    pub fn cartan_type(&self) -> CartanType {
        self.cartan_type
    }

    pub fn rank(&self) -> usize {
        self.cartan.len()
    }

    pub fn cartan_matrix(&self) -> &[Vec<i64>] {
        &self.cartan
    }

    /// Squared lengths of the simple roots
    pub fn root_norms(&self) -> &[i64] {
        &self.norms
    }

    /// Positive roots in ascending height order
    pub fn positive_roots(&self) -> &[Root] {
        &self.positive_roots
    }

    pub fn num_positive_roots(&self) -> usize {
        self.positive_roots.len()
    }

    pub fn positive_root_index(&self, root: &Root) -> Option<usize> {
        self.root_index.get(root).copied()
    }

    pub fn is_positive_root(&self, root: &Root) -> bool {
        self.root_index.contains_key(root)
    }

    /// Index of the simple root αᵢ in the positive root list
    pub fn simple_root_index(&self, i: usize) -> Option<usize> {
        self.positive_root_index(&Root::simple(self.rank(), i))
    }

    /// Bilinear form (β, γ) on the root lattice
    pub fn inner_roots(&self, a: &[i64], b: &[i64]) -> i64 {
        let mut total = 0;
        for (i, &ai) in a.iter().enumerate() {
            if ai == 0 {
                continue;
            }
            for (j, &bj) in b.iter().enumerate() {
                total += ai * self.form[i][j] * bj;
            }
        }
        total
    }

    /// Pairing (λ, β) of a weight with a root lattice element
    ///
    /// Uses (ωᵢ, αⱼ) = δᵢⱼ |αⱼ|²/2.
    pub fn inner_weight_root(&self, weight: &Weight, root: &[i64]) -> i64 {
        weight
            .coefficients()
            .iter()
            .zip(root)
            .zip(&self.norms)
            .map(|((&l, &c), &n)| l * c * n / 2)
            .sum()
    }

    /// ⟨λ, β^∨⟩ = 2(λ, β)/(β, β)
    pub fn coroot_pairing(&self, weight: &Weight, root: &Root) -> i64 {
        let numerator: i64 = weight
            .coefficients()
            .iter()
            .zip(root.coefficients())
            .zip(&self.norms)
            .map(|((&l, &c), &n)| l * c * n)
            .sum();
        numerator / self.inner_roots(root.coefficients(), root.coefficients())
    }

    /// ⟨β, αᵢ^∨⟩ for a root lattice element β
    fn root_simple_pairing(&self, root: &Root, i: usize) -> i64 {
        root.coefficients()
            .iter()
            .enumerate()
            .map(|(j, &c)| c * self.cartan[j][i])
            .sum()
    }

    /// A root lattice element written in fundamental weights
    pub fn root_to_weight(&self, root: &Root) -> Weight {
        let r = self.rank();
        let mut coefficients = vec![0; r];
        for (i, &c) in root.coefficients().iter().enumerate() {
            if c == 0 {
                continue;
            }
            for (j, value) in coefficients.iter_mut().enumerate() {
                *value += c * self.cartan[i][j];
            }
        }
        Weight::new(coefficients)
    }

    /// Simple-root coordinates of `top - bottom`, if it lies in the root lattice
    pub fn root_coordinates(&self, top: &Weight, bottom: &Weight) -> Option<Vec<i64>> {
        let diff = top - bottom;
        let mut result = Vec::with_capacity(self.rank());
        for row in &self.inverse_cartan_t {
            let value: Rational64 = row
                .iter()
                .zip(diff.coefficients())
                .map(|(a, &d)| *a * Rational64::from_integer(d))
                .fold(Rational64::zero(), |acc, x| acc + x);
            if !value.is_integer() {
                return None;
            }
            result.push(value.to_integer());
        }
        Some(result)
    }

    /// Simple reflection sᵢ on a weight
    pub fn reflect_weight(&self, i: usize, weight: &Weight) -> Weight {
        let k = weight.coefficients()[i];
        let alpha = self.root_to_weight(&Root::simple(self.rank(), i));
        weight - &(k * &alpha)
    }

    /// Simple reflection sᵢ on a root lattice element
    pub fn reflect_root(&self, i: usize, root: &Root) -> Root {
        let k = self.root_simple_pairing(root, i);
        root.shifted(i, -k)
    }

    /// Number of positive roots N = ℓ(w₀)
    pub fn longest_length(&self) -> usize {
        self.positive_roots.len()
    }

    /// Roots βₖ = s_{i₁}⋯s_{iₖ₋₁}(α_{iₖ}) of a 0-based word
    ///
    /// The word is reduced iff every βₖ is positive.
    pub fn word_roots(&self, word: &[usize]) -> Vec<Root> {
        let r = self.rank();
        (0..word.len())
            .map(|k| {
                let mut root = Root::simple(r, word[k]);
                for &i in word[..k].iter().rev() {
                    root = self.reflect_root(i, &root);
                }
                root
            })
            .collect()
    }

    pub fn is_reduced_word(&self, word: &[usize]) -> bool {
        word.iter().all(|&i| i < self.rank())
            && self.word_roots(word).iter().all(|root| self.is_positive_root(root))
    }

    /// A reduced word (0-based) of the longest Weyl group element
    ///
    /// Greedy descent from -ρ: repeatedly reflect in a simple root with
    /// positive pairing until the weight becomes dominant.
    pub fn longest_word(&self) -> Vec<usize> {
        let r = self.rank();
        let mut weight = Weight::new(vec![-1; r]);
        let mut word = Vec::new();
        while let Some(i) = weight.coefficients().iter().position(|&c| c < 0) {
            weight = self.reflect_weight(i, &weight);
            word.push(i);
        }
        word
    }

    /// Checks a highest weight against this root system
    pub fn check_dominant(&self, weight: &[i64]) -> Result<Weight> {
        if weight.len() != self.rank() {
            return Err(BasisError::weight(
                weight,
                format!("expected {} coordinates for {}", self.rank(), self.cartan_type),
            ));
        }
        if weight.iter().any(|&c| c < 0) {
            return Err(BasisError::weight(weight, "weight is not dominant"));
        }
        Ok(Weight::new(weight.to_vec()))
    }

    /// Weyl dimension formula
    ///
    /// ```text
    /// dim V(λ) = ∏_{β>0} ⟨λ+ρ, β^∨⟩ / ⟨ρ, β^∨⟩
    ///          = ∏_{β>0} Σᵢ cᵢ|αᵢ|²(λᵢ+1) / Σᵢ cᵢ|αᵢ|²
    /// ```
    pub fn weyl_dimension(&self, weight: &Weight) -> BigUint {
        let mut numerator = BigUint::one();
        let mut denominator = BigUint::one();
        for root in &self.positive_roots {
            let mut top: u64 = 0;
            let mut bottom: u64 = 0;
            for ((&c, &n), &l) in root
                .coefficients()
                .iter()
                .zip(&self.norms)
                .zip(weight.coefficients())
            {
                top += (c * n * (l + 1)) as u64;
                bottom += (c * n) as u64;
            }
            numerator *= top;
            denominator *= bottom;
        }
        numerator / denominator
    }

    /// Weyl dimension as a machine integer (saturating)
    pub fn dimension(&self, weight: &Weight) -> usize {
        self.weyl_dimension(weight).to_usize().unwrap_or(usize::MAX)
    }

    /// For a non-simple positive root β: a simple index i with β - αᵢ positive,
    /// and the index of β - αᵢ
    pub(crate) fn peel_simple(&self, root_index: usize) -> Option<(usize, usize)> {
        let root = &self.positive_roots[root_index];
        if root.height() <= 1 {
            return None;
        }
        (0..self.rank()).find_map(|i| {
            if root.coefficients()[i] == 0 {
                return None;
            }
            self.positive_root_index(&root.shifted(i, -1)).map(|j| (i, j))
        })
    }
}

fn generate_positive_roots(cartan: &[Vec<i64>]) -> Vec<Root> {
    let r = cartan.len();
    let pairing = |root: &Root, i: usize| -> i64 {
        root.coefficients()
            .iter()
            .enumerate()
            .map(|(j, &c)| c * cartan[j][i])
            .sum()
    };

    let mut roots: Vec<Root> = (0..r).map(|i| Root::simple(r, i)).collect();
    let mut known: HashMap<Root, usize> = roots.iter().cloned().enumerate().map(|(i, x)| (x, i)).collect();
    let mut level: Vec<Root> = roots.clone();

    while !level.is_empty() {
        let mut next = Vec::new();
        for beta in &level {
            for i in 0..r {
                let mut p = 0;
                let mut lower = beta.shifted(i, -1);
                while known.contains_key(&lower) {
                    p += 1;
                    lower = lower.shifted(i, -1);
                }
                let q = p - pairing(beta, i);
                if q > 0 {
                    let raised = beta.shifted(i, 1);
                    if !known.contains_key(&raised) {
                        known.insert(raised.clone(), roots.len());
                        roots.push(raised.clone());
                        next.push(raised);
                    }
                }
            }
        }
        level = next;
    }
    roots
}

/// Exact inverse of a nonsingular integer matrix
fn invert(matrix: &[Vec<i64>]) -> Vec<Vec<Rational64>> {
    let n = matrix.len();
    let mut a: Vec<Vec<Rational64>> = matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut extended: Vec<Rational64> =
                row.iter().map(|&x| Rational64::from_integer(x)).collect();
            extended.extend((0..n).map(|j| {
                if i == j {
                    Rational64::one()
                } else {
                    Rational64::zero()
                }
            }));
            extended
        })
        .collect();

    for col in 0..n {
        let Some(pivot) = (col..n).find(|&row| !a[row][col].is_zero()) else {
            continue;
        };
        a.swap(col, pivot);
        let lead = a[col][col];
        for x in a[col].iter_mut() {
            *x /= lead;
        }
        for row in 0..n {
            if row != col && !a[row][col].is_zero() {
                let factor = a[row][col];
                for k in 0..2 * n {
                    let delta = factor * a[col][k];
                    a[row][k] -= delta;
                }
            }
        }
    }

    a.into_iter().map(|row| row[n..].to_vec()).collect()
}
