//! Characters of simple and Demazure modules
//!
//! # Simple modules (Freudenthal)
//!
//! Every weight of V(λ) has the form μ = λ - Σ nᵢαᵢ with nᵢ ≥ 0. Working with the
//! depth vector n keeps all quantities integral:
//!
//! ```text
//! (|λ+ρ|² - |μ+ρ|²) m(μ) = 2 Σ_{β>0} Σ_{k≥1} m(μ+kβ) (μ+kβ, β)
//!
//! |λ+ρ|² - |μ+ρ|² = Σᵢ nᵢ(λᵢ+1)|αᵢ|² - nᵀBn
//! (μ+kβ, β)       = (λ, β) - (n-kc)ᵀBc          (β = Σ cᵢαᵢ)
//! ```
//!
//! Weights are discovered level by level (by Σ nᵢ); every weight other than λ is
//! reached from a higher weight by subtracting a simple root.
//!
//! # Demazure modules
//!
//! char V_w(λ) = D_{i₁} ⋯ D_{iₖ}(e^λ) for a reduced word w = s_{i₁}⋯s_{iₖ}, with
//!
//! ```text
//! D_i(e^μ) = e^μ + e^{μ-αᵢ} + … + e^{μ-nαᵢ}              n = ⟨μ,αᵢ^∨⟩ ≥ 0
//!          = 0                                            n = -1
//!          = -(e^{μ+αᵢ} + … + e^{μ+(-n-1)αᵢ})            n ≤ -2
//! ```

use super::root_system::RootSystem;
use super::weight::{Root, Weight};
use crate::error::{BasisError, Result};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Weight multiplicities of a module
pub type Character = BTreeMap<Weight, u64>;

/// Total dimension of a character
pub fn character_dimension(character: &Character) -> u64 {
    character.values().sum()
}

/// Multiplicities of V(λ) keyed by depth vector (simple-root coordinates of λ - μ)
pub fn simple_character_by_depth(
    root_system: &RootSystem,
    highest_weight: &Weight,
) -> Result<BTreeMap<Vec<i64>, u64>> {
    let r = root_system.rank();
    let norms = root_system.root_norms();
    let lambda = highest_weight.coefficients();

    let mut multiplicities: HashMap<Vec<i64>, i64> = HashMap::new();
    multiplicities.insert(vec![0; r], 1);
    let mut level: Vec<Vec<i64>> = vec![vec![0; r]];

    let positive: Vec<(&Root, i64)> = root_system
        .positive_roots()
        .iter()
        .map(|beta| (beta, root_system.inner_weight_root(highest_weight, beta.coefficients())))
        .collect();

    while !level.is_empty() {
        let candidates: BTreeSet<Vec<i64>> = level
            .iter()
            .flat_map(|n| {
                (0..r).map(move |i| {
                    let mut next = n.clone();
                    next[i] += 1;
                    next
                })
            })
            .collect();

        let mut next_level = Vec::new();
        for n in candidates {
            let denominator: i64 = n
                .iter()
                .zip(lambda)
                .zip(norms)
                .map(|((&ni, &li), &norm)| ni * (li + 1) * norm)
                .sum::<i64>()
                - root_system.inner_roots(&n, &n);
            if denominator <= 0 {
                continue;
            }

            let mut numerator = 0i64;
            for &(beta, lambda_beta) in &positive {
                let c = beta.coefficients();
                let mut k = 1;
                loop {
                    let shifted: Vec<i64> = n.iter().zip(c).map(|(&ni, &ci)| ni - k * ci).collect();
                    if shifted.iter().any(|&x| x < 0) {
                        break;
                    }
                    if let Some(&m) = multiplicities.get(&shifted) {
                        numerator += m * (lambda_beta - root_system.inner_roots(&shifted, c));
                    }
                    k += 1;
                }
            }
            numerator *= 2;

            if numerator % denominator != 0 {
                return Err(BasisError::Inconsistent(format!(
                    "Freudenthal quotient {}/{} is not integral at depth {:?}",
                    numerator, denominator, n
                )));
            }
            let m = numerator / denominator;
            if m > 0 {
                multiplicities.insert(n.clone(), m);
                next_level.push(n);
            }
        }
        level = next_level;
    }

    Ok(multiplicities
        .into_iter()
        .map(|(n, m)| (n, m as u64))
        .collect())
}

/// Character of the simple module V(λ)
pub fn simple_character(root_system: &RootSystem, highest_weight: &Weight) -> Result<Character> {
    let by_depth = simple_character_by_depth(root_system, highest_weight)?;
    Ok(by_depth
        .into_iter()
        .map(|(n, m)| (depth_to_weight(root_system, highest_weight, &n), m))
        .collect())
}

/// μ = λ - Σ nᵢαᵢ
pub fn depth_to_weight(root_system: &RootSystem, highest_weight: &Weight, depth: &[i64]) -> Weight {
    let lowered = root_system.root_to_weight(&Root::new(depth.to_vec()));
    highest_weight - &lowered
}

/// Character of the Demazure module V_w(λ) for a 0-based reduced word of w
pub fn demazure_character(
    root_system: &RootSystem,
    highest_weight: &Weight,
    word: &[usize],
) -> Result<Character> {
    let r = root_system.rank();
    let mut current: BTreeMap<Weight, i64> = BTreeMap::new();
    current.insert(highest_weight.clone(), 1);

    for &i in word.iter().rev() {
        let alpha = root_system.root_to_weight(&Root::simple(r, i));
        let mut next: BTreeMap<Weight, i64> = BTreeMap::new();
        for (mu, &m) in &current {
            let n = mu.coefficients()[i];
            if n >= 0 {
                let mut nu = mu.clone();
                for _ in 0..=n {
                    *next.entry(nu.clone()).or_insert(0) += m;
                    nu = &nu - &alpha;
                }
            } else if n <= -2 {
                let mut nu = mu.clone();
                for _ in 1..=(-n - 1) {
                    nu = &nu + &alpha;
                    *next.entry(nu.clone()).or_insert(0) -= m;
                }
            }
        }
        next.retain(|_, m| *m != 0);
        current = next;
    }

    if let Some((weight, m)) = current.iter().find(|(_, &m)| m < 0) {
        return Err(BasisError::Inconsistent(format!(
            "Demazure character has negative multiplicity {} at {}",
            m, weight
        )));
    }
    Ok(current.into_iter().map(|(w, m)| (w, m as u64)).collect())
}
